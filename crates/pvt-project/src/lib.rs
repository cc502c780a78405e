//! pvt-project: project file format for the wet/humid gas PVT engine.
//!
//! A project bundles an already-parsed `InputTableSet` with the schedule and build
//! options, stored as YAML or JSON.

pub mod schema;

pub use schema::Project;

use std::path::Path;

use pvt_wetgas::{EngineState, PvtEngineBuilder, PvtError, validate_input};

/// Newest project file version understood by this crate.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Invalid PVT input: {0}")]
    Pvt(#[from] PvtError),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Unknown project file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn check_version(project: &Project) -> ProjectResult<()> {
    if project.version > LATEST_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: project.version,
        });
    }
    Ok(())
}

/// Check version and tables of a project.
pub fn validate_project(project: &Project) -> ProjectResult<()> {
    check_version(project)?;
    validate_input(&project.input)?;
    Ok(())
}

/// Build the engine state described by a project.
///
/// Table validation happens inside the engine builder.
pub fn build_engine(project: &Project) -> ProjectResult<EngineState> {
    check_version(project)?;
    let state = PvtEngineBuilder::new(&project.input)
        .schedule(&project.schedule)
        .options(project.options)
        .build()?;
    Ok(state)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_yaml::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn from_json_str(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_json::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_yaml(path: &Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.yaml` / `.yml` or `.json`.
pub fn load(path: &Path) -> ProjectResult<Project> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}
