use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pvt_project::{
    LATEST_VERSION, Project, ProjectError, build_engine, from_json_str, from_yaml_str, load, save_json,
    save_yaml,
};
use pvt_wetgas::{GasFamily, PvtError};

const DEMO: &str = include_str!("../../../demos/two_region.yaml");

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn demo_project_builds() {
    let project = from_yaml_str(DEMO).unwrap();
    assert_eq!(project.version, LATEST_VERSION);
    assert_eq!(project.input.num_regions(), 2);
    assert_eq!(project.schedule.steps.len(), 2);

    let state = build_engine(&project).unwrap();
    assert_eq!(state.num_regions(), 2);
    assert_eq!(state.vap_par1(), 1.5);
    assert!(state.salt_enabled());

    let wet = state.family(1, GasFamily::Wet).unwrap();
    let nodes: Vec<usize> = wet.extensions().iter().map(|e| e.node).collect();
    assert_eq!(nodes, vec![0, 1]);
    assert!(wet.viscosity().min_branch_len() >= 2);

    let humid = state.family(1, GasFamily::Humid).unwrap();
    assert_eq!(humid.extensions().len(), 1);
    assert_eq!(humid.extensions()[0].master, 1);
}

#[test]
fn yaml_round_trip_through_disk() {
    let dir = unique_temp_dir("pvt_project_yaml");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("demo.yaml");

    let project = from_yaml_str(DEMO).unwrap();
    save_yaml(&path, &project).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, project);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_round_trip_through_disk() {
    let dir = unique_temp_dir("pvt_project_json");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("demo.json");

    let project = from_yaml_str(DEMO).unwrap();
    save_json(&path, &project).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(
        build_engine(&loaded).unwrap(),
        build_engine(&project).unwrap()
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unknown_extension_is_rejected() {
    let err = load(&PathBuf::from("project.toml")).unwrap_err();
    assert!(matches!(err, ProjectError::UnknownFormat { .. }));
}

#[test]
fn newer_version_is_rejected() {
    let mut project = from_yaml_str(DEMO).unwrap();
    project.version = LATEST_VERSION + 1;
    let json = serde_json::to_string(&project).unwrap();
    assert!(matches!(
        from_json_str(&json).unwrap_err(),
        ProjectError::UnsupportedVersion { version } if version == LATEST_VERSION + 1
    ));
}

#[test]
fn build_rejects_newer_version() {
    let mut project = from_yaml_str(DEMO).unwrap();
    project.version = LATEST_VERSION + 1;
    assert!(matches!(
        build_engine(&project).unwrap_err(),
        ProjectError::UnsupportedVersion { .. }
    ));
}

#[test]
fn mismatched_region_counts_surface_as_pvt_error() {
    let mut project = from_yaml_str(DEMO).unwrap();
    project.input.humid.pop();
    let err = build_engine(&project).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Pvt(PvtError::TableMismatch { left: "PVTGW", .. })
    ));
}

#[test]
fn minimal_project_defaults_options_and_schedule() {
    let project = from_yaml_str(DEMO).unwrap();
    let bare = Project::new("bare", project.input.clone());
    assert!(!bare.options.parallel_regions);
    assert!(bare.schedule.steps.is_empty());

    let state = build_engine(&bare).unwrap();
    assert_eq!(state.vap_par1(), 0.0);
    assert_eq!(
        state.family(0, GasFamily::Wet),
        build_engine(&project).unwrap().family(0, GasFamily::Wet)
    );
}
