use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use pvt_core::pa;
use pvt_project::{ProjectError, build_engine, load};
use pvt_wetgas::{BuildOptions, FamilyTables, GasFamily};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::pressure::bar;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Region {region} out of range (project has {count})")]
    RegionOutOfRange { region: usize, count: usize },
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pvt-cli")]
#[command(about = "Wet and humid gas PVT table builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file and table consistency
    Validate {
        /// Path to the project file (.yaml, .yml or .json)
        project_path: PathBuf,
    },
    /// Build all region tables and print a summary
    Build {
        /// Path to the project file
        project_path: PathBuf,
        /// Build regions in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print the completed undersaturated branches of one region
    Inspect {
        /// Path to the project file
        project_path: PathBuf,
        /// Zero-based region index
        #[arg(long, default_value_t = 0)]
        region: usize,
        /// Gas family to print
        #[arg(long, value_enum, default_value_t = FamilyArg::Wet)]
        family: FamilyArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Wet,
    Humid,
}

impl From<FamilyArg> for GasFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Wet => GasFamily::Wet,
            FamilyArg::Humid => GasFamily::Humid,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Build {
            project_path,
            parallel,
        } => cmd_build(&project_path, parallel),
        Commands::Inspect {
            project_path,
            region,
            family,
        } => cmd_inspect(&project_path, region, family.into()),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load(project_path)?;
    println!("✓ Project is valid ({} regions)", project.input.num_regions());
    Ok(())
}

fn cmd_build(project_path: &Path, parallel: bool) -> CliResult<()> {
    let mut project = load(project_path)?;
    if parallel {
        project.options = BuildOptions::parallel();
    }
    info!(project = %project.name, parallel, "building tables");
    let state = build_engine(&project)?;

    println!("✓ Built {} regions for '{}'", state.num_regions(), project.name);
    println!("  VAPPARS vap1: {}", state.vap_par1());
    println!(
        "  Salt tables: {}",
        if state.salt_enabled() { "yes" } else { "no" }
    );
    for region in state.regions() {
        let rho = region.reference_densities();
        println!(
            "  Region {}: densities oil={:.2} gas={:.4} water={:.2} kg/m3",
            region.id(),
            rho.oil.get::<kilogram_per_cubic_meter>(),
            rho.gas.get::<kilogram_per_cubic_meter>(),
            rho.water.get::<kilogram_per_cubic_meter>(),
        );
        for family in GasFamily::ALL {
            print_family_summary(region.family(family));
        }
    }
    Ok(())
}

fn print_family_summary(tables: &FamilyTables) {
    let extended: Vec<String> = tables
        .extensions()
        .iter()
        .map(|e| format!("{}<-{}", e.node, e.master))
        .collect();
    println!(
        "    {:<6} {} nodes, {} samples, extended: {}",
        tables.family().keyword(),
        tables.num_pressure_nodes(),
        tables.inverse_formation_volume_factor().num_samples(),
        if extended.is_empty() {
            "none".to_string()
        } else {
            extended.join(", ")
        }
    );
}

fn cmd_inspect(project_path: &Path, region: usize, family: GasFamily) -> CliResult<()> {
    let project = load(project_path)?;
    let state = build_engine(&project)?;
    let tables = state
        .family(region, family)
        .ok_or(CliError::RegionOutOfRange {
            region,
            count: state.num_regions(),
        })?;

    println!("{} region {}", family.keyword(), region);
    let inv_b = tables.inverse_formation_volume_factor();
    let mu = tables.viscosity();
    for (node, pressure) in inv_b.x_values().iter().enumerate() {
        let synthetic = tables.extensions().iter().any(|e| e.node == node);
        println!(
            "  P = {:.3} bar{}",
            pa(*pressure).get::<bar>(),
            if synthetic { "  (extrapolated)" } else { "" }
        );
        println!(
            "    {:>14} {:>14} {:>14}",
            family.ratio_column(),
            "B",
            "MU"
        );
        for ((ratio, ib), visc) in inv_b
            .branch_y(node)
            .iter()
            .zip(inv_b.branch_values(node))
            .zip(mu.branch_values(node))
        {
            println!("    {:>14.6e} {:>14.6e} {:>14.6e}", ratio, 1.0 / ib, visc);
        }
    }
    Ok(())
}
