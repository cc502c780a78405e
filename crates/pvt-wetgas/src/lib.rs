//! pvt-wetgas: table construction for the wet/humid gas PVT model.
//!
//! Turns already-parsed PVTG / PVTGW / RWGSALT / DENSITY tables into the immutable,
//! query-ready `EngineState` consumed by a black-oil flow simulator.
//!
//! Provides:
//! - Input model (`InputTableSet`) for the raw per-region tables
//! - Validation (region-count cross checks, row counts, monotonic axes)
//! - Saturated curves and 2-D undersaturated tables per gas family
//! - Compressibility-preserving completion of degenerate undersaturated branches
//! - Optional salt-dependent water vaporization table
//! - Vaporization control read from the schedule's first step
//!
//! # Architecture
//!
//! Construction is two-phase. Raw branches are assembled from the input without
//! modification, a completion pass returns a new branch set in which every pressure
//! node carries at least two samples, and only then are the branches frozen into
//! `Table2d`s. Nothing is mutated after `EngineState` is returned.
//!
//! # Example
//!
//! ```
//! use pvt_wetgas::{
//!     DensityRecord, GasFamily, GasPvtTable, InputTableSet, PvtEngineBuilder, SaturatedRow,
//!     UndersaturatedRow,
//! };
//!
//! let table = GasPvtTable {
//!     saturated: vec![
//!         SaturatedRow::new(50.0e5, 0.020, 1.3e-5, 1.0e-4),
//!         SaturatedRow::new(100.0e5, 0.010, 1.5e-5, 2.0e-4),
//!     ],
//!     undersaturated: vec![
//!         vec![UndersaturatedRow::new(1.0e-4, 0.020, 1.3e-5)],
//!         vec![
//!             UndersaturatedRow::new(0.0, 0.0101, 1.45e-5),
//!             UndersaturatedRow::new(2.0e-4, 0.010, 1.5e-5),
//!         ],
//!     ],
//! };
//! let input = InputTableSet {
//!     densities: vec![DensityRecord::new(800.0, 0.9, 1000.0)],
//!     wet: vec![table.clone()],
//!     humid: vec![table],
//!     salt: Vec::new(),
//! };
//!
//! let state = PvtEngineBuilder::new(&input).build().unwrap();
//! let wet = state.family(0, GasFamily::Wet).unwrap();
//! assert_eq!(wet.inverse_formation_volume_factor().min_branch_len(), 2);
//! ```

pub mod branches;
pub mod config;
pub mod engine;
pub mod error;
pub mod extrapolate;
pub mod family;
pub mod input;
pub mod salt;
pub mod saturated;
pub mod schedule;
pub mod validate;

// Re-exports for ergonomics
pub use branches::{BranchSample, GasBranches, assemble_branches};
pub use config::BuildOptions;
pub use engine::{EngineState, FamilyTables, PvtEngineBuilder, RegionPvt, build_family_tables};
pub use error::{PvtError, PvtResult};
pub use extrapolate::{BranchExtension, CompletedBranches, complete_branches, extend_branch, find_master};
pub use family::GasFamily;
pub use input::{
    DensityRecord, GasPvtTable, InputTableSet, SaltRow, SaltSaturatedRow, SaltTable, SaturatedRow,
    UndersaturatedRow,
};
pub use salt::build_salt_table;
pub use saturated::SaturatedCurves;
pub use schedule::{OilVaporization, Schedule, ScheduleStep, VaporizationControl};
pub use validate::validate_input;
