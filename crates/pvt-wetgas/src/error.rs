//! PVT table construction errors.
//!
//! Every variant describes malformed input data. None of them is recoverable: a failed
//! build leaves no engine state behind.

use pvt_core::{CoreError, RegionId};
use pvt_tables::TableError;
use thiserror::Error;

use crate::family::GasFamily;

/// Result type for PVT construction.
pub type PvtResult<T> = Result<T, PvtError>;

/// Errors that can occur while building the PVT tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    /// Independently supplied tables disagree on the number of regions.
    #[error("Table sizes mismatch. {left}: {left_count}, {right}: {right_count}")]
    TableMismatch {
        left: &'static str,
        left_count: usize,
        right: &'static str,
        right_count: usize,
    },

    /// A saturated table is too short to interpolate.
    #[error("Saturated {table} table of region {region} must have at least 2 rows (found {rows})")]
    InsufficientData {
        table: &'static str,
        region: RegionId,
        rows: usize,
    },

    /// A degenerate undersaturated branch has no later branch to borrow from.
    #[error(
        "{family} tables of region {region} are invalid: pressure node {node} has a single \
         undersaturated entry and no later node exhibits undersaturated gas"
    )]
    ExtrapolationImpossible {
        family: GasFamily,
        region: RegionId,
        node: usize,
    },

    /// A saturated row without its undersaturated sub-table (or with an empty one).
    #[error("{table} table of region {region}: pressure node {node} has no undersaturated data")]
    MissingBranch {
        table: &'static str,
        region: RegionId,
        node: usize,
    },

    /// An axis that must be strictly increasing is not.
    #[error("{table} table of region {region}: {location} is not strictly increasing")]
    NonMonotonic {
        table: &'static str,
        region: RegionId,
        location: String,
    },

    /// Non-finite or non-positive value where a positive physical quantity is required.
    #[error("{table} table of region {region}: non-physical value {value} for {location}")]
    NonPhysical {
        table: &'static str,
        region: RegionId,
        location: String,
        value: f64,
    },

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Numeric error: {0}")]
    Core(#[from] CoreError),
}

impl PvtError {
    /// True when the failure is caused by the supplied tables rather than by an
    /// internal invariant.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, PvtError::Core(CoreError::Invariant { .. }))
    }
}
