//! Table construction errors.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while assembling or freezing a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Too few points to interpolate.
    #[error("{what} has {len} points (at least {min} required)")]
    TooFewPoints {
        what: &'static str,
        len: usize,
        min: usize,
    },

    /// Parallel columns of different lengths.
    #[error("Column length mismatch for {what}: {x_len} vs {y_len}")]
    LengthMismatch {
        what: &'static str,
        x_len: usize,
        y_len: usize,
    },

    /// An axis that must be strictly increasing is not.
    #[error("{what} is not strictly increasing at index {index}")]
    NonMonotonic { what: &'static str, index: usize },

    /// An outer node index that was never appended.
    #[error("Outer node {index} does not exist (table has {len})")]
    NodeOob { index: usize, len: usize },

    /// An outer node that received no inner samples.
    #[error("Outer node {index} has no inner samples")]
    EmptyBranch { index: usize },

    /// NaN or infinity in a table column.
    #[error("Non-finite value in {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },
}
