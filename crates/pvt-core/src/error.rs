use thiserror::Error;

/// Failures of the numeric helpers shared by every table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
