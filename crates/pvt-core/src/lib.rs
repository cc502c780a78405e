//! pvt-core: shared foundation for the wet/humid gas PVT workspace.
//!
//! Contains:
//! - units (uom SI pressure and density)
//! - numeric (Real + axis and interpolation helpers)
//! - ids (compact region identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::CoreError;
pub use ids::*;
pub use numeric::*;
pub use units::*;
