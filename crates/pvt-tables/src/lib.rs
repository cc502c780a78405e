//! pvt-tables: tabulated functions used by the PVT engine.
//!
//! Provides:
//! - `Table1d`: piecewise-linear `x -> y` function on a strictly increasing axis
//! - `Table2dBuilder`: incremental assembly of an outer axis with per-node inner branches
//! - `Table2d`: the frozen, immutable 2-D table stored as a compact index arena
//!
//! # Example
//!
//! ```
//! use pvt_tables::Table2dBuilder;
//!
//! let mut builder = Table2dBuilder::new();
//! let i = builder.append_x_pos(1.0e5);
//! builder.append_sample_point(i, 0.0, 10.0).unwrap();
//! builder.append_sample_point(i, 1.0, 12.0).unwrap();
//! let j = builder.append_x_pos(2.0e5);
//! builder.append_sample_point(j, 0.0, 20.0).unwrap();
//! builder.append_sample_point(j, 2.0, 24.0).unwrap();
//! let table = builder.build().unwrap();
//!
//! assert_eq!(table.num_x(), 2);
//! assert!((table.eval(1.5e5, 0.0) - 15.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod table1d;
pub mod table2d;

// Re-exports for ergonomics
pub use error::{TableError, TableResult};
pub use table1d::Table1d;
pub use table2d::{Table2d, Table2dBuilder};
