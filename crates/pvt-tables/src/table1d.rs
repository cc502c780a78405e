//! One-dimensional tabulated function.

use pvt_core::{Real, first_non_increasing, lerp, segment_index};

use crate::error::{TableError, TableResult};

/// Piecewise-linear function sampled on a strictly increasing axis.
///
/// Beyond the first and last sample the end segments are extended linearly.
#[derive(Debug, Clone, PartialEq)]
pub struct Table1d {
    x: Vec<Real>,
    y: Vec<Real>,
}

impl Table1d {
    /// Minimum number of samples for interpolation.
    pub const MIN_POINTS: usize = 2;

    /// Build from owned `(x, y)` columns.
    ///
    /// # Errors
    /// Fails if the columns differ in length, hold fewer than two points, contain
    /// non-finite values, or if `x` is not strictly increasing.
    pub fn from_xy(x: Vec<Real>, y: Vec<Real>) -> TableResult<Self> {
        if x.len() != y.len() {
            return Err(TableError::LengthMismatch {
                what: "1-D table",
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < Self::MIN_POINTS {
            return Err(TableError::TooFewPoints {
                what: "1-D table",
                len: x.len(),
                min: Self::MIN_POINTS,
            });
        }
        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFinite { what: "x", index });
        }
        if let Some(index) = y.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFinite { what: "y", index });
        }
        if let Some(index) = first_non_increasing(&x) {
            return Err(TableError::NonMonotonic { what: "x", index });
        }
        Ok(Self { x, y })
    }

    /// Build from borrowed columns.
    pub fn from_columns(x: &[Real], y: &[Real]) -> TableResult<Self> {
        Self::from_xy(x.to_vec(), y.to_vec())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[Real] {
        &self.x
    }

    pub fn y(&self) -> &[Real] {
        &self.y
    }

    pub fn x_min(&self) -> Real {
        self.x[0]
    }

    pub fn x_max(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: Real) -> Real {
        let i = segment_index(&self.x, x);
        lerp(self.x[i], self.y[i], self.x[i + 1], self.y[i + 1], x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table1d {
        Table1d::from_xy(vec![1.0, 2.0, 4.0], vec![10.0, 20.0, 30.0]).unwrap()
    }

    #[test]
    fn eval_hits_samples() {
        let t = table();
        assert_eq!(t.eval(1.0), 10.0);
        assert_eq!(t.eval(2.0), 20.0);
        assert_eq!(t.eval(4.0), 30.0);
    }

    #[test]
    fn eval_interpolates_and_extrapolates() {
        let t = table();
        assert!((t.eval(3.0) - 25.0).abs() < 1e-12);
        // Below the axis: first segment extended
        assert!((t.eval(0.0) - 0.0).abs() < 1e-12);
        // Above the axis: last segment extended
        assert!((t.eval(6.0) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_single_point() {
        let err = Table1d::from_xy(vec![1.0], vec![2.0]).unwrap_err();
        assert!(matches!(err, TableError::TooFewPoints { len: 1, .. }));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Table1d::from_columns(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { .. }));
    }

    #[test]
    fn rejects_non_monotonic_axis() {
        let err = Table1d::from_xy(vec![1.0, 3.0, 2.0], vec![0.0; 3]).unwrap_err();
        assert_eq!(err, TableError::NonMonotonic { what: "x", index: 2 });
    }

    #[test]
    fn rejects_nan() {
        let err = Table1d::from_xy(vec![1.0, 2.0], vec![0.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, TableError::NonFinite { what: "y", index: 1 }));
    }
}
