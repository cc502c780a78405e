use crate::CoreError;

/// Floating point type used throughout the tables
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Index of the first element that does not strictly exceed its predecessor.
///
/// Returns `None` for strictly increasing (including empty and single-element) slices.
pub fn first_non_increasing(values: &[Real]) -> Option<usize> {
    values
        .windows(2)
        .position(|w| w[1] <= w[0] || w[1].is_nan())
        .map(|i| i + 1)
}

/// Linear interpolation through `(x0, y0)` and `(x1, y1)`, extended beyond the segment.
#[inline]
pub fn lerp(x0: Real, y0: Real, x1: Real, y1: Real, x: Real) -> Real {
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Index `i` of the segment `[xs[i], xs[i+1]]` used to evaluate at `x`.
///
/// Values outside the axis map to the first or last segment so callers extrapolate
/// linearly. Requires `xs.len() >= 2`.
pub fn segment_index(xs: &[Real], x: Real) -> usize {
    debug_assert!(xs.len() >= 2);
    let upper = xs.partition_point(|&v| v <= x);
    upper.clamp(1, xs.len() - 1) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn first_non_increasing_finds_offender() {
        assert_eq!(first_non_increasing(&[]), None);
        assert_eq!(first_non_increasing(&[1.0]), None);
        assert_eq!(first_non_increasing(&[1.0, 2.0, 3.0]), None);
        assert_eq!(first_non_increasing(&[1.0, 2.0, 2.0]), Some(2));
        assert_eq!(first_non_increasing(&[3.0, 1.0, 4.0]), Some(1));
    }

    #[test]
    fn segment_index_clamps_to_end_segments() {
        let xs = [1.0, 2.0, 4.0];
        assert_eq!(segment_index(&xs, 0.0), 0);
        assert_eq!(segment_index(&xs, 1.0), 0);
        assert_eq!(segment_index(&xs, 1.5), 0);
        assert_eq!(segment_index(&xs, 2.0), 1);
        assert_eq!(segment_index(&xs, 3.0), 1);
        assert_eq!(segment_index(&xs, 4.0), 1);
        assert_eq!(segment_index(&xs, 10.0), 1);
    }

    #[test]
    fn lerp_extends_beyond_segment() {
        assert_eq!(lerp(0.0, 0.0, 1.0, 2.0, 0.5), 1.0);
        assert_eq!(lerp(0.0, 0.0, 1.0, 2.0, 2.0), 4.0);
        assert_eq!(lerp(1.0, 3.0, 1.0, 5.0, 7.0), 3.0);
    }
}
