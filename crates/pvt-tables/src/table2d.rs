//! Two-dimensional tables with a uniform outer axis and per-node inner branches.
//!
//! Each outer sample (e.g. a pressure) owns its own inner axis (e.g. a vaporization
//! ratio) with its own number of points. Tables are assembled with `Table2dBuilder`
//! and then frozen into an immutable `Table2d`.

use pvt_core::{Real, first_non_increasing, lerp, segment_index};

use crate::error::{TableError, TableResult};

/// Incremental builder for a `Table2d`.
///
/// Use `append_x_pos` and `append_sample_point` to build up the table,
/// then call `build()` to validate and freeze it.
#[derive(Debug, Default, Clone)]
pub struct Table2dBuilder {
    xs: Vec<Real>,
    branches: Vec<Vec<(Real, Real)>>,
}

impl Table2dBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outer axis position and return its index.
    pub fn append_x_pos(&mut self, x: Real) -> usize {
        self.xs.push(x);
        self.branches.push(Vec::new());
        self.xs.len() - 1
    }

    /// Append an inner `(y, value)` sample to outer node `x_idx`.
    pub fn append_sample_point(&mut self, x_idx: usize, y: Real, value: Real) -> TableResult<()> {
        let len = self.branches.len();
        let branch = self
            .branches
            .get_mut(x_idx)
            .ok_or(TableError::NodeOob { index: x_idx, len })?;
        branch.push((y, value));
        Ok(())
    }

    pub fn num_x(&self) -> usize {
        self.xs.len()
    }

    /// Number of inner samples at outer node `x_idx` (0 for unknown nodes).
    pub fn num_y(&self, x_idx: usize) -> usize {
        self.branches.get(x_idx).map_or(0, Vec::len)
    }

    /// Validate and freeze into an immutable `Table2d`.
    ///
    /// Requires at least one outer node, a strictly increasing outer axis, at least one
    /// sample per node, strictly increasing inner axes and finite values throughout.
    pub fn build(self) -> TableResult<Table2d> {
        if self.xs.is_empty() {
            return Err(TableError::TooFewPoints {
                what: "outer axis",
                len: 0,
                min: 1,
            });
        }
        if let Some(index) = self.xs.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFinite {
                what: "outer axis",
                index,
            });
        }
        if let Some(index) = first_non_increasing(&self.xs) {
            return Err(TableError::NonMonotonic {
                what: "outer axis",
                index,
            });
        }

        let total: usize = self.branches.iter().map(Vec::len).sum();
        let mut offsets = Vec::with_capacity(self.xs.len() + 1);
        let mut ys = Vec::with_capacity(total);
        let mut values = Vec::with_capacity(total);
        offsets.push(0);

        for (index, branch) in self.branches.iter().enumerate() {
            if branch.is_empty() {
                return Err(TableError::EmptyBranch { index });
            }
            let start = ys.len();
            for &(y, v) in branch {
                if !y.is_finite() || !v.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "inner sample",
                        index,
                    });
                }
                ys.push(y);
                values.push(v);
            }
            if first_non_increasing(&ys[start..]).is_some() {
                return Err(TableError::NonMonotonic {
                    what: "inner axis",
                    index,
                });
            }
            offsets.push(ys.len());
        }

        Ok(Table2d {
            xs: self.xs,
            offsets,
            ys,
            values,
        })
    }
}

/// Immutable 2-D table: outer axis plus one inner branch per outer node.
///
/// Storage is a compact arena: node i's samples live in
/// `ys[offsets[i]..offsets[i+1]]` / `values[offsets[i]..offsets[i+1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table2d {
    xs: Vec<Real>,
    offsets: Vec<usize>,
    ys: Vec<Real>,
    values: Vec<Real>,
}

impl Table2d {
    pub fn num_x(&self) -> usize {
        self.xs.len()
    }

    /// Outer axis positions.
    pub fn x_values(&self) -> &[Real] {
        &self.xs
    }

    /// Number of inner samples at outer node `x_idx` (0 for unknown nodes).
    pub fn num_y(&self, x_idx: usize) -> usize {
        self.span(x_idx).map_or(0, |(start, end)| end - start)
    }

    /// Inner axis of outer node `x_idx`.
    pub fn branch_y(&self, x_idx: usize) -> &[Real] {
        match self.span(x_idx) {
            Some((start, end)) => &self.ys[start..end],
            None => &[],
        }
    }

    /// Values of outer node `x_idx`, parallel to `branch_y`.
    pub fn branch_values(&self, x_idx: usize) -> &[Real] {
        match self.span(x_idx) {
            Some((start, end)) => &self.values[start..end],
            None => &[],
        }
    }

    /// Smallest branch length over all outer nodes.
    pub fn min_branch_len(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .min()
            .unwrap_or(0)
    }

    /// Total number of stored inner samples.
    pub fn num_samples(&self) -> usize {
        self.ys.len()
    }

    /// Evaluate at outer coordinate `x` and inner coordinate `y`.
    ///
    /// Each bracketing branch is interpolated in `y`, then the two results are blended
    /// linearly in `x`. End segments are extended on both axes.
    pub fn eval(&self, x: Real, y: Real) -> Real {
        if self.xs.len() == 1 {
            return self.eval_branch(0, y);
        }
        let i = segment_index(&self.xs, x);
        let v0 = self.eval_branch(i, y);
        let v1 = self.eval_branch(i + 1, y);
        lerp(self.xs[i], v0, self.xs[i + 1], v1, x)
    }

    /// Evaluate branch `x_idx` at inner coordinate `y`.
    ///
    /// A single-sample branch is constant.
    pub fn eval_branch(&self, x_idx: usize, y: Real) -> Real {
        let ys = self.branch_y(x_idx);
        let vs = self.branch_values(x_idx);
        match ys.len() {
            0 => Real::NAN,
            1 => vs[0],
            _ => {
                let j = segment_index(ys, y);
                lerp(ys[j], vs[j], ys[j + 1], vs[j + 1], y)
            }
        }
    }

    fn span(&self, x_idx: usize) -> Option<(usize, usize)> {
        if x_idx >= self.xs.len() {
            return None;
        }
        Some((self.offsets[x_idx], self.offsets[x_idx + 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_table() -> Table2d {
        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(10.0);
        b.append_sample_point(i, 0.0, 1.0).unwrap();
        b.append_sample_point(i, 1.0, 3.0).unwrap();
        let j = b.append_x_pos(20.0);
        b.append_sample_point(j, 0.0, 5.0).unwrap();
        b.append_sample_point(j, 1.0, 6.0).unwrap();
        b.append_sample_point(j, 2.0, 9.0).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn builder_tracks_counts() {
        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(1.0);
        assert_eq!(i, 0);
        assert_eq!(b.num_y(i), 0);
        b.append_sample_point(i, 0.0, 1.0).unwrap();
        assert_eq!(b.num_x(), 1);
        assert_eq!(b.num_y(i), 1);
        assert_eq!(b.num_y(7), 0);
    }

    #[test]
    fn append_to_missing_node_fails() {
        let mut b = Table2dBuilder::new();
        let err = b.append_sample_point(0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, TableError::NodeOob { index: 0, len: 0 });
    }

    #[test]
    fn frozen_arena_layout() {
        let t = two_node_table();
        assert_eq!(t.num_x(), 2);
        assert_eq!(t.num_y(0), 2);
        assert_eq!(t.num_y(1), 3);
        assert_eq!(t.num_y(2), 0);
        assert_eq!(t.branch_y(1), &[0.0, 1.0, 2.0]);
        assert_eq!(t.branch_values(1), &[5.0, 6.0, 9.0]);
        assert_eq!(t.min_branch_len(), 2);
        assert_eq!(t.num_samples(), 5);
    }

    #[test]
    fn eval_blends_branches() {
        let t = two_node_table();
        assert!((t.eval(10.0, 0.5) - 2.0).abs() < 1e-12);
        assert!((t.eval(20.0, 1.5) - 7.5).abs() < 1e-12);
        // Midway in x at y = 0: (1 + 5) / 2
        assert!((t.eval(15.0, 0.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_sample_branch_is_constant() {
        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(1.0);
        b.append_sample_point(i, 0.3, 4.0).unwrap();
        let t = b.build().unwrap();
        assert_eq!(t.eval(1.0, 0.0), 4.0);
        assert_eq!(t.eval(5.0, 9.0), 4.0);
        assert_eq!(t.min_branch_len(), 1);
    }

    #[test]
    fn build_rejects_empty_branch() {
        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(1.0);
        b.append_sample_point(i, 0.0, 1.0).unwrap();
        b.append_x_pos(2.0);
        assert_eq!(b.build().unwrap_err(), TableError::EmptyBranch { index: 1 });
    }

    #[test]
    fn build_rejects_unsorted_axes() {
        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(2.0);
        b.append_sample_point(i, 0.0, 1.0).unwrap();
        let j = b.append_x_pos(1.0);
        b.append_sample_point(j, 0.0, 1.0).unwrap();
        assert!(matches!(
            b.build().unwrap_err(),
            TableError::NonMonotonic {
                what: "outer axis",
                ..
            }
        ));

        let mut b = Table2dBuilder::new();
        let i = b.append_x_pos(1.0);
        b.append_sample_point(i, 1.0, 1.0).unwrap();
        b.append_sample_point(i, 1.0, 2.0).unwrap();
        assert_eq!(
            b.build().unwrap_err(),
            TableError::NonMonotonic {
                what: "inner axis",
                index: 0
            }
        );
    }

    #[test]
    fn build_rejects_empty_table() {
        assert!(matches!(
            Table2dBuilder::new().build().unwrap_err(),
            TableError::TooFewPoints { .. }
        ));
    }
}
