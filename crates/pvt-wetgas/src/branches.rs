//! Undersaturated branches: the raw material of the 2-D gas tables.
//!
//! `assemble_branches` copies a gas table's undersaturated sub-tables verbatim, one
//! branch per saturated pressure node. The branches keep the formation volume factor
//! itself (not its inverse) because the completion pass works on relative changes of
//! `B`. `GasBranches::freeze` produces the `1/B` and viscosity `Table2d`s.

use pvt_core::{CoreError, Real};
use pvt_tables::{Table2d, Table2dBuilder, TableResult};

use crate::input::GasPvtTable;

/// One `(ratio, B, mu)` sample of an undersaturated branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchSample {
    pub ratio: Real,
    pub formation_volume_factor: Real,
    pub viscosity: Real,
}

impl BranchSample {
    pub fn new(ratio: Real, formation_volume_factor: Real, viscosity: Real) -> Self {
        Self {
            ratio,
            formation_volume_factor,
            viscosity,
        }
    }
}

/// Pressure nodes with their undersaturated branches.
#[derive(Debug, Clone, PartialEq)]
pub struct GasBranches {
    pressures: Vec<Real>,
    branches: Vec<Vec<BranchSample>>,
}

impl GasBranches {
    /// Pair a pressure axis with one branch per pressure.
    pub fn from_parts(
        pressures: Vec<Real>,
        branches: Vec<Vec<BranchSample>>,
    ) -> Result<Self, CoreError> {
        if pressures.len() != branches.len() {
            return Err(CoreError::InvalidArg {
                what: "one undersaturated branch per pressure node",
            });
        }
        Ok(Self {
            pressures,
            branches,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.pressures.len()
    }

    pub fn pressures(&self) -> &[Real] {
        &self.pressures
    }

    /// Branch of pressure node `node` (empty for unknown nodes).
    pub fn branch(&self, node: usize) -> &[BranchSample] {
        self.branches.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn branch_len(&self, node: usize) -> usize {
        self.branch(node).len()
    }

    /// Smallest branch length over all nodes (0 for an empty set).
    pub fn min_branch_len(&self) -> usize {
        self.branches.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Append samples to node `node`.
    pub(crate) fn extend_branch(&mut self, node: usize, samples: &[BranchSample]) {
        if let Some(branch) = self.branches.get_mut(node) {
            branch.extend_from_slice(samples);
        }
    }

    /// Freeze into `(1/B, mu)` tables keyed by `(pressure, ratio)`.
    pub fn freeze(&self) -> TableResult<(Table2d, Table2d)> {
        let mut inv_b = Table2dBuilder::new();
        let mut mu = Table2dBuilder::new();

        for (pressure, branch) in self.pressures.iter().zip(&self.branches) {
            let i = inv_b.append_x_pos(*pressure);
            let j = mu.append_x_pos(*pressure);
            debug_assert_eq!(i, j);
            for sample in branch {
                inv_b.append_sample_point(i, sample.ratio, 1.0 / sample.formation_volume_factor)?;
                mu.append_sample_point(j, sample.ratio, sample.viscosity)?;
            }
        }

        Ok((inv_b.build()?, mu.build()?))
    }
}

/// Copy the undersaturated sub-tables of `table` into raw branches, in supplied order.
///
/// Degenerate (single-sample) branches are kept as they are.
pub fn assemble_branches(table: &GasPvtTable) -> GasBranches {
    let branches = (0..table.num_rows())
        .map(|node| {
            table
                .undersaturated(node)
                .iter()
                .map(|r| BranchSample::new(r.ratio, r.formation_volume_factor, r.viscosity))
                .collect()
        })
        .collect();

    GasBranches {
        pressures: table.pressures(),
        branches,
    }
}
