//! Completion of degenerate undersaturated branches.
//!
//! Every pressure node needs at least two samples so that the simulator can
//! interpolate in the vaporization ratio. A node that was given only its saturated
//! sample is extended using the first later node with real undersaturated data (the
//! master). The master's ratio steps are copied, while `B` and `mu` follow the master's
//! *relative* change per step, anchored at the node's own value:
//!
//! ```text
//! x     = (B[k] - B[k-1]) / ((B[k] + B[k-1]) / 2)
//! B_new = B_last * (1 + x/2) / (1 - x/2)
//! ```
//!
//! The pass reads an immutable raw branch set and returns a new one, so a branch that
//! was extended is never used as a master.

use pvt_core::{CoreError, Real, RegionId, ensure_finite};
use tracing::debug;

use crate::branches::{BranchSample, GasBranches};
use crate::error::{PvtError, PvtResult};
use crate::family::GasFamily;

/// Record of one extended node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchExtension {
    /// Extended pressure node
    pub node: usize,
    /// Node whose branch served as template
    pub master: usize,
    /// Number of synthesized samples
    pub added: usize,
}

/// Output of `complete_branches`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedBranches {
    pub branches: GasBranches,
    pub extensions: Vec<BranchExtension>,
}

/// Extend every single-sample branch of `raw` from its master.
///
/// Branches that already hold two or more samples are copied unchanged, so running the
/// pass on a complete set returns an identical set.
///
/// # Errors
/// `ExtrapolationImpossible` if a degenerate node has no later node with at least two
/// raw samples.
pub fn complete_branches(
    raw: &GasBranches,
    family: GasFamily,
    region: RegionId,
) -> PvtResult<CompletedBranches> {
    let mut branches = raw.clone();
    let mut extensions = Vec::new();

    for node in 0..raw.num_nodes() {
        if raw.branch_len(node) > 1 {
            continue;
        }

        let master = find_master(raw, node).ok_or(PvtError::ExtrapolationImpossible {
            family,
            region,
            node,
        })?;
        let added = extend_branch(raw.branch(node), raw.branch(master))?;
        debug!(
            %family,
            %region,
            node,
            master,
            added = added.len(),
            "extended degenerate undersaturated branch"
        );
        branches.extend_branch(node, &added);
        extensions.push(BranchExtension {
            node,
            master,
            added: added.len(),
        });
    }

    Ok(CompletedBranches {
        branches,
        extensions,
    })
}

/// First node after `node` whose branch holds at least two samples.
pub fn find_master(branches: &GasBranches, node: usize) -> Option<usize> {
    (node + 1..branches.num_nodes()).find(|&m| branches.branch_len(m) > 1)
}

/// Samples to append to `current` so that it ends as long as `master`.
///
/// Returns only the new samples, in order.
pub fn extend_branch(
    current: &[BranchSample],
    master: &[BranchSample],
) -> Result<Vec<BranchSample>, CoreError> {
    let mut last = *current.last().ok_or(CoreError::Invariant {
        what: "undersaturated branch must hold at least one sample",
    })?;

    let mut added = Vec::with_capacity(master.len().saturating_sub(1));
    for pair in master.windows(2) {
        let (prev, next) = (pair[0], pair[1]);

        let ratio = last.ratio + (next.ratio - prev.ratio);
        let x_b = relative_change(prev.formation_volume_factor, next.formation_volume_factor);
        let x_mu = relative_change(prev.viscosity, next.viscosity);

        let sample = BranchSample::new(
            ensure_finite(ratio, "extrapolated ratio")?,
            ensure_finite(
                apply_relative_change(last.formation_volume_factor, x_b),
                "extrapolated formation volume factor",
            )?,
            ensure_finite(
                apply_relative_change(last.viscosity, x_mu),
                "extrapolated viscosity",
            )?,
        );
        added.push(sample);
        last = sample;
    }

    Ok(added)
}

/// Change from `older` to `newer` relative to their mean.
fn relative_change(older: Real, newer: Real) -> Real {
    (newer - older) / ((newer + older) / 2.0)
}

/// Inverse of `relative_change`: the value reached from `last` by relative change `x`.
fn apply_relative_change(last: Real, x: Real) -> Real {
    last * (1.0 + x / 2.0) / (1.0 - x / 2.0)
}
