//! Input validation.
//!
//! Runs before any table is built and has no side effects. Region counts are cross
//! checked first, so a count mismatch is reported before any per-region problem.

use pvt_core::{RegionId, first_non_increasing};

use crate::error::{PvtError, PvtResult};
use crate::family::GasFamily;
use crate::input::{GasPvtTable, InputTableSet, SaltTable};

const DENSITY: &str = "DENSITY";
const RWGSALT: &str = "RWGSALT";

/// Minimum saturated rows of any table.
pub const MIN_SATURATED_ROWS: usize = 2;

/// Validate the complete input set.
pub fn validate_input(input: &InputTableSet) -> PvtResult<()> {
    check_region_counts(input)?;

    for (idx, _) in input.densities.iter().enumerate() {
        let region = RegionId::from_usize(idx);
        for family in GasFamily::ALL {
            check_gas_table(&input.gas_tables(family)[idx], family, region)?;
        }
        if let Some(salt) = input.salt.get(idx) {
            check_salt_table(salt, region)?;
        }
    }

    Ok(())
}

/// All region-indexed inputs must agree with the density table.
pub fn check_region_counts(input: &InputTableSet) -> PvtResult<()> {
    let expected = input.densities.len();
    let mut sources = vec![
        (GasFamily::Wet.keyword(), input.wet.len()),
        (GasFamily::Humid.keyword(), input.humid.len()),
    ];
    if input.has_salt() {
        sources.push((RWGSALT, input.salt.len()));
    }

    for (name, count) in sources {
        if count != expected {
            return Err(PvtError::TableMismatch {
                left: name,
                left_count: count,
                right: DENSITY,
                right_count: expected,
            });
        }
    }
    Ok(())
}

/// Structural checks on one PVTG / PVTGW table.
pub fn check_gas_table(table: &GasPvtTable, family: GasFamily, region: RegionId) -> PvtResult<()> {
    let name = family.keyword();
    if table.num_rows() < MIN_SATURATED_ROWS {
        return Err(PvtError::InsufficientData {
            table: name,
            region,
            rows: table.num_rows(),
        });
    }

    for (row, sat) in table.saturated.iter().enumerate() {
        finite(name, region, || format!("PG in saturated row {row}"), sat.pressure)?;
        positive(name, region, || format!("BG in saturated row {row}"), sat.formation_volume_factor)?;
        positive(name, region, || format!("MUG in saturated row {row}"), sat.viscosity)?;
        finite(
            name,
            region,
            || format!("{} in saturated row {row}", family.ratio_column()),
            sat.vaporization_ratio,
        )?;
    }
    if let Some(row) = first_non_increasing(&table.pressures()) {
        return Err(PvtError::NonMonotonic {
            table: name,
            region,
            location: format!("PG at saturated row {row}"),
        });
    }

    for node in 0..table.num_rows() {
        let branch = table.undersaturated(node);
        if branch.is_empty() {
            return Err(PvtError::MissingBranch {
                table: name,
                region,
                node,
            });
        }
        for (row, us) in branch.iter().enumerate() {
            finite(
                name,
                region,
                || format!("{} in undersaturated row {row} of node {node}", family.ratio_column()),
                us.ratio,
            )?;
            positive(
                name,
                region,
                || format!("BG in undersaturated row {row} of node {node}"),
                us.formation_volume_factor,
            )?;
            positive(
                name,
                region,
                || format!("MUG in undersaturated row {row} of node {node}"),
                us.viscosity,
            )?;
        }
        let ratios: Vec<f64> = branch.iter().map(|r| r.ratio).collect();
        if let Some(row) = first_non_increasing(&ratios) {
            return Err(PvtError::NonMonotonic {
                table: name,
                region,
                location: format!("{} at undersaturated row {row} of node {node}", family.ratio_column()),
            });
        }
    }

    Ok(())
}

/// Structural checks on one RWGSALT table.
///
/// Short undersaturated branches are allowed; they are never extrapolated.
pub fn check_salt_table(table: &SaltTable, region: RegionId) -> PvtResult<()> {
    if table.num_rows() < MIN_SATURATED_ROWS {
        return Err(PvtError::InsufficientData {
            table: RWGSALT,
            region,
            rows: table.num_rows(),
        });
    }

    for (row, sat) in table.saturated.iter().enumerate() {
        finite(RWGSALT, region, || format!("PG in saturated row {row}"), sat.pressure)?;
    }
    let pressures: Vec<f64> = table.saturated.iter().map(|r| r.pressure).collect();
    if let Some(row) = first_non_increasing(&pressures) {
        return Err(PvtError::NonMonotonic {
            table: RWGSALT,
            region,
            location: format!("PG at saturated row {row}"),
        });
    }

    for node in 0..table.num_rows() {
        let branch = table.undersaturated(node);
        if branch.is_empty() {
            return Err(PvtError::MissingBranch {
                table: RWGSALT,
                region,
                node,
            });
        }
        for (row, s) in branch.iter().enumerate() {
            finite(
                RWGSALT,
                region,
                || format!("C_SALT in row {row} of node {node}"),
                s.salt_concentration,
            )?;
            finite(
                RWGSALT,
                region,
                || format!("RVW in row {row} of node {node}"),
                s.vaporization_ratio,
            )?;
        }
        let concentrations: Vec<f64> = branch.iter().map(|s| s.salt_concentration).collect();
        if let Some(row) = first_non_increasing(&concentrations) {
            return Err(PvtError::NonMonotonic {
                table: RWGSALT,
                region,
                location: format!("C_SALT at row {row} of node {node}"),
            });
        }
    }

    Ok(())
}

fn finite(
    table: &'static str,
    region: RegionId,
    location: impl FnOnce() -> String,
    value: f64,
) -> PvtResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PvtError::NonPhysical {
            table,
            region,
            location: location(),
            value,
        })
    }
}

fn positive(
    table: &'static str,
    region: RegionId,
    location: impl FnOnce() -> String,
    value: f64,
) -> PvtResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PvtError::NonPhysical {
            table,
            region,
            location: location(),
            value,
        })
    }
}
