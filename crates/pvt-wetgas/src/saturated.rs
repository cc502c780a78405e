//! Saturated curves: gas properties along the saturation line, indexed by pressure.

use pvt_tables::{Table1d, TableResult};

use crate::input::GasPvtTable;

/// The four saturated curves of one gas family in one region.
///
/// All four share the saturated table's pressure column as x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturatedCurves {
    formation_volume_factor: Table1d,
    inverse_formation_volume_factor: Table1d,
    inverse_viscosity_volume_factor: Table1d,
    vaporization_ratio: Table1d,
}

impl SaturatedCurves {
    /// Build from the columns of a validated saturated table.
    ///
    /// The simulator queries `1/B` and `1/(mu*B)` rather than `B` and `mu*B`, so those
    /// are tabulated directly.
    pub fn from_table(table: &GasPvtTable) -> TableResult<Self> {
        let pressure = table.pressures();
        let n = pressure.len();

        let mut b = Vec::with_capacity(n);
        let mut inv_b = Vec::with_capacity(n);
        let mut inv_b_mu = Vec::with_capacity(n);
        let mut ratio = Vec::with_capacity(n);
        for row in &table.saturated {
            b.push(row.formation_volume_factor);
            inv_b.push(1.0 / row.formation_volume_factor);
            inv_b_mu.push(1.0 / (row.viscosity * row.formation_volume_factor));
            ratio.push(row.vaporization_ratio);
        }

        Ok(Self {
            formation_volume_factor: Table1d::from_columns(&pressure, &b)?,
            inverse_formation_volume_factor: Table1d::from_columns(&pressure, &inv_b)?,
            inverse_viscosity_volume_factor: Table1d::from_columns(&pressure, &inv_b_mu)?,
            vaporization_ratio: Table1d::from_xy(pressure, ratio)?,
        })
    }

    /// `B` at saturation.
    pub fn formation_volume_factor(&self) -> &Table1d {
        &self.formation_volume_factor
    }

    /// `1/B` at saturation.
    pub fn inverse_formation_volume_factor(&self) -> &Table1d {
        &self.inverse_formation_volume_factor
    }

    /// `1/(mu*B)` at saturation.
    pub fn inverse_viscosity_volume_factor(&self) -> &Table1d {
        &self.inverse_viscosity_volume_factor
    }

    /// Saturated vaporization ratio (`Rv` or `Rvw`).
    pub fn vaporization_ratio(&self) -> &Table1d {
        &self.vaporization_ratio
    }

    /// Pressure axis shared by all four curves.
    pub fn pressures(&self) -> &[f64] {
        self.formation_volume_factor.x()
    }
}
