//! Raw, already-parsed input tables.
//!
//! These mirror the deck keywords one-to-one: a saturated sub-table indexed by gas
//! pressure plus one undersaturated sub-table per saturated row. Values are in the
//! simulator's internal unit system; no conversion happens here.

use serde::{Deserialize, Serialize};

use crate::family::GasFamily;

/// Surface densities of one region (DENSITY keyword), kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityRecord {
    pub oil: f64,
    pub gas: f64,
    pub water: f64,
}

impl DensityRecord {
    pub fn new(oil: f64, gas: f64, water: f64) -> Self {
        Self { oil, gas, water }
    }
}

/// One row of a saturated gas table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturatedRow {
    /// Gas pressure
    pub pressure: f64,
    /// Gas formation volume factor at saturation
    pub formation_volume_factor: f64,
    /// Gas viscosity at saturation
    pub viscosity: f64,
    /// Saturated vaporization ratio (`Rv` or `Rvw`)
    pub vaporization_ratio: f64,
}

impl SaturatedRow {
    pub fn new(
        pressure: f64,
        formation_volume_factor: f64,
        viscosity: f64,
        vaporization_ratio: f64,
    ) -> Self {
        Self {
            pressure,
            formation_volume_factor,
            viscosity,
            vaporization_ratio,
        }
    }
}

/// One row of an undersaturated sub-table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndersaturatedRow {
    /// Vaporization ratio
    pub ratio: f64,
    pub formation_volume_factor: f64,
    pub viscosity: f64,
}

impl UndersaturatedRow {
    pub fn new(ratio: f64, formation_volume_factor: f64, viscosity: f64) -> Self {
        Self {
            ratio,
            formation_volume_factor,
            viscosity,
        }
    }
}

/// A PVTG or PVTGW table for one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasPvtTable {
    pub saturated: Vec<SaturatedRow>,
    /// `undersaturated[i]` belongs to `saturated[i]`.
    #[serde(default)]
    pub undersaturated: Vec<Vec<UndersaturatedRow>>,
}

impl GasPvtTable {
    pub fn num_rows(&self) -> usize {
        self.saturated.len()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.saturated.iter().map(|r| r.pressure).collect()
    }

    /// Undersaturated sub-table of saturated row `row` (empty if absent).
    pub fn undersaturated(&self, row: usize) -> &[UndersaturatedRow] {
        self.undersaturated.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Saturated row of an RWGSALT table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaltSaturatedRow {
    pub pressure: f64,
    pub vaporization_ratio: f64,
}

/// Undersaturated row of an RWGSALT table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaltRow {
    pub salt_concentration: f64,
    pub vaporization_ratio: f64,
}

impl SaltRow {
    pub fn new(salt_concentration: f64, vaporization_ratio: f64) -> Self {
        Self {
            salt_concentration,
            vaporization_ratio,
        }
    }
}

/// Salt-dependent water vaporization table (RWGSALT) for one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaltTable {
    pub saturated: Vec<SaltSaturatedRow>,
    #[serde(default)]
    pub undersaturated: Vec<Vec<SaltRow>>,
}

impl SaltTable {
    pub fn num_rows(&self) -> usize {
        self.saturated.len()
    }

    pub fn undersaturated(&self, row: usize) -> &[SaltRow] {
        self.undersaturated.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Everything the engine consumes, one entry per region in each list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTableSet {
    pub densities: Vec<DensityRecord>,
    /// PVTG tables
    pub wet: Vec<GasPvtTable>,
    /// PVTGW tables
    pub humid: Vec<GasPvtTable>,
    /// RWGSALT tables; empty when the salt correction is not used
    #[serde(default)]
    pub salt: Vec<SaltTable>,
}

impl InputTableSet {
    /// Region count as defined by the density table.
    pub fn num_regions(&self) -> usize {
        self.densities.len()
    }

    pub fn gas_tables(&self, family: GasFamily) -> &[GasPvtTable] {
        match family {
            GasFamily::Wet => &self.wet,
            GasFamily::Humid => &self.humid,
        }
    }

    /// Salt augmentation is switched on globally by any salt table.
    pub fn has_salt(&self) -> bool {
        !self.salt.is_empty()
    }
}
