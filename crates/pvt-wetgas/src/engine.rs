//! Region aggregation: builds every region's tables and freezes the engine state.

use pvt_core::{Real, ReferenceDensities, RegionId};
use pvt_tables::Table2d;
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::branches::assemble_branches;
use crate::config::BuildOptions;
use crate::error::{PvtError, PvtResult};
use crate::extrapolate::{BranchExtension, complete_branches};
use crate::family::GasFamily;
use crate::input::{GasPvtTable, InputTableSet};
use crate::salt::build_salt_table;
use crate::saturated::SaturatedCurves;
use crate::schedule::{Schedule, VaporizationControl};
use crate::validate::{MIN_SATURATED_ROWS, validate_input};

/// Finished tables of one gas family in one region.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyTables {
    family: GasFamily,
    inverse_formation_volume_factor: Table2d,
    viscosity: Table2d,
    saturated: SaturatedCurves,
    extensions: Vec<BranchExtension>,
}

impl FamilyTables {
    pub fn family(&self) -> GasFamily {
        self.family
    }

    /// `1/B` keyed by (pressure, vaporization ratio).
    pub fn inverse_formation_volume_factor(&self) -> &Table2d {
        &self.inverse_formation_volume_factor
    }

    /// Gas viscosity keyed by (pressure, vaporization ratio).
    pub fn viscosity(&self) -> &Table2d {
        &self.viscosity
    }

    pub fn saturated(&self) -> &SaturatedCurves {
        &self.saturated
    }

    /// Nodes whose undersaturated branch was synthesized, in node order.
    pub fn extensions(&self) -> &[BranchExtension] {
        &self.extensions
    }

    pub fn num_pressure_nodes(&self) -> usize {
        self.inverse_formation_volume_factor.num_x()
    }

    /// Gas formation volume factor at `(pressure, ratio)`.
    pub fn formation_volume_factor_at(&self, pressure: Real, ratio: Real) -> Real {
        1.0 / self.inverse_formation_volume_factor.eval(pressure, ratio)
    }

    /// Gas viscosity at `(pressure, ratio)`.
    pub fn viscosity_at(&self, pressure: Real, ratio: Real) -> Real {
        self.viscosity.eval(pressure, ratio)
    }
}

/// Build the complete table set of one family from a validated raw table.
pub fn build_family_tables(
    table: &GasPvtTable,
    family: GasFamily,
    region: RegionId,
) -> PvtResult<FamilyTables> {
    if table.num_rows() < MIN_SATURATED_ROWS {
        return Err(PvtError::InsufficientData {
            table: family.keyword(),
            region,
            rows: table.num_rows(),
        });
    }

    let saturated = SaturatedCurves::from_table(table)?;
    let raw = assemble_branches(table);
    let completed = complete_branches(&raw, family, region)?;
    let (inverse_formation_volume_factor, viscosity) = completed.branches.freeze()?;

    Ok(FamilyTables {
        family,
        inverse_formation_volume_factor,
        viscosity,
        saturated,
        extensions: completed.extensions,
    })
}

/// All tables of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPvt {
    id: RegionId,
    reference_densities: ReferenceDensities,
    wet: FamilyTables,
    humid: FamilyTables,
    salt: Option<Table2d>,
}

impl RegionPvt {
    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn reference_densities(&self) -> ReferenceDensities {
        self.reference_densities
    }

    pub fn family(&self, family: GasFamily) -> &FamilyTables {
        match family {
            GasFamily::Wet => &self.wet,
            GasFamily::Humid => &self.humid,
        }
    }

    /// `(pressure, salt concentration) -> Rvw`, present only when salt data was given.
    pub fn salt_table(&self) -> Option<&Table2d> {
        self.salt.as_ref()
    }
}

/// The immutable, query-ready result of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    regions: Vec<RegionPvt>,
    control: VaporizationControl,
    salt_enabled: bool,
}

impl EngineState {
    fn finalize(regions: Vec<RegionPvt>, control: VaporizationControl, salt_enabled: bool) -> Self {
        if cfg!(debug_assertions) {
            for (idx, region) in regions.iter().enumerate() {
                debug_assert_eq!(region.id.as_usize(), idx);
                debug_assert_eq!(region.salt.is_some(), salt_enabled);
                for family in GasFamily::ALL {
                    let tables = region.family(family);
                    let nodes = tables.saturated.pressures().len();
                    debug_assert_eq!(tables.inverse_formation_volume_factor.num_x(), nodes);
                    debug_assert_eq!(tables.viscosity.num_x(), nodes);
                    debug_assert!(tables.inverse_formation_volume_factor.min_branch_len() >= 2);
                    debug_assert!(tables.viscosity.min_branch_len() >= 2);
                }
            }
        }

        Self {
            regions,
            control,
            salt_enabled,
        }
    }

    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[RegionPvt] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&RegionPvt> {
        self.regions.get(index)
    }

    pub fn family(&self, region: usize, family: GasFamily) -> Option<&FamilyTables> {
        self.region(region).map(|r| r.family(family))
    }

    pub fn reference_densities(&self, region: usize) -> Option<ReferenceDensities> {
        self.region(region).map(RegionPvt::reference_densities)
    }

    pub fn vaporization_control(&self) -> VaporizationControl {
        self.control
    }

    /// Shorthand for the VAPPARS coefficient shared by all regions.
    pub fn vap_par1(&self) -> Real {
        self.control.vap_par1()
    }

    pub fn salt_enabled(&self) -> bool {
        self.salt_enabled
    }
}

/// Builder for `EngineState`.
///
/// ```
/// use pvt_wetgas::{BuildOptions, InputTableSet, PvtEngineBuilder, VaporizationControl};
///
/// let input = InputTableSet::default();
/// let state = PvtEngineBuilder::new(&input)
///     .vaporization_control(VaporizationControl::from_vap1(1.5))
///     .options(BuildOptions::parallel())
///     .build()
///     .unwrap();
/// assert_eq!(state.num_regions(), 0);
/// assert_eq!(state.vap_par1(), 1.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PvtEngineBuilder<'a> {
    input: &'a InputTableSet,
    control: VaporizationControl,
    options: BuildOptions,
}

impl<'a> PvtEngineBuilder<'a> {
    pub fn new(input: &'a InputTableSet) -> Self {
        Self {
            input,
            control: VaporizationControl::inactive(),
            options: BuildOptions::default(),
        }
    }

    pub fn vaporization_control(mut self, control: VaporizationControl) -> Self {
        self.control = control;
        self
    }

    /// Take the vaporization control from the schedule's first step.
    pub fn schedule(self, schedule: &Schedule) -> Self {
        self.vaporization_control(VaporizationControl::from_schedule(schedule))
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the input, build every region and freeze the result.
    ///
    /// # Errors
    /// The first validation failure, or the failure of the lowest-indexed region.
    pub fn build(self) -> PvtResult<EngineState> {
        let input = self.input;
        let num_regions = input.num_regions();
        let _span = info_span!("pvt_build", regions = num_regions).entered();

        validate_input(input)?;

        let salt_enabled = input.has_salt();
        let regions = if self.options.parallel_regions {
            let results: Vec<PvtResult<RegionPvt>> = (0..num_regions)
                .into_par_iter()
                .map(|idx| build_region(input, idx, salt_enabled))
                .collect();
            results.into_iter().collect::<PvtResult<Vec<_>>>()?
        } else {
            (0..num_regions)
                .map(|idx| build_region(input, idx, salt_enabled))
                .collect::<PvtResult<Vec<_>>>()?
        };

        let extended: usize = regions
            .iter()
            .flat_map(|r| GasFamily::ALL.map(|f| r.family(f).extensions.len()))
            .sum();
        info!(
            regions = num_regions,
            extended_nodes = extended,
            salt = salt_enabled,
            vap_par1 = self.control.vap_par1(),
            "wet/humid gas PVT tables built"
        );

        Ok(EngineState::finalize(regions, self.control, salt_enabled))
    }
}

fn build_region(input: &InputTableSet, idx: usize, salt_enabled: bool) -> PvtResult<RegionPvt> {
    let id = RegionId::from_usize(idx);
    let rho = input.densities[idx];
    let reference_densities = ReferenceDensities::from_kg_per_m3(rho.oil, rho.gas, rho.water);

    let wet = build_family_tables(&input.wet[idx], GasFamily::Wet, id)?;
    let humid = build_family_tables(&input.humid[idx], GasFamily::Humid, id)?;
    let salt = if salt_enabled {
        Some(build_salt_table(&input.salt[idx], id)?)
    } else {
        None
    };

    debug!(
        region = %id,
        wet_nodes = wet.num_pressure_nodes(),
        humid_nodes = humid.num_pressure_nodes(),
        salt = salt.is_some(),
        "region tables built"
    );

    Ok(RegionPvt {
        id,
        reference_densities,
        wet,
        humid,
        salt,
    })
}
