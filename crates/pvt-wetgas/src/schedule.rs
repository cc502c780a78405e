//! Schedule input relevant to table construction: oil vaporization control.

use pvt_core::Real;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Oil vaporization setting of one schedule step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OilVaporization {
    #[default]
    Undefined,
    /// VAPPARS: vaporization parameters
    Vappars { vap1: Real, vap2: Real },
    /// DRSDT / DRVDT: maximum rates of change of the dissolved and vaporized ratios
    Drdt {
        #[serde(default)]
        max_drsdt: Option<Real>,
        #[serde(default)]
        max_drvdt: Option<Real>,
    },
}

/// One report step of the simulation schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStep {
    #[serde(default)]
    pub oil_vaporization: OilVaporization,
}

/// Ordered schedule steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub steps: Vec<ScheduleStep>,
}

impl Schedule {
    pub fn new(steps: Vec<ScheduleStep>) -> Self {
        Self { steps }
    }
}

/// Vaporization-control coefficient attached to the finished tables.
///
/// Captured once at construction; later schedule changes do not reach the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VaporizationControl {
    vap_par1: Real,
}

impl VaporizationControl {
    /// No vaporization control.
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn from_vap1(vap_par1: Real) -> Self {
        Self { vap_par1 }
    }

    /// Read the coefficient from the schedule's first step only.
    ///
    /// `VAPPARS` yields its first parameter, any other setting (or an empty schedule)
    /// yields 0.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let Some(first) = schedule.steps.first() else {
            return Self::inactive();
        };

        if let Some(step) = schedule
            .steps
            .iter()
            .skip(1)
            .position(|s| s.oil_vaporization != first.oil_vaporization)
        {
            warn!(
                step = step + 1,
                "oil vaporization changes during the schedule; the tables keep the first step's setting"
            );
        }

        match first.oil_vaporization {
            OilVaporization::Vappars { vap1, .. } => Self::from_vap1(vap1),
            _ => Self::inactive(),
        }
    }

    pub fn vap_par1(&self) -> Real {
        self.vap_par1
    }

    pub fn is_active(&self) -> bool {
        self.vap_par1 > 0.0
    }
}
