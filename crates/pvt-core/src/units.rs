// pvt-core/src/units.rs

use uom::si::f64::{MassDensity as UomMassDensity, Pressure as UomPressure};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;

/// Table pressures are stored in Pa.
#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Oil, gas and water densities at surface conditions for one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceDensities {
    pub oil: Density,
    pub gas: Density,
    pub water: Density,
}

impl ReferenceDensities {
    pub fn from_kg_per_m3(oil: f64, gas: f64, water: f64) -> Self {
        Self {
            oil: kg_per_m3(oil),
            gas: kg_per_m3(gas),
            water: kg_per_m3(water),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::bar;

    #[test]
    fn table_pressure_converts_to_bar() {
        assert!((pa(1.0e5).get::<bar>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reference_densities_are_si() {
        let rho = ReferenceDensities::from_kg_per_m3(800.0, 0.9, 1000.0);
        assert_eq!(rho.oil.value, 800.0);
        assert_eq!(rho.gas.value, 0.9);
        assert_eq!(rho.water.value, 1000.0);
    }
}
