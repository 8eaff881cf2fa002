//! Empirical loss model.
//!
//! The coefficients are fixed approximations, not derived transformer
//! equations. They must stay exactly as written so results match existing
//! outputs.

use crate::params::InputParameters;
use crate::sweep::LoadSweep;
use serde::{Deserialize, Serialize};
use tl_core::Real;

/// Pointwise loss formulas bound to one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct LossModel<'a> {
    params: &'a InputParameters,
}

impl<'a> LossModel<'a> {
    pub fn new(params: &'a InputParameters) -> Self {
        Self { params }
    }

    pub fn iron(&self, load: Real) -> Real {
        let p = self.params;
        0.01 * load.powf(1.2) + 0.005 * p.primary_voltage + 0.002 * p.frequency + 0.0001 * p.core_size
    }

    pub fn copper(&self, load: Real) -> Real {
        let p = self.params;
        let fraction = load / p.rated_power;
        p.winding_resistance * fraction.powi(2) * p.rated_power
    }

    pub fn stray(&self, load: Real) -> Real {
        let p = self.params;
        0.0005 * load * p.core_size + 0.0002 * p.temperature
    }

    pub fn dielectric(&self, load: Real) -> Real {
        let p = self.params;
        0.0001 * load * p.frequency + 0.00005 * p.temperature
    }

    pub fn total(&self, load: Real) -> Real {
        self.iron(load) + self.copper(load) + self.stray(load) + self.dielectric(load)
    }

    pub fn efficiency(&self, load: Real) -> Real {
        efficiency_percent(load, self.total(load))
    }
}

/// `load / (load + loss) * 100`, with 0 when the denominator vanishes.
pub fn efficiency_percent(load: Real, total_loss: Real) -> Real {
    let denom = load + total_loss;
    if denom == 0.0 {
        0.0
    } else {
        load / denom * 100.0
    }
}

/// Loss and efficiency curves sampled over a [`LoadSweep`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossCurveSet {
    pub iron: Vec<Real>,
    pub copper: Vec<Real>,
    pub stray: Vec<Real>,
    pub dielectric: Vec<Real>,
    /// Pointwise sum of the four losses
    pub total: Vec<Real>,
    /// Efficiency in percent
    pub efficiency: Vec<Real>,
}

impl LossCurveSet {
    pub fn evaluate(model: &LossModel<'_>, sweep: &LoadSweep) -> Self {
        let n = sweep.len();
        let mut curves = Self {
            iron: Vec::with_capacity(n),
            copper: Vec::with_capacity(n),
            stray: Vec::with_capacity(n),
            dielectric: Vec::with_capacity(n),
            total: Vec::with_capacity(n),
            efficiency: Vec::with_capacity(n),
        };

        for &x in sweep {
            let iron = model.iron(x);
            let copper = model.copper(x);
            let stray = model.stray(x);
            let dielectric = model.dielectric(x);
            let total = iron + copper + stray + dielectric;

            curves.iron.push(iron);
            curves.copper.push(copper);
            curves.stray.push(stray);
            curves.dielectric.push(dielectric);
            curves.total.push(total);
            curves.efficiency.push(efficiency_percent(x, total));
        }
        curves
    }

    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}
