//! Loss curve calculation entry point.

use crate::animation::{AnimationFrames, Frame, FrameIter};
use crate::error::ValidationError;
use crate::model::{LossCurveSet, LossModel};
use crate::params::InputParameters;
use crate::sweep::LoadSweep;
use serde::{Deserialize, Serialize};
use tl_core::{Real, finite_max};

/// Headroom applied to both chart axes.
pub const AXIS_HEADROOM: Real = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_max: Real,
    pub y_max: Real,
}

impl AxisBounds {
    fn from_curves(rated_power: Real, curves: &LossCurveSet) -> Self {
        let peak = finite_max(&curves.total)
            .into_iter()
            .chain(finite_max(&curves.efficiency))
            .fold(0.0, Real::max);
        Self {
            x_max: rated_power * AXIS_HEADROOM,
            y_max: peak * AXIS_HEADROOM,
        }
    }
}

/// Complete result of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossAnalysis {
    pub params: InputParameters,
    pub sweep: LoadSweep,
    pub curves: LossCurveSet,
    pub bounds: AxisBounds,
    #[serde(skip)]
    pub schedule: AnimationFrames,
}

/// Compute the load sweep, loss curves, axis bounds and animation schedule.
///
/// Fails only when a positivity-gated parameter is rejected.
pub fn compute(params: &InputParameters) -> Result<LossAnalysis, ValidationError> {
    if let Err(err) = params.validate() {
        tracing::debug!(%err, "rejected loss calculation");
        return Err(err);
    }

    let sweep = LoadSweep::new(params.rated_power);
    let curves = LossCurveSet::evaluate(&LossModel::new(params), &sweep);
    let bounds = AxisBounds::from_curves(params.rated_power, &curves);
    let schedule = AnimationFrames::for_len(sweep.len());

    tracing::debug!(
        rated_power = params.rated_power,
        points = sweep.len(),
        frames = schedule.len(),
        x_max = bounds.x_max,
        y_max = bounds.y_max,
        "computed loss curves"
    );

    Ok(LossAnalysis {
        params: params.clone(),
        sweep,
        curves,
        bounds,
        schedule,
    })
}

/// Sample of the curves at one load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub index: usize,
    pub load: Real,
    pub total_loss: Real,
    pub efficiency: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossSummary {
    pub peak_efficiency: OperatingPoint,
    pub full_load: OperatingPoint,
    /// Sample nearest to the selected load level
    pub selected: OperatingPoint,
}

impl LossAnalysis {
    pub fn frames(&self) -> FrameIter<'_> {
        self.schedule.iter(&self.sweep, &self.curves)
    }

    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        self.schedule.frame(index, &self.sweep, &self.curves)
    }

    pub fn frame_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn point(&self, index: usize) -> Option<OperatingPoint> {
        Some(OperatingPoint {
            index,
            load: *self.sweep.as_slice().get(index)?,
            total_loss: *self.curves.total.get(index)?,
            efficiency: *self.curves.efficiency.get(index)?,
        })
    }

    /// `None` only for an empty sweep.
    pub fn summary(&self) -> Option<LossSummary> {
        let peak_index = self
            .curves
            .efficiency
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)?;
        let selected_load = self.params.rated_power * self.params.load_fraction();
        let selected_index = self.sweep.nearest_index(selected_load)?;

        Some(LossSummary {
            peak_efficiency: self.point(peak_index)?,
            full_load: self.point(self.sweep.len().checked_sub(1)?)?,
            selected: self.point(selected_index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CoreType;

    fn sample() -> InputParameters {
        InputParameters {
            primary_voltage: 230.0,
            secondary_voltage: 115.0,
            rated_power: 100.0,
            frequency: 50.0,
            winding_resistance: 2.0,
            core_type: CoreType::Crgo,
            core_size: 50.0,
            temperature: 25.0,
            load_level_percent: 50,
        }
    }

    #[test]
    fn bounds_use_headroom() {
        let analysis = compute(&sample()).unwrap();
        assert!((analysis.bounds.x_max - 120.0).abs() < 1e-12);
        let total_max = finite_max(&analysis.curves.total).unwrap();
        let eff_max = finite_max(&analysis.curves.efficiency).unwrap();
        assert!(analysis.bounds.y_max >= 1.2 * total_max);
        assert!(analysis.bounds.y_max >= 1.2 * eff_max);
    }

    #[test]
    fn rejected_params_produce_nothing() {
        let mut p = sample();
        p.rated_power = 0.0;
        let err = compute(&p).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: "rated_power",
                value: 0.0
            }
        );
    }

    #[test]
    fn summary_reports_selected_and_full_load() {
        let analysis = compute(&sample()).unwrap();
        let summary = analysis.summary().unwrap();
        assert_eq!(summary.full_load.index, 49);
        assert!((summary.full_load.load - 100.0).abs() < 1e-12);
        // 50 kVA falls midway between samples 24 and 25
        assert!(summary.selected.index == 24 || summary.selected.index == 25);
        let best = finite_max(&analysis.curves.efficiency).unwrap();
        assert_eq!(summary.peak_efficiency.efficiency, best);
    }

    #[test]
    fn frame_accessor_matches_iterator() {
        let analysis = compute(&sample()).unwrap();
        let from_iter: Vec<_> = analysis.frames().collect();
        assert_eq!(from_iter.len(), analysis.frame_count());
        assert_eq!(analysis.frame(3).as_ref(), from_iter.get(3));
        assert!(analysis.frame(analysis.frame_count()).is_none());
    }
}
