//! Swept load axis.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use tl_core::Real;

/// Number of samples in every load sweep.
pub const SWEEP_POINTS: usize = 50;

/// Evenly spaced load samples from 0 to rated power, inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadSweep {
    points: Vec<Real>,
}

impl LoadSweep {
    /// Standard sweep of [`SWEEP_POINTS`] samples.
    pub fn new(rated_power: Real) -> Self {
        Self::linear(rated_power, SWEEP_POINTS)
    }

    /// Sample i = end * i / (n - 1); the last sample is exactly `end`.
    pub fn linear(end: Real, num_points: usize) -> Self {
        match num_points {
            0 => Self { points: Vec::new() },
            1 => Self { points: vec![0.0] },
            n => {
                let delta = end / (n - 1) as Real;
                let mut points: Vec<Real> = (0..n).map(|i| i as Real * delta).collect();
                // Ensure exact endpoint
                points[n - 1] = end;
                Self { points }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Real> {
        self.points.iter()
    }

    /// Index of the sample closest to `load`.
    pub fn nearest_index(&self, load: Real) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - load).abs().total_cmp(&(*b - load).abs()))
            .map(|(i, _)| i)
    }
}

impl Index<usize> for LoadSweep {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a LoadSweep {
    type Item = &'a Real;
    type IntoIter = std::slice::Iter<'a, Real>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
