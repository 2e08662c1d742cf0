//! Gaussian kernel density estimates for violin shapes

use std::f64::consts::PI;

use super::{observed, price_range, sample_std};
use crate::error::{ProfileError, Result};

/// How many bandwidths the curve extends past the observed range
const CUT: f64 = 2.0;
const GRID_POINTS: usize = 100;

#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub bandwidth: f64,
    /// (value, density) pairs in ascending value order
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|(_, d)| *d).fold(0.0, f64::max)
    }
}

/// Scott's rule: sample std scaled by n^(-1/5)
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std(values)?;
    let bandwidth = std * (values.len() as f64).powf(-0.2);
    (bandwidth > 0.0).then_some(bandwidth)
}

/// Evaluate a Gaussian KDE on an even grid spanning the data plus two bandwidths each side.
///
/// Constant or single-point data has no bandwidth; the curve collapses to one
/// point at that value with zero density.
pub fn gaussian_kde(values: &[f64]) -> Result<DensityCurve> {
    let present = observed(values);
    let values = present.as_slice();
    if values.is_empty() {
        return Err(ProfileError::empty("cannot estimate the density of an empty series"));
    }

    let (min, max) = price_range(values)?;
    let Some(bandwidth) = scott_bandwidth(values) else {
        return Ok(DensityCurve {
            bandwidth: 0.0,
            points: vec![(min, 0.0)],
        });
    };

    let low = min - CUT * bandwidth;
    let high = max + CUT * bandwidth;
    let step = (high - low) / (GRID_POINTS - 1) as f64;
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * PI).sqrt());

    let points = (0..GRID_POINTS)
        .map(|i| {
            let x = low + step * i as f64;
            let density = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect();

    Ok(DensityCurve { bandwidth, points })
}
