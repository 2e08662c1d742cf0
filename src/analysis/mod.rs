//! Descriptive statistics over price columns and quarterly figures

pub mod density;
pub mod literacy;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{ProfileError, Result};
use crate::normalizer::{DATE_COLUMN, PRICE_COLUMN};
use crate::table::PriceTable;

pub use density::{gaussian_kde, DensityCurve};
pub use literacy::LiteracyFigures;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub min: f64,
    pub max: f64,
    pub percentile_5: f64,
    pub percentile_95: f64,
    pub data_points: usize,
}

impl PriceSummary {
    /// Summarize the `Price` column of a normalized table
    pub fn from_table(table: &PriceTable) -> Result<Self> {
        let prices = table.numbers(PRICE_COLUMN)?;
        if prices.is_empty() {
            return Err(ProfileError::empty(format!("table '{}' has no rows", table.name())));
        }
        Self::from_values(prices)
    }

    /// Missing (NaN) prices are left out of every figure, including `data_points`
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let (min, max) = price_range(values)?;
        Ok(Self {
            min,
            max,
            percentile_5: quantile(values, 0.05)?,
            percentile_95: quantile(values, 0.95)?,
            data_points: observed(values).len(),
        })
    }
}

/// Values that are present; missing cells load as NaN
pub fn observed(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Smallest and largest value, ignoring missing ones
pub fn price_range(values: &[f64]) -> Result<(f64, f64)> {
    let present = observed(values);
    if present.is_empty() {
        return Err(ProfileError::empty("cannot take the range of an empty series"));
    }

    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

/// Quantile with linear interpolation between ranked values, ignoring missing ones
pub fn quantile(values: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(ProfileError::invalid_input(format!("quantile {} is outside [0, 1]", q)));
    }
    let mut sorted = observed(values);
    if sorted.is_empty() {
        return Err(ProfileError::empty("cannot take a quantile of an empty series"));
    }

    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(quantile_sorted(&sorted, q))
}

/// Same as [`quantile`] for data that is already sorted and non-empty
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Root-mean-square of the paired differences
pub fn rms_deviation(actual: &[f64], estimate: &[f64]) -> Result<f64> {
    if actual.len() != estimate.len() {
        return Err(ProfileError::invalid_input(format!(
            "paired series differ in length ({} vs {})",
            actual.len(),
            estimate.len()
        )));
    }
    if actual.is_empty() {
        return Err(ProfileError::empty("cannot compare empty series"));
    }

    let mean_square = actual
        .iter()
        .zip(estimate)
        .map(|(a, e)| (a - e).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    Ok(mean_square.sqrt())
}

/// Earliest and latest `Date` in a table
pub fn date_range(table: &PriceTable) -> Result<(NaiveDate, NaiveDate)> {
    let dates = table.dates(DATE_COLUMN)?;
    let earliest = dates.iter().min();
    let latest = dates.iter().max();
    match (earliest, latest) {
        (Some(&earliest), Some(&latest)) => Ok((earliest, latest)),
        _ => Err(ProfileError::empty(format!("table '{}' has no dates", table.name()))),
    }
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n - 1 denominator)
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
