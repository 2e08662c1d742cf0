//! Supporting figures for reading the charts: margins and growth over 2017

use serde::Serialize;

use super::{mean, observed};
use crate::error::{ProfileError, Result};
use crate::models::QuarterlyFigures;
use crate::normalizer::PRICE_COLUMN;
use crate::table::PriceTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteracyFigures {
    /// Earnings as a percentage of revenue, per quarter
    pub profit_margins: Vec<f64>,
    pub revenue_growth: f64,
    pub earnings_growth: f64,
    pub netflix_price_growth: f64,
    pub dowjones_price_growth: f64,
    /// Mean Netflix price as a percentage of the mean Dow Jones level
    pub netflix_to_dowjones_mean: f64,
}

impl LiteracyFigures {
    pub fn compute(
        figures: &QuarterlyFigures,
        netflix_monthly: &PriceTable,
        dowjones_monthly: &PriceTable,
    ) -> Result<Self> {
        let netflix = netflix_monthly.numbers(PRICE_COLUMN)?;
        let dowjones = dowjones_monthly.numbers(PRICE_COLUMN)?;

        Ok(Self {
            profit_margins: profit_margins(&figures.revenue_by_quarter, &figures.earnings_by_quarter)?,
            revenue_growth: series_growth(&figures.revenue_by_quarter)?,
            earnings_growth: series_growth(&figures.earnings_by_quarter)?,
            netflix_price_growth: series_growth(netflix)?,
            dowjones_price_growth: series_growth(dowjones)?,
            netflix_to_dowjones_mean: relative_mean_percent(netflix, dowjones)?,
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let margins = self
            .profit_margins
            .iter()
            .map(|m| format!("{:.2}%", m))
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            format!("Earnings as a share of revenue per quarter: {}", margins),
            format!("Revenue grew by {:.2}%", self.revenue_growth),
            format!("Earnings grew by {:.2}%", self.earnings_growth),
            format!("The Netflix stock price changed by {:.2}%", self.netflix_price_growth),
            format!("The Dow Jones changed by {:.2}%", self.dowjones_price_growth),
            format!(
                "The mean Netflix price is {:.2}% of the mean Dow Jones level",
                self.netflix_to_dowjones_mean
            ),
        ]
    }
}

/// `earnings * 100 / revenue` for each quarter
pub fn profit_margins(revenue: &[f64], earnings: &[f64]) -> Result<Vec<f64>> {
    if revenue.len() != earnings.len() {
        return Err(ProfileError::invalid_input(format!(
            "revenue has {} quarters but earnings has {}",
            revenue.len(),
            earnings.len()
        )));
    }

    revenue
        .iter()
        .zip(earnings)
        .map(|(&r, &e)| {
            if r == 0.0 {
                Err(ProfileError::invalid_input("revenue of zero has no margin"))
            } else {
                Ok(e * 100.0 / r)
            }
        })
        .collect()
}

pub fn percent_change(first: f64, last: f64) -> Result<f64> {
    if first == 0.0 {
        return Err(ProfileError::invalid_input("percent change from zero is undefined"));
    }
    Ok(last * 100.0 / first - 100.0)
}

/// Percent change from the first present value of a series to its last
pub fn series_growth(values: &[f64]) -> Result<f64> {
    let present = observed(values);
    match (present.first(), present.last()) {
        (Some(&first), Some(&last)) => percent_change(first, last),
        _ => Err(ProfileError::empty("cannot measure growth of an empty series")),
    }
}

pub fn relative_mean_percent(numerator: &[f64], denominator: &[f64]) -> Result<f64> {
    let (Some(top), Some(bottom)) = (mean(&observed(numerator)), mean(&observed(denominator))) else {
        return Err(ProfileError::empty("cannot compare means of empty series"));
    };
    if bottom == 0.0 {
        return Err(ProfileError::invalid_input("reference mean is zero"));
    }
    Ok(top * 100.0 / bottom)
}
