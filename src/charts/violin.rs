//! Distribution of daily prices per business quarter, drawn as violins

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use super::theme::{
    self, axis_desc_style, caption_style, padded_range, palette, tick_label_style, CategoryAxis,
};
use super::render_png;
use crate::analysis::{gaussian_kde, quantile, DensityCurve};
use crate::error::{ProfileError, Result};
use crate::normalizer::{PRICE_COLUMN, QUARTER_COLUMN};
use crate::table::PriceTable;

/// Half of the widest violin, in category units
const MAX_HALF_WIDTH: f64 = 0.4;
const BOX_HALF_WIDTH: f64 = 0.03;
const WHISKER_IQR: f64 = 1.5;

/// Prices of one quarter with the shape and box statistics drawn for it
#[derive(Debug, Clone)]
pub struct QuarterDistribution {
    pub label: String,
    pub prices: Vec<f64>,
    pub density: DensityCurve,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
}

impl QuarterDistribution {
    fn new(label: String, prices: Vec<f64>) -> Result<Self> {
        let density = gaussian_kde(&prices)?;
        let q1 = quantile(&prices, 0.25)?;
        let median = quantile(&prices, 0.5)?;
        let q3 = quantile(&prices, 0.75)?;

        let reach = (q3 - q1) * WHISKER_IQR;
        let within = |p: &&f64| **p >= q1 - reach && **p <= q3 + reach;
        let whisker_low = prices.iter().filter(within).copied().fold(f64::INFINITY, f64::min);
        let whisker_high = prices.iter().filter(within).copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            label,
            prices,
            density,
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
        })
    }
}

/// Group `Price` by `Quarter`, keeping quarters in order of first appearance
pub fn quarter_distributions(table: &PriceTable) -> Result<Vec<QuarterDistribution>> {
    let prices = table.numbers(PRICE_COLUMN)?;
    let quarters = &table.column(QUARTER_COLUMN)?.data;

    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (row, &price) in prices.iter().enumerate() {
        // Missing prices
        if price.is_nan() {
            continue;
        }
        let label = quarters.display_value(row).unwrap_or_default();
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, values)) => values.push(price),
            None => groups.push((label, vec![price])),
        }
    }
    if groups.is_empty() {
        return Err(ProfileError::empty(format!("table '{}' has no prices", table.name())));
    }

    groups
        .into_iter()
        .map(|(label, values)| QuarterDistribution::new(label, values))
        .collect()
}

pub fn render_quarter_violins(table: &PriceTable, path: &Path) -> Result<()> {
    let distributions = quarter_distributions(table)?;
    let count = distributions.len();
    let positions: Vec<f64> = (0..count).map(|i| i as f64).collect();
    let labels: Vec<String> = distributions.iter().map(|d| d.label.clone()).collect();

    let peak = distributions
        .iter()
        .map(|d| d.density.peak())
        .fold(0.0, f64::max);
    let y_min = distributions
        .iter()
        .flat_map(|d| d.density.points.first().map(|p| p.0))
        .fold(f64::INFINITY, f64::min);
    let y_max = distributions
        .iter()
        .flat_map(|d| d.density.points.last().map(|p| p.0))
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_low, y_high) = padded_range(y_min, y_max, 0.05);
    debug!("Violin peak density {:.5}, price axis {:.2}..{:.2}", peak, y_low, y_high);

    render_png(path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Stock Price Distributions", caption_style())
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(
                CategoryAxis::new(-0.5..(count as f64 - 0.5), positions.clone()),
                y_low..y_high,
            )?;

        let format_tick = |x: &f64| theme::category_label(&positions, &labels, *x);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(theme::GRID)
            .max_light_lines(0)
            .axis_style(theme::FOREGROUND)
            .label_style(tick_label_style())
            .axis_desc_style(axis_desc_style())
            .x_label_formatter(&format_tick)
            .x_desc("Business Quarters in 2017")
            .y_desc("Closing Stock Price")
            .draw()?;

        for (i, quarter) in distributions.iter().enumerate() {
            let center = i as f64;
            let color = palette(i);

            let outline = violin_outline(center, &quarter.density, peak);
            if outline.len() > 2 {
                chart.draw_series(std::iter::once(Polygon::new(outline.clone(), color.filled())))?;
                let mut closed = outline;
                closed.push(closed[0]);
                chart.draw_series(std::iter::once(PathElement::new(closed, theme::FOREGROUND)))?;
            }

            chart.draw_series(std::iter::once(PathElement::new(
                vec![(center, quarter.whisker_low), (center, quarter.whisker_high)],
                theme::FOREGROUND.stroke_width(2),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(center - BOX_HALF_WIDTH, quarter.q1), (center + BOX_HALF_WIDTH, quarter.q3)],
                theme::GRID.filled(),
            )))?;
            chart.draw_series(std::iter::once(Circle::new(
                (center, quarter.median),
                4,
                theme::FOREGROUND.filled(),
            )))?;
        }

        Ok(())
    })
}

/// Mirror a density curve around `center`, scaled so the global peak spans the full width
fn violin_outline(center: f64, density: &DensityCurve, peak: f64) -> Vec<(f64, f64)> {
    if peak <= 0.0 {
        return Vec::new();
    }

    let half_width = |d: f64| d / peak * MAX_HALF_WIDTH;
    let right = density.points.iter().map(|&(y, d)| (center + half_width(d), y));
    let left = density.points.iter().rev().map(|&(y, d)| (center - half_width(d), y));
    right.chain(left).collect()
}
