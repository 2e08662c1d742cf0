//! Side-by-side bars: quarterly revenue next to quarterly earnings

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use super::theme::{self, axis_desc_style, caption_style, palette, tick_label_style, CategoryAxis};
use super::render_png;
use crate::error::{ProfileError, Result};
use crate::models::QuarterlyFigures;

const Y_RANGE: (f64, f64) = (0.0, 4.0);

/// Parameters of the side-by-side offset formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Number of datasets drawn next to each other
    pub datasets: usize,
    /// Number of categories (sets of bars)
    pub categories: usize,
    pub width: f64,
}

impl BarLayout {
    pub fn new(datasets: usize, categories: usize, width: f64) -> Self {
        Self { datasets, categories, width }
    }

    pub fn positions(&self, group: usize) -> Vec<f64> {
        bar_positions(group, self.datasets, self.categories, self.width)
    }

    pub fn groups(&self) -> Vec<Vec<f64>> {
        group_positions(self.datasets, self.categories, self.width)
    }
}

/// x position of every bar in group `n` (1-based): `t*i + w*n` for i in 0..d
pub fn bar_positions(n: usize, t: usize, d: usize, w: f64) -> Vec<f64> {
    (0..d).map(|i| (t * i) as f64 + w * n as f64).collect()
}

/// Positions of all `t` groups, group 1 first
pub fn group_positions(t: usize, d: usize, w: f64) -> Vec<Vec<f64>> {
    (1..=t).map(|n| bar_positions(n, t, d, w)).collect()
}

/// Per-category center of the given groups, used as tick positions
pub fn group_midpoints(groups: &[Vec<f64>]) -> Result<Vec<f64>> {
    let Some(first) = groups.first() else {
        return Ok(Vec::new());
    };
    if let Some(ragged) = groups.iter().find(|g| g.len() != first.len()) {
        return Err(ProfileError::invalid_input(format!(
            "bar groups differ in length: {} vs {}",
            first.len(),
            ragged.len()
        )));
    }

    Ok((0..first.len())
        .map(|i| groups.iter().map(|g| g[i]).sum::<f64>() / groups.len() as f64)
        .collect())
}

/// Grouped bar chart of revenue and earnings, billions of dollars
pub fn render_revenue_earnings(figures: &QuarterlyFigures, path: &Path) -> Result<()> {
    let series: [(&str, &[f64]); 2] = [
        ("Revenue", &figures.revenue_by_quarter[..]),
        ("Earnings", &figures.earnings_by_quarter[..]),
    ];
    let layout = BarLayout::new(series.len(), figures.revenue_labels.len(), 0.8);
    let groups = layout.groups();
    let ticks = group_midpoints(&groups)?;
    let labels: Vec<String> = figures.revenue_labels.iter().map(|s| s.to_string()).collect();
    debug!("Bar groups {:?}, ticks {:?}", groups, ticks);

    let x_min = groups.iter().flatten().copied().fold(f64::INFINITY, f64::min) - layout.width;
    let x_max = groups.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max) + layout.width;
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(ProfileError::empty("no bars to draw"));
    }

    render_png(path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Revenue vs Earnings", caption_style())
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(
                CategoryAxis::new(x_min..x_max, ticks.clone()),
                Y_RANGE.0..Y_RANGE.1,
            )?;

        let format_tick = |x: &f64| theme::category_label(&ticks, &labels, *x);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(theme::GRID)
            .max_light_lines(0)
            .axis_style(theme::FOREGROUND)
            .label_style(tick_label_style())
            .axis_desc_style(axis_desc_style())
            .x_label_formatter(&format_tick)
            .x_desc("Business Quarter")
            .y_desc("Billions of Dollars")
            .draw()?;

        let half = layout.width / 2.0;
        for (index, ((label, values), positions)) in series.iter().zip(&groups).enumerate() {
            // Revenue and earnings take the second and third palette colors
            let color = palette(index + 1);
            chart
                .draw_series(positions.iter().zip(values.iter()).map(|(&x, &v)| {
                    Rectangle::new([(x - half, 0.0), (x + half, v)], color.filled())
                }))?
                .label(*label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(tick_label_style())
            .background_style(theme::BACKGROUND)
            .border_style(theme::FOREGROUND)
            .draw()?;

        Ok(())
    })
}
