//! Actual vs estimated earnings per share

use std::path::Path;

use plotters::prelude::*;

use super::theme::{
    self, axis_desc_style, caption_style, padded_range, palette, tick_label_style, CategoryAxis,
};
use super::render_png;
use crate::analysis::price_range;
use crate::error::Result;
use crate::models::QuarterlyFigures;

const MARKER_SIZE: i32 = 10;
/// Estimates are drawn half transparent so overlapping points show both colors
const ESTIMATE_ALPHA: f64 = 0.5;

pub fn render_eps_scatter(figures: &QuarterlyFigures, path: &Path) -> Result<()> {
    let positions = figures.eps_positions.to_vec();
    let labels: Vec<String> = figures.eps_labels.iter().map(|s| s.to_string()).collect();

    let all_eps: Vec<f64> = figures
        .earnings_actual
        .iter()
        .chain(figures.earnings_estimate.iter())
        .copied()
        .collect();
    let (eps_min, eps_max) = price_range(&all_eps)?;
    let (y_low, y_high) = padded_range(eps_min, eps_max, 0.15);
    let (x_min, x_max) = price_range(&positions)?;

    let actual_color = palette(0);
    let estimate_color = palette(1).mix(ESTIMATE_ALPHA);

    render_png(path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Earnings Per Share in Cents", caption_style())
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(
                CategoryAxis::new((x_min - 0.5)..(x_max + 0.5), positions.clone()),
                y_low..y_high,
            )?;

        let format_tick = |x: &f64| theme::category_label(&positions, &labels, *x);
        chart
            .configure_mesh()
            .bold_line_style(theme::GRID)
            .max_light_lines(0)
            .axis_style(theme::FOREGROUND)
            .label_style(tick_label_style())
            .axis_desc_style(axis_desc_style())
            .x_label_formatter(&format_tick)
            .y_label_formatter(&|y| format!("{:.2}", y))
            .x_desc("Business Quarter")
            .y_desc("EPS")
            .draw()?;

        chart
            .draw_series(
                positions
                    .iter()
                    .zip(figures.earnings_actual.iter())
                    .map(|(&x, &y)| Circle::new((x, y), MARKER_SIZE, actual_color.filled())),
            )?
            .label("Actual")
            .legend(move |(x, y)| Circle::new((x + 7, y), 6, actual_color.filled()));

        chart
            .draw_series(
                positions
                    .iter()
                    .zip(figures.earnings_estimate.iter())
                    .map(|(&x, &y)| Circle::new((x, y), MARKER_SIZE, estimate_color.filled())),
            )?
            .label("Estimate")
            .legend(move |(x, y)| Circle::new((x + 7, y), 6, estimate_color.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(tick_label_style())
            .background_style(theme::BACKGROUND)
            .border_style(theme::FOREGROUND)
            .draw()?;

        Ok(())
    })
}
