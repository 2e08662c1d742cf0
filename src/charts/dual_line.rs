//! Netflix against the Dow Jones, one panel each

use std::path::Path;

use plotters::prelude::*;

use super::theme::{
    self, axis_desc_style, padded_range, palette, panel_caption_style, tick_label_style, CategoryAxis,
};
use super::{render_png, Canvas};
use crate::analysis::price_range;
use crate::error::Result;
use crate::normalizer::PRICE_COLUMN;
use crate::table::PriceTable;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Two stacked line charts of monthly `Price`, Netflix on top
pub fn render_price_comparison(netflix: &PriceTable, dowjones: &PriceTable, path: &Path) -> Result<()> {
    let panels = [("Netflix", netflix), ("Dow Jones", dowjones)];
    for (_, table) in &panels {
        // Fail before anything is drawn
        price_range(table.numbers(PRICE_COLUMN)?)?;
    }

    render_png(path, |root| {
        let areas = root.split_evenly((2, 1));
        for (area, (title, table)) in areas.iter().zip(panels.iter()) {
            draw_panel(area, title, table.numbers(PRICE_COLUMN)?)?;
        }
        Ok(())
    })
}

/// One tick per month at its row index
fn month_ticks() -> (Vec<f64>, Vec<String>) {
    let ticks = (0..MONTHS.len()).map(|m| m as f64).collect();
    let labels = MONTHS.iter().map(|m| m.to_string()).collect();
    (ticks, labels)
}

fn draw_panel(area: &Canvas<'_>, title: &str, prices: &[f64]) -> Result<()> {
    let (min, max) = price_range(prices)?;
    let (y_low, y_high) = padded_range(min, max, 0.1);

    let (ticks, labels) = month_ticks();
    let x_high = prices.len().max(MONTHS.len()) as f64 - 0.5;
    let color = palette(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, panel_caption_style())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(CategoryAxis::new(-0.5..x_high, ticks.clone()), y_low..y_high)?;

    let format_tick = |x: &f64| theme::category_label(&ticks, &labels, *x);
    chart
        .configure_mesh()
        .bold_line_style(theme::GRID)
        .max_light_lines(0)
        .axis_style(theme::FOREGROUND)
        .label_style(tick_label_style())
        .axis_desc_style(axis_desc_style())
        .x_labels(MONTHS.len())
        .x_label_formatter(&format_tick)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Date")
        .y_desc("Stock Price")
        .draw()?;

    // Rows are months in file order; missing months leave a gap in the markers only
    let points: Vec<(f64, f64)> = prices
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .map(|(i, &p)| (i as f64, p))
        .collect();
    chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))?;

    Ok(())
}
