//! Load, normalize, summarize and chart the 2017 stock profile

use tracing::info;

use crate::analysis::{date_range, rms_deviation, LiteracyFigures, PriceSummary};
use crate::charts::{self, BAR_FILE, DUAL_LINE_FILE, SCATTER_FILE, VIOLIN_FILE};
use crate::error::Result;
use crate::loader::{load_datasets, Datasets};
use crate::models::{Config, QuarterlyFigures, Report};
use crate::normalizer::normalize_all;
use crate::table;

const PREVIEW_ROWS: usize = 5;

/// Run the whole profile once: every step must succeed for a report to come back
pub fn run(config: &Config) -> Result<Report> {
    run_with_figures(config, &QuarterlyFigures::netflix_2017())
}

pub fn run_with_figures(config: &Config, figures: &QuarterlyFigures) -> Result<Report> {
    let mut datasets = load_datasets(config)?;
    normalize_all(&mut datasets)?;
    log_previews(&datasets);

    let (earliest_date, latest_date) = date_range(&datasets.netflix_daily)?;
    let price_summary = PriceSummary::from_table(&datasets.netflix_daily)?;
    let eps_rms_deviation = rms_deviation(&figures.earnings_actual, &figures.earnings_estimate)?;
    let literacy = LiteracyFigures::compute(figures, &datasets.netflix_monthly, &datasets.dowjones_monthly)?;
    info!("📊 Statistics computed over {} daily prices", price_summary.data_points);

    let charts = vec![
        config.chart_path(VIOLIN_FILE),
        config.chart_path(SCATTER_FILE),
        config.chart_path(BAR_FILE),
        config.chart_path(DUAL_LINE_FILE),
    ];
    charts::render_quarter_violins(&datasets.netflix_daily, &charts[0])?;
    charts::render_eps_scatter(figures, &charts[1])?;
    charts::render_revenue_earnings(figures, &charts[2])?;
    charts::render_price_comparison(&datasets.netflix_monthly, &datasets.dowjones_monthly, &charts[3])?;

    let lines = vec![
        format!(
            "The earliest date in the dataset is {}, the latest date in the dataset is {}.",
            earliest_date, latest_date
        ),
        format!(
            "The lowest and highest prices in {} were {} and {}, respectively.",
            earliest_date.format("%Y"),
            price_summary.min,
            price_summary.max
        ),
        format!("5th percentile of prices: {}", price_summary.percentile_5),
        format!("95th percentile of prices: {}", price_summary.percentile_95),
        format!("RMS deviation of actual vs estimated EPS: {}", eps_rms_deviation),
        format!("Saved {} charts to {}", charts.len(), config.output_dir.display()),
    ];

    Ok(Report {
        earliest_date,
        latest_date,
        price_summary,
        eps_rms_deviation,
        literacy,
        charts,
        lines,
    })
}

fn log_previews(datasets: &Datasets) {
    for dataset in datasets.tables() {
        info!("🔎 {}:\n{}", dataset.name(), table::head(dataset, PREVIEW_ROWS));
    }
}
