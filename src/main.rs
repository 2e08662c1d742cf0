use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stock_profile::models::Config;
use stock_profile::pipeline;

/// Netflix 2017 stock profile
#[derive(Parser)]
#[command(name = "stock-profile")]
#[command(version = "0.1.0")]
#[command(about = "Price statistics and charts for Netflix's 2017 stock against the Dow Jones")]
#[command(long_about = "
Reads NFLX.csv, DJI.csv and NFLX_daily_by_quarter.csv (Yahoo Finance exports),
renames 'Adj Close' to 'Price', prints the date range, price range, 5th/95th
percentiles and the RMS deviation of actual vs estimated EPS, and writes four
transparent PNG charts (netflix1.png .. netflix4.png).

Directories default to STOCK_PROFILE_DATA_DIR / STOCK_PROFILE_OUTPUT_DIR (a .env
file is honoured), then to the current directory.

Examples:
  cargo run                                   # read and write in the current directory
  cargo run -- --data-dir data --output-dir charts
  cargo run -- --literacy --json
")]
struct Args {
    /// Directory holding the three CSV exports
    #[arg(long, short = 'd')]
    data_dir: Option<PathBuf>,

    /// Directory the charts are written to
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Print the report as JSON instead of text lines
    #[arg(long)]
    json: bool,

    /// Also print margins and growth figures for the charts
    #[arg(long)]
    literacy: bool,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stock_profile=info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let args = Args::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    info!("🚀 Building the 2017 stock profile");
    let report = match pipeline::run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Stock profile failed: {}", e);
            return Err(e).context("stock profile run failed");
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for line in &report.lines {
        println!("{}", line);
    }
    if args.literacy {
        println!();
        for line in report.literacy.lines() {
            println!("{}", line);
        }
    }

    info!("🎉 Stock profile completed");
    Ok(())
}
