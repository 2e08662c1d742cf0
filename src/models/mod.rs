use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::{LiteracyFigures, PriceSummary};

/// Configuration for the stock profile run
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub netflix_monthly_file: String,
    pub dowjones_monthly_file: String,
    pub netflix_daily_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            netflix_monthly_file: "NFLX.csv".to_string(),
            dowjones_monthly_file: "DJI.csv".to_string(),
            netflix_daily_file: "NFLX_daily_by_quarter.csv".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Config::default();
        Ok(Config {
            data_dir: std::env::var("STOCK_PROFILE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            output_dir: std::env::var("STOCK_PROFILE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            netflix_monthly_file: std::env::var("NETFLIX_MONTHLY_CSV")
                .unwrap_or(defaults.netflix_monthly_file),
            dowjones_monthly_file: std::env::var("DOWJONES_MONTHLY_CSV")
                .unwrap_or(defaults.dowjones_monthly_file),
            netflix_daily_file: std::env::var("NETFLIX_DAILY_CSV")
                .unwrap_or(defaults.netflix_daily_file),
        })
    }

    /// Read inputs from and write charts to the same directory
    pub fn with_dirs(data_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Config::default()
        }
    }

    pub fn netflix_monthly_path(&self) -> PathBuf {
        self.data_dir.join(&self.netflix_monthly_file)
    }

    pub fn dowjones_monthly_path(&self) -> PathBuf {
        self.data_dir.join(&self.dowjones_monthly_file)
    }

    pub fn netflix_daily_path(&self) -> PathBuf {
        self.data_dir.join(&self.netflix_daily_file)
    }

    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Quarterly earnings figures reported by Netflix.
///
/// These are literal values, not derived from the price exports.
#[derive(Debug, Clone, Serialize)]
pub struct QuarterlyFigures {
    pub eps_positions: [f64; 4],
    pub eps_labels: [&'static str; 4],
    /// Earnings per share, in cents
    pub earnings_actual: [f64; 4],
    pub earnings_estimate: [f64; 4],
    pub revenue_labels: [&'static str; 4],
    /// Billions of dollars
    pub revenue_by_quarter: [f64; 4],
    pub earnings_by_quarter: [f64; 4],
}

impl QuarterlyFigures {
    pub fn netflix_2017() -> Self {
        Self {
            eps_positions: [1.0, 2.0, 3.0, 4.0],
            eps_labels: ["1Q 2017", "2Q 2017", "3Q 2017", "4Q 2017"],
            earnings_actual: [0.4, 0.15, 0.29, 0.41],
            earnings_estimate: [0.37, 0.15, 0.32, 0.41],
            revenue_labels: ["2Q 2017", "3Q 2017", "4Q 2017", "1Q 2018"],
            revenue_by_quarter: [2.79, 2.98, 3.29, 3.7],
            earnings_by_quarter: [0.0656, 0.12959, 0.18552, 0.29012],
        }
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub earliest_date: NaiveDate,
    pub latest_date: NaiveDate,
    pub price_summary: PriceSummary,
    pub eps_rms_deviation: f64,
    pub literacy: LiteracyFigures,
    pub charts: Vec<PathBuf>,
    pub lines: Vec<String>,
}
