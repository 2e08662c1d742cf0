//! CSV fixtures shaped like the 2017 Yahoo Finance exports

use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use stock_profile::models::Config;
use tempfile::TempDir;

pub const MONTHLY_HEADER: [&str; 7] = ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// Netflix monthly adjusted closes for 2017
pub const NETFLIX_MONTHLY: [f64; 12] = [
    140.71, 142.13, 147.81, 152.20, 163.07, 149.41, 181.66, 174.71, 181.35, 196.43, 195.51, 191.96,
];

/// Dow Jones monthly closes for 2017
pub const DOWJONES_MONTHLY: [f64; 12] = [
    19864.09, 20812.24, 20663.22, 20940.51, 21008.65, 21349.63, 21891.12, 21948.10, 22405.09,
    23377.24, 24272.35, 24719.22,
];

/// A temporary directory holding all three exports
pub struct FixtureDir {
    pub dir: TempDir,
    pub config: Config,
}

impl FixtureDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = Config::with_dirs(dir.path(), dir.path().join("charts"));

        write_monthly(&config.netflix_monthly_path(), &NETFLIX_MONTHLY);
        write_monthly(&config.dowjones_monthly_path(), &DOWJONES_MONTHLY);
        write_daily(&config.netflix_daily_path(), &daily_prices());

        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Weekday rows of 2017 with a deterministic price that drifts upward
pub fn daily_prices() -> Vec<(NaiveDate, f64)> {
    let mut date = NaiveDate::from_ymd_opt(2017, 1, 3).unwrap();
    let end = NaiveDate::from_ymd_opt(2017, 12, 29).unwrap();
    let mut rows = Vec::new();
    let mut i = 0.0_f64;
    while date <= end {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let price = 127.49 + i * 0.26 + (i * 0.3).sin() * 4.0;
            rows.push((date, price));
            i += 1.0;
        }
        date = date.succ_opt().unwrap();
    }
    rows
}

/// The value the loader reads back for a price written by these fixtures
pub fn as_written(price: f64) -> f64 {
    format!("{:.6}", price).parse().unwrap()
}

pub fn quarter_label(date: NaiveDate) -> String {
    format!("Q{}", date.month0() / 3 + 1)
}

pub fn write_monthly(path: &Path, closes: &[f64]) {
    let mut writer = csv::Writer::from_path(path).expect("failed to create fixture");
    writer.write_record(MONTHLY_HEADER).unwrap();
    for (month, close) in closes.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2017, month as u32 + 1, 1).unwrap();
        writer
            .write_record(price_row(date, *close, 4_000_000 + month as u64 * 10_000))
            .unwrap();
    }
    writer.flush().unwrap();
}

pub fn write_daily(path: &Path, rows: &[(NaiveDate, f64)]) {
    let mut writer = csv::Writer::from_path(path).expect("failed to create fixture");
    let mut header: Vec<&str> = MONTHLY_HEADER.to_vec();
    header.push("Quarter");
    writer.write_record(&header).unwrap();
    for (i, (date, close)) in rows.iter().enumerate() {
        let mut record = price_row(*date, *close, 5_000_000 + i as u64 * 100);
        record.push(quarter_label(*date));
        writer.write_record(&record).unwrap();
    }
    writer.flush().unwrap();
}

fn price_row(date: NaiveDate, close: f64, volume: u64) -> Vec<String> {
    vec![
        date.format("%Y-%m-%d").to_string(),
        format!("{:.6}", close - 1.0),
        format!("{:.6}", close + 2.0),
        format!("{:.6}", close - 2.5),
        format!("{:.6}", close),
        format!("{:.6}", close),
        volume.to_string(),
    ]
}
