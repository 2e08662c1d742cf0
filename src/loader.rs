use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{ProfileError, Result};
use crate::models::Config;
use crate::table::{Column, ColumnData, PriceTable};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cell contents Yahoo Finance exports use for a value it does not have
const MISSING_MARKERS: [&str; 2] = ["", "null"];

/// The three exports the stock profile is built from
#[derive(Debug, Clone)]
pub struct Datasets {
    pub netflix_monthly: PriceTable,
    pub dowjones_monthly: PriceTable,
    pub netflix_daily: PriceTable,
}

impl Datasets {
    pub fn tables_mut(&mut self) -> [&mut PriceTable; 3] {
        [
            &mut self.netflix_monthly,
            &mut self.dowjones_monthly,
            &mut self.netflix_daily,
        ]
    }

    pub fn tables(&self) -> [&PriceTable; 3] {
        [&self.netflix_monthly, &self.dowjones_monthly, &self.netflix_daily]
    }
}

/// Load the Netflix monthly, Dow Jones monthly and Netflix daily exports
pub fn load_datasets(config: &Config) -> Result<Datasets> {
    info!("📂 Loading stock exports from {}", config.data_dir.display());

    let datasets = Datasets {
        netflix_monthly: load_table(&config.netflix_monthly_path())?,
        dowjones_monthly: load_table(&config.dowjones_monthly_path())?,
        netflix_daily: load_table(&config.netflix_daily_path())?,
    };

    for table in datasets.tables() {
        info!("✅ Loaded {} ({} rows, {} columns)", table.name(), table.row_count(), table.columns().len());
    }

    Ok(datasets)
}

/// Read a headed CSV export into a table, inferring each column's kind
pub fn load_table(path: &Path) -> Result<PriceTable> {
    if !path.exists() {
        return Err(ProfileError::FileNotFound(path.to_path_buf()));
    }

    let csv_error = |e: csv::Error| ProfileError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        for (values, field) in raw_columns.iter_mut().zip(record.iter()) {
            values.push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, values)| {
            let data = infer_column(&name, values);
            debug!("Column '{}' parsed as {}", name, data.kind());
            Column { name, data }
        })
        .collect();

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    PriceTable::new(name, columns)
}

/// Pick the narrowest kind every value parses as
fn infer_column(name: &str, values: Vec<String>) -> ColumnData {
    if values.is_empty() {
        return if name == "Date" {
            ColumnData::Date(Vec::new())
        } else {
            ColumnData::Number(Vec::new())
        };
    }

    if let Some(dates) = values
        .iter()
        .map(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
        .collect::<Option<Vec<_>>>()
    {
        return ColumnData::Date(dates);
    }

    // Missing cells in a numeric column load as NaN
    if let Some(numbers) = values
        .iter()
        .map(|v| {
            if MISSING_MARKERS.contains(&v.as_str()) {
                Some(f64::NAN)
            } else {
                v.parse::<f64>().ok()
            }
        })
        .collect::<Option<Vec<_>>>()
    {
        return ColumnData::Number(numbers);
    }

    ColumnData::Text(values)
}
