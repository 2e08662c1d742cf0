//! Price statistics and EPS deviation tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use stock_profile::analysis::{date_range, quantile, rms_deviation, PriceSummary};
use stock_profile::loader::load_table;
use stock_profile::models::QuarterlyFigures;
use stock_profile::normalizer::normalize;
use stock_profile::ProfileError;

use crate::common::{logging, test_data};

#[test]
fn test_eps_rms_deviation() {
    let figures = QuarterlyFigures::netflix_2017();
    let rms = rms_deviation(&figures.earnings_actual, &figures.earnings_estimate).unwrap();

    logging::log_test_data("EPS RMS deviation", &rms);
    assert!((rms - 0.00045_f64.sqrt()).abs() < 1e-9, "rms was {}", rms);
    assert!((rms - 0.02121).abs() < 1e-5);
}

#[test]
fn test_identical_series_have_zero_deviation() {
    assert_eq!(rms_deviation(&[0.15, 0.41], &[0.15, 0.41]).unwrap(), 0.0);
}

#[test]
fn test_summary_matches_extremes() {
    let prices = [140.71, 127.49, 196.43, 151.0, 180.25];
    let mut table = test_data::create_test_table(&prices);
    normalize(&mut table).unwrap();

    let summary = PriceSummary::from_table(&table).unwrap();
    assert_eq!(summary.min, 127.49);
    assert_eq!(summary.max, 196.43);
    assert_eq!(summary.data_points, 5);
    assert!(summary.min <= summary.percentile_5);
    assert!(summary.percentile_5 <= summary.percentile_95);
    assert!(summary.percentile_95 <= summary.max);
}

#[test]
fn test_quantiles_are_monotonic_and_bounded() {
    let prices: Vec<f64> = (0..97).map(|i| 130.0 + ((i * 37) % 61) as f64 * 1.1).collect();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut previous = f64::NEG_INFINITY;
    for step in 0..=20 {
        let q = step as f64 / 20.0;
        let value = quantile(&prices, q).unwrap();
        assert!(value >= previous, "quantile({}) = {} < {}", q, value, previous);
        assert!(value >= min && value <= max);
        previous = value;
    }
}

#[test]
fn test_summary_requires_rows() {
    let mut table = test_data::create_test_table(&[]);
    normalize(&mut table).unwrap();

    assert_matches!(PriceSummary::from_table(&table), Err(ProfileError::EmptyData(_)));
    assert_matches!(date_range(&table), Err(ProfileError::EmptyData(_)));
}

#[test]
fn test_summary_requires_price_column() {
    let table = test_data::create_test_table(&[1.0, 2.0]);
    assert_matches!(
        PriceSummary::from_table(&table),
        Err(ProfileError::ColumnNotFound(name)) if name == "Price"
    );
}

#[test]
fn test_date_range() {
    let table = test_data::create_test_table(&[1.0, 2.0, 3.0]);
    let (earliest, latest) = date_range(&table).unwrap();
    assert_eq!(earliest.to_string(), "2017-01-03");
    assert_eq!(latest.to_string(), "2017-01-05");
}

#[test]
fn test_null_row_in_export_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NFLX.csv");
    std::fs::write(
        &path,
        "Date,Open,High,Low,Close,Adj Close,Volume\n\
         2017-01-03,124.96,128.19,124.31,127.49,127.49,9437900\n\
         2017-01-04,null,null,null,null,null,null\n\
         2017-01-05,129.22,132.75,128.90,131.81,131.81,10185500\n",
    )
    .unwrap();

    let mut table = load_table(&path).unwrap();
    normalize(&mut table).unwrap();
    let summary = PriceSummary::from_table(&table).unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(summary.min, 127.49);
    assert_eq!(summary.max, 131.81);
    assert_eq!(summary.data_points, 2);
}

#[test]
fn test_nan_cell_keeps_percentiles_within_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gaps.csv");
    std::fs::write(&path, "Date,Adj Close\n2017-01-03,1.5\n2017-01-04,NaN\n2017-01-05,2.5\n").unwrap();

    let mut table = load_table(&path).unwrap();
    normalize(&mut table).unwrap();
    let summary = PriceSummary::from_table(&table).unwrap();

    assert_eq!(summary.min, 1.5);
    assert_eq!(summary.max, 2.5);
    assert!(summary.percentile_5 >= summary.min && summary.percentile_5 <= summary.max);
    assert!(summary.percentile_95 >= summary.min && summary.percentile_95 <= summary.max);
}
