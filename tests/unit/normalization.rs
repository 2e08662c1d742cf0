//! Column rename tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use stock_profile::loader::load_datasets;
use stock_profile::normalizer::{normalize, normalize_all, ADJ_CLOSE_COLUMN, PRICE_COLUMN};
use stock_profile::ProfileError;

use crate::common::fixtures::FixtureDir;
use crate::common::{logging, test_data};

#[test]
fn test_adj_close_becomes_price_in_row_order() {
    let prices = [127.49, 140.71, 133.29, 190.12];
    let mut table = test_data::create_test_table(&prices);

    normalize(&mut table).unwrap();

    assert!(!table.has_column(ADJ_CLOSE_COLUMN));
    assert_eq!(table.numbers(PRICE_COLUMN).unwrap(), &prices);
    assert_eq!(table.column_names(), vec!["Date", "Close", "Price", "Volume"]);
}

#[test]
fn test_second_normalization_fails() {
    let mut table = test_data::create_test_table(&[1.0, 2.0]);
    normalize(&mut table).unwrap();

    let err = normalize(&mut table).unwrap_err();
    assert_matches!(err, ProfileError::ColumnNotFound(name) if name == ADJ_CLOSE_COLUMN);
}

#[test]
fn test_normalize_all_loaded_tables() {
    logging::log_test_step("Normalizing the three fixture exports");
    let fixture = FixtureDir::new();
    let mut datasets = load_datasets(&fixture.config).unwrap();
    let daily_before = datasets.netflix_daily.numbers(ADJ_CLOSE_COLUMN).unwrap().to_vec();

    normalize_all(&mut datasets).unwrap();

    for table in datasets.tables() {
        assert!(table.has_column(PRICE_COLUMN), "{} has no Price", table.name());
        assert!(!table.has_column(ADJ_CLOSE_COLUMN));
    }
    assert_eq!(datasets.netflix_daily.numbers(PRICE_COLUMN).unwrap(), daily_before.as_slice());
}
