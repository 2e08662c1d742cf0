//! Individual chart rendering tests

use std::path::Path;

use assert_matches::assert_matches;
use test_log::test;

use stock_profile::charts::{
    render_eps_scatter, render_price_comparison, render_quarter_violins, render_revenue_earnings,
    CHART_SIZE,
};
use stock_profile::loader::load_datasets;
use stock_profile::models::QuarterlyFigures;
use stock_profile::normalizer::normalize_all;
use stock_profile::ProfileError;

use crate::common::fixtures::FixtureDir;
use crate::common::test_data;

/// A chart has the fixed size, a transparent background and something drawn on it
fn assert_transparent_chart(path: &Path) {
    let image = image::open(path).expect("chart decodes as an image").to_rgba8();
    assert_eq!(image.dimensions(), CHART_SIZE);

    let transparent = image.pixels().filter(|p| p.0[3] == 0).count();
    let opaque = image.pixels().filter(|p| p.0[3] == 255).count();
    assert!(transparent > 0, "{} has no transparent pixels", path.display());
    assert!(opaque > 0, "{} has nothing drawn", path.display());
}

#[test]
fn test_render_each_chart() {
    let fixture = FixtureDir::new();
    let mut datasets = load_datasets(&fixture.config).unwrap();
    normalize_all(&mut datasets).unwrap();
    let figures = QuarterlyFigures::netflix_2017();
    let out = fixture.path().join("single");

    render_quarter_violins(&datasets.netflix_daily, &out.join("violin.png")).unwrap();
    render_eps_scatter(&figures, &out.join("scatter.png")).unwrap();
    render_revenue_earnings(&figures, &out.join("bar.png")).unwrap();
    render_price_comparison(&datasets.netflix_monthly, &datasets.dowjones_monthly, &out.join("lines.png"))
        .unwrap();

    for name in ["violin.png", "scatter.png", "bar.png", "lines.png"] {
        assert_transparent_chart(&out.join(name));
    }
}

#[test]
fn test_violin_needs_quarter_column() {
    let fixture = FixtureDir::new();
    let mut datasets = load_datasets(&fixture.config).unwrap();
    normalize_all(&mut datasets).unwrap();

    let path = fixture.path().join("no_quarters.png");
    let err = render_quarter_violins(&datasets.netflix_monthly, &path).unwrap_err();
    assert_matches!(err, ProfileError::ColumnNotFound(name) if name == "Quarter");
    assert!(!path.exists());
}

#[test]
fn test_line_chart_needs_normalized_tables() {
    let fixture = FixtureDir::new();
    let table = test_data::create_test_table(&[1.0, 2.0]);

    let path = fixture.path().join("lines.png");
    let err = render_price_comparison(&table, &table, &path).unwrap_err();
    assert_matches!(err, ProfileError::ColumnNotFound(_));
    assert!(!path.exists());
}
