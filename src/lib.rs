//! # Stock Profile
//!
//! Summary statistics and charts for Netflix's 2017 stock, compared against the
//! Dow Jones Industrial Average, built from Yahoo Finance CSV exports.
//!
//! ```rust,no_run
//! use stock_profile::prelude::*;
//!
//! let config = Config::with_dirs("data", "charts");
//! let report = run(&config).unwrap();
//! for line in &report.lines {
//!     println!("{}", line);
//! }
//! ```

pub mod analysis;
pub mod charts;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod table;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::analysis::{
        date_range, gaussian_kde, price_range, quantile, rms_deviation, LiteracyFigures,
        PriceSummary,
    };
    pub use crate::charts::{bar_positions, group_midpoints, group_positions, BarLayout};
    pub use crate::error::{ProfileError, Result};
    pub use crate::loader::{load_datasets, load_table, Datasets};
    pub use crate::models::{Config, QuarterlyFigures, Report};
    pub use crate::normalizer::{normalize, normalize_all, ADJ_CLOSE_COLUMN, PRICE_COLUMN};
    pub use crate::pipeline::run;
    pub use crate::table::{Column, ColumnData, PriceTable};
}

pub use crate::error::{ProfileError, Result};
