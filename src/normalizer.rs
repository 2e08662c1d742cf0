//! Column renames applied once after loading

use tracing::info;

use crate::error::Result;
use crate::loader::Datasets;
use crate::table::PriceTable;

/// Yahoo's name for the close adjusted for dividends and splits
pub const ADJ_CLOSE_COLUMN: &str = "Adj Close";
pub const PRICE_COLUMN: &str = "Price";
pub const DATE_COLUMN: &str = "Date";
pub const QUARTER_COLUMN: &str = "Quarter";

/// Rename `Adj Close` to `Price` in place
pub fn normalize(table: &mut PriceTable) -> Result<()> {
    table.rename_column(ADJ_CLOSE_COLUMN, PRICE_COLUMN)?;
    info!("🏷️  {}: renamed '{}' to '{}'", table.name(), ADJ_CLOSE_COLUMN, PRICE_COLUMN);
    Ok(())
}

pub fn normalize_all(datasets: &mut Datasets) -> Result<()> {
    for table in datasets.tables_mut() {
        normalize(table)?;
    }
    Ok(())
}
