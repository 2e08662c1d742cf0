//! `head` previews of a table, formatted with [`tabled`]

use tabled::builder::Builder;

use super::PriceTable;

/// Format the first `rows` rows of a table as an ASCII grid
pub fn head(table: &PriceTable, rows: usize) -> String {
    let shown = rows.min(table.row_count());
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(table.columns().iter().map(|c| c.name.clone()));
    builder.push_record(header);

    for row in 0..shown {
        let mut record = vec![row.to_string()];
        record.extend(
            table
                .columns()
                .iter()
                .map(|c| c.data.display_value(row).unwrap_or_default()),
        );
        builder.push_record(record);
    }

    builder.build().to_string()
}
