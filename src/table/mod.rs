//! Column-oriented in-memory table for stock price exports

mod preview;

use chrono::NaiveDate;

use crate::error::{ProfileError, Result};

pub use preview::head;

/// Typed values of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Date(Vec<NaiveDate>),
    Number(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Date(values) => values.len(),
            ColumnData::Number(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ColumnData::Date(_) => "date",
            ColumnData::Number(_) => "number",
            ColumnData::Text(_) => "text",
        }
    }

    /// Render one cell the way it appeared in the source file
    pub fn display_value(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Date(values) => values.get(row).map(|d| d.format("%Y-%m-%d").to_string()),
            ColumnData::Number(values) => values.get(row).map(|v| v.to_string()),
            ColumnData::Text(values) => values.get(row).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Named columns of equal length, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    name: String,
    columns: Vec<Column>,
    rows: usize,
}

impl PriceTable {
    /// Build a table, rejecting ragged or duplicate columns
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let name = name.into();
        let rows = columns.first().map(|c| c.data.len()).unwrap_or(0);

        for (i, column) in columns.iter().enumerate() {
            if column.data.len() != rows {
                return Err(ProfileError::invalid_input(format!(
                    "column '{}' of table '{}' has {} rows, expected {}",
                    column.name,
                    name,
                    column.data.len(),
                    rows
                )));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(ProfileError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self { name, columns, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ProfileError::column_not_found(name))
    }

    pub fn numbers(&self, name: &str) -> Result<&[f64]> {
        match &self.column(name)?.data {
            ColumnData::Number(values) => Ok(values.as_slice()),
            _ => Err(ProfileError::ColumnType {
                column: name.to_string(),
                expected: "number",
            }),
        }
    }

    pub fn dates(&self, name: &str) -> Result<&[NaiveDate]> {
        match &self.column(name)?.data {
            ColumnData::Date(values) => Ok(values.as_slice()),
            _ => Err(ProfileError::ColumnType {
                column: name.to_string(),
                expected: "date",
            }),
        }
    }

    pub fn texts(&self, name: &str) -> Result<&[String]> {
        match &self.column(name)?.data {
            ColumnData::Text(values) => Ok(values.as_slice()),
            _ => Err(ProfileError::ColumnType {
                column: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Rename a column in place; position, kind and values are untouched
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        let index = self
            .columns
            .iter()
            .position(|c| c.name == from)
            .ok_or_else(|| ProfileError::column_not_found(from))?;
        if from != to && self.has_column(to) {
            return Err(ProfileError::DuplicateColumn(to.to_string()));
        }

        self.columns[index].name = to.to_string();
        Ok(())
    }
}
