//! Error types for the stock profile pipeline

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{column}' is not a {expected} column")]
    ColumnType { column: String, expected: &'static str },

    #[error("Column already exists: {0}")]
    DuplicateColumn(String),

    #[error("CSV error in {}: {message}", .path.display())]
    Csv { path: PathBuf, message: String },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ProfileError>;

impl ProfileError {
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound(name.into())
    }

    pub fn empty(msg: impl Into<String>) -> Self {
        Self::EmptyData(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ProfileError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Chart(e.to_string())
    }
}
