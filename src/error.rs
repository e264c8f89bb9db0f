use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading, building and writing tables
///
/// The cleaning pipeline itself never returns these; they come from the
/// loader, the writer and table construction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: {0}. Use CSV or XLSX.")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "excel")]
impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Excel(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
