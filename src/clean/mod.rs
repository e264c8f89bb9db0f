//! The cleaning pipeline
//!
//! ```text
//! trim whitespace -> drop empty rows -> drop empty columns
//!   -> resolve date columns -> normalize dates -> drop emptied rows/columns
//!   -> drop duplicate rows
//! ```
//!
//! Each step takes the table by value and hands back the next one, so the
//! steps can also be run and inspected one at a time.

mod dates;
mod dedup;
mod empty;
mod whitespace;

use log::debug;
use serde::Serialize;

use crate::dataframe::DataFrame;

pub use self::dates::{
    detect_date_columns, guess_date_columns, normalize_date_cell, normalize_date_series,
    normalize_dates, DEFAULT_DATE_TOKENS,
};
pub use self::dedup::drop_duplicate_rows;
pub use self::empty::{drop_empty, drop_empty_columns, drop_empty_rows};
pub use self::whitespace::trim_whitespace;

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Columns to treat as dates. `None` or an empty list means "guess".
    pub date_columns: Option<Vec<String>>,
    /// Name fragments used when guessing date columns
    pub date_tokens: Vec<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            date_columns: None,
            date_tokens: DEFAULT_DATE_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl CleanOptions {
    pub fn with_date_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_date_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }
}

/// Row/column counts around each stage of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleaningStats {
    original_rows: usize,
    original_cols: usize,
    rows_after_dropna: usize,
    rows_after_dedup: usize,
    final_cols: usize,
    date_cols_used: Vec<String>,
}

impl CleaningStats {
    pub fn original_rows(&self) -> usize {
        self.original_rows
    }

    pub fn original_cols(&self) -> usize {
        self.original_cols
    }

    /// Rows left once empty rows are gone, before duplicates are removed
    pub fn rows_after_dropna(&self) -> usize {
        self.rows_after_dropna
    }

    pub fn rows_after_dedup(&self) -> usize {
        self.rows_after_dedup
    }

    pub fn final_cols(&self) -> usize {
        self.final_cols
    }

    /// Columns given date treatment, explicit names echoed even if absent
    pub fn date_cols_used(&self) -> &[String] {
        &self.date_cols_used
    }
}

/// Clean a table, guessing date columns unless `date_columns` names some
pub fn clean(df: DataFrame, date_columns: Option<&[String]>) -> (DataFrame, CleaningStats) {
    let options = CleanOptions {
        date_columns: date_columns.map(<[String]>::to_vec),
        ..CleanOptions::default()
    };
    clean_with(df, &options)
}

/// Clean a table with explicit options
pub fn clean_with(df: DataFrame, options: &CleanOptions) -> (DataFrame, CleaningStats) {
    let (original_rows, original_cols) = df.shape();
    debug!("cleaning {} rows x {} columns", original_rows, original_cols);

    let df = trim_whitespace(df);
    let df = drop_empty(df);

    let date_cols_used = detect_date_columns(
        &df.column_names(),
        options.date_columns.as_deref(),
        &options.date_tokens,
    );
    debug!("date columns: {:?}", date_cols_used);
    let df = normalize_dates(df, &date_cols_used);

    // Dates that failed to parse are now missing and may have emptied a row
    // or a whole column.
    let df = drop_empty(df);
    let rows_after_dropna = df.row_count();

    let df = drop_duplicate_rows(df);

    let stats = CleaningStats {
        original_rows,
        original_cols,
        rows_after_dropna,
        rows_after_dedup: df.row_count(),
        final_cols: df.column_count(),
        date_cols_used,
    };
    debug!("cleaning finished: {:?}", stats);
    (df, stats)
}
