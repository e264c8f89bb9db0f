use std::collections::HashSet;

use log::{debug, warn};

use crate::dataframe::DataFrame;
use crate::na::NA;
use crate::series::{Cell, Series};
use crate::temporal::{format_iso, parse_date};

/// Name fragments that mark a column as holding dates
///
/// Matching is a plain substring test on the lowercased name, so "dt" also
/// hits names such as `Width` or `AmtDtl`. That over-match is kept as is.
pub const DEFAULT_DATE_TOKENS: &[&str] = &["date", "dob", "dos", "dt"];

/// Columns whose lowercased name contains any of `tokens`, in column order
pub fn guess_date_columns<C, T>(columns: &[C], tokens: &[T]) -> Vec<String>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
    columns
        .iter()
        .map(|c| c.as_ref())
        .filter(|name| {
            let lowered = name.to_lowercase();
            tokens.iter().any(|tok| lowered.contains(tok.as_str()))
        })
        .map(str::to_string)
        .collect()
}

/// Decide which columns get date treatment
///
/// A non-empty explicit list is used verbatim, including names the table does
/// not have. Otherwise the names are guessed from `columns` with `tokens`.
pub fn detect_date_columns<C, T>(
    columns: &[C],
    explicit: Option<&[String]>,
    tokens: &[T],
) -> Vec<String>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    match explicit {
        Some(names) if !names.is_empty() => names.to_vec(),
        _ => guess_date_columns(columns, tokens),
    }
}

/// Rewrite every listed column that exists as ISO dates
///
/// Unknown names are skipped. Cells that do not read as a date become missing.
pub fn normalize_dates(df: DataFrame, date_columns: &[String]) -> DataFrame {
    for name in date_columns {
        if !df.contains_column(name) {
            warn!("date column '{}' not found; skipped", name);
        }
    }

    let targets: HashSet<&str> = date_columns.iter().map(String::as_str).collect();
    df.map_columns(|series| {
        if targets.contains(series.name()) {
            normalize_date_series(series)
        } else {
            series
        }
    })
}

pub fn normalize_date_series(series: Series) -> Series {
    let name = series.name().to_string();
    let mut coerced = 0usize;
    let values: Vec<Cell> = series
        .into_values()
        .into_iter()
        .map(|cell| {
            let normalized = normalize_date_cell(&cell);
            if cell.is_value() && normalized.is_na() {
                coerced += 1;
            }
            normalized
        })
        .collect();

    if coerced > 0 {
        debug!(
            "column '{}': {} of {} values were not dates and are now missing",
            name,
            coerced,
            values.len()
        );
    }
    Series::new(values, name)
}

/// One cell to `YYYY-MM-DD` text, or missing when it is not a date
pub fn normalize_date_cell(cell: &Cell) -> Cell {
    match parse_date(cell) {
        Ok(date) => Cell::from(format_iso(date)),
        Err(_) => NA::NA,
    }
}
