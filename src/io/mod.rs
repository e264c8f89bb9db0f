pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::info;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

// Re-export commonly used functions
pub use self::csv::{read_csv, read_csv_from_reader, write_csv, write_csv_to_writer};
#[cfg(feature = "excel")]
pub use self::excel::read_excel;

/// Field texts read as missing cells
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_na_value(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

/// Source formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Excel,
}

impl TableFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(TableFormat::Excel),
            _ => Err(Error::UnsupportedFormat(format!(".{}", ext))),
        }
    }
}

/// Load a table from a CSV or spreadsheet file
///
/// `sheet` selects a worksheet by name and is ignored for CSV input; the first
/// sheet is used when it is `None`.
pub fn read_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let df = match TableFormat::from_path(path)? {
        TableFormat::Csv => read_csv(path)?,
        TableFormat::Excel => read_spreadsheet(path, sheet)?,
    };
    info!(
        "loaded {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        path.display()
    );
    Ok(df)
}

#[cfg(feature = "excel")]
fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<DataFrame> {
    read_excel(path, sheet)
}

#[cfg(not(feature = "excel"))]
fn read_spreadsheet(path: &Path, _sheet: Option<&str>) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    Err(Error::UnsupportedFormat(format!(
        ".{} (built without the `excel` feature)",
        ext
    )))
}

/// Where the cleaned CSV goes: `out` if given, else `cleaned_<stem>.csv`
/// beside the input
pub fn output_path(input: &Path, out: Option<&Path>) -> PathBuf {
    match out {
        Some(out) => out.to_path_buf(),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            input.with_file_name(format!("cleaned_{}.csv", stem))
        }
    }
}

/// Make header names usable as unique column names
///
/// Blank names become `Unnamed: <position>`; repeats get `.1`, `.2`, ...
/// appended until they no longer clash.
pub fn dedupe_column_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for (pos, name) in names.into_iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {}", pos)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        seen.insert(candidate.clone());
        result.push(candidate);
    }

    result
}
