use csv::{ReaderBuilder, Trim, Writer};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use super::{dedupe_column_names, is_na_value};
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::na::NA;
use crate::series::{Cell, Series};

/// Read a comma-delimited file with a header row
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    read_csv_from_reader(file)
}

/// Read comma-delimited text with a header row from any reader
///
/// Fields are not trimmed here. Short records are padded with missing cells;
/// fields past the header width are ignored.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let headers = dedupe_column_names(rdr.headers()?.iter().map(str::to_string));

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    let mut overlong = 0usize;

    for result in rdr.records() {
        let record = result?;
        if record.len() > headers.len() {
            overlong += 1;
        }
        for (i, column) in raw.iter_mut().enumerate() {
            let field = record.get(i).filter(|f| !is_na_value(f));
            column.push(field.map(str::to_string));
        }
        row_count += 1;
    }

    if overlong > 0 {
        warn!(
            "{} records had more fields than the header; extra fields were ignored",
            overlong
        );
    }

    let mut df = DataFrame::with_row_count(row_count);
    for (name, values) in headers.into_iter().zip(raw) {
        df.add_column(infer_series(name, values))?;
    }
    Ok(df)
}

/// Type a whole column from its text
///
/// All integers gives an integer column, else all numbers a float column, else
/// all `true`/`false` a boolean column; anything else stays text, untouched.
/// Missing cells do not take part in the decision.
fn infer_series(name: String, values: Vec<Option<String>>) -> Series {
    let present = || values.iter().flatten().map(|s| s.trim());

    if present().next().is_none() {
        return Series::new(vec![NA::NA; values.len()], name);
    }

    let cells: Vec<Cell> = if present().all(|s| s.parse::<i64>().is_ok()) {
        convert(&values, |s| s.trim().parse::<i64>().ok().map(Cell::from))
    } else if present().all(|s| s.parse::<f64>().is_ok()) {
        convert(&values, |s| s.trim().parse::<f64>().ok().map(Cell::from))
    } else if present().all(|s| parse_bool(s).is_some()) {
        convert(&values, |s| parse_bool(s.trim()).map(Cell::from))
    } else {
        convert(&values, |s| Some(Cell::from(s)))
    };

    Series::new(cells, name)
}

fn convert<F>(values: &[Option<String>], f: F) -> Vec<Cell>
where
    F: Fn(&str) -> Option<Cell>,
{
    values
        .iter()
        .map(|v| v.as_deref().and_then(&f).unwrap_or(NA::NA))
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

/// Write a DataFrame as CSV: header first, missing cells empty
///
/// The output is staged in a temporary file next to `path` and renamed into
/// place only after everything was written, so a failure never leaves a
/// truncated file behind. Missing parent directories are created.
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    write_csv_to_writer(df, &mut staged)?;
    staged.as_file().sync_all()?;
    staged.persist(path)?;

    info!(
        "wrote {} rows x {} columns to {}",
        df.row_count(),
        df.column_count(),
        path.display()
    );
    Ok(())
}

/// Write a DataFrame as CSV to any writer
pub fn write_csv_to_writer<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    // A table without columns has nothing to put in a header
    if df.column_count() > 0 {
        wtr.write_record(df.column_names())?;
        for row in df.rows() {
            wtr.write_record(row.iter().map(|cell| render_cell(cell)))?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        NA::Value(v) => v.to_string(),
        NA::NA => String::new(),
    }
}
