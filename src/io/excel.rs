use std::path::Path;

use calamine::{open_workbook_auto, DataType, Reader};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::{dedupe_column_names, is_na_value};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::na::NA;
use crate::series::{Cell, Scalar, Series};

/// Read one worksheet of a spreadsheet (.xlsx, .xlsm, .xls, .xlsb, .ods)
///
/// # Arguments
///
/// * `path` - Spreadsheet path
/// * `sheet_name` - Worksheet to read. When `None` the first sheet is used
///
/// The first row of the used range is the header. Empty and error cells are
/// missing; numbers, booleans, text and date-times keep their type.
///
/// # Example
///
/// ```no_run
/// use claims_cleaner::io::read_excel;
///
/// let df = read_excel("claims.xlsx", None).unwrap();
/// let df = read_excel("claims.xlsx", Some("March")).unwrap();
/// ```
pub fn read_excel<P: AsRef<Path>>(path: P, sheet_name: Option<&str>) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet_name {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(Error::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| Error::Excel("workbook has no sheets".to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => dedupe_column_names(header_row.iter().map(header_text)),
        None => return Ok(DataFrame::new()),
    };

    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    for row in rows {
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(row.get(i).map_or(NA::NA, convert_cell));
        }
        row_count += 1;
    }

    let mut df = DataFrame::with_row_count(row_count);
    for (name, values) in headers.into_iter().zip(columns) {
        df.add_column(Series::new(harmonize_numbers(values), name))?;
    }
    Ok(df)
}

fn header_text(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty | DataType::Error(_) => NA::NA,
        DataType::String(s) if is_na_value(s) => NA::NA,
        DataType::String(s) => Cell::from(s.clone()),
        DataType::Float(f) if f.is_nan() => NA::NA,
        DataType::Float(f) => Cell::from(*f),
        DataType::Int(i) => Cell::from(*i),
        DataType::Bool(b) => Cell::from(*b),
        DataType::DateTime(serial) => excel_serial_to_cell(*serial),
        DataType::DateTimeIso(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(date_or_datetime)
            .unwrap_or_else(|_| Cell::from(s.clone())),
        other => Cell::from(other.to_string()),
    }
}

/// Spreadsheet serial day number (1900 system) to a date or date-time cell
///
/// The 1900 system counts a 29 February 1900 that never existed (serial 60),
/// so serials before it are one day off from serials after it.
fn excel_serial_to_cell(serial: f64) -> Cell {
    let epoch_day = match serial {
        s if s >= 61.0 => 30,
        s if s >= 60.0 => return NA::NA,
        s if s >= 0.0 => 31,
        _ => return NA::NA,
    };
    let millis = (serial * 86_400_000.0).round() as i64;
    NaiveDate::from_ymd_opt(1899, 12, epoch_day)
        .and_then(|epoch| epoch.and_hms_opt(0, 0, 0))
        .zip(TimeDelta::try_milliseconds(millis))
        .and_then(|(epoch, offset)| epoch.checked_add_signed(offset))
        .map_or(NA::NA, date_or_datetime)
}

fn date_or_datetime(dt: NaiveDateTime) -> Cell {
    if dt.time() == NaiveTime::MIN {
        Cell::from(dt.date())
    } else {
        Cell::from(dt)
    }
}

/// Give a numeric column one number type
///
/// Spreadsheets store every number as a float. A column whose present cells
/// are all whole numbers becomes integers; a column mixing stored integers
/// with fractions becomes floats. Other columns are left alone.
fn harmonize_numbers(values: Vec<Cell>) -> Vec<Cell> {
    let mut any_present = false;
    let mut all_numeric = true;
    let mut all_whole = true;
    for v in values.iter().filter_map(NA::value) {
        any_present = true;
        match v {
            Scalar::Int(_) => {}
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {}
            Scalar::Float(_) => all_whole = false,
            _ => {
                all_numeric = false;
                break;
            }
        }
    }
    if !any_present || !all_numeric {
        return values;
    }

    values
        .into_iter()
        .map(|cell| {
            cell.map(|v| match v {
                Scalar::Float(f) if all_whole => Scalar::Int(f as i64),
                Scalar::Int(i) if !all_whole => Scalar::Float(i as f64),
                other => other,
            })
        })
        .collect()
}
