//! Shared helpers for building test tables

#![allow(dead_code)]

use claims_cleaner::{Cell, DataFrame, Series, NA};

/// Text column where `None` is the missing marker
pub fn text(name: &str, values: &[Option<&str>]) -> Series {
    let cells: Vec<Cell> = values
        .iter()
        .map(|v| v.map_or(NA::NA, Cell::from))
        .collect();
    Series::new(cells, name)
}

/// Integer column where `None` is the missing marker
pub fn ints(name: &str, values: &[Option<i64>]) -> Series {
    let cells: Vec<Cell> = values
        .iter()
        .map(|v| v.map_or(NA::NA, Cell::from))
        .collect();
    Series::new(cells, name)
}

pub fn frame(columns: Vec<Series>) -> DataFrame {
    DataFrame::from_columns(columns).expect("valid test table")
}

/// Values of a column rendered as text, missing as `None`
pub fn column_text(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.get_column(name)
        .expect("column exists")
        .values()
        .iter()
        .map(|cell| cell.value().map(|v| v.to_string()))
        .collect()
}

pub fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}
