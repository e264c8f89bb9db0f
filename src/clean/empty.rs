use log::debug;

use crate::dataframe::DataFrame;

/// Remove rows whose every cell is missing, then columns whose every cell is
/// missing among the rows that are left
///
/// Empty strings, zeros and `false` are values, not missing cells.
pub fn drop_empty(df: DataFrame) -> DataFrame {
    let df = drop_empty_rows(df);
    drop_empty_columns(df)
}

pub fn drop_empty_rows(df: DataFrame) -> DataFrame {
    let before = df.row_count();
    let df = df.dropna_rows();
    if df.row_count() != before {
        debug!("dropped {} empty rows", before - df.row_count());
    }
    df
}

pub fn drop_empty_columns(df: DataFrame) -> DataFrame {
    let before = df.column_count();
    let df = df.dropna_columns();
    if df.column_count() != before {
        debug!("dropped {} empty columns", before - df.column_count());
    }
    df
}
