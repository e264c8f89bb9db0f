use log::debug;

use crate::dataframe::DataFrame;

/// Remove rows identical to an earlier row across every column
///
/// Missing cells compare equal to each other. The first occurrence is kept and
/// kept rows stay in order.
pub fn drop_duplicate_rows(df: DataFrame) -> DataFrame {
    let before = df.row_count();
    let df = df.drop_duplicates();
    if df.row_count() != before {
        debug!("dropped {} duplicate rows", before - df.row_count());
    }
    df
}
