use log::warn;

use crate::dataframe::DataFrame;
use crate::series::{Scalar, Series};

/// Strip leading/trailing whitespace from column names and string cells
///
/// Numbers, booleans, dates and missing cells pass through untouched. When two
/// columns trim to the same name the later column wins: its cells replace the
/// earlier column's cells at the earlier position, and the later position goes
/// away.
pub fn trim_whitespace(df: DataFrame) -> DataFrame {
    let (columns, row_count) = df.into_parts();
    let mut trimmed: Vec<Series> = Vec::with_capacity(columns.len());

    for series in columns {
        let series = trim_series(series);
        match trimmed.iter_mut().find(|s| s.name() == series.name()) {
            Some(slot) => {
                warn!(
                    "column name '{}' appears more than once after trimming; keeping the last one",
                    series.name()
                );
                *slot = series;
            }
            None => trimmed.push(series),
        }
    }

    DataFrame::from_parts(trimmed, row_count)
}

fn trim_series(series: Series) -> Series {
    let name = series.name().trim().to_string();
    let values = series
        .into_values()
        .into_iter()
        .map(|cell| cell.map(trim_scalar))
        .collect();
    Series::new(values, name)
}

fn trim_scalar(value: Scalar) -> Scalar {
    match value {
        Scalar::Str(s) => {
            let t = s.trim();
            if t.len() == s.len() {
                Scalar::Str(s)
            } else {
                Scalar::Str(t.to_string())
            }
        }
        other => other,
    }
}
