use std::collections::HashSet;

use super::DataFrame;
use crate::series::Series;

/// Row/column dropping operations that return a new DataFrame
impl DataFrame {
    /// Keep the rows whose mask entry is true, preserving order
    pub fn filter_rows(self, keep: &[bool]) -> DataFrame {
        let kept = (0..self.row_count())
            .filter(|&i| keep.get(i).copied().unwrap_or(false))
            .count();
        let (mut columns, _) = self.into_parts();
        for series in &mut columns {
            series.retain_rows(keep);
        }
        DataFrame::from_parts(columns, kept)
    }

    /// Keep the columns for which `pred` holds, preserving order
    pub fn retain_columns<F>(self, pred: F) -> DataFrame
    where
        F: FnMut(&Series) -> bool,
    {
        let (mut columns, row_count) = self.into_parts();
        columns.retain(pred);
        DataFrame::from_parts(columns, row_count)
    }

    /// Drop every row in which all cells are missing
    pub fn dropna_rows(self) -> DataFrame {
        let keep: Vec<bool> = (0..self.row_count()).map(|i| !self.is_na_row(i)).collect();
        self.filter_rows(&keep)
    }

    /// Drop every column in which all cells are missing
    pub fn dropna_columns(self) -> DataFrame {
        self.retain_columns(|series| !series.is_all_na())
    }

    /// Mask marking the first occurrence of each distinct row
    pub fn first_occurrence_mask(&self) -> Vec<bool> {
        let mut seen = HashSet::with_capacity(self.row_count());
        self.rows().map(|row| seen.insert(row)).collect()
    }

    /// Drop rows equal to an earlier row across every column
    ///
    /// Kept rows stay in their original relative order; positions are
    /// renumbered from zero.
    pub fn drop_duplicates(self) -> DataFrame {
        let keep = self.first_occurrence_mask();
        self.filter_rows(&keep)
    }

    /// Apply `f` to every column in place of the original
    pub fn map_columns<F>(self, f: F) -> DataFrame
    where
        F: FnMut(Series) -> Series,
    {
        let (columns, row_count) = self.into_parts();
        let columns = columns.into_iter().map(f).collect();
        DataFrame::from_parts(columns, row_count)
    }
}
