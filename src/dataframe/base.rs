use crate::error::{Error, Result};
use crate::series::{Cell, Series};

/// In-memory table: ordered, uniquely named columns of equal length
///
/// The row count is stored separately from the columns so that a table whose
/// columns were all dropped still knows how many rows it has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFrame {
    columns: Vec<Series>,
    row_count: usize,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DataFrame with rows but no columns yet
    pub fn with_row_count(row_count: usize) -> Self {
        DataFrame {
            columns: Vec::new(),
            row_count,
        }
    }

    /// Build a DataFrame from columns, checking names and lengths
    pub fn from_columns(columns: Vec<Series>) -> Result<Self> {
        let mut df = DataFrame::new();
        for series in columns {
            df.add_column(series)?;
        }
        Ok(df)
    }

    /// Assemble a DataFrame whose invariants the caller already guarantees
    pub(crate) fn from_parts(columns: Vec<Series>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        DataFrame { columns, row_count }
    }

    pub(crate) fn into_parts(self) -> (Vec<Series>, usize) {
        (self.columns, self.row_count)
    }

    /// Append a column
    ///
    /// The first column of an empty DataFrame fixes the row count; every
    /// later column must match it.
    pub fn add_column(&mut self, series: Series) -> Result<()> {
        if self.contains_column(series.name()) {
            return Err(Error::DuplicateColumnName(series.name().to_string()));
        }

        if self.columns.is_empty() && self.row_count == 0 {
            self.row_count = series.len();
        } else if series.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series.len(),
            });
        }

        self.columns.push(series);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    pub fn column(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }

    /// Get a column or fail with `ColumnNotFound`
    pub fn get_column(&self, name: &str) -> Result<&Series> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    /// Borrow one row as a vector of cells, in column order
    pub fn row(&self, pos: usize) -> Option<Vec<&Cell>> {
        if pos >= self.row_count {
            return None;
        }
        self.columns.iter().map(|c| c.get(pos)).collect()
    }

    /// Iterate over every row in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.row_count).filter_map(move |pos| self.row(pos))
    }

    /// True when every cell of the row is missing (vacuously true with no columns)
    pub fn is_na_row(&self, pos: usize) -> bool {
        self.columns
            .iter()
            .all(|c| c.get(pos).map_or(true, Cell::is_na))
    }
}
