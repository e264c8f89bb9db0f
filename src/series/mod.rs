mod scalar;

pub use self::scalar::{Cell, Scalar};

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// Column name
    name: String,

    /// Cell values, one per row
    values: Vec<Cell>,
}

impl Series {
    /// Create a new Series from a vector of cells
    pub fn new(values: Vec<Cell>, name: impl Into<String>) -> Self {
        Series {
            name: name.into(),
            values,
        }
    }

    /// Build a Series from anything convertible into cells
    pub fn from_values<V, I>(values: I, name: impl Into<String>) -> Self
    where
        V: Into<Cell>,
        I: IntoIterator<Item = V>,
    {
        Self::new(values.into_iter().map(Into::into).collect(), name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the cell at a row position
    pub fn get(&self, pos: usize) -> Option<&Cell> {
        self.values.get(pos)
    }

    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [Cell] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<Cell> {
        self.values
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of missing cells
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_na()).count()
    }

    /// True when every cell is missing (vacuously true for an empty column)
    pub fn is_all_na(&self) -> bool {
        self.values.iter().all(|v| v.is_na())
    }

    /// Keep only the rows whose mask entry is true
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        let mut row = 0;
        self.values.retain(|_| {
            let kept = keep.get(row).copied().unwrap_or(false);
            row += 1;
            kept
        });
    }
}
