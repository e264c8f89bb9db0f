use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// Missing-value marker for a single cell
///
/// A cell is either `NA::Value(v)` or `NA::NA`. `NA::NA` is the only thing the
/// cleaner treats as "missing": an empty string, zero or `false` is a value.
#[derive(Clone, Copy)]
pub enum NA<T> {
    /// A present value
    Value(T),
    /// The missing marker
    NA,
}

impl<T> NA<T> {
    pub fn is_na(&self) -> bool {
        matches!(self, NA::NA)
    }

    pub fn is_value(&self) -> bool {
        !self.is_na()
    }

    /// Borrow the value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }

    /// Take the value out, if present
    pub fn into_value(self) -> Option<T> {
        match self {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }

    /// Transform a present value, leaving `NA` untouched
    pub fn map<U, F>(self, f: F) -> NA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NA::Value(v) => NA::Value(f(v)),
            NA::NA => NA::NA,
        }
    }
}

impl<T> Default for NA<T> {
    fn default() -> Self {
        NA::NA
    }
}

impl<T> From<Option<T>> for NA<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => NA::Value(v),
            None => NA::NA,
        }
    }
}

impl<T> From<NA<T>> for Option<T> {
    fn from(na: NA<T>) -> Self {
        na.into_value()
    }
}

impl<T: Debug> Debug for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{:?}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

impl<T: Display> Display for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

// NA == NA: duplicate detection treats two missing cells as the same value.
impl<T: PartialEq> PartialEq for NA<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => a == b,
            (NA::NA, NA::NA) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for NA<T> {}

impl<T: Hash> Hash for NA<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            NA::Value(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            NA::NA => {
                1u8.hash(state);
            }
        }
    }
}
