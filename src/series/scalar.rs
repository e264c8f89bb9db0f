use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};

use crate::na::NA;

/// A present cell value
///
/// CSV input only produces `Str`, `Int`, `Float` and `Bool`; spreadsheets can
/// also hand over typed dates and date-times.
#[derive(Debug, Clone)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// One table cell: a value or the missing marker
pub type Cell = NA<Scalar>;

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    // -0.0 and 0.0 hash and compare alike, as do all NaN payloads
    fn float_key(x: f64) -> u64 {
        if x.is_nan() {
            f64::NAN.to_bits()
        } else if x == 0.0 {
            0.0f64.to_bits()
        } else {
            x.to_bits()
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => Self::float_key(*a) == Self::float_key(*b),
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Date(a), Scalar::Date(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Str(s) => s.hash(state),
            Scalar::Int(i) => i.hash(state),
            Scalar::Float(x) => Self::float_key(*x).hash(state),
            Scalar::Bool(b) => b.hash(state),
            Scalar::Date(d) => d.hash(state),
            Scalar::DateTime(dt) => dt.hash(state),
        }
    }
}

/// Text form used when writing CSV output
impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            // whole floats keep a trailing ".0" so a float column stays recognisable
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Scalar::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        NA::Value(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        NA::Value(Scalar::Str(s))
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        NA::Value(Scalar::Int(i))
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        NA::Value(Scalar::Float(x))
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        NA::Value(Scalar::Bool(b))
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        NA::Value(Scalar::Date(d))
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(dt: NaiveDateTime) -> Self {
        NA::Value(Scalar::DateTime(dt))
    }
}
