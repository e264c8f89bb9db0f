//! Best-effort calendar date parsing for cell values
//!
//! Every cell maps to either a `NaiveDate` or a [`DateParseError`] saying why
//! it is not one. Callers decide what an error means; the cleaning pipeline
//! turns it into a missing value.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::na::NA;
use crate::series::{Cell, Scalar};

/// Output form of a normalized date
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest and latest representable dates as (year, month, day).
/// Matches the nanosecond timestamp window of 64-bit epoch counters.
pub const MIN_DATE: (i32, u32, u32) = (1677, 9, 22);
pub const MAX_DATE: (i32, u32, u32) = (2262, 4, 11);

/// Date-only layouts, tried in order. Month-first wins over day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%d/%m/%y",
    "%d-%m-%y",
    "%B %d %Y",
    "%B %d, %Y",
    "%B %d,%Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%d-%B-%Y",
    "%d-%B-%y",
    "%B-%d-%Y",
    "%Y-%B-%d",
    "%Y %B %d",
];

/// Layouts with a time-of-day part; the time is dropped after parsing.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %I:%M %p",
];

/// Layouts carrying a UTC offset; the wall-clock date is kept.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

lazy_static! {
    static ref ISO_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date pattern");
    static ref ORDINAL_SUFFIX: Regex =
        Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("valid ordinal pattern");
    static ref LEADING_WEEKDAY: Regex = Regex::new(
        r"(?i)^(mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s+"
    )
    .expect("valid weekday pattern");
}

/// Why a cell could not be read as a date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("cell is empty")]
    Empty,

    #[error("unrecognized date text: {0:?}")]
    Unrecognized(String),

    #[error("date {0} is outside the supported range")]
    OutOfBounds(NaiveDate),

    #[error("value is not a date: {0}")]
    NotTemporal(String),
}

/// Read one cell as a calendar date
///
/// Strings are trimmed first. Integers are read through their decimal text,
/// so `20200102` is 2 January 2020. Floats and booleans are never dates.
pub fn parse_date(cell: &Cell) -> Result<NaiveDate, DateParseError> {
    match cell {
        NA::NA => Err(DateParseError::Empty),
        NA::Value(Scalar::Str(s)) => parse_date_str(s),
        NA::Value(Scalar::Int(i)) => parse_date_str(&i.to_string()),
        NA::Value(Scalar::Date(d)) => check_bounds(*d),
        NA::Value(Scalar::DateTime(dt)) => check_bounds(dt.date()),
        NA::Value(other @ (Scalar::Float(_) | Scalar::Bool(_))) => {
            Err(DateParseError::NotTemporal(other.to_string()))
        }
    }
}

/// Read free-form text as a calendar date
pub fn parse_date_str(text: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    let without_weekday = LEADING_WEEKDAY.replace(trimmed, "");
    let cleaned = ORDINAL_SUFFIX.replace_all(&without_weekday, "$1");

    // A short numeric year can satisfy an earlier layout ("01/02/20" reads as
    // year 1 under %Y/%m/%d), so the first in-range reading wins.
    let mut out_of_bounds = None;
    for date in candidate_dates(&cleaned) {
        match check_bounds(date) {
            Ok(date) => return Ok(date),
            Err(err) => {
                out_of_bounds.get_or_insert(err);
            }
        }
    }
    Err(out_of_bounds.unwrap_or_else(|| DateParseError::Unrecognized(trimmed.to_string())))
}

/// Every reading of `s` under the known layouts, in preference order
fn candidate_dates(s: &str) -> impl Iterator<Item = NaiveDate> + '_ {
    let compact = parse_compact(s);
    let rfc3339 = DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local().date());
    let with_offset = OFFSET_FORMATS
        .iter()
        .filter_map(move |fmt| DateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.naive_local().date());
    let date_only = DATE_FORMATS
        .iter()
        .filter_map(move |fmt| NaiveDate::parse_from_str(s, fmt).ok());
    let with_time = DATETIME_FORMATS
        .iter()
        .filter_map(move |fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date());

    compact
        .into_iter()
        .chain(rfc3339)
        .chain(with_offset)
        .chain(date_only)
        .chain(with_time)
}

/// `YYYYMMDD` with no separators
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s.get(0..4)?.parse().ok()?;
    let month = s.get(4..6)?.parse().ok()?;
    let day = s.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn check_bounds(date: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let key = (date.year(), date.month(), date.day());
    if key < MIN_DATE || key > MAX_DATE {
        Err(DateParseError::OutOfBounds(date))
    } else {
        Ok(date)
    }
}

/// Render a date as `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// True for text of the exact form `dddd-dd-dd`
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_and_slash_layouts() {
        assert_eq!(parse_date_str("2020-03-04"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str(" 2020-03-04 "), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("2020/03/04"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("01/02/2020"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("1/2/2020"), Ok(ymd(2020, 1, 2)));
    }

    #[test]
    fn test_day_first_fallback() {
        assert_eq!(parse_date_str("13/02/2020"), Ok(ymd(2020, 2, 13)));
        assert_eq!(parse_date_str("31.12.1999"), Ok(ymd(1999, 12, 31)));
    }

    #[test]
    fn test_two_digit_year_skips_ancient_readings() {
        assert_eq!(parse_date_str("01/02/20"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("12-31-99"), Ok(ymd(1999, 12, 31)));
    }

    #[test]
    fn test_two_digit_year_pivot_is_fixed() {
        // 00-68 land in the 2000s, 69-99 in the 1900s, whatever today's date
        assert_eq!(parse_date_str("01/02/68"), Ok(ymd(2068, 1, 2)));
        assert_eq!(parse_date_str("1/2/70"), Ok(ymd(1970, 1, 2)));
        assert_eq!(parse_date_str("1/2/75"), Ok(ymd(1975, 1, 2)));
    }

    #[test]
    fn test_time_and_offset_are_dropped() {
        assert_eq!(parse_date_str("2020-03-04 23:59:59"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("2020-03-04T10:15:00.250"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("2020-03-04T23:30:00-05:00"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("2020-03-04T01:00:00Z"), Ok(ymd(2020, 3, 4)));
        assert_eq!(parse_date_str("03/04/2020 10:30 PM"), Ok(ymd(2020, 3, 4)));
    }

    #[test]
    fn test_textual_months() {
        assert_eq!(parse_date_str("Jan 2, 2020"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("January 2nd, 2020"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("2 January 2020"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("02-Jan-2020"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date_str("Thursday, January 2, 2020"), Ok(ymd(2020, 1, 2)));
    }

    #[test]
    fn test_compact_and_integer_cells() {
        assert_eq!(parse_date_str("20200102"), Ok(ymd(2020, 1, 2)));
        assert_eq!(parse_date(&Cell::from(20200102i64)), Ok(ymd(2020, 1, 2)));
        assert!(parse_date(&Cell::from(42i64)).is_err());
    }

    #[test]
    fn test_failures() {
        assert_eq!(parse_date(&NA::NA), Err(DateParseError::Empty));
        assert_eq!(parse_date_str("   "), Err(DateParseError::Empty));
        assert!(matches!(
            parse_date_str("not a date"),
            Err(DateParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_date_str("2020-02-30"),
            Err(DateParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_date(&Cell::from(1.5f64)),
            Err(DateParseError::NotTemporal(_))
        ));
        assert!(matches!(
            parse_date(&Cell::from(true)),
            Err(DateParseError::NotTemporal(_))
        ));
    }

    #[test]
    fn test_bounds() {
        assert!(matches!(
            parse_date_str("1500-01-01"),
            Err(DateParseError::OutOfBounds(_))
        ));
        assert_eq!(parse_date_str("1677-09-22"), Ok(ymd(1677, 9, 22)));
        assert_eq!(parse_date_str("2262-04-11"), Ok(ymd(2262, 4, 11)));
        assert!(parse_date_str("2262-04-12").is_err());
    }

    #[test]
    fn test_typed_cells() {
        let dt = ymd(2021, 6, 30).and_hms_opt(18, 45, 0).unwrap();
        assert_eq!(parse_date(&Cell::from(dt)), Ok(ymd(2021, 6, 30)));
        assert_eq!(parse_date(&Cell::from(ymd(2021, 6, 30))), Ok(ymd(2021, 6, 30)));
    }

    #[test]
    fn test_iso_pattern() {
        assert!(is_iso_date(&format_iso(ymd(2020, 1, 2))));
        assert!(!is_iso_date("2020-1-2"));
        assert!(!is_iso_date(" 2020-01-02"));
    }
}
