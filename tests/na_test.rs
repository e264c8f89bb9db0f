use std::collections::HashSet;

use claims_cleaner::{Cell, Scalar, Series, NA};

#[test]
fn test_na_creation() {
    let value: NA<i32> = NA::Value(42);
    let na: NA<i32> = NA::NA;

    assert!(!value.is_na());
    assert!(value.is_value());
    assert_eq!(value.value(), Some(&42));

    assert!(na.is_na());
    assert!(!na.is_value());
    assert_eq!(na.value(), None);
    assert_eq!(NA::<i32>::default(), NA::NA);
}

#[test]
fn test_na_from_option() {
    let present: NA<i32> = Some(3).into();
    let missing: NA<i32> = None.into();
    assert_eq!(present, NA::Value(3));
    assert_eq!(missing, NA::NA);

    let back: Option<i32> = present.into();
    assert_eq!(back, Some(3));
    assert_eq!(missing.map(|v| v * 2), NA::NA);
    assert_eq!(present.map(|v| v * 2), NA::Value(6));
}

#[test]
fn test_na_display() {
    assert_eq!(NA::Value(5).to_string(), "5");
    assert_eq!(NA::<i32>::NA.to_string(), "NA");
}

#[test]
fn test_missing_cells_are_equal() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Cell::NA));
    assert!(!seen.insert(Cell::NA));
    assert!(seen.insert(Cell::from("")));
    assert!(seen.insert(Cell::from(0i64)));
    assert!(seen.insert(Cell::from(false)));
}

#[test]
fn test_float_cells_hash_canonically() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Cell::from(0.0f64)));
    assert!(!seen.insert(Cell::from(-0.0f64)));
    assert!(seen.insert(Cell::from(f64::NAN)));
    assert!(!seen.insert(Cell::from(-f64::NAN)));
}

#[test]
fn test_scalar_display() {
    assert_eq!(Scalar::Float(3.0).to_string(), "3.0");
    assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
    assert_eq!(Scalar::Bool(true).to_string(), "True");
    assert_eq!(Scalar::Int(-7).to_string(), "-7");
    let dt = chrono::NaiveDate::from_ymd_opt(2020, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(Scalar::DateTime(dt).to_string(), "2020-01-02 03:04:05");
}

#[test]
fn test_series_na_count() {
    let series = Series::new(
        vec![Cell::from(10i64), NA::NA, Cell::from(30i64), NA::NA],
        "values",
    );
    assert_eq!(series.len(), 4);
    assert_eq!(series.na_count(), 2);
    assert!(!series.is_all_na());

    let empty = Series::new(vec![NA::NA, NA::NA], "empty");
    assert!(empty.is_all_na());
    assert!(Series::new(Vec::new(), "none").is_all_na());
}
