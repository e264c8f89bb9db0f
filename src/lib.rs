//! Cleaning for tabular claims data
//!
//! Load a CSV or spreadsheet into a [`DataFrame`], run [`clean`] over it and
//! write the result back out as CSV:
//!
//! ```no_run
//! use claims_cleaner::{clean, io};
//!
//! let df = io::read_table("claims.xlsx", None)?;
//! let (cleaned, stats) = clean(df, None);
//! io::write_csv(&cleaned, "cleaned_claims.csv")?;
//! println!("{} -> {} rows", stats.original_rows(), stats.rows_after_dedup());
//! # Ok::<(), claims_cleaner::Error>(())
//! ```

pub mod clean;
pub mod dataframe;
pub mod error;
pub mod io;
pub mod na;
pub mod report;
pub mod series;
pub mod temporal;

// Re-export commonly used types
pub use clean::{clean, clean_with, CleanOptions, CleaningStats, DEFAULT_DATE_TOKENS};
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use na::NA;
pub use series::{Cell, Scalar, Series};
pub use temporal::{parse_date, DateParseError};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
