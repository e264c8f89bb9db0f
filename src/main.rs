//! claims-cleaner command line entry point
//!
//! ```text
//! claims-cleaner claims.xlsx --sheet March --date-cols DOB,DOS --out clean.csv
//! ```
//!
//! Set `RUST_LOG=debug` to see what each cleaning step did.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use claims_cleaner::{clean, io, report, Error};
use thiserror::Error as ThisError;

#[derive(Parser, Debug)]
#[command(
    name = "claims-cleaner",
    version,
    about = "Clean healthcare claims (CSV/XLSX) and write a clean CSV."
)]
struct Cli {
    /// Path to CSV or XLSX file (e.g. sample_claims.xlsx or claims.csv)
    input: PathBuf,

    /// Excel sheet name (if using .xlsx)
    #[arg(long)]
    sheet: Option<String>,

    /// Comma-separated list of date column names to normalize
    /// (e.g. 'DOB,DOS,ServiceDate'). If omitted, columns are guessed.
    #[arg(long = "date-cols", default_value = "")]
    date_cols: String,

    /// Output CSV path. Default: cleaned_<input>.csv next to the input
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the statistics as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, ThisError)]
enum CliError {
    #[error("ERROR: File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("ERROR reading file: {0}")]
    Read(#[source] Error),

    #[error("ERROR writing output: {0}")]
    Write(#[source] Error),

    #[error("ERROR rendering statistics: {0}")]
    Report(#[source] Error),
}

/// Split `--date-cols` on commas; `None` when nothing usable is left
fn parse_date_cols(raw: &str) -> Option<Vec<String>> {
    let cols: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if cols.is_empty() {
        None
    } else {
        Some(cols)
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if !cli.input.exists() {
        return Err(CliError::NotFound(cli.input.clone()));
    }

    let date_cols = parse_date_cols(&cli.date_cols);

    let df = io::read_table(&cli.input, cli.sheet.as_deref()).map_err(CliError::Read)?;
    let (cleaned, stats) = clean(df, date_cols.as_deref());

    let out_path = io::output_path(&cli.input, cli.out.as_deref());
    io::write_csv(&cleaned, &out_path).map_err(CliError::Write)?;

    if cli.json {
        println!("{}", report::render_json(&stats).map_err(CliError::Report)?);
    } else {
        print!("{}", report::render_report(&cli.input, &out_path, &stats));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
