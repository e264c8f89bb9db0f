//! Console rendering of a finished run

use std::fmt::Write as _;
use std::path::Path;

use crate::clean::CleaningStats;
use crate::error::Result;

/// Human-readable summary printed after a successful run
pub fn render_report(input: &Path, output: &Path, stats: &CleaningStats) -> String {
    let date_cols = if stats.date_cols_used().is_empty() {
        "None".to_string()
    } else {
        stats.date_cols_used().join(", ")
    };

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "✅ Clean complete");
    let _ = writeln!(out, "• Input:  {}", input.display());
    let _ = writeln!(out, "• Output: {}", output.display());
    let _ = writeln!(
        out,
        "• Rows: {} → {} (after empty-row drop) → {} (after dedup)",
        stats.original_rows(),
        stats.rows_after_dropna(),
        stats.rows_after_dedup()
    );
    let _ = writeln!(
        out,
        "• Cols: {} → {}",
        stats.original_cols(),
        stats.final_cols()
    );
    let _ = writeln!(out, "• Date columns normalized: {}", date_cols);
    out
}

/// Statistics as a pretty-printed JSON object
pub fn render_json(stats: &CleaningStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
