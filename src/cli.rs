//! CLI argument parsing for time-stats

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML page with pie and bar charts (default)
    Html,
    /// Plain-text summary table
    Text,
    /// JSON for machine parsing
    Json,
    /// CSV for spreadsheet analysis
    Csv,
}

/// Parse a `A,B` pair of duration column indices
fn parse_columns(s: &str) -> Result<[usize; 2], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] => {
            let a = a
                .parse()
                .map_err(|_| format!("invalid column index '{}'", a))?;
            let b = b
                .parse()
                .map_err(|_| format!("invalid column index '{}'", b))?;
            Ok([a, b])
        }
        _ => Err(format!("expected two comma-separated indices, got '{}'", s)),
    }
}

#[derive(Parser, Debug)]
#[command(name = "time-stats")]
#[command(version)]
#[command(
    about = "Chart per-part benchmark timings from a markdown table",
    long_about = None
)]
pub struct Cli {
    /// Markdown document containing the benchmark table [default: README.md]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Sentinel marker surrounding the table [default: <!--- benchmarking table --->]
    #[arg(short, long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Output format [default: html]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (html defaults to time_stats.html, other formats to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field indices of part 1 and part 2 after splitting a row on '|' [default: 1,2]
    #[arg(long, value_name = "A,B", value_parser = parse_columns)]
    pub columns: Option<[usize; 2]>,

    /// Table lines to skip before the data rows [default: 2]
    #[arg(long, value_name = "N")]
    pub header_rows: Option<usize>,

    /// Title of the HTML figure
    #[arg(long)]
    pub title: Option<String>,

    /// Omit the summary table under the HTML figure
    #[arg(long)]
    pub no_summary: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
