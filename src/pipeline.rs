//! End-to-end run: read the document, extract timings, render the report

use crate::chart_output::ChartOutput;
use crate::cli::{Cli, OutputFormat};
use crate::config::StatsConfig;
use crate::csv_output::CsvOutput;
use crate::error::Result as StatsResult;
use crate::json_output::JsonOutput;
use crate::record::TimingSeries;
use crate::table::{extract_records, TableLayout};
use crate::text_output::format_summary;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Document read when no input is given
pub const DEFAULT_INPUT: &str = "README.md";

/// Chart file written when no output is given in html mode
pub const DEFAULT_HTML_OUTPUT: &str = "time_stats.html";

pub const DEFAULT_TITLE: &str = "Benchmark timings";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub input: PathBuf,
    /// `None` means stdout
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub layout: TableLayout,
    pub title: String,
    pub include_summary: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: Some(PathBuf::from(DEFAULT_HTML_OUTPUT)),
            format: OutputFormat::Html,
            layout: TableLayout::default(),
            title: DEFAULT_TITLE.to_string(),
            include_summary: true,
        }
    }
}

impl RunOptions {
    /// Merge command line, config file and defaults (in that order of precedence)
    pub fn resolve(cli: &Cli, config: &StatsConfig) -> Self {
        let defaults = TableLayout::default();
        let format = cli.format.or(config.format).unwrap_or(OutputFormat::Html);

        let output = cli
            .output
            .clone()
            .or_else(|| config.output.clone())
            .or_else(|| match format {
                OutputFormat::Html => Some(PathBuf::from(DEFAULT_HTML_OUTPUT)),
                _ => None,
            });

        let layout = TableLayout {
            marker: cli
                .marker
                .clone()
                .or_else(|| config.table.marker.clone())
                .unwrap_or(defaults.marker),
            header_rows: cli
                .header_rows
                .or(config.table.header_rows)
                .unwrap_or(defaults.header_rows),
            duration_columns: cli
                .columns
                .or(config.table.duration_columns)
                .unwrap_or(defaults.duration_columns),
        };

        Self {
            input: cli
                .input
                .clone()
                .or_else(|| config.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output,
            format,
            layout,
            title: cli
                .title
                .clone()
                .or_else(|| config.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            include_summary: !(cli.no_summary || config.no_summary),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub total_ms: f64,
    /// File the report went to, `None` for stdout
    pub written_to: Option<PathBuf>,
}

/// Extract the timing series from document text
pub fn load_series(document: &str, layout: &TableLayout) -> StatsResult<TimingSeries> {
    let records = extract_records(document, layout)?;
    Ok(TimingSeries::from_records(&records))
}

/// Render a series in the requested format
pub fn render(series: &TimingSeries, options: &RunOptions) -> StatsResult<String> {
    match options.format {
        OutputFormat::Html => {
            ChartOutput::new(options.title.as_str(), options.include_summary).to_html(series)
        }
        OutputFormat::Text => Ok(format_summary(series)),
        OutputFormat::Json => JsonOutput::new(series).to_json(),
        OutputFormat::Csv => Ok(CsvOutput::default().to_csv(series)),
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Run the whole pipeline
///
/// Nothing is written unless extraction and rendering both succeed.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    info!("Reading {}", options.input.display());

    let series = {
        let document = read_document(&options.input)?;
        load_series(&document, &options.layout)
            .with_context(|| format!("Failed to extract timings from {}", options.input.display()))?
    };
    debug!(
        "Parsed {} records, {:.4} ms total",
        series.len(),
        series.total_ms()
    );

    let report = render(&series, options)?;

    match &options.output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {:?} report to {}", options.format, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .context("Failed to write report to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(RunSummary {
        records: series.len(),
        total_ms: series.total_ms(),
        written_to: options.output.clone(),
    })
}
