use anyhow::{Context, Result};
use clap::Parser;
use time_stats::cli::Cli;
use time_stats::config::StatsConfig;
use time_stats::pipeline::{self, RunOptions};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => StatsConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StatsConfig::default(),
    };

    let options = RunOptions::resolve(&args, &config);
    let summary = pipeline::run(&options)?;

    if let Some(path) = &summary.written_to {
        eprintln!(
            "Wrote {} records ({:.4} ms total) to {}",
            summary.records,
            summary.total_ms,
            path.display()
        );
    }

    Ok(())
}
