//! Optional TOML configuration for time-stats
//!
//! Every key is optional; anything left out falls back to the command line
//! or the built-in default.
//!
//! # Example time-stats.toml
//!
//! ```toml
//! input = "README.md"
//! output = "docs/timings.html"
//! format = "html"
//! title = "Advent of Code timings"
//!
//! [table]
//! marker = "<!--- benchmarking table --->"
//! header_rows = 2
//! duration_columns = [2, 3]
//! ```

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    /// Markdown document containing the table
    pub input: Option<PathBuf>,
    /// Where to write the report
    pub output: Option<PathBuf>,
    /// Report format
    pub format: Option<OutputFormat>,
    /// Page title of the HTML figure
    pub title: Option<String>,
    /// Skip the summary table under the HTML figure
    #[serde(default)]
    pub no_summary: bool,
    /// Table location and shape
    #[serde(default)]
    pub table: TableConfig,
}

/// `[table]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub marker: Option<String>,
    pub header_rows: Option<usize>,
    pub duration_columns: Option<[usize; 2]>,
}

impl StatsConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            input = "BENCH.md"
            output = "out.html"
            format = "json"
            title = "Timings"
            no_summary = true

            [table]
            marker = "<!-- t -->"
            header_rows = 1
            duration_columns = [2, 3]
        "#;

        let config = StatsConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.input, Some(PathBuf::from("BENCH.md")));
        assert_eq!(config.output, Some(PathBuf::from("out.html")));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.title.as_deref(), Some("Timings"));
        assert!(config.no_summary);
        assert_eq!(config.table.marker.as_deref(), Some("<!-- t -->"));
        assert_eq!(config.table.header_rows, Some(1));
        assert_eq!(config.table.duration_columns, Some([2, 3]));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = StatsConfig::from_toml_str("").unwrap();
        assert_eq!(config, StatsConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = StatsConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, StatsError::Toml(_)));
    }

    #[test]
    fn test_wrong_column_count_rejected() {
        let toml = r#"
            [table]
            duration_columns = [1, 2, 3]
        "#;
        assert!(StatsConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = StatsConfig::from_file("/nonexistent/time-stats.toml").unwrap_err();
        assert!(matches!(err, StatsError::Io(_)));
    }
}
