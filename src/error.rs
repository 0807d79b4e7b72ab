//! Error types for timing table extraction and report rendering

use thiserror::Error;

/// Errors that can occur while extracting or rendering timing data
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unrecognized time unit in '{literal}' (expected one of ns, µs, ms, s)")]
    UnrecognizedUnit { literal: String },

    #[error("Invalid numeric value in duration '{literal}'")]
    InvalidNumber { literal: String },

    #[error("Negative duration '{literal}'")]
    NegativeDuration { literal: String },

    #[error("Table region not found: marker '{marker}' must appear twice, found {found}")]
    RegionNotFound { marker: String, found: usize },

    #[error("Malformed row {row}: {reason} (line: '{line}')")]
    MalformedRow {
        row: usize,
        line: String,
        reason: String,
    },

    #[error("Row {row}: {source} (line: '{line}')")]
    InvalidRow {
        row: usize,
        line: String,
        #[source]
        source: Box<StatsError>,
    },

    #[error("No timing records to render")]
    EmptyInput,

    #[error("Total time overflows: {total} ms is not finite")]
    NonFiniteTotal { total: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for timing statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_unit_message_contains_literal() {
        let err = StatsError::UnrecognizedUnit {
            literal: "10xs".to_string(),
        };
        assert!(err.to_string().contains("'10xs'"));
    }

    #[test]
    fn test_region_not_found_message() {
        let err = StatsError::RegionNotFound {
            marker: "<!-- x -->".to_string(),
            found: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("<!-- x -->"));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn test_invalid_row_keeps_source() {
        let err = StatsError::InvalidRow {
            row: 3,
            line: "| `10xs` | `1ms` | x |".to_string(),
            source: Box::new(StatsError::UnrecognizedUnit {
                literal: "10xs".to_string(),
            }),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Row 3:"));
        assert!(msg.contains("10xs"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StatsError = io.into();
        assert!(matches!(err, StatsError::Io(_)));
    }
}
