//! JSON output format for benchmark timings

use crate::error::Result;
use crate::record::TimingSeries;
use serde::{Deserialize, Serialize};

/// A single timed part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRecord {
    /// Part label (e.g. "3-1")
    pub label: String,
    /// Duration in milliseconds
    pub ms: f64,
    /// Share of the total, in percent
    pub share: f64,
}

/// Totals across all parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonSummary {
    /// Number of records
    pub records: usize,
    /// Sum of all durations in milliseconds
    pub total_ms: f64,
    /// Slowest part, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slowest: Option<String>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Records in table order
    pub records: Vec<JsonRecord>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Build the JSON document for a series
    pub fn new(series: &TimingSeries) -> Self {
        let records: Vec<JsonRecord> = series
            .iter()
            .zip(series.shares())
            .map(|((label, ms), share)| JsonRecord {
                label: label.to_string(),
                ms,
                share,
            })
            .collect();

        let slowest = records
            .iter()
            .fold(None::<&JsonRecord>, |best, r| match best {
                Some(b) if b.ms >= r.ms => Some(b),
                _ => Some(r),
            })
            .map(|r| r.label.clone());

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "time-stats-json-v1".to_string(),
            summary: JsonSummary {
                records: records.len(),
                total_ms: series.total_ms(),
                slowest,
            },
            records,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
