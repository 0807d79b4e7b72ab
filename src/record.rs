//! Timed records and the ordered series handed to renderers

use serde::{Deserialize, Serialize};

/// One half of a benchmark table row, normalized to milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedRecord {
    /// Label in `"{row}-{part}"` form (e.g. "3-2")
    pub label: String,
    /// Duration in milliseconds
    pub ms: f64,
}

impl TimedRecord {
    pub fn new(row: usize, part: usize, ms: f64) -> Self {
        Self {
            label: format!("{}-{}", row, part),
            ms,
        }
    }
}

/// Parallel label/value sequences in record order
///
/// Order drives the bar chart x-axis and the pie legend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TimingSeries {
    pub fn from_records(records: &[TimedRecord]) -> Self {
        let (labels, values): (Vec<String>, Vec<f64>) =
            records.iter().map(|r| (r.label.clone(), r.ms)).unzip();
        Self { labels, values }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Values in milliseconds
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values in milliseconds
    pub fn total_ms(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest value, or 0.0 for an empty series
    pub fn max_ms(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Share of the total per record, in percent
    ///
    /// All zeros when the total is zero.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total_ms();
        self.values
            .iter()
            .map(|v| if total > 0.0 { v / total * 100.0 } else { 0.0 })
            .collect()
    }

    /// Iterate `(label, ms)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
