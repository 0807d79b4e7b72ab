//! time-stats - charts per-part benchmark timings from a markdown table
//!
//! The library reads a benchmark table embedded in a document (typically a
//! README between two `<!--- benchmarking table --->` markers), normalizes
//! every duration to milliseconds, and renders the result as an HTML figure
//! with a pie chart and a bar chart, or as text, JSON or CSV.

pub mod chart_output;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod duration;
pub mod error;
pub mod json_output;
pub mod pipeline;
pub mod record;
pub mod table;
pub mod text_output;

pub use error::{Result, StatsError};
pub use record::{TimedRecord, TimingSeries};
