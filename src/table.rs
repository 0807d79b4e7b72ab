//! Benchmark table extraction from markdown documents
//!
//! The table lives between two occurrences of a sentinel comment:
//!
//! ```text
//! <!--- benchmarking table --->
//! | Part 1 | Part 2 | Notes |
//! | :---: | :---: | :---: |
//! | `46.3µs` | `5.0ms` | |
//! <!--- benchmarking table --->
//! ```
//!
//! Every row with exactly four `|` separators is a table line. The first
//! `header_rows` of them are skipped, and each remaining row yields two
//! [`TimedRecord`]s labeled `"{row}-1"` and `"{row}-2"`.

use crate::duration::parse_ms;
use crate::error::{Result, StatsError};
use crate::record::TimedRecord;
use tracing::debug;

/// Sentinel comment that delimits the benchmark table
pub const DEFAULT_MARKER: &str = "<!--- benchmarking table --->";

/// Column separator of a markdown table row
pub const SEPARATOR: char = '|';

/// Separators in a usable row: `| a | b | c |`
pub const SEPARATORS_PER_ROW: usize = 4;

/// Fields after splitting a usable row, including the empty outer ones
pub const FIELDS_PER_ROW: usize = SEPARATORS_PER_ROW + 1;

/// Characters stripped from both ends of a duration cell
const CELL_DECORATION: &[char] = &[' ', '`', '\t'];

/// Where the table is and which of its columns hold durations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Sentinel marker surrounding the table
    pub marker: String,
    /// Table lines skipped before data rows (header + alignment row)
    pub header_rows: usize,
    /// Field indices (0-based, after splitting on `|`) of part 1 and part 2
    pub duration_columns: [usize; 2],
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            header_rows: 2,
            duration_columns: [1, 2],
        }
    }
}

impl TableLayout {
    /// Check that the layout can describe a usable table
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(StatsError::InvalidConfig(
                "table marker must not be empty".to_string(),
            ));
        }

        let [first, second] = self.duration_columns;
        if first == second {
            return Err(StatsError::InvalidConfig(format!(
                "duration columns must differ (got {} twice)",
                first
            )));
        }
        if let Some(col) = [first, second].into_iter().find(|&c| c >= FIELDS_PER_ROW) {
            return Err(StatsError::InvalidConfig(format!(
                "duration column {} out of range (rows have {} fields)",
                col, FIELDS_PER_ROW
            )));
        }

        Ok(())
    }
}

/// Slice of a document between the first two sentinel markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> TableRegion<'a> {
    /// Locate the region spanning the first two occurrences of `marker`
    ///
    /// The span starts at the first marker and ends after the second one.
    pub fn locate(document: &'a str, marker: &str) -> Result<Self> {
        let first_len = match marker.chars().next() {
            Some(c) => c.len_utf8(),
            None => {
                return Err(StatsError::InvalidConfig(
                    "table marker must not be empty".to_string(),
                ))
            }
        };

        let start = match document.find(marker) {
            Some(pos) => pos,
            None => {
                return Err(StatsError::RegionNotFound {
                    marker: marker.to_string(),
                    found: 0,
                })
            }
        };

        let resume = start + first_len;
        let second = match document[resume..].find(marker) {
            Some(offset) => resume + offset,
            None => {
                return Err(StatsError::RegionNotFound {
                    marker: marker.to_string(),
                    found: 1,
                })
            }
        };

        let end = second + marker.len();
        Ok(Self {
            text: &document[start..end],
            start,
            end,
        })
    }

    /// Region text, markers included
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte span of the region within the source document
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Lines shaped like a four-separator table row
    pub fn table_lines(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.text
            .lines()
            .filter(|line| line.matches(SEPARATOR).count() == SEPARATORS_PER_ROW)
    }

    /// Table lines after skipping `header_rows`
    pub fn data_rows(&self, header_rows: usize) -> impl Iterator<Item = &'a str> + 'a {
        self.table_lines().skip(header_rows)
    }
}

/// Parse one data row into its two records
///
/// `row` is the 1-based position among data rows and becomes the label
/// prefix.
pub fn parse_row(line: &str, row: usize, columns: [usize; 2]) -> Result<[TimedRecord; 2]> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(StatsError::MalformedRow {
            row,
            line: line.to_string(),
            reason: format!(
                "expected {} fields, found {}",
                FIELDS_PER_ROW,
                fields.len()
            ),
        });
    }

    let cell_ms = |index: usize| -> Result<f64> {
        let cell = fields
            .get(index)
            .ok_or_else(|| StatsError::MalformedRow {
                row,
                line: line.to_string(),
                reason: format!("no field at index {}", index),
            })?
            .trim_matches(CELL_DECORATION);
        parse_ms(cell).map_err(|source| StatsError::InvalidRow {
            row,
            line: line.to_string(),
            source: Box::new(source),
        })
    };

    Ok([
        TimedRecord::new(row, 1, cell_ms(columns[0])?),
        TimedRecord::new(row, 2, cell_ms(columns[1])?),
    ])
}

/// Extract all timed records from a document
///
/// Fails on the first missing marker, malformed row or bad duration; no
/// partial result is returned.
pub fn extract_records(document: &str, layout: &TableLayout) -> Result<Vec<TimedRecord>> {
    layout.validate()?;

    let region = TableRegion::locate(document, &layout.marker)?;
    let (start, end) = region.span();
    debug!("Table region at bytes {}..{}", start, end);

    let mut records = Vec::new();
    for (index, line) in region.data_rows(layout.header_rows).enumerate() {
        let row = index + 1;
        records.extend(parse_row(line, row, layout.duration_columns)?);
    }

    debug!("Extracted {} records", records.len());
    Ok(records)
}
