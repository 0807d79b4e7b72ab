//! CSV output format for benchmark timings

use crate::record::TimingSeries;

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput {
    include_share: bool,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new(include_share: bool) -> Self {
        Self { include_share }
    }

    /// Generate CSV header row
    fn header(&self) -> String {
        let mut headers = vec!["label", "ms"];

        if self.include_share {
            headers.push("share");
        }

        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self, series: &TimingSeries) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        for ((label, ms), share) in series.iter().zip(series.shares()) {
            output.push_str(&Self::escape_field(label));
            output.push(',');
            output.push_str(&ms.to_string());

            if self.include_share {
                output.push(',');
                output.push_str(&format!("{:.2}", share));
            }

            output.push('\n');
        }

        output
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new(true)
    }
}
