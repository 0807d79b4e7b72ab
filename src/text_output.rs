//! Plain-text summary table for benchmark timings
//!
//! Layout follows strace -c style summaries: share first, then the absolute
//! time, then the part label, with a separator and a total line.

use crate::record::TimingSeries;

/// Render the summary table
pub fn format_summary(series: &TimingSeries) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:>7} {:>14}  {}\n", "% time", "ms", "part"));
    output.push_str("------- --------------  ----------\n");

    for ((label, ms), share) in series.iter().zip(series.shares()) {
        output.push_str(&format!("{:>7.2} {:>14.4}  {}\n", share, ms, label));
    }

    output.push_str("------- --------------  ----------\n");
    let total_share = if series.total_ms() > 0.0 { 100.0 } else { 0.0 };
    output.push_str(&format!(
        "{:>7.2} {:>14.4}  total ({} parts)\n",
        total_share,
        series.total_ms(),
        series.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TimedRecord;

    #[test]
    fn test_summary_lines() {
        let series = TimingSeries::from_records(&[
            TimedRecord::new(1, 1, 10.5),
            TimedRecord::new(1, 2, 2300.0),
        ]);
        let text = format_summary(&series);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("% time"));
        assert!(lines[2].ends_with("1-1"));
        assert!(lines[2].contains("10.5000"));
        assert!(lines[3].contains("2300.0000"));
        assert!(lines[5].contains("100.00"));
        assert!(lines[5].ends_with("total (2 parts)"));
    }

    #[test]
    fn test_summary_empty_series() {
        let text = format_summary(&TimingSeries::default());
        assert!(text.contains("total (0 parts)"));
        assert!(text.contains("0.00"));
    }
}
