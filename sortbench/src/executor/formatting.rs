//! Report formatting
//!
//! `<label> (n = <size>): <mean>, <std dev>`, one line per algorithm.
//! Values use the default `f64` formatting with no fixed precision.

use super::statistics::ComparisonReport;
use std::fmt::Write as _;
use std::io;

/// Render a report as text, one newline-terminated line per algorithm
pub fn format_report(report: &ComparisonReport) -> String {
    let mut output = String::new();
    for summary in &report.summaries {
        let _ = writeln!(
            output,
            "{} (n = {}): {}, {}",
            summary.algorithm.label(),
            report.array_size,
            summary.stats.mean,
            summary.stats.std_dev
        );
    }
    output
}

/// Write a formatted report to `out`
pub fn write_report<W: io::Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    out.write_all(format_report(report).as_bytes())
}
