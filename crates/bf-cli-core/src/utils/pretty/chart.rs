//! 观测/期望首位数字分布的字符条形图

use std::fmt::Write;

use bf_stat::{AnalysisReport, LeadingDigit};

pub const CHART_WIDTH: usize = 40;

/// Side-by-side bars per digit: `#` observed, `=` expected. The longest bar
/// spans `width` columns.
pub fn render_chart(report: &AnalysisReport, width: usize) -> String {
    let max = report
        .observed()
        .iter()
        .chain(report.expected().iter())
        .map(|(_, c)| c)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();
    let _ = writeln!(out, "First digit counts: observed (#) vs expected (=)");
    for digit in LeadingDigit::ALL {
        let observed = report.observed()[digit];
        let expected = report.expected()[digit];
        let _ = writeln!(
            out,
            "{} | {} {}",
            digit,
            "#".repeat(bar_len(observed, max, width)),
            observed
        );
        let _ = writeln!(
            out,
            "  | {} {}",
            "=".repeat(bar_len(expected, max, width)),
            expected
        );
    }
    out
}

fn bar_len(count: u64, max: u64, width: usize) -> usize {
    ((count * width as u64 + max / 2) / max) as usize
}
