use bf_stat::{AnalysisReport, BENFORD_PERCENTS, DigitCounts, LeadingDigit};
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};
use serde::Serialize;

use super::chart::{CHART_WIDTH, render_chart};

/// JSON view of a report, tagged with the analysed column.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub column: &'a str,
    pub answer: &'static str,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

impl<'a> ReportView<'a> {
    pub fn new(column: &'a str, report: &'a AnalysisReport) -> Self {
        Self {
            column,
            answer: report.answer(),
            report,
        }
    }
}

pub fn report_headline(report: &AnalysisReport, column: &str) -> String {
    format!(
        "Can we validate Benford's Law based on the '{}' column?\n{}\n{}",
        column,
        report.answer(),
        report.explanation()
    )
}

/// Digit table: Digit | Observed | Observed % | Expected | Benford %
pub fn report_table(report: &AnalysisReport) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec![
        "Digit",
        "Observed",
        "Observed %",
        "Expected",
        "Benford %",
    ]);
    for (i, digit) in LeadingDigit::ALL.into_iter().enumerate() {
        let mut row = CRow::new();
        row.add_cell(Cell::new(digit).set_alignment(CellAlignment::Center));
        row.add_cell(Cell::new(report.observed()[digit]).set_alignment(CellAlignment::Right));
        row.add_cell(
            Cell::new(format!("{:.2}", report.observed_percent().get(digit)))
                .set_alignment(CellAlignment::Right),
        );
        row.add_cell(Cell::new(report.expected()[digit]).set_alignment(CellAlignment::Right));
        row.add_cell(
            Cell::new(format!("{:.1}", BENFORD_PERCENTS[i])).set_alignment(CellAlignment::Right),
        );
        t.add_row(row);
    }
    t
}

/// Expected counts only: Digit | Benford % | Expected
pub fn expected_table(expected: &DigitCounts) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Digit", "Benford %", "Expected"]);
    for ((digit, count), percent) in expected.iter().zip(BENFORD_PERCENTS) {
        let mut row = CRow::new();
        row.add_cell(Cell::new(digit).set_alignment(CellAlignment::Center));
        row.add_cell(Cell::new(format!("{:.1}", percent)).set_alignment(CellAlignment::Right));
        row.add_cell(Cell::new(count).set_alignment(CellAlignment::Right));
        t.add_row(row);
    }
    t
}

/// Print headline, digit table, statistic and (optionally) the chart.
pub fn print_report_table(report: &AnalysisReport, column: &str, show_chart: bool) {
    println!("{}", report_headline(report, column));
    println!();
    println!("{}", report_table(report));
    let test = report.test();
    println!(
        "\nChi-square statistic: {} (raw {:.4}), critical value {} at alpha={}",
        test.rounded_statistic(),
        test.statistic(),
        test.critical_value(),
        test.significance()
    );
    println!(
        "Sample size: {} ({} values without a leading digit dropped)",
        report.sample_size(),
        report.dropped()
    );
    if show_chart {
        println!();
        print!("{}", render_chart(report, CHART_WIDTH));
    }
}

pub fn report_json(report: &AnalysisReport, column: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&ReportView::new(column, report))?)
}

pub fn print_report_json(report: &AnalysisReport, column: &str) -> anyhow::Result<()> {
    println!("{}", report_json(report, column)?);
    Ok(())
}
