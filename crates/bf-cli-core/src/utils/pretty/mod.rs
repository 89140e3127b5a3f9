pub mod chart;
pub mod plot;
pub mod report;

pub use chart::{CHART_WIDTH, render_chart};
pub use plot::{CHART_SIZE, ChartError, ChartResult, chart_series, render_chart_png};
pub use report::{
    ReportView, expected_table, print_report_json, print_report_table, report_headline,
    report_json, report_table,
};
