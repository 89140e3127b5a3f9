pub mod data;
pub mod utils;

// Re-export loaders and printers for convenience
pub use data::{load_column, read_column};
pub use utils::pretty::{
    CHART_SIZE, CHART_WIDTH, ChartError, ChartResult, ReportView, chart_series, expected_table,
    print_report_json, print_report_table, render_chart, render_chart_png, report_headline,
    report_json, report_table,
};
