//! 观测/期望首位数字计数折线图（PNG）
//!
//! Drawn with [`plotters`] on the bitmap backend. Both series share the
//! x-axis of digits 1-9 and a count y-axis scaled to the larger series.

use std::path::Path;

use bf_stat::{AnalysisReport, DigitCounts};
use plotters::prelude::*;
use thiserror::Error;

/// Output resolution in pixels.
pub const CHART_SIZE: (u32, u32) = (1000, 600);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),
}

pub type ChartResult<T> = Result<T, ChartError>;

/// `(digit, count)` points of one series, digit 1 first.
pub fn chart_series(counts: &DigitCounts) -> Vec<(u32, u64)> {
    counts
        .iter()
        .map(|(digit, count)| (u32::from(digit.get()), count))
        .collect()
}

/// Upper bound of the count axis: the largest count plus 10% headroom.
fn y_axis_top(observed: &[(u32, u64)], expected: &[(u32, u64)]) -> u64 {
    let max = observed
        .iter()
        .chain(expected)
        .map(|(_, c)| *c)
        .max()
        .unwrap_or(0)
        .max(1);
    max + max / 10 + 1
}

/// Save the observed and expected series as a line chart at `path`.
///
/// The parent directory must exist. Text is rendered with system fonts, so
/// headless hosts without fonts fail with [`ChartError::ChartConfig`].
pub fn render_chart_png(report: &AnalysisReport, path: &Path) -> ChartResult<()> {
    if let Some(dir) = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty() && !d.is_dir())
    {
        return Err(ChartError::MissingDir(dir.display().to_string()));
    }

    let observed = chart_series(report.observed());
    let expected = chart_series(report.expected());
    let y_top = y_axis_top(&observed, &expected);

    let drawing_area = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    drawing_area
        .fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption("Observed vs Benford-expected first digits", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(1u32..9u32, 0u64..y_top)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_labels(9)
        .x_desc("First digit")
        .y_desc("Count")
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(observed, &BLUE))
        .map_err(|e| ChartError::Drawing(e.to_string()))?
        .label("Observed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(expected, &RED))
        .map_err(|e| ChartError::Drawing(e.to_string()))?
        .label("Expected")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    log::info!("wrote chart {}", path.display());
    Ok(())
}
