use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, anyhow};
use bf_conf::InputConf;
use bf_stat::Scalar;

/// 读取 CSV 文件中指定列的全部单元格
///
/// Cells are kept as text; numeric interpretation happens during digit
/// extraction. Blank and missing cells become [`Scalar::Empty`].
pub fn load_column(path: &Path, column: &str, conf: &InputConf) -> anyhow::Result<Vec<Scalar>> {
    let file = File::open(path).with_context(|| format!("open input file {}", path.display()))?;
    let values = read_column(file, column, conf)
        .with_context(|| format!("read column '{}' from {}", column, path.display()))?;
    log::info!(
        "loaded {} cells of column '{}' from {}",
        values.len(),
        column,
        path.display()
    );
    Ok(values)
}

/// Read `column` from CSV data. With headers disabled `column` is a
/// zero-based index.
pub fn read_column<R: Read>(reader: R, column: &str, conf: &InputConf) -> anyhow::Result<Vec<Scalar>> {
    let trim = if conf.trim {
        csv::Trim::All
    } else {
        csv::Trim::None
    };
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(conf.delimiter_byte()?)
        .has_headers(conf.has_headers)
        .trim(trim)
        .flexible(true)
        .from_reader(reader);

    let index = resolve_column(&mut rdr, column, conf.has_headers)?;
    let mut values = Vec::new();
    let mut missing = 0usize;
    for (row, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV record #{}", row + 1))?;
        let cell = record.get(index);
        if cell.is_none() {
            missing += 1;
        }
        values.push(cell_scalar(cell));
    }
    if missing > 0 {
        log::warn!("{} rows are shorter than column #{}", missing, index);
    }
    Ok(values)
}

fn resolve_column<R: Read>(
    rdr: &mut csv::Reader<R>,
    column: &str,
    has_headers: bool,
) -> anyhow::Result<usize> {
    if !has_headers {
        return column.trim().parse::<usize>().map_err(|_| {
            anyhow!(
                "column must be a zero-based index when headers are disabled (got '{}')",
                column
            )
        });
    }
    let headers = rdr.headers().context("read CSV header")?;
    headers
        .iter()
        .position(|h| h == column)
        .or_else(|| headers.iter().position(|h| h.trim() == column.trim()))
        .ok_or_else(|| {
            anyhow!(
                "column '{}' not found (available: {})",
                column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })
}

fn cell_scalar(cell: Option<&str>) -> Scalar {
    match cell.map(Scalar::from) {
        Some(value) if !value.is_empty() => value,
        _ => Scalar::Empty,
    }
}
