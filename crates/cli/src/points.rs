//! Point-cloud loading from tabular files with `x` and `y` columns.

use anyhow::{bail, Context, Result};
use bricks::dim2::Point2;
use polars::prelude::*;
use std::path::Path;

/// Read planar points from a CSV or Parquet file, in row order.
///
/// The file must carry numeric `x` and `y` columns; integer columns are widened.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish(),
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default()),
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x,y from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "points_loaded");

    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point2::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` at row {row}")))
        .collect()
}
