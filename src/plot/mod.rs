/// Chart rendering: the pairwise-relationship grid and the user-selected
/// chart, both written as PNG files through the plotters bitmap backend.
pub mod charts;
pub mod pairgrid;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::model::{CellValue, Column};
use crate::error::EdaError;

pub(crate) fn render_err<E: std::fmt::Display>(e: E) -> EdaError {
    EdaError::Render(e.to_string())
}

// ---------------------------------------------------------------------------
// Shared panel drawing
// ---------------------------------------------------------------------------

/// Equal-width bins over the finite values: `(lower, upper, count)` per bin.
/// A constant column collapses into a single unit-width bin.
pub(crate) fn bin_values(values: &[f64], bins: usize) -> Vec<(f64, f64, usize)> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };
    let n_bins = if max > min { bins } else { 1 };

    let mut counts = vec![0usize; n_bins];
    for v in finite {
        let mut idx = ((v - min) / width) as usize;
        if idx >= n_bins {
            idx = n_bins - 1;
        }
        counts[idx] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            (
                min + i as f64 * width,
                min + (i + 1) as f64 * width,
                c,
            )
        })
        .collect()
}

/// Row-aligned numeric pairs of two columns; rows where either cell is null
/// or non-numeric contribute no point.
pub(crate) fn numeric_pairs(a: &Column, b: &Column) -> Vec<(f64, f64)> {
    a.values
        .iter()
        .zip(&b.values)
        .filter_map(|(x, y)| Some((CellValue::as_f64(x)?, CellValue::as_f64(y)?)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// Data range padded by 5% on each side; degenerate input falls back to a
/// unit range so the chart still builds.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Histogram drawn into one panel of a drawing area.
pub(crate) fn histogram_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    values: &[f64],
) -> Result<(), EdaError> {
    let bins = bin_values(values, 10);
    let (x_min, x_max) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.0, last.1),
        _ => (0.0, 1.0),
    };
    let y_max = bins.iter().map(|b| b.2).max().unwrap_or(0) as u32 + 1;

    let mut builder = ChartBuilder::on(area);
    builder.margin(5).x_label_area_size(18).y_label_area_size(28);
    if !caption.is_empty() {
        builder.caption(caption, ("sans-serif", 14));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, 0u32..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 10))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(bins.iter().map(|&(x0, x1, count)| {
            Rectangle::new([(x0, 0u32), (x1, count as u32)], BLUE.mix(0.5).filled())
        }))
        .map_err(render_err)?;
    Ok(())
}

/// Scatter points drawn into one panel of a drawing area.
pub(crate) fn scatter_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    points: &[(f64, f64)],
) -> Result<(), EdaError> {
    let x_range = padded_range(points.iter().map(|p| p.0));
    let y_range = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .x_label_area_size(18)
        .y_label_area_size(28)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 10))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 2, BLUE.filled())),
        )
        .map_err(render_err)?;
    Ok(())
}

/// A bare chart frame with no plotted data, used for the unrecognized-chart
/// and not-enough-columns cases. Drawn without tick labels so it renders even
/// where no fonts are installed.
pub(crate) fn empty_axes(root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), EdaError> {
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()
        .map_err(render_err)?;
    Ok(())
}
