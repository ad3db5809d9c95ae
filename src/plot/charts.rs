use std::fmt;
use std::path::Path;
use std::str::FromStr;

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use super::{empty_axes, histogram_panel, numeric_pairs, padded_range, render_err};
use crate::color::generate_palette;
use crate::data::model::{Column, DataFrame};
use crate::error::EdaError;

const SIZE: (u32, u32) = (800, 600);

// ---------------------------------------------------------------------------
// ChartKind – the user-selected chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Histogram,
    Bar,
    Pie,
    Scatter,
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            "scatter" => Ok(ChartKind::Scatter),
            other => Err(format!("unknown chart kind: {other}")),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Chart renderer
// ---------------------------------------------------------------------------

/// Render the selected chart to a PNG file.
///
/// `None` stands for an unrecognized chart choice and draws a bare figure,
/// as does a scatter over a frame with fewer than two numeric columns. Bar,
/// pie and histogram charts over frames lacking an eligible column fail with
/// [`EdaError::PlotPrecondition`].
pub fn render(df: &DataFrame, kind: Option<ChartKind>, path: &Path) -> Result<(), EdaError> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    match kind {
        Some(ChartKind::Histogram) => histogram_chart(df, &root)?,
        Some(ChartKind::Bar) => bar_chart(df, &root)?,
        Some(ChartKind::Pie) => pie_chart(df, &root)?,
        Some(ChartKind::Scatter) => scatter_chart(df, &root)?,
        None => empty_axes(&root)?,
    }

    root.present().map_err(render_err)?;
    log::debug!(
        "{} chart written to {}",
        kind.map(|k| k.to_string()).unwrap_or_else(|| "blank".into()),
        path.display()
    );
    Ok(())
}

/// First categorical column in header order; repeated calls over the same
/// frame always pick the same column.
fn first_categorical(df: &DataFrame) -> Result<&Column, EdaError> {
    df.categorical_columns()
        .into_iter()
        .next()
        .ok_or_else(|| EdaError::PlotPrecondition("dataset has no categorical columns".into()))
}

type Root<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn histogram_chart(df: &DataFrame, root: &Root) -> Result<(), EdaError> {
    let numeric = df.numeric_columns();
    if numeric.is_empty() {
        return Err(EdaError::PlotPrecondition(
            "dataset has no numeric columns".into(),
        ));
    }

    let cols = (numeric.len() as f64).sqrt().ceil() as usize;
    let rows = numeric.len().div_ceil(cols);
    let panels = root.split_evenly((rows, cols));
    for (column, panel) in numeric.iter().zip(panels.iter()) {
        histogram_panel(panel, &column.name, &column.numeric_values())?;
    }
    Ok(())
}

fn bar_chart(df: &DataFrame, root: &Root) -> Result<(), EdaError> {
    let column = first_categorical(df)?;
    let counts = column.value_counts();
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0) as u32;
    let n = counts.len() as i32;

    let mut chart = ChartBuilder::on(root)
        .caption(format!("{} value counts", column.name), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..n - 1).into_segmented(), 0u32..max_count + 1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(column.name.as_str())
        .y_desc("count")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(8)
                .data(
                    counts
                        .iter()
                        .enumerate()
                        .map(|(i, &(_, c))| (i as i32, c as u32)),
                ),
        )
        .map_err(render_err)?;
    Ok(())
}

fn pie_chart(df: &DataFrame, root: &Root) -> Result<(), EdaError> {
    let column = first_categorical(df)?;
    let counts = column.value_counts();
    let total: usize = counts.iter().map(|&(_, c)| c).sum();

    let sizes: Vec<f64> = counts.iter().map(|&(_, c)| c as f64).collect();
    let colors = generate_palette(counts.len());
    let labels: Vec<String> = counts
        .iter()
        .map(|(label, c)| format!("{label} ({:.1}%)", *c as f64 * 100.0 / total as f64))
        .collect();

    let titled = root
        .titled(
            &format!("{} value counts", column.name),
            ("sans-serif", 24),
        )
        .map_err(render_err)?;
    let (w, h) = titled.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font());
    titled.draw(&pie).map_err(render_err)?;
    Ok(())
}

fn scatter_chart(df: &DataFrame, root: &Root) -> Result<(), EdaError> {
    let numeric = df.numeric_columns();
    if numeric.len() < 2 {
        log::debug!("scatter requested with fewer than two numeric columns, drawing empty axes");
        return empty_axes(root);
    }
    let (x_col, y_col) = (numeric[0], numeric[1]);
    let points = numeric_pairs(x_col, y_col);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} vs {}", x_col.name, y_col.name),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded_range(points.iter().map(|p| p.0)),
            padded_range(points.iter().map(|p| p.1)),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_col.name.as_str())
        .y_desc(y_col.name.as_str())
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(render_err)?;
    Ok(())
}
