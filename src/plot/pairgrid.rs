use std::path::Path;

use plotters::prelude::*;

use super::{histogram_panel, numeric_pairs, render_err, scatter_panel};
use crate::data::model::DataFrame;
use crate::error::EdaError;

const SIZE: (u32, u32) = (900, 900);

// ---------------------------------------------------------------------------
// Pairwise-relationship grid
// ---------------------------------------------------------------------------

/// Render the pair plot: an N×N grid over the N numeric columns, histograms
/// on the diagonal and scatter panels off-diagonal, written as a PNG.
///
/// A dataset with zero numeric columns produces a valid blank image rather
/// than an error.
pub fn render(df: &DataFrame, path: &Path) -> Result<(), EdaError> {
    let numeric = df.numeric_columns();
    let n = numeric.len();

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    if n == 0 {
        log::warn!("pair plot requested for a dataset with no numeric columns");
        root.present().map_err(render_err)?;
        return Ok(());
    }

    let panels = root.split_evenly((n, n));
    for (idx, panel) in panels.iter().enumerate() {
        let (row, col) = (idx / n, idx % n);
        if row == col {
            histogram_panel(panel, &numeric[row].name, &numeric[row].numeric_values())?;
        } else {
            let points = numeric_pairs(numeric[col], numeric[row]);
            scatter_panel(panel, &points)?;
        }
    }

    root.present().map_err(render_err)?;
    log::debug!("pair plot ({n}x{n}) written to {}", path.display());
    Ok(())
}
