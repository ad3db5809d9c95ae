use std::path::Path;

use super::model::{CellValue, Column, DataFrame};
use crate::error::EdaError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file. The header row supplies the column names;
/// column order is preserved as parsed.
///
/// Each cell is inferred independently (int → float → bool → text, empty ⇒
/// null); the column dtype is the promotion over its cells. No validation is
/// performed beyond what the CSV reader enforces: malformed input surfaces as
/// [`EdaError::Parse`] and fails the whole request.
pub fn load_csv(path: &Path) -> Result<DataFrame, EdaError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut columns: Vec<Column> = reader
        .headers()?
        .iter()
        .map(Column::new)
        .collect();

    for result in reader.records() {
        let record = result?;
        for (idx, column) in columns.iter_mut().enumerate() {
            column.values.push(parse_cell(record.get(idx).unwrap_or("")));
        }
    }

    let df = DataFrame::new(columns);
    log::debug!(
        "loaded {} rows x {} columns from {}",
        df.n_rows(),
        df.n_cols(),
        path.display()
    );
    Ok(df)
}

fn parse_cell(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Str(s.to_string())
}
