use std::fs;
use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::Style;
use tempfile::NamedTempFile;

use crate::data::model::DataFrame;
use crate::error::EdaError;
use crate::stats::Describe;

// ---------------------------------------------------------------------------
// Info & describe reporter
// ---------------------------------------------------------------------------

/// Render the full info text: a structural summary of the frame followed by
/// the transposed describe table, under labeled markdown headings.
///
/// The schema block is written through a named temp-file buffer that is read
/// back into memory and deleted before this function returns; no file outlives
/// the call.
pub fn render(df: &DataFrame) -> Result<String, EdaError> {
    let mut out = String::from("### DataFrame Info\n");

    let mut buffer = NamedTempFile::new()?;
    write_schema(df, &mut buffer)?;
    buffer.flush()?;
    out.push_str(&fs::read_to_string(buffer.path())?);
    drop(buffer);

    out.push_str("\n### DataFrame Describe (Transposed)\n");
    out.push_str(&describe_markdown(df));
    out.push('\n');
    Ok(out)
}

/// Write the structural summary: row/column counts, then one line per column
/// with its non-null count and inferred dtype.
pub fn write_schema<W: io::Write>(df: &DataFrame, mut out: W) -> io::Result<()> {
    writeln!(out, "DataFrame: {} rows, {} columns", df.n_rows(), df.n_cols())?;

    let width = df
        .columns
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("Column".len());

    writeln!(out, " #   {:<width$}  Non-Null  Dtype", "Column")?;
    writeln!(out, "---  {:-<width$}  --------  -----", "")?;
    for (i, col) in df.columns.iter().enumerate() {
        writeln!(
            out,
            " {i:<3} {:<width$}  {:<8}  {}",
            col.name,
            col.non_null(),
            col.dtype()
        )?;
    }
    Ok(())
}

/// The describe table as a markdown pipe table, transposed: one row per
/// numeric column, the eight standard statistics as columns.
pub fn describe_markdown(df: &DataFrame) -> String {
    let mut builder = Builder::default();
    builder.push_record(["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]);

    for col in df.numeric_columns() {
        let d = Describe::from_values(&col.numeric_values());
        builder.push_record([
            col.name.clone(),
            d.count.to_string(),
            fmt_stat(d.mean),
            fmt_stat(d.std),
            fmt_stat(d.min),
            fmt_stat(d.q25),
            fmt_stat(d.median),
            fmt_stat(d.q75),
            fmt_stat(d.max),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table.to_string()
}

pub(crate) fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.4}")
    }
}
