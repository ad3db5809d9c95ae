use tabled::builder::Builder;
use tabled::settings::Style;

use crate::data::model::{Column, DataFrame};
use crate::report::info::fmt_stat;
use crate::stats::Describe;

// ---------------------------------------------------------------------------
// Full descriptive report (all columns, mixed statistics)
// ---------------------------------------------------------------------------

/// Header line identifying the built-in report file.
pub const REPORT_HEADER: &str = "EDA report (Rust)";

/// Statistic rows of the mixed describe table. Numeric columns fill the
/// numeric rows and show `NaN` for the categorical ones; categorical and bool
/// columns do the opposite.
const STAT_ROWS: [&str; 11] = [
    "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max",
];

enum ColumnSummary {
    Numeric(Describe),
    Categorical {
        count: usize,
        unique: usize,
        top: String,
        freq: usize,
    },
}

fn summarize_column(col: &Column) -> ColumnSummary {
    if col.is_numeric() {
        ColumnSummary::Numeric(Describe::from_values(&col.numeric_values()))
    } else {
        let counts = col.value_counts();
        let (top, freq) = counts
            .first()
            .cloned()
            .unwrap_or((String::from("NaN"), 0));
        ColumnSummary::Categorical {
            count: col.non_null(),
            unique: counts.len(),
            top,
            freq,
        }
    }
}

fn stat_cell(summary: &ColumnSummary, stat: &str) -> String {
    match summary {
        ColumnSummary::Numeric(d) => match stat {
            "count" => d.count.to_string(),
            "mean" => fmt_stat(d.mean),
            "std" => fmt_stat(d.std),
            "min" => fmt_stat(d.min),
            "25%" => fmt_stat(d.q25),
            "50%" => fmt_stat(d.median),
            "75%" => fmt_stat(d.q75),
            "max" => fmt_stat(d.max),
            _ => "NaN".to_string(),
        },
        ColumnSummary::Categorical {
            count,
            unique,
            top,
            freq,
        } => match stat {
            "count" => count.to_string(),
            "unique" => unique.to_string(),
            "top" => top.clone(),
            "freq" => freq.to_string(),
            _ => "NaN".to_string(),
        },
    }
}

/// Render the report: the identifying header line followed by a
/// descriptive-statistics table covering every column regardless of type,
/// statistics as rows and columns as columns.
pub fn render(df: &DataFrame) -> String {
    let summaries: Vec<ColumnSummary> = df.columns.iter().map(summarize_column).collect();

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(df.columns.iter().map(|c| c.name.clone()));
    builder.push_record(header);

    for stat in STAT_ROWS {
        let mut row = vec![stat.to_string()];
        row.extend(summaries.iter().map(|s| stat_cell(s, stat)));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::blank());

    format!("{REPORT_HEADER}\n{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn mixed_frame() -> DataFrame {
        use CellValue::*;
        DataFrame::new(vec![
            Column {
                name: "species".into(),
                values: vec![
                    Str("adelie".into()),
                    Str("gentoo".into()),
                    Str("adelie".into()),
                ],
            },
            Column {
                name: "mass".into(),
                values: vec![Float(10.0), Float(20.0), Float(30.0)],
            },
        ])
    }

    #[test]
    fn report_starts_with_identifying_header() {
        let report = render(&mixed_frame());
        assert!(report.starts_with("EDA report (Rust)\n"));
    }

    #[test]
    fn report_covers_all_columns_and_statistics() {
        let report = render(&mixed_frame());
        for stat in STAT_ROWS {
            assert!(report.contains(stat), "missing stat row {stat}");
        }
        assert!(report.contains("species"));
        assert!(report.contains("mass"));
    }

    #[test]
    fn categorical_columns_report_unique_top_freq() {
        let report = render(&mixed_frame());
        let unique_row = report.lines().find(|l| l.trim_start().starts_with("unique")).unwrap();
        assert!(unique_row.contains('2'));
        let top_row = report.lines().find(|l| l.trim_start().starts_with("top")).unwrap();
        assert!(top_row.contains("adelie"));
        // numeric column has no mode
        assert!(top_row.contains("NaN"));
    }

    #[test]
    fn numeric_columns_report_moments() {
        let report = render(&mixed_frame());
        let mean_row = report.lines().find(|l| l.trim_start().starts_with("mean")).unwrap();
        assert!(mean_row.contains("20.0000"));
        // categorical column has no mean
        assert!(mean_row.contains("NaN"));
    }
}
