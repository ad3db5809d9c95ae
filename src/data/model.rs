use std::collections::BTreeMap;
use std::fmt;
use std::io;

use serde::Serialize;

use crate::error::EdaError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common dataframe dtypes.
/// Used as a `BTreeMap` key downstream, so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can key BTreeMaps with CellValue --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Int(_) => 2,
                Float(_) => 3,
                Str(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric work.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Raw text form used when serializing the frame back to CSV.
    /// Unlike `Display`, floats keep full precision and nulls become empty.
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Str(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred dtype of a whole column
// ---------------------------------------------------------------------------

/// Column dtype obtained by promotion over its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Text => "text",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Dtype promotion over the cells:
    /// * any string cell makes the column `Text`
    /// * bool cells mixed with numbers also degrade to `Text`
    /// * integer columns containing nulls promote to `Float`
    /// * an all-null column reads as `Float`
    pub fn dtype(&self) -> ColumnType {
        let (mut str_, mut int, mut float, mut bool_, mut null) =
            (false, false, false, false, false);
        for v in &self.values {
            match v {
                CellValue::Str(_) => str_ = true,
                CellValue::Int(_) => int = true,
                CellValue::Float(_) => float = true,
                CellValue::Bool(_) => bool_ = true,
                CellValue::Null => null = true,
            }
        }
        if str_ || (bool_ && (int || float)) {
            ColumnType::Text
        } else if bool_ {
            ColumnType::Bool
        } else if float || (int && null) {
            ColumnType::Float
        } else if int {
            ColumnType::Int
        } else {
            ColumnType::Float
        }
    }

    /// Number of non-null cells.
    pub fn non_null(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.dtype(), ColumnType::Int | ColumnType::Float)
    }

    /// Text columns are the categorical ones; bool columns are neither
    /// numeric nor categorical.
    pub fn is_categorical(&self) -> bool {
        self.dtype() == ColumnType::Text
    }

    /// Numeric cells as `f64`, nulls and non-numeric cells skipped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(CellValue::as_f64).collect()
    }

    /// Frequency of each non-null value, ordered by descending count,
    /// ties broken by the value's text form. The ordering is deterministic
    /// across repeated calls on the same column.
    pub fn value_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&CellValue, usize> = BTreeMap::new();
        for v in &self.values {
            if !v.is_null() {
                *counts.entry(v).or_default() += 1;
            }
        }
        let mut out: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(v, c)| (v.to_string(), c))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }
}

// ---------------------------------------------------------------------------
// DataFrame – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset. Columns keep the CSV header order; that order is
/// load-bearing because chart selection is positional ("first categorical
/// column", "first two numeric columns").
#[derive(Debug, Clone)]
pub struct DataFrame {
    pub columns: Vec<Column>,
}

impl DataFrame {
    pub fn new(columns: Vec<Column>) -> Self {
        DataFrame { columns }
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Numeric columns in header order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }

    /// Categorical (text) columns in header order.
    pub fn categorical_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_categorical()).collect()
    }

    /// Serialize the frame back to CSV. Nulls become empty fields and floats
    /// keep full precision, so a round trip through another CSV reader sees
    /// the same numbers.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), EdaError> {
        let mut w = csv::Writer::from_writer(writer);
        w.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in 0..self.n_rows() {
            w.write_record(self.columns.iter().map(|c| c.values[row].to_field()))?;
        }
        w.flush()?;
        Ok(())
    }
}
