//! Table statistics.
//!
//! Column types follow the usual dataframe storage rules: an integer
//! column with a missing cell is stored as floats, a boolean column with a
//! missing cell or a column holding text falls back to generic objects, and
//! a column whose cells are all missing is a float column. Duplicate rows
//! are detected on the values after that coercion, so `1` in a float column
//! equals `1.0` and `-0.0` equals `0.0`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::table::{CellValue, Table};

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Booleans only, none missing
    Bool,
    /// Integers only, none missing
    Int,
    /// Floats, integers mixed with floats, integers with gaps, or nothing but gaps
    Float,
    /// Text, or cells of incompatible kinds
    Object,
}

// What the non-missing cells of a column have shown so far.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Seen {
    Nothing,
    Bool,
    Int,
    Float,
    Object,
}

impl Seen {
    fn of(cell: &CellValue) -> Option<Self> {
        match cell {
            CellValue::Empty => None,
            CellValue::Float(f) if f.is_nan() => None,
            CellValue::Bool(_) => Some(Self::Bool),
            CellValue::Int(_) => Some(Self::Int),
            CellValue::Float(_) => Some(Self::Float),
            CellValue::String(_) => Some(Self::Object),
        }
    }

    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Nothing, t) | (t, Self::Nothing) => t,
            (a, b) if a == b => a,
            (Self::Int, Self::Float) | (Self::Float, Self::Int) => Self::Float,
            _ => Self::Object,
        }
    }
}

impl ColumnType {
    /// Infer the storage type of a column.
    ///
    /// A column without any cell at all is `Object`.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut cells = cells.into_iter().peekable();
        if cells.peek().is_none() {
            return Self::Object;
        }

        let mut seen = Seen::Nothing;
        let mut missing = false;
        for cell in cells {
            match Seen::of(cell) {
                Some(kind) => seen = seen.merge(kind),
                None => missing = true,
            }
        }

        match (seen, missing) {
            (Seen::Nothing, _) | (Seen::Float, _) | (Seen::Int, true) => Self::Float,
            (Seen::Int, false) => Self::Int,
            (Seen::Bool, false) => Self::Bool,
            (Seen::Bool, true) | (Seen::Object, _) => Self::Object,
        }
    }

    /// Whether [`Table::describe`] reports on columns of this type.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

/// Summary statistics over a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub rows: usize,
    pub columns: usize,
    /// Number of distinct column storage types
    pub data_types: usize,
    /// Rows without any missing cell
    pub complete_records: usize,
    /// Missing cells across the whole table
    pub missing_values: usize,
    /// Rows identical to an earlier row
    pub duplicate_rows: usize,
}

/// Descriptive statistics of one numeric column.
///
/// Missing cells are skipped. Every figure but `count` is `None` when the
/// column has no values; `std` is also `None` for a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescription {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator)
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// 25th percentile, linearly interpolated
    pub q25: Option<f64>,
    pub median: Option<f64>,
    /// 75th percentile, linearly interpolated
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

// Hashable view of a cell once its column type is applied.
#[derive(PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Missing,
    Bool(bool),
    Int(i64),
    Number(u64),
    String(&'a str),
}

fn number_key(f: f64) -> CellKey<'static> {
    // -0.0 == 0.0
    if f == 0.0 {
        CellKey::Number(0.0f64.to_bits())
    } else {
        CellKey::Number(f.to_bits())
    }
}

fn cell_key(cell: &CellValue, column_type: ColumnType) -> CellKey<'_> {
    if cell.is_missing() {
        return CellKey::Missing;
    }
    match (cell, column_type) {
        (CellValue::Int(i), ColumnType::Int) => CellKey::Int(*i),
        (CellValue::Bool(b), ColumnType::Bool) => CellKey::Bool(*b),
        (CellValue::String(s), _) => CellKey::String(s),
        // Numbers in float and object columns compare by value: 1 == 1.0 == true.
        (CellValue::Bool(b), _) => number_key(f64::from(u8::from(*b))),
        (CellValue::Int(i), _) => number_key(*i as f64),
        (CellValue::Float(f), _) => number_key(*f),
        (CellValue::Empty, _) => CellKey::Missing,
    }
}

fn numeric_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Float(f) if !f.is_nan() => Some(*f),
        _ => None,
    }
}

// Linear interpolation between the two nearest ranks of sorted values.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = last as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

fn describe_values(column: &str, mut values: Vec<f64>) -> ColumnDescription {
    values.sort_by(f64::total_cmp);
    let count = values.len();
    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|mean| {
        let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    });

    ColumnDescription {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

impl Table {
    /// Column types in column order.
    pub fn column_types(&self) -> Vec<ColumnType> {
        (0..self.column_count())
            .map(|index| ColumnType::infer(self.column(index)))
            .collect()
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> TableStats {
        let column_types = self.column_types();
        let data_types = column_types.iter().collect::<HashSet<_>>().len();

        let mut complete_records = 0;
        let mut missing_values = 0;
        for row in self.rows() {
            let missing = row.iter().filter(|cell| cell.is_missing()).count();
            missing_values += missing;
            if missing == 0 {
                complete_records += 1;
            }
        }

        let mut seen = HashSet::with_capacity(self.row_count());
        let duplicate_rows = self
            .rows()
            .iter()
            .filter(|row| {
                let key: Vec<_> = row
                    .iter()
                    .zip(&column_types)
                    .map(|(cell, ty)| cell_key(cell, *ty))
                    .collect();
                !seen.insert(key)
            })
            .count();

        TableStats {
            rows: self.row_count(),
            columns: self.column_count(),
            data_types,
            complete_records,
            missing_values,
            duplicate_rows,
        }
    }

    /// Describe every numeric column, in column order.
    ///
    /// Boolean and object columns are left out; a table without numeric
    /// columns yields an empty list.
    pub fn describe(&self) -> Vec<ColumnDescription> {
        self.column_types()
            .into_iter()
            .enumerate()
            .filter(|(_, ty)| ty.is_numeric())
            .map(|(index, _)| {
                let values = self.column(index).filter_map(numeric_value).collect();
                describe_values(&self.columns()[index], values)
            })
            .collect()
    }
}
