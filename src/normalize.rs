//! Adapters turning structured input into header and row cells.
//!
//! Each accepted input shape has its own function. All of them produce a
//! [`RawTable`], which [`RawTable::into_table`] turns into a [`Table`].

use std::collections::BTreeMap;

use crate::{error::TableError, table::Table};

/// Header and rows of text cells, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Use `header` instead of promoting the first row.
    #[must_use]
    pub fn with_header<T: ToString>(mut self, header: &[T]) -> Self {
        self.header = header.iter().map(ToString::to_string).collect();
        self
    }

    /// Validate into a [`Table`].
    ///
    /// # Errors
    /// Returns [`TableError::EmptyInput`] when there are no data rows.
    pub fn into_table(self) -> Result<Table, TableError> { Table::new(self.header, self.rows) }
}

/// How floating point values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// Shortest decimal that reads back to the same value.
    #[default]
    Decimal,
    /// Scientific notation, e.g. `1.5e3`.
    Exponent,
    /// A fixed number of digits after the point.
    Fixed(usize),
}

impl FloatFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::Exponent => format!("{value:e}"),
            Self::Fixed(digits) => format!("{value:.digits$}"),
        }
    }
}

/// One value of a mixed-type row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// No value; rendered as the empty placeholder.
    Empty,
}

impl Cell {
    fn to_text(&self, floats: FloatFormat) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => floats.format(*f),
            Self::Bool(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Self::Text(s) }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self { Self::Int(n) }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self { Self::Float(f) }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self { Self::Bool(b) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self { value.map_or(Self::Empty, Into::into) }
}

/// Rows of any displayable values: strings, integers, booleans.
///
/// The first row becomes the header unless one is set with
/// [`RawTable::with_header`].
#[must_use]
pub fn from_rows<R, T>(rows: &[R]) -> RawTable
where
    R: AsRef<[T]>,
    T: ToString,
{
    RawTable {
        header: Vec::new(),
        rows: rows
            .iter()
            .map(|row| row.as_ref().iter().map(ToString::to_string).collect())
            .collect(),
    }
}

/// Rows of floating point values.
#[must_use]
pub fn from_floats<R: AsRef<[f64]>>(rows: &[R], format: FloatFormat) -> RawTable {
    RawTable {
        header: Vec::new(),
        rows: rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&v| format.format(v)).collect())
            .collect(),
    }
}

/// Rows mixing values of different types.
#[must_use]
pub fn from_cells<R: AsRef<[Cell]>>(rows: &[R], floats: FloatFormat) -> RawTable {
    RawTable {
        header: Vec::new(),
        rows: rows
            .iter()
            .map(|row| row.as_ref().iter().map(|c| c.to_text(floats)).collect())
            .collect(),
    }
}

/// Named columns; names become the header in sorted order.
///
/// Columns shorter than the longest one leave empty cells at the bottom.
#[must_use]
pub fn from_columns<T: ToString>(columns: &BTreeMap<String, Vec<T>>) -> RawTable {
    let height = columns.values().map(Vec::len).max().unwrap_or(0);
    let rows = (0..height)
        .map(|r| {
            columns
                .values()
                .map(|col| col.get(r).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();
    RawTable {
        header: columns.keys().cloned().collect(),
        rows,
    }
}

/// Lines of `delimiter`-separated text.
///
/// Blank lines are skipped and the two-character sequence `\n` inside a cell
/// becomes a line break. Without a header line every column is unlabelled.
#[must_use]
pub fn from_delimited(text: &str, delimiter: char, has_header: bool) -> RawTable {
    let mut rows: Vec<Vec<String>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(delimiter)
                .map(|cell| cell.replace("\\n", "\n"))
                .collect()
        })
        .collect();
    let header = if has_header && !rows.is_empty() {
        rows.remove(0)
    } else {
        vec![String::new(); rows.iter().map(Vec::len).max().unwrap_or(0)]
    };
    RawTable { header, rows }
}
