//! The table data model and natural column widths.

use tracing::debug;

use crate::{error::TableError, width::display_width};

/// One rendered row of cells.
///
/// Continuation rows hold the wrapped tails of the row above them and are
/// drawn without a separator line in between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<String>,
    pub continuation: bool,
}

impl Row {
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            continuation: false,
        }
    }

    #[must_use]
    pub fn continuation(cells: Vec<String>) -> Self {
        Self {
            cells,
            continuation: true,
        }
    }
}

/// A header and at least one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from normalized cells.
    ///
    /// An empty `header` is taken from the first row. A header shorter than
    /// the widest row gains blank labels at the front so that every column
    /// has a label.
    ///
    /// # Errors
    /// Returns [`TableError::EmptyInput`] when no data rows remain.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut rows = rows.into_iter();
        let header = if header.is_empty() {
            rows.next().ok_or(TableError::EmptyInput)?
        } else {
            header
        };
        let rows: Vec<Row> = rows.map(Row::new).collect();
        Self::from_rows(header, rows)
    }

    /// Build a table from rows that may already carry continuation flags.
    ///
    /// Labels are drawn on a single line, so line breaks in the header are
    /// replaced with spaces.
    ///
    /// # Errors
    /// Returns [`TableError::EmptyInput`] when `rows` is empty.
    pub fn from_rows(mut header: Vec<String>, rows: Vec<Row>) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::EmptyInput);
        }
        for label in header.iter_mut().filter(|l| l.contains('\n')) {
            *label = label.lines().collect::<Vec<_>>().join(" ");
        }
        let columns = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        if header.len() < columns {
            let mut padded = vec![String::new(); columns - header.len()];
            padded.append(&mut header);
            header = padded;
        }
        Ok(Self { header, rows })
    }

    #[must_use]
    pub fn header(&self) -> &[String] { &self.header }

    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize { self.header.len() }

    /// Replace the rows, keeping the header.
    #[must_use]
    pub fn with_rows(self, rows: Vec<Row>) -> Self {
        Self {
            header: self.header,
            rows,
        }
    }

    /// Content-driven width of every column.
    ///
    /// A column is as wide as its widest cell or its label. Rows that stop
    /// short of a column do not affect it.
    #[must_use]
    pub fn natural_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(display_width(cell));
            }
        }
        debug!(?widths, "natural column widths");
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::cells;

    #[test]
    fn first_row_becomes_header() {
        let table = Table::new(vec![], vec![cells!["a", "b"], cells!["1", "2"]]).unwrap();
        assert_eq!(table.header(), cells!["a", "b"]);
        assert_eq!(table.rows(), &[Row::new(cells!["1", "2"])]);
    }

    #[test]
    fn header_only_is_empty_input() {
        assert_eq!(
            Table::new(vec![], vec![cells!["a", "b"]]),
            Err(TableError::EmptyInput)
        );
        assert_eq!(
            Table::new(cells!["a"], vec![]),
            Err(TableError::EmptyInput)
        );
    }

    #[test]
    fn short_header_is_padded_in_front() {
        let table = Table::new(cells!["x"], vec![cells!["1", "2", "3"]]).unwrap();
        assert_eq!(table.header(), cells!["", "", "x"]);
        assert_eq!(table.columns(), 3);
    }

    #[test]
    fn header_line_breaks_become_spaces() {
        let table = Table::new(cells!["first\nname", "city\r\n"], vec![cells!["a", "b"]]).unwrap();
        assert_eq!(table.header(), cells!["first name", "city"]);
    }

    #[test]
    fn widths_take_widest_cell() {
        let table = Table::new(
            cells!["Name", "City"],
            vec![cells!["Jon Snow", "Winterfell"], cells!["東京", "x"]],
        )
        .unwrap();
        assert_eq!(table.natural_widths(), vec![8, 10]);
    }

    #[test]
    fn short_rows_do_not_shrink_columns() {
        let table = Table::new(
            cells!["a", "b"],
            vec![cells!["1", "wide cell"], cells!["2"]],
        )
        .unwrap();
        assert_eq!(table.natural_widths(), vec![1, 9]);
    }
}
