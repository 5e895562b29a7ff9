//! Split oversized cells across continuation rows.
//!
//! A cell wider than its column is cut in two. A line break that fits is
//! preferred; otherwise the cut falls at the last whitespace that fits,
//! which is dropped. A single word wider than the column is cut hard.
//! Tails of every cut cell in a row form a new continuation row directly
//! below it, which is itself wrapped until everything fits.

use tracing::debug;

use crate::{
    table::Row,
    width::{display_width, split_at_width},
};

/// Width limit for each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capacity {
    /// The same limit for every column.
    Uniform(usize),
    /// One limit per column; columns past the end are unlimited.
    PerColumn(Vec<usize>),
}

impl Capacity {
    fn of(&self, column: usize) -> usize {
        match self {
            Self::Uniform(max) => *max,
            Self::PerColumn(widths) => widths.get(column).copied().unwrap_or(usize::MAX),
        }
    }
}

/// Split `cell` into a head that fits `max` columns and the remainder.
///
/// Returns `None` when the cell already fits and has no line break.
///
/// # Examples
///
/// ```
/// use tabulate::split_cell;
/// assert_eq!(split_cell("hello world", 8), Some(("hello".into(), "world".into())));
/// assert_eq!(split_cell("a\nb", 8), Some(("a".into(), "b".into())));
/// assert_eq!(split_cell("short", 8), None);
/// ```
#[must_use]
pub fn split_cell(cell: &str, max: usize) -> Option<(String, String)> {
    if let Some(newline) = cell.find('\n') {
        let head = cell[..newline].trim_end_matches('\r');
        if display_width(head) <= max {
            return Some((head.to_string(), cell[newline + 1..].to_string()));
        }
    }
    if display_width(cell) <= max {
        return None;
    }
    let cut = split_at_width(cell, max);
    let (head, rest) = cell.split_at(cut);
    if let Some(space) = rest.chars().next().filter(|c| c.is_whitespace()) {
        return Some((head.to_string(), rest[space.len_utf8()..].to_string()));
    }
    if let Some((idx, space)) = head
        .char_indices()
        .rev()
        .find(|&(i, c)| i > 0 && c.is_whitespace())
    {
        return Some((
            head[..idx].to_string(),
            cell[idx + space.len_utf8()..].to_string(),
        ));
    }
    Some((head.to_string(), rest.to_string()))
}

/// Wrap every row so no cell exceeds its column's capacity.
///
/// Rows that fit are passed through untouched. A row that needs cutting is
/// emitted with the heads of its cells, followed by continuation rows with
/// the tails; cells that fitted are blank in the continuation rows. Tails
/// holding only whitespace are dropped rather than continued.
#[must_use]
pub fn wrap_rows(rows: &[Row], capacity: &Capacity) -> Vec<Row> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut current = row.clone();
        loop {
            let mut tails = Vec::with_capacity(current.cells.len());
            let mut split = false;
            for (i, cell) in current.cells.iter_mut().enumerate() {
                match split_cell(cell, capacity.of(i)) {
                    Some((head, tail)) => {
                        *cell = head;
                        if tail.trim().is_empty() {
                            tails.push(String::new());
                        } else {
                            tails.push(tail);
                            split = true;
                        }
                    }
                    None => tails.push(String::new()),
                }
            }
            out.push(current);
            if !split {
                break;
            }
            current = Row::continuation(tails);
        }
    }
    debug!(input = rows.len(), output = out.len(), "wrapped rows");
    out
}
