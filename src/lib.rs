//! Render rows of text as aligned, bordered tables.
//!
//! A [`Table`] goes through a short pipeline: natural column widths are
//! measured, optionally fitted to a target width, oversized cells are
//! wrapped onto continuation rows, and the result is drawn with a [`Style`].
//!
//! ```
//! use tabulate::{RenderConfig, StyleRegistry, Table, tabulate};
//!
//! let table = Table::new(
//!     vec!["Name".into(), "City".into()],
//!     vec![vec!["Jon Snow".into(), "Winterfell".into()]],
//! )?;
//! let out = tabulate(table, &StyleRegistry::default(), Some("simple"), &RenderConfig::default())?;
//! assert_eq!(out.lines().count(), 5);
//! # Ok::<(), tabulate::TableError>(())
//! ```

pub mod autosize;
pub mod error;
pub mod normalize;
pub mod render;
pub mod style;
pub mod table;
pub mod width;
pub mod width_source;
pub mod wrap;

#[cfg(test)]
mod test_utils;

pub use autosize::{fit_widths, fit_with_floors};
pub use error::TableError;
pub use normalize::{Cell, FloatFormat, RawTable};
pub use render::{Align, BorderLine, RenderConfig, Sizing, render};
pub use style::{DEFAULT_STYLE, Line, RowGlyphs, Style, StyleRegistry};
pub use table::{Row, Table};
pub use width::display_width;
pub use width_source::{FixedWidth, TerminalWidth, WidthSource};
pub use wrap::{Capacity, split_cell, wrap_rows};

/// Size and wrap `table` according to `config.sizing`.
///
/// Returns the table with any continuation rows added, together with the
/// content width of every column. Line breaks inside cells always move the
/// text after them to continuation rows, and columns that show the empty
/// placeholder are wide enough for it. When autosizing, the placeholder is
/// a floor of the fit, so it never pushes the table past the target.
#[must_use]
pub fn layout(table: Table, style: &Style, config: &RenderConfig) -> (Table, Vec<usize>) {
    let placeholders = config.placeholder_widths(&table);
    let capacity = match config.sizing {
        Sizing::Natural => Capacity::Uniform(usize::MAX),
        Sizing::Wrap(max) => Capacity::Uniform(max),
        Sizing::Auto(target) => {
            let floors: Vec<usize> = table
                .header()
                .iter()
                .zip(&placeholders)
                .map(|(label, &needed)| display_width(label).max(needed))
                .collect();
            let widths = fit_with_floors(&table.natural_widths(), &floors, style, target);
            let rows = wrap_rows(table.rows(), &Capacity::PerColumn(widths.clone()));
            return (table.with_rows(rows), widths);
        }
    };
    let rows = wrap_rows(table.rows(), &capacity);
    let table = table.with_rows(rows);
    let mut widths = table.natural_widths();
    for (width, needed) in widths.iter_mut().zip(placeholders) {
        *width = (*width).max(needed);
    }
    (table, widths)
}

/// Lay out and draw `table` with the named style, or the default style.
///
/// # Errors
/// Returns [`TableError::UnknownStyle`] if `style` is not in `registry`.
/// Nothing is rendered in that case.
pub fn tabulate(
    table: Table,
    registry: &StyleRegistry,
    style: Option<&str>,
    config: &RenderConfig,
) -> Result<String, TableError> {
    let style = registry.resolve(style)?;
    let (table, widths) = layout(table, style, config);
    Ok(render(&table, &widths, style, config))
}
