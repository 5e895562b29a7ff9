//! Table styles and the style registry.
//!
//! A [`Style`] bundles the glyphs used for the four horizontal lines and the
//! two kinds of rows. Styles are plain values; a [`StyleRegistry`] maps names
//! to them and is populated up front, then only read while rendering.

use std::collections::BTreeMap;

use crate::{error::TableError, width::display_width};

/// Name of the style used when the caller does not pick one.
pub const DEFAULT_STYLE: &str = "grid";

/// Glyphs for one horizontal line of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub begin: String,
    pub fill: String,
    pub sep: String,
    pub end: String,
}

impl Line {
    #[must_use]
    pub fn new(begin: &str, fill: &str, sep: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            fill: fill.to_string(),
            sep: sep.to_string(),
            end: end.to_string(),
        }
    }

    /// Draw the line across columns of the given padded widths.
    ///
    /// A fill glyph wider than one column is repeated as often as it fits and
    /// the remainder is made up with spaces.
    pub(crate) fn draw(&self, padded_widths: &[usize]) -> String {
        let unit = display_width(&self.fill).max(1);
        let cells: Vec<String> = padded_widths
            .iter()
            .map(|w| {
                let mut cell = self.fill.repeat(w / unit);
                cell.push_str(&" ".repeat(w % unit));
                cell
            })
            .collect();
        format!("{}{}{}", self.begin, cells.join(&self.sep), self.end)
    }
}

/// Delimiters placed around and between the cells of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGlyphs {
    pub begin: String,
    pub sep: String,
    pub end: String,
}

impl RowGlyphs {
    #[must_use]
    pub fn new(begin: &str, sep: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            sep: sep.to_string(),
            end: end.to_string(),
        }
    }

    /// Columns taken by delimiters in a row of `columns` cells.
    fn overhead(&self, columns: usize) -> usize {
        display_width(&self.begin)
            + display_width(&self.end)
            + columns.saturating_sub(1) * display_width(&self.sep)
    }
}

/// Visual appearance of a table.
///
/// Lines set to `None` are not drawn at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub top: Option<Line>,
    pub below_header: Option<Line>,
    pub between_rows: Option<Line>,
    pub bottom: Option<Line>,
    pub header_row: RowGlyphs,
    pub data_row: RowGlyphs,
    /// Blank columns added on each side of every cell.
    pub padding: usize,
}

impl Style {
    /// Columns a rendered row spends on anything but cell content.
    ///
    /// Autosizing subtracts this from the target width, so it must stay in
    /// step with how [`crate::render`] lays out rows.
    #[must_use]
    pub fn layout_overhead(&self, columns: usize) -> usize {
        let glyphs = self
            .header_row
            .overhead(columns)
            .max(self.data_row.overhead(columns));
        glyphs + columns * 2 * self.padding
    }

    /// Borderless layout with two-space gaps and no lines.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            top: None,
            below_header: None,
            between_rows: None,
            bottom: None,
            header_row: RowGlyphs::new("", "  ", ""),
            data_row: RowGlyphs::new("", "  ", ""),
            padding: 1,
        }
    }

    /// Dashed rules above, below the header, and at the bottom.
    #[must_use]
    pub fn simple() -> Self {
        let rule = Line::new("", "-", "  ", "");
        Self {
            top: Some(rule.clone()),
            below_header: Some(rule.clone()),
            between_rows: None,
            bottom: Some(rule),
            ..Self::plain()
        }
    }

    /// ASCII grid with `=` under the header.
    #[must_use]
    pub fn grid() -> Self {
        let rule = Line::new("+", "-", "+", "+");
        let cells = RowGlyphs::new("|", "|", "|");
        Self {
            top: Some(rule.clone()),
            below_header: Some(Line::new("+", "=", "+", "+")),
            between_rows: Some(rule.clone()),
            bottom: Some(rule),
            header_row: cells.clone(),
            data_row: cells,
            padding: 1,
        }
    }

    /// Box drawing with a heavy header and light body.
    #[must_use]
    pub fn border() -> Self {
        Self {
            top: Some(Line::new("┏", "━", "┳", "┓")),
            below_header: Some(Line::new("┡", "━", "╇", "┩")),
            between_rows: Some(Line::new("├", "─", "┼", "┤")),
            bottom: Some(Line::new("└", "─", "┴", "┘")),
            header_row: RowGlyphs::new("┃", "┃", "┃"),
            data_row: RowGlyphs::new("│", "│", "│"),
            padding: 1,
        }
    }
}

/// Named collection of styles.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: BTreeMap<String, Style>,
}

impl StyleRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Add `style` under `name`, replacing any style already registered
    /// with that name.
    pub fn register(&mut self, name: impl Into<String>, style: Style) -> &mut Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// Look up a style by name.
    ///
    /// # Errors
    /// Returns [`TableError::UnknownStyle`] if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&Style, TableError> {
        self.styles
            .get(name)
            .ok_or_else(|| TableError::UnknownStyle {
                name: name.to_string(),
            })
    }

    /// Look up `name`, or the default style when no name is given.
    ///
    /// # Errors
    /// Returns [`TableError::UnknownStyle`] if the resolved name is not
    /// registered.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Style, TableError> {
        self.get(name.unwrap_or(DEFAULT_STYLE))
    }

    /// Registered style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> { self.styles.keys().map(String::as_str) }
}

impl Default for StyleRegistry {
    /// Registry holding the built-in `plain`, `simple`, `grid` and `border`
    /// styles.
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register("plain", Style::plain())
            .register("simple", Style::simple())
            .register("grid", Style::grid())
            .register("border", Style::border());
        registry
    }
}
