//! Assemble the final text block from a laid out table.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{
    error::TableError,
    style::{RowGlyphs, Style},
    table::{Row, Table},
    width::{display_width, pad_center, pad_left, pad_right},
    width_source::WidthSource,
};

/// Horizontal placement of text within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Right,
    Center,
}

impl Align {
    fn pad(self, text: &str, width: usize) -> String {
        match self {
            Self::Left => pad_right(text, width),
            Self::Right => pad_left(text, width),
            Self::Center => pad_center(text, width),
        }
    }
}

/// Error returned when parsing an unrecognised option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseOptionError {}

impl FromStr for Align {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(ParseOptionError {
                kind: "alignment",
                value: s.to_string(),
            }),
        }
    }
}

/// Border lines that can be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BorderLine {
    Top,
    BelowHeader,
    Bottom,
}

impl FromStr for BorderLine {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "belowheader" | "below-header" => Ok(Self::BelowHeader),
            "bottom" | "bottomline" => Ok(Self::Bottom),
            _ => Err(ParseOptionError {
                kind: "border line",
                value: s.to_string(),
            }),
        }
    }
}

/// How column widths are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// Columns take their natural width.
    #[default]
    Natural,
    /// Cells wider than the limit are wrapped onto continuation rows.
    Wrap(usize),
    /// Columns are fitted to the given total width and wrapped to match.
    Auto(usize),
}

/// Options controlling how a table is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub align: Align,
    /// Text shown in missing or empty cells.
    pub empty: String,
    pub hidden: BTreeSet<BorderLine>,
    pub sizing: Sizing,
}

impl RenderConfig {
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    #[must_use]
    pub fn hide(mut self, line: BorderLine) -> Self {
        self.hidden.insert(line);
        self
    }

    /// Wrap cells wider than `max` columns.
    #[must_use]
    pub fn with_wrap(mut self, max: usize) -> Self {
        self.sizing = Sizing::Wrap(max);
        self
    }

    /// Fit the table to `target` columns.
    #[must_use]
    pub fn with_autosize(mut self, target: usize) -> Self {
        self.sizing = Sizing::Auto(target);
        self
    }

    /// Fit the table to the width reported by `source`.
    ///
    /// The width is read once, here, before any layout work.
    ///
    /// # Errors
    /// Returns [`TableError::WidthSourceUnavailable`] if `source` cannot
    /// provide a width.
    pub fn autosize(self, source: &dyn WidthSource) -> Result<Self, TableError> {
        Ok(self.with_autosize(source.target_width()?))
    }

    fn shows(&self, line: BorderLine) -> bool { !self.hidden.contains(&line) }

    /// Whether `column` of `row` shows the empty placeholder.
    ///
    /// Judged on the first line of the cell, so the answer holds both before
    /// and after wrapping.
    fn is_placeholder(row: &Row, column: usize) -> bool {
        match row.cells.get(column) {
            None => true,
            Some(cell) => {
                let first = cell.split('\n').next().unwrap_or_default();
                !row.continuation && first.trim_end_matches('\r').is_empty()
            }
        }
    }

    /// Width each column needs to show the placeholder, or zero where it
    /// never appears.
    pub(crate) fn placeholder_widths(&self, table: &Table) -> Vec<usize> {
        let needed = display_width(&self.empty);
        (0..table.columns())
            .map(|column| {
                let shown = table.rows().iter().any(|row| Self::is_placeholder(row, column));
                if shown { needed } else { 0 }
            })
            .collect()
    }
}

fn draw_row(
    cells: &[String],
    padded: &[usize],
    glyphs: &RowGlyphs,
    pad: &str,
    align: Align,
    content: impl Fn(usize, &str) -> String,
) -> String {
    let body: Vec<String> = padded
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = content(i, cells.get(i).map_or("", String::as_str));
            let inner = width.saturating_sub(2 * pad.len());
            format!("{pad}{}{pad}", align.pad(&cell, inner))
        })
        .collect();
    format!("{}{}{}", glyphs.begin, body.join(&glyphs.sep), glyphs.end)
}

/// Draw `table` with the given final column widths.
///
/// Every line, the last included, ends with a newline. No separator is drawn
/// before a continuation row, so a wrapped row reads as one block.
#[must_use]
pub fn render(table: &Table, widths: &[usize], style: &Style, config: &RenderConfig) -> String {
    let pad = " ".repeat(style.padding);
    let padded: Vec<usize> = widths.iter().map(|w| w + 2 * style.padding).collect();
    let mut lines = Vec::new();

    if let Some(line) = style.top.as_ref().filter(|_| config.shows(BorderLine::Top)) {
        lines.push(line.draw(&padded));
    }
    lines.push(draw_row(
        table.header(),
        &padded,
        &style.header_row,
        &pad,
        config.align,
        |_, cell| cell.to_string(),
    ));
    if let Some(line) = style
        .below_header
        .as_ref()
        .filter(|_| config.shows(BorderLine::BelowHeader))
    {
        lines.push(line.draw(&padded));
    }

    let rows = table.rows();
    for (idx, row) in rows.iter().enumerate() {
        lines.push(draw_row(
            &row.cells,
            &padded,
            &style.data_row,
            &pad,
            config.align,
            |i, cell| {
                if RenderConfig::is_placeholder(row, i) {
                    config.empty.clone()
                } else {
                    cell.to_string()
                }
            },
        ));
        let separate = rows.get(idx + 1).is_some_and(|next| !next.continuation);
        if let Some(line) = style.between_rows.as_ref().filter(|_| separate) {
            lines.push(line.draw(&padded));
        }
    }

    if let Some(line) = style.bottom.as_ref().filter(|_| config.shows(BorderLine::Bottom)) {
        lines.push(line.draw(&padded));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
