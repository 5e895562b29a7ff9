//! Providers of the target width used when autosizing.

use std::env;

use crate::error::TableError;

/// Something that can report how many columns a table may occupy.
pub trait WidthSource {
    /// The target width in display columns.
    ///
    /// # Errors
    /// Returns [`TableError::WidthSourceUnavailable`] when no width can be
    /// determined.
    fn target_width(&self) -> Result<usize, TableError>;
}

/// A width fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn target_width(&self) -> Result<usize, TableError> { Ok(self.0) }
}

/// The width of the controlling terminal.
///
/// A positive integer in `COLUMNS` takes precedence over querying the
/// terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn target_width(&self) -> Result<usize, TableError> {
        if let Some(columns) = parse_columns(env::var("COLUMNS").ok().as_deref()) {
            return Ok(columns);
        }
        let (columns, _) =
            crossterm::terminal::size().map_err(|e| TableError::WidthSourceUnavailable {
                reason: e.to_string(),
            })?;
        if columns == 0 {
            return Err(TableError::WidthSourceUnavailable {
                reason: "terminal reported zero columns".into(),
            });
        }
        Ok(usize::from(columns))
    }
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_is_returned() {
        assert_eq!(FixedWidth(72).target_width(), Ok(72));
    }

    #[test]
    fn columns_override_must_be_positive() {
        assert_eq!(parse_columns(Some("120")), Some(120));
        assert_eq!(parse_columns(Some(" 80\n")), Some(80));
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("wide")), None);
        assert_eq!(parse_columns(None), None);
    }
}
