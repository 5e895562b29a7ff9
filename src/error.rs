//! Error types for table layout and rendering.

use thiserror::Error;

/// Fatal conditions detected before any table text is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// There are no data rows to render; a header alone is not a table.
    #[error("no data rows to render")]
    EmptyInput,

    /// The requested style name is not registered.
    #[error("unknown table style: {name}")]
    UnknownStyle { name: String },

    /// Autosizing was requested but no target width could be obtained.
    #[error("target width unavailable: {reason}")]
    WidthSourceUnavailable { reason: String },
}
