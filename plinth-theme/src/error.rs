//! Style-sheet loading and parsing errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing a style sheet.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Style-sheet file not found.
    #[error("Style sheet not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the style-sheet file.
    #[error("Failed to read style sheet {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse the TOML style sheet.
    #[error("Failed to parse style sheet {0}: {1}")]
    ParseError(PathBuf, String),

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Invalid cursor name.
    #[error("Invalid cursor name: {0}")]
    InvalidCursor(String),

    /// Invalid metric value (negative padding, non-positive stroke width, …).
    #[error("Invalid metric value for {0}: {1}")]
    InvalidMetric(&'static str, f64),
}
