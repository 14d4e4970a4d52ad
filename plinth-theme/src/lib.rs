#![warn(missing_docs)]

//! Styling for plinth controls => See the `plinth` crate.
//!
//! Contains the [ControlStyle](style::ControlStyle) value bundle consumed
//! by every control at construction time, cursor styles, and a TOML
//! style-sheet loader for overriding the built-in defaults.

/// Contains cursor styles requested from the windowing collaborator.
pub mod cursor;

/// Contains style loading and parsing errors.
pub mod error;

/// Contains the TOML style-sheet loader.
pub mod loader;

/// Contains the [ControlStyle](style::ControlStyle) value bundle.
pub mod style;

pub use cursor::CursorStyle;
pub use error::StyleError;
pub use loader::StyleSheet;
pub use style::{ControlStyle, FontSpec};
