//! Layout rule engine, alignment and layout styles.
//!
//! Layout is a small algebra of pure rectangle transformations: a [Rule]
//! maps an ordered sequence of rects to a new ordered sequence of the
//! same length, index for index. Panels compose rules (align, then
//! distribute) to place their children, and read [Property] aggregates
//! to size themselves around the result.

/// Contains [Alignment] and its horizontal/vertical halves.
pub mod alignment;

/// Contains the [Rule] and [Property] engine.
pub mod rule;

/// Contains the [LayoutStyle] a panel dispatches on.
pub mod style;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use rule::{Property, Rule};
pub use style::LayoutStyle;
