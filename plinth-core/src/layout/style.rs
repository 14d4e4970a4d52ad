//! The layout style a panel dispatches on.

use crate::layout::alignment::{HorizontalAlignment, VerticalAlignment};

/// How a panel arranges its children.
///
/// Uniform styles stretch every child to the largest child's dimensions
/// before distributing; aligned styles preserve each child's extent along
/// the distribution axis and align them on the other axis.
///
/// Mutating a panel's layout style invalidates its cached size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStyle {
    /// Children stretched to the largest child's size, laid out left to
    /// right.
    UniformRow,
    /// Children stretched to the largest child's size, laid out top to
    /// bottom.
    UniformColumn,
    /// Children laid out left to right, aligned vertically inside the
    /// panel's content area. Only the vertical component is meaningful;
    /// each child keeps its horizontal extent.
    Row(VerticalAlignment),
    /// Children laid out top to bottom, aligned horizontally inside the
    /// panel's content area.
    Column(HorizontalAlignment),
}
