//! Alignment of sibling rects against a reference rect.

use crate::geometry::Rect;
use crate::layout::rule::Rule;

/// Horizontal placement of children inside a reference rect.
///
/// `Stretch` is the only value that also overwrites the child's width;
/// the other three preserve each child's existing size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align left edges with the reference's left edge.
    Left,
    /// Center on the reference's horizontal center.
    Center,
    /// Align right edges with the reference's right edge.
    Right,
    /// Fill the reference's width.
    Stretch,
}

/// Vertical placement of children inside a reference rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Align top edges with the reference's top edge.
    Top,
    /// Center on the reference's vertical center.
    Center,
    /// Align bottom edges with the reference's bottom edge.
    Bottom,
    /// Fill the reference's height.
    Stretch,
}

/// A horizontal and a vertical alignment composed into one operation.
///
/// The two axes are independent, so application order is immaterial; the
/// horizontal half runs first by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Placement along the x axis.
    pub horizontal: HorizontalAlignment,
    /// Placement along the y axis.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Create a new alignment.
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Stretch on both axes.
    pub fn stretch() -> Self {
        Self::new(HorizontalAlignment::Stretch, VerticalAlignment::Stretch)
    }

    /// Align the rects against the reference rect.
    pub fn apply(&self, rects: &mut [Rect], source: Rect) {
        match self.horizontal {
            HorizontalAlignment::Left => Rule::AlignLefts(source.left()).apply(rects),
            HorizontalAlignment::Center => Rule::AlignCenterX(source.center_x()).apply(rects),
            HorizontalAlignment::Right => Rule::AlignRights(source.right()).apply(rects),
            HorizontalAlignment::Stretch => {
                Rule::AlignLefts(source.left()).apply(rects);
                Rule::AlignWidths(source.width()).apply(rects);
            }
        }
        match self.vertical {
            VerticalAlignment::Top => Rule::AlignTops(source.top()).apply(rects),
            VerticalAlignment::Center => Rule::AlignCenterY(source.center_y()).apply(rects),
            VerticalAlignment::Bottom => Rule::AlignBottoms(source.bottom()).apply(rects),
            VerticalAlignment::Stretch => {
                Rule::AlignTops(source.top()).apply(rects);
                Rule::AlignHeights(source.height()).apply(rects);
            }
        }
    }
}
