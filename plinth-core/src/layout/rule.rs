//! The layout rule engine.

use crate::geometry::Rect;

/// A pure rectangle transformation applied to an ordered sequence of
/// sibling rects.
///
/// Every rule preserves the sequence length and the index correspondence
/// between input and output: `rects[i]` is child `i` before and after.
/// No rule ever reorders elements, and the empty sequence is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Set the top edge of every rect, keeping sizes.
    AlignTops(i32),
    /// Set the left edge of every rect, keeping sizes.
    AlignLefts(i32),
    /// Set the bottom edge of every rect, keeping sizes.
    AlignBottoms(i32),
    /// Set the right edge of every rect, keeping sizes.
    AlignRights(i32),
    /// Center every rect on the given x coordinate.
    AlignCenterX(i32),
    /// Center every rect on the given y coordinate.
    AlignCenterY(i32),
    /// Force every rect to the given width, anchored at its top-left.
    AlignWidths(i32),
    /// Force every rect to the given height, anchored at its top-left.
    AlignHeights(i32),
    /// Lay rects out left to right from `left`, each one following the
    /// previous rect's right edge plus `spacing`. Vertical coordinates
    /// are untouched.
    DistributeHorizontally {
        /// Left edge of the first rect.
        left: i32,
        /// Gap between consecutive rects.
        spacing: i32,
    },
    /// Lay rects out top to bottom from `top`, each one following the
    /// previous rect's bottom edge plus `spacing`. Horizontal coordinates
    /// are untouched.
    DistributeVertically {
        /// Top edge of the first rect.
        top: i32,
        /// Gap between consecutive rects.
        spacing: i32,
    },
}

impl Rule {
    /// Apply this rule to the sequence in place.
    pub fn apply(&self, rects: &mut [Rect]) {
        match *self {
            Rule::AlignTops(top) => {
                for rect in rects.iter_mut() {
                    rect.origin.y = top;
                }
            }
            Rule::AlignLefts(left) => {
                for rect in rects.iter_mut() {
                    rect.origin.x = left;
                }
            }
            Rule::AlignBottoms(bottom) => {
                for rect in rects.iter_mut() {
                    rect.origin.y = bottom - rect.size.height;
                }
            }
            Rule::AlignRights(right) => {
                for rect in rects.iter_mut() {
                    rect.origin.x = right - rect.size.width;
                }
            }
            Rule::AlignCenterX(x) => {
                for rect in rects.iter_mut() {
                    rect.origin.x = x - rect.size.width / 2;
                }
            }
            Rule::AlignCenterY(y) => {
                for rect in rects.iter_mut() {
                    rect.origin.y = y - rect.size.height / 2;
                }
            }
            Rule::AlignWidths(width) => {
                for rect in rects.iter_mut() {
                    rect.size.width = width.max(0);
                }
            }
            Rule::AlignHeights(height) => {
                for rect in rects.iter_mut() {
                    rect.size.height = height.max(0);
                }
            }
            Rule::DistributeHorizontally { left, spacing } => {
                let mut cursor = left;
                for rect in rects.iter_mut() {
                    rect.origin.x = cursor;
                    cursor = rect.right() + spacing;
                }
            }
            Rule::DistributeVertically { top, spacing } => {
                let mut cursor = top;
                for rect in rects.iter_mut() {
                    rect.origin.y = cursor;
                    cursor = rect.bottom() + spacing;
                }
            }
        }
    }
}

/// An aggregate query over a sequence of sibling rects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// The largest single-child width. Used to size children uniformly.
    MaxWidth,
    /// The largest single-child height.
    MaxHeight,
    /// Horizontal span: max right edge minus min left edge. After a
    /// horizontal distribution this equals the sum of widths plus
    /// `(count - 1) × spacing`, whatever spacing was actually used.
    FullWidth,
    /// Vertical span: max bottom edge minus min top edge.
    FullHeight,
}

impl Property {
    /// Measure the aggregate. The empty sequence measures zero.
    pub fn measure(&self, rects: &[Rect]) -> i32 {
        if rects.is_empty() {
            return 0;
        }
        match self {
            Property::MaxWidth => rects.iter().map(Rect::width).max().unwrap_or(0),
            Property::MaxHeight => rects.iter().map(Rect::height).max().unwrap_or(0),
            Property::FullWidth => {
                let leading = rects.iter().map(Rect::left).min().unwrap_or(0);
                let trailing = rects.iter().map(Rect::right).max().unwrap_or(0);
                trailing - leading
            }
            Property::FullHeight => {
                let leading = rects.iter().map(Rect::top).min().unwrap_or(0);
                let trailing = rects.iter().map(Rect::bottom).max().unwrap_or(0);
                trailing - leading
            }
        }
    }
}
