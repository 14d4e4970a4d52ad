//! The text-measurement collaborator boundary.

use plinth_theme::style::FontSpec;

use crate::geometry::Size;

/// Measures text for the widget layer.
///
/// Measurement follows a request/poll protocol: `measure` returns `None`
/// while the result is not yet available (fonts still loading, a remote
/// surface still responding) and the caller defers its own size
/// calculation to the next tick rather than block. Implementations are
/// expected to eventually return `Some` for every request.
pub trait TextMeasurer {
    /// The bounding box of `text` in `font`, or `None` if not yet ready.
    fn measure(&mut self, text: &str, font: &FontSpec) -> Option<Size>;
}

/// Fixed-advance metrics that are always ready.
///
/// Every character is `char_width` wide and a line is `line_height` tall.
/// This is not a real shaper; it exists for headless operation and tests,
/// where deterministic metrics matter more than fidelity.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Advance per character.
    pub char_width: i32,
    /// Height of a single line.
    pub line_height: i32,
}

impl TextMeasurer for MonospaceMetrics {
    fn measure(&mut self, text: &str, _font: &FontSpec) -> Option<Size> {
        Some(Size::new(
            text.chars().count() as i32 * self.char_width,
            self.line_height,
        ))
    }
}
