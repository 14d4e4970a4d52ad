//! The [ControlStyle] value bundle.

use vello::peniko::{Brush, Color};

use crate::cursor::CursorStyle;

/// A font request handed to the text-measurement collaborator.
///
/// plinth performs no shaping or metrics itself; the request is passed
/// through to the external measurer and renderer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name, resolved by the collaborator.
    pub family: String,
    /// Font size in surface pixels.
    pub size: f32,
}

impl FontSpec {
    /// Create a new font spec.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Presentation parameters for a control.
///
/// A `ControlStyle` is copied into each control at construction time.
/// Mutating a style value afterwards never retroactively affects controls
/// that were already built from it; there is no hidden global default,
/// only the [ControlStyle::defaults] factory.
#[derive(Debug, Clone)]
pub struct ControlStyle {
    /// Font used for label text.
    pub font: FontSpec,
    /// Brush for label and button text.
    pub text: Brush,
    /// Background fill while not hovered.
    pub fill: Brush,
    /// Background fill while hovered.
    pub fill_hovered: Brush,
    /// Border brush.
    pub stroke: Brush,
    /// Border stroke width.
    pub stroke_width: f64,
    /// Padding unit, also used as sibling spacing by panels.
    pub padding: i32,
    /// Corner rounding as a fraction of the smaller rect dimension.
    pub rounding: f32,
    /// Cursor while not hovered.
    pub cursor: CursorStyle,
    /// Cursor while hovered.
    pub cursor_hovered: CursorStyle,
    /// Whether labels draw their own background and border chrome.
    pub label_chrome: bool,
}

impl ControlStyle {
    /// The documented default style.
    ///
    /// This is the single source of default presentation values; controls
    /// receive an explicit `&ControlStyle` and copy it.
    pub fn defaults() -> Self {
        Self {
            font: FontSpec::new("sans-serif", 14.0),
            text: Brush::Solid(Color::from_rgb8(0x20, 0x20, 0x20)),
            fill: Brush::Solid(Color::from_rgb8(0xd6, 0xd6, 0xd6)),
            fill_hovered: Brush::Solid(Color::from_rgb8(0xe4, 0xe4, 0xe4)),
            stroke: Brush::Solid(Color::from_rgb8(0x58, 0x58, 0x58)),
            stroke_width: 1.0,
            padding: 5,
            rounding: 0.25,
            cursor: CursorStyle::Arrow,
            cursor_hovered: CursorStyle::Hand,
            label_chrome: false,
        }
    }
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self::defaults()
    }
}
