//! Vector Graphics Interface abstraction.
//!
//! This module is the boundary with the drawing surface collaborator.
//! Widgets draw through the [Graphics] trait and never learn which
//! backend is behind it; all calls are synchronous and side-effect-only.

use plinth_theme::cursor::CursorStyle;
use plinth_theme::style::FontSpec;
use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// A trait for rendering vector graphics.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape
/// types (Rect, RoundedRect, Line, etc.), convert them to BezPath using
/// [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Push a clip layer. Drawing until the matching [pop_layer] is
    /// limited to the shape.
    ///
    /// [pop_layer]: Graphics::pop_layer
    fn push_layer(&mut self, clip: &BezPath);

    /// Pop the most recent clip layer.
    fn pop_layer(&mut self);

    /// Draw a run of text. `origin` is the top-left corner of the text
    /// box; shaping and rasterization are the backend's business.
    fn draw_text(&mut self, font: &FontSpec, brush: &Brush, origin: vello::kurbo::Point, text: &str);

    /// Request a pointer cursor change. Controls call this edge-triggered,
    /// only when the derived cursor actually changed.
    fn set_cursor(&mut self, cursor: CursorStyle);
}

/// Helper function to convert a shape to BezPath for use with Graphics.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A headless backend that records draw commands.
pub mod recorder;
