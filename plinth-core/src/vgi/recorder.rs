//! A headless [Graphics] backend that records draw commands.
//!
//! Useful for driving the widget layer without a real surface: tests and
//! tooling can assert on what would have been drawn, including clip
//! layers and cursor changes.

use plinth_theme::cursor::CursorStyle;
use plinth_theme::style::FontSpec;
use vello::kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use vello::peniko::{Brush, Fill};

use super::Graphics;

/// One recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// A filled shape, reduced to its brush and bounding box.
    Fill {
        /// Brush the shape was filled with.
        brush: Brush,
        /// Bounding box of the filled shape.
        bounds: Rect,
    },
    /// A stroked shape.
    Stroke {
        /// Stroke width used.
        width: f64,
        /// Brush the shape was stroked with.
        brush: Brush,
        /// Bounding box of the stroked shape.
        bounds: Rect,
    },
    /// A clip layer push.
    PushLayer {
        /// Bounding box of the clip shape.
        bounds: Rect,
    },
    /// A clip layer pop.
    PopLayer,
    /// A text run.
    Text {
        /// Top-left corner of the text box.
        origin: vello::kurbo::Point,
        /// The text drawn.
        text: String,
    },
    /// A cursor change request.
    Cursor(CursorStyle),
}

/// A recording [Graphics] backend.
#[derive(Debug, Default)]
pub struct RecordingGraphics {
    /// Recorded commands in call order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bounding boxes of all recorded fills, in order.
    pub fn fill_bounds(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Bounding boxes of all recorded clip pushes, in order.
    pub fn layer_bounds(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::PushLayer { bounds } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// All recorded cursor changes, in order.
    pub fn cursors(&self) -> Vec<CursorStyle> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Cursor(cursor) => Some(*cursor),
                _ => None,
            })
            .collect()
    }

    /// All recorded text runs, in order.
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Fill {
            brush: brush.clone(),
            bounds: shape.bounding_box(),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Stroke {
            width: style.width,
            brush: brush.clone(),
            bounds: shape.bounding_box(),
        });
    }

    fn push_layer(&mut self, clip: &BezPath) {
        self.commands.push(DrawCommand::PushLayer {
            bounds: clip.bounding_box(),
        });
    }

    fn pop_layer(&mut self) {
        self.commands.push(DrawCommand::PopLayer);
    }

    fn draw_text(
        &mut self,
        _font: &FontSpec,
        _brush: &Brush,
        origin: vello::kurbo::Point,
        text: &str,
    ) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
        });
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.commands.push(DrawCommand::Cursor(cursor));
    }
}
