#![warn(missing_docs)]

//! A small widget layer over an external immediate-mode drawing surface.
//!
//! plinth arranges rectangular controls (labels, buttons, sliders,
//! grouping panels) and drives their pointer interaction. Drawing, text
//! metrics and the raw event stream are external collaborators reached
//! through the traits in [core::vgi], [core::text] and [core::event].

pub use nalgebra as math;
pub use vello::peniko as color;

pub use plinth_core as core;
pub use plinth_theme as theme;
pub use plinth_widgets as widgets;

/// A "prelude" for users of the plinth widget layer.
///
/// Importing this module brings into scope the most common types needed
/// to assemble and drive a widget tree.
///
/// ```rust
/// use plinth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::update::Update;
    pub use crate::core::app::FrameLoop;
    pub use crate::core::event::{ControlId, EventQueue, PointerEvent};
    pub use crate::core::geometry::{Point, Rect, Size};
    pub use crate::core::interaction::InteractionState;
    pub use crate::core::layout::{
        Alignment, HorizontalAlignment, LayoutStyle, Property, Rule, VerticalAlignment,
    };
    pub use crate::core::text::{MonospaceMetrics, TextMeasurer};
    pub use crate::core::vgi::Graphics;
    pub use crate::core::widget::{Widget, WidgetChildrenExt, WidgetLayoutExt};

    // Styling
    pub use crate::theme::cursor::CursorStyle;
    pub use crate::theme::loader::StyleSheet;
    pub use crate::theme::style::{ControlStyle, FontSpec};

    // Math
    pub use nalgebra::Vector2;

    // Widgets
    pub use crate::widgets::button::Button;
    pub use crate::widgets::label::Label;
    pub use crate::widgets::panel::Panel;
    pub use crate::widgets::slider::Slider;
}
