#![warn(missing_docs)]

//! Widgets for plinth => See the `plinth` crate.
//!
//! Concrete widgets assembled from the core capabilities: an
//! [InteractionState](plinth_core::interaction::InteractionState)
//! component for pointer behavior, deferred measurement against the
//! [TextMeasurer](plinth_core::text::TextMeasurer) collaborator, and
//! rendering through [Graphics](plinth_core::vgi::Graphics).

/// Contains the [Button](button::Button) widget.
pub mod button;

/// Contains the [Label](label::Label) widget.
pub mod label;

/// Contains the [Panel](panel::Panel) container widget.
pub mod panel;

/// Contains the [Slider](slider::Slider) widget.
pub mod slider;

pub use button::Button;
pub use label::Label;
pub use panel::Panel;
pub use slider::Slider;
