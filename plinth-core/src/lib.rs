#![warn(missing_docs)]

//! Core library for plinth => See the `plinth` crate.
//!
//! Contains the geometry primitives, the layout rule engine, the pointer
//! event model, the control interaction state machine, the [Widget]
//! trait, and the per-frame driver. The drawing surface and text
//! measurement are external collaborators reached through the traits in
//! [vgi] and [text].
//!
//! [Widget]: widget::Widget

pub use vello as vg;

/// Contains the frame driver and the [Update](app::update::Update) bitflag.
pub mod app;

/// Contains pointer events, control ids and the event queue.
pub mod event;

/// Contains the geometry value types.
pub mod geometry;

/// Contains the control interaction state machine.
pub mod interaction;

/// Contains the layout rule engine, alignment and layout styles.
pub mod layout;

/// Contains the text-measurement collaborator boundary.
pub mod text;

/// Contains the vector graphics interface abstraction.
pub mod vgi;

/// Contains the core widget functionalities.
pub mod widget;
