//! The control interaction state machine.

use plinth_theme::cursor::CursorStyle;
use plinth_theme::style::ControlStyle;
use vello::peniko::Brush;

use crate::app::update::Update;
use crate::event::PointerEvent;
use crate::vgi::Graphics;

/// Hover/press tracking shared by all interactive controls.
///
/// The two flags are independent: enter/leave and down/up arrive
/// separately and either can flip while the other is already set, so the
/// state space is their full cross product. `Released` clears `pressed`
/// even when the pointer is no longer over the control.
#[derive(Debug, Default)]
pub struct InteractionState {
    hovered: bool,
    pressed: bool,
    emitted_cursor: Option<CursorStyle>,
}

impl InteractionState {
    /// Create a new idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is currently over the control.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a press begun over the control is still held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the control should render pressed-in. Requires both flags:
    /// leaving while pressed visually releases on the next render.
    pub fn shows_pressed(&self) -> bool {
        self.hovered && self.pressed
    }

    /// Fold a pointer event into the state. Returns [Update::DRAW] when
    /// either flag flipped, since the derived visuals depend on them.
    pub fn apply(&mut self, event: &PointerEvent) -> Update {
        let before = (self.hovered, self.pressed);
        match event {
            PointerEvent::Entered { .. } => self.hovered = true,
            PointerEvent::Left => self.hovered = false,
            PointerEvent::Pressed { .. } => self.pressed = true,
            PointerEvent::Released { .. } => self.pressed = false,
            PointerEvent::Clicked { .. } | PointerEvent::Dragged { .. } => {}
        }
        if (self.hovered, self.pressed) != before {
            Update::DRAW
        } else {
            Update::empty()
        }
    }

    /// The cursor derived from the current state.
    pub fn cursor(&self, style: &ControlStyle) -> CursorStyle {
        if self.hovered {
            style.cursor_hovered
        } else {
            style.cursor
        }
    }

    /// The background fill derived from the current state.
    pub fn fill<'a>(&self, style: &'a ControlStyle) -> &'a Brush {
        if self.hovered {
            &style.fill_hovered
        } else {
            &style.fill
        }
    }

    /// Emit the derived cursor to the surface, edge-triggered: the call
    /// only goes out on the render pass where the cursor actually changed.
    pub fn sync_cursor(&mut self, graphics: &mut dyn Graphics, style: &ControlStyle) {
        let cursor = self.cursor(style);
        if self.emitted_cursor != Some(cursor) {
            graphics.set_cursor(cursor);
            self.emitted_cursor = Some(cursor);
        }
    }
}
