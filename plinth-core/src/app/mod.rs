//! The per-frame driver.
//!
//! The whole system is single-threaded and cooperative: the embedder
//! calls [FrameLoop::tick] once per frame, and the loop runs the three
//! phases in order: drain queued pointer events, one calculation pass,
//! one render pass. Nothing suspends mid-computation and render never
//! observes a half-arranged tree.

/// Contains the update mode bitflag.
pub mod update;

use crate::event::{ControlId, EventQueue, PointerEvent};
use crate::text::TextMeasurer;
use crate::vgi::Graphics;
use crate::widget::{BoxedWidget, Widget};
use update::Update;

/// Owns the widget tree root and the pointer event queue, and runs the
/// per-tick phases in their guaranteed order.
pub struct FrameLoop {
    root: BoxedWidget,
    events: EventQueue,
}

impl FrameLoop {
    /// Create a frame loop around a root widget.
    pub fn new(root: impl Widget + 'static) -> Self {
        Self {
            root: Box::new(root),
            events: EventQueue::new(),
        }
    }

    /// Enqueue a pointer event for delivery on the next tick.
    pub fn enqueue(&mut self, target: ControlId, event: PointerEvent) {
        self.events.push(target, event);
    }

    /// The pending event queue, for substrates that hold a reference.
    pub fn events(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// The root widget.
    pub fn root(&self) -> &dyn Widget {
        self.root.as_ref()
    }

    /// The root widget, mutably.
    pub fn root_mut(&mut self) -> &mut dyn Widget {
        self.root.as_mut()
    }

    /// Run one frame tick: events, then calculation, then render.
    ///
    /// All events queued since the previous tick are applied before the
    /// calculation pass; calculation completes (or defers cleanly) before
    /// render runs. Returns the union of updates the tree reported.
    pub fn tick(&mut self, text: &mut dyn TextMeasurer, graphics: &mut dyn Graphics) -> Update {
        let mut update = Update::empty();

        for (target, event) in self.events.drain() {
            match self.root.dispatch(target, &event) {
                Some(u) => update |= u,
                None => log::debug!("pointer event for unknown control {target:?} dropped"),
            }
        }

        update |= self.root.calculate(text);
        self.root.render(graphics);
        update
    }
}
