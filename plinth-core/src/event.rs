//! Pointer events, control ids and the event queue.
//!
//! The event substrate is an external collaborator: it watches the raw
//! input stream, decides which control an event targets, synthesizes
//! clicks, and enqueues typed messages here. The frame driver drains the
//! queue at the start of every tick, so all events queued since the
//! previous tick are applied before that tick's calculation pass.

use std::collections::vec_deque::Drain;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Vector2;

use crate::geometry::Point;

/// A unique identity for a control, used to target pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

impl ControlId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A raw pointer notification delivered to one control.
///
/// Locations are in global surface coordinates; controls translate to
/// their local space by subtracting their absolute top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the control's rect.
    Entered {
        /// Global pointer location.
        position: Point,
    },
    /// The pointer left the control's rect.
    Left,
    /// A button went down over the control.
    Pressed {
        /// Global pointer location.
        position: Point,
    },
    /// A button came up. Delivered to the pressed control even when the
    /// pointer has moved elsewhere, so a press always clears.
    Released {
        /// Global pointer location.
        position: Point,
    },
    /// Down and up both happened over the control with no intervening
    /// leave. Synthesized by the event substrate.
    Clicked {
        /// Global pointer location.
        position: Point,
    },
    /// The pointer moved while a button was held over the control.
    Dragged {
        /// Global pointer location.
        position: Point,
        /// Movement since the previous drag sample.
        delta: Vector2<i32>,
    },
}

/// A queue of pointer events tagged with their target control.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<(ControlId, PointerEvent)>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for a control.
    pub fn push(&mut self, target: ControlId, event: PointerEvent) {
        self.queue.push_back((target, event));
    }

    /// Drain all queued events in arrival order.
    pub fn drain(&mut self) -> Drain<'_, (ControlId, PointerEvent)> {
        self.queue.drain(..)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
