use crate::app::update::Update;
use crate::event::{ControlId, PointerEvent};
use crate::geometry::{Point, Rect, Size};
use crate::layout::LayoutStyle;
use crate::text::TextMeasurer;
use crate::vgi::Graphics;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// # Lifecycle
///
/// Every frame tick runs three phases over the widget tree:
///
/// 1. **Events**: queued pointer events are dispatched to their target
///    via [dispatch](Widget::dispatch), mutating interaction state.
/// 2. **Calculation**: [calculate](Widget::calculate) walks the tree
///    bottom-up. Leaves produce a desired size (possibly deferring until
///    a collaborator is ready); panels wait until every child reports a
///    size, then assign final rects top-down with
///    [assign_rect](Widget::assign_rect).
/// 3. **Render**: [render](Widget::render) draws using the final rects
///    and current interaction state. Render never sees a
///    partially-arranged panel: an unmeasured widget draws nothing.
///
/// # Bounding rect contract
///
/// [bounds](Widget::bounds) is the widget's top-left plus its most recent
/// computed size, or a zero-size rect if it was never measured. Callers
/// must treat a zero-size bounds as "not yet interactive".
pub trait Widget {
    /// The identity pointer events are addressed to.
    fn id(&self) -> ControlId;

    /// Top-left plus most recent computed size; zero-size if unmeasured.
    fn bounds(&self) -> Rect;

    /// The size this widget wants, once known. `None` defers: an owning
    /// panel stays unmeasured and retries on the next calculation pass.
    fn desired_size(&self) -> Option<Size>;

    /// Move the widget. On panels this invalidates the cached size.
    fn set_top_left(&mut self, top_left: Point);

    /// Accept the final rect assigned by an owning panel.
    fn assign_rect(&mut self, rect: Rect);

    /// Mark the widget as owned by a panel. An owned panel ignores
    /// external size changes so it never fights its parent's assignment.
    fn set_owned(&mut self, _owned: bool) {}

    /// Run one calculation pass over this widget (and its children).
    fn calculate(&mut self, text: &mut dyn TextMeasurer) -> Update;

    /// Apply a pointer event to this widget's own state.
    fn pointer_event(&mut self, event: &PointerEvent) -> Update;

    /// Route an event to the targeted widget in this subtree. Returns
    /// `None` when the target is not here.
    fn dispatch(&mut self, target: ControlId, event: &PointerEvent) -> Option<Update> {
        if self.id() == target {
            Some(self.pointer_event(event))
        } else {
            None
        }
    }

    /// Draw the widget onto the surface.
    fn render(&mut self, graphics: &mut dyn Graphics);
}

/// An extension trait for widgets with multiple child widgets.
pub trait WidgetChildrenExt {
    /// Sets the child widgets of the widget.
    fn set_children(&mut self, children: Vec<BoxedWidget>);

    /// Sets the child widgets of the widget and returns self.
    fn with_children(mut self, children: Vec<BoxedWidget>) -> Self
    where
        Self: Sized,
    {
        self.set_children(children);
        self
    }

    /// Adds a child widget to the widget.
    fn add_child(&mut self, child: impl Widget + 'static);

    /// Adds a child widget to the widget and returns self.
    fn with_child(mut self, child: impl Widget + 'static) -> Self
    where
        Self: Sized,
    {
        self.add_child(child);
        self
    }
}

/// An extension trait for widgets with a layout style.
pub trait WidgetLayoutExt {
    /// Sets the layout style of the widget.
    fn set_layout_style(&mut self, layout_style: LayoutStyle);

    /// Sets the layout style of the widget and returns self.
    fn with_layout_style(mut self, layout_style: LayoutStyle) -> Self
    where
        Self: Sized,
    {
        self.set_layout_style(layout_style);
        self
    }
}
