use std::cell::RefCell;
use std::rc::Rc;

use plinth_core::event::PointerEvent;
use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::layout::{LayoutStyle, VerticalAlignment};
use plinth_core::text::{MonospaceMetrics, TextMeasurer};
use plinth_core::vgi::recorder::RecordingGraphics;
use plinth_core::widget::{Widget, WidgetChildrenExt, WidgetLayoutExt};
use plinth_theme::style::{ControlStyle, FontSpec};
use plinth_widgets::{Button, Label, Panel};

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics {
        char_width: 8,
        line_height: 16,
    }
}

/// Reports "not ready" for a number of calls before delegating.
struct WarmupMetrics {
    remaining: u32,
    inner: MonospaceMetrics,
}

impl TextMeasurer for WarmupMetrics {
    fn measure(&mut self, text: &str, font: &FontSpec) -> Option<Size> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return None;
        }
        self.inner.measure(text, font)
    }
}

fn sized_label(style: &ControlStyle, width: i32, height: i32) -> Label {
    Label::new("x", style).with_fixed_size(Size::new(width, height))
}

#[test]
fn uniform_row_stretches_children_to_the_largest() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20))
        .with_child(sized_label(&style, 50, 20));

    panel.calculate(&mut metrics());

    assert!(panel.is_measured());
    assert_eq!(panel.children()[0].bounds(), Rect::from_xywh(5, 5, 50, 20));
    assert_eq!(panel.children()[1].bounds(), Rect::from_xywh(60, 5, 50, 20));
    assert_eq!(panel.bounds(), Rect::from_xywh(0, 0, 115, 30));
}

#[test]
fn uniform_column_stacks_downwards() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformColumn)
        .with_child(sized_label(&style, 30, 20))
        .with_child(sized_label(&style, 50, 20));

    panel.calculate(&mut metrics());

    assert_eq!(panel.children()[0].bounds(), Rect::from_xywh(5, 5, 50, 20));
    assert_eq!(panel.children()[1].bounds(), Rect::from_xywh(5, 30, 50, 20));
    assert_eq!(panel.bounds(), Rect::from_xywh(0, 0, 60, 55));
}

#[test]
fn row_with_bottom_alignment_lines_up_bottom_edges() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::Row(VerticalAlignment::Bottom))
        .with_size(Size::new(100, 50))
        .with_child(sized_label(&style, 20, 10))
        .with_child(sized_label(&style, 20, 30));

    panel.calculate(&mut metrics());

    let first = panel.children()[0].bounds();
    let second = panel.children()[1].bounds();
    assert_eq!(first, Rect::from_xywh(5, 35, 20, 10));
    assert_eq!(second, Rect::from_xywh(30, 15, 20, 30));
    assert_eq!(first.bottom(), second.bottom());

    // The panel wraps the occupied span, not the configured extent.
    assert_eq!(panel.bounds(), Rect::from_xywh(0, 0, 55, 40));
}

#[test]
fn panel_defers_until_every_child_is_measured() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(Label::new("hello", &style));
    let mut text = WarmupMetrics {
        remaining: 1,
        inner: metrics(),
    };

    panel.calculate(&mut text);
    assert!(!panel.is_measured());
    assert_eq!(panel.bounds(), Rect::ZERO);

    // An unmeasured panel draws nothing.
    let mut graphics = RecordingGraphics::new();
    panel.render(&mut graphics);
    assert!(graphics.commands.is_empty());

    panel.calculate(&mut text);
    assert!(panel.is_measured());
    assert_eq!(panel.children()[0].bounds(), Rect::from_xywh(5, 5, 40, 16));
    assert_eq!(panel.bounds(), Rect::from_xywh(0, 0, 50, 26));
}

#[test]
fn repeated_calculation_is_idempotent() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20))
        .with_child(sized_label(&style, 50, 20));

    panel.calculate(&mut metrics());
    let bounds = panel.bounds();
    let child_bounds: Vec<Rect> = panel.children().iter().map(|c| c.bounds()).collect();

    let update = panel.calculate(&mut metrics());
    assert!(update.is_empty());
    assert_eq!(panel.bounds(), bounds);
    let settled: Vec<Rect> = panel.children().iter().map(|c| c.bounds()).collect();
    assert_eq!(settled, child_bounds);
}

#[test]
fn layout_style_change_triggers_rearrangement() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20))
        .with_child(sized_label(&style, 50, 20));
    panel.calculate(&mut metrics());

    panel.set_layout_style(LayoutStyle::UniformColumn);
    assert!(!panel.is_measured());

    panel.calculate(&mut metrics());
    assert_eq!(panel.children()[1].bounds(), Rect::from_xywh(5, 30, 50, 20));
    assert_eq!(panel.bounds(), Rect::from_xywh(0, 0, 60, 55));
}

#[test]
fn moving_the_panel_moves_its_children() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20));
    panel.calculate(&mut metrics());

    panel.set_top_left(Point::new(10, 10));
    assert!(!panel.is_measured());

    panel.calculate(&mut metrics());
    assert_eq!(panel.children()[0].bounds(), Rect::from_xywh(15, 15, 30, 20));
    assert_eq!(panel.bounds(), Rect::from_xywh(10, 10, 40, 30));
}

#[test]
fn setting_the_same_top_left_keeps_the_cached_size() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20));
    panel.calculate(&mut metrics());

    panel.set_top_left(Point::ZERO);
    assert!(panel.is_measured());
}

#[test]
fn nested_panels_settle_one_level_per_pass() {
    let style = ControlStyle::defaults();
    let inner = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 26, 26));
    let mut outer = Panel::new(&style, LayoutStyle::UniformRow).with_child(inner);

    // First pass: the inner panel measures bottom-up, then the outer
    // panel's assignment moves it, invalidating its cache again.
    outer.calculate(&mut metrics());
    assert_eq!(outer.bounds(), Rect::from_xywh(0, 0, 46, 46));
    assert_eq!(outer.children()[0].desired_size(), None);

    // Second pass: the inner panel re-arranges at the assigned origin.
    outer.calculate(&mut metrics());
    assert_eq!(outer.children()[0].bounds(), Rect::from_xywh(5, 5, 36, 36));

    // Third pass: the tree is settled and bit-stable.
    let update = outer.calculate(&mut metrics());
    assert!(update.is_empty());
    assert_eq!(outer.bounds(), Rect::from_xywh(0, 0, 46, 46));
    assert_eq!(outer.children()[0].bounds(), Rect::from_xywh(5, 5, 36, 36));
}

#[test]
fn clicks_reach_nested_controls_in_their_local_space() {
    let style = ControlStyle::defaults();
    let clicked = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&clicked);
    let button = Button::new("OK", &style)
        .with_on_click(move |local| *sink.borrow_mut() = Some(local));
    let button_id = button.id();

    let inner = Panel::new(&style, LayoutStyle::UniformRow).with_child(button);
    let mut outer = Panel::new(&style, LayoutStyle::UniformRow).with_child(inner);
    outer.calculate(&mut metrics());
    outer.calculate(&mut metrics());

    // The button sits at (10, 10): one padding unit per nesting level.
    let update = outer
        .dispatch(button_id, &PointerEvent::Clicked { position: Point::new(13, 14) })
        .unwrap();
    assert!(update.is_empty());
    assert_eq!(*clicked.borrow(), Some(Point::new(3, 4)));
}

#[test]
fn owned_panels_ignore_external_size_changes() {
    let style = ControlStyle::defaults();
    let mut panel = Panel::new(&style, LayoutStyle::UniformRow)
        .with_child(sized_label(&style, 30, 20));
    panel.calculate(&mut metrics());

    panel.set_owned(true);
    panel.set_size(Size::new(200, 200));
    assert!(panel.is_measured());

    panel.set_owned(false);
    panel.set_size(Size::new(300, 300));
    assert!(!panel.is_measured());
}
