use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::text::{MonospaceMetrics, TextMeasurer};
use plinth_core::vgi::recorder::{DrawCommand, RecordingGraphics};
use plinth_core::widget::Widget;
use plinth_theme::style::{ControlStyle, FontSpec};
use plinth_widgets::Label;

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics {
        char_width: 8,
        line_height: 16,
    }
}

struct NeverReady;

impl TextMeasurer for NeverReady {
    fn measure(&mut self, _text: &str, _font: &FontSpec) -> Option<Size> {
        None
    }
}

fn assert_rect_close(actual: vello::kurbo::Rect, expected: vello::kurbo::Rect) {
    for (a, e) in [
        (actual.x0, expected.x0),
        (actual.y0, expected.y0),
        (actual.x1, expected.x1),
        (actual.y1, expected.y1),
    ] {
        assert!((a - e).abs() < 1e-6, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn measures_text_through_the_collaborator() {
    let mut label = Label::new("hello world", &ControlStyle::defaults());
    assert_eq!(label.desired_size(), None);

    label.calculate(&mut metrics());
    assert_eq!(label.measured_size(), Some(Size::new(88, 16)));
    assert_eq!(label.desired_size(), Some(Size::new(88, 16)));
}

#[test]
fn fixed_size_overrides_the_measured_size() {
    let mut label = Label::new("hello world", &ControlStyle::defaults())
        .with_fixed_size(Size::new(20, 16));
    label.calculate(&mut metrics());

    assert_eq!(label.measured_size(), Some(Size::new(88, 16)));
    assert_eq!(label.desired_size(), Some(Size::new(20, 16)));
}

#[test]
fn stays_unmeasured_while_metrics_are_not_ready() {
    let mut label = Label::new("hello", &ControlStyle::defaults());
    let update = label.calculate(&mut NeverReady);
    assert!(update.is_empty());
    assert_eq!(label.desired_size(), None);

    label.calculate(&mut metrics());
    assert_eq!(label.desired_size(), Some(Size::new(40, 16)));
}

#[test]
fn overflowing_text_is_clipped_to_the_fixed_rect() {
    let mut label = Label::new("hello world", &ControlStyle::defaults())
        .with_fixed_size(Size::new(20, 16));
    label.calculate(&mut metrics());

    let mut graphics = RecordingGraphics::new();
    label.render(&mut graphics);

    assert_rect_close(graphics.layer_bounds()[0], Rect::from_xywh(0, 0, 20, 16).to_kurbo());
    assert_eq!(graphics.texts(), vec!["hello world"]);
    assert!(graphics
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::PopLayer)));
}

#[test]
fn clip_shape_is_stable_across_renders() {
    let mut label = Label::new("hello world", &ControlStyle::defaults())
        .with_fixed_size(Size::new(20, 16));
    label.calculate(&mut metrics());

    let mut graphics = RecordingGraphics::new();
    label.render(&mut graphics);
    label.render(&mut graphics);

    let layers = graphics.layer_bounds();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0], layers[1]);
}

#[test]
fn clip_shape_follows_the_label_when_moved() {
    let mut label = Label::new("hello world", &ControlStyle::defaults())
        .with_fixed_size(Size::new(20, 16));
    label.calculate(&mut metrics());

    let mut graphics = RecordingGraphics::new();
    label.render(&mut graphics);

    label.set_top_left(Point::new(7, 3));
    label.render(&mut graphics);

    let layers = graphics.layer_bounds();
    assert_rect_close(layers[1], Rect::from_xywh(7, 3, 20, 16).to_kurbo());
}

#[test]
fn fitting_text_is_not_clipped() {
    let mut label = Label::new("hello world", &ControlStyle::defaults())
        .with_fixed_size(Size::new(100, 20));
    label.calculate(&mut metrics());

    let mut graphics = RecordingGraphics::new();
    label.render(&mut graphics);

    assert!(graphics.layer_bounds().is_empty());
    assert_eq!(graphics.texts(), vec!["hello world"]);
}

#[test]
fn replacing_the_text_invalidates_the_measurement() {
    let mut label = Label::new("hello", &ControlStyle::defaults());
    label.calculate(&mut metrics());
    assert_eq!(label.desired_size(), Some(Size::new(40, 16)));

    label.set_text("x");
    assert_eq!(label.desired_size(), None);

    label.calculate(&mut metrics());
    assert_eq!(label.desired_size(), Some(Size::new(8, 16)));
}

#[test]
fn chrome_is_drawn_only_when_enabled() {
    let mut style = ControlStyle::defaults();
    let mut label = Label::new("hi", &style).with_fixed_size(Size::new(30, 20));
    label.calculate(&mut metrics());

    let mut graphics = RecordingGraphics::new();
    label.render(&mut graphics);
    assert!(graphics.fill_bounds().is_empty());

    style.label_chrome = true;
    let mut chromed = Label::new("hi", &style).with_fixed_size(Size::new(30, 20));
    chromed.calculate(&mut metrics());

    graphics.clear();
    chromed.render(&mut graphics);
    assert_eq!(graphics.fill_bounds().len(), 1);
}
