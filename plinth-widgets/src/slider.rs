use plinth_core::app::update::Update;
use plinth_core::event::{ControlId, PointerEvent};
use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::interaction::InteractionState;
use plinth_core::text::TextMeasurer;
use plinth_core::vgi::{shape_to_path, Graphics};
use plinth_core::widget::Widget;
use plinth_theme::style::ControlStyle;
use vello::kurbo::{Line, RoundedRect, RoundedRectRadii, Stroke};
use vello::peniko::Fill;

const TRACK_WIDTH: i32 = 120;
const TRACK_HEIGHT: i32 = 16;
const THUMB_SIZE: i32 = 10;

/// A slider widget mapping a horizontal pointer position onto a value in
/// an inclusive range.
///
/// The mapping is pure: a click jumps to the absolute position, each drag
/// sample recomputes the value from the current pointer position, and
/// assignment always clamps to the range. With an interval configured the
/// value additionally snaps to the nearest multiple of the interval
/// measured from the lower bound.
pub struct Slider {
    id: ControlId,
    style: ControlStyle,
    interaction: InteractionState,
    range: (f64, f64),
    interval: Option<f64>,
    value: f64,
    on_change: Option<Box<dyn FnMut(f64)>>,
    top_left: Point,
    measured: Option<Size>,
    assigned: Option<Size>,
}

impl Slider {
    /// Create a new slider over the inclusive `range`.
    ///
    /// The value starts at the lower bound. A range whose lower bound
    /// exceeds its upper bound is a programmer error.
    pub fn new(range: (f64, f64), style: &ControlStyle) -> Self {
        assert!(
            range.0 <= range.1,
            "slider range lower bound {} exceeds upper bound {}",
            range.0,
            range.1
        );
        Self {
            id: ControlId::next(),
            style: style.clone(),
            interaction: InteractionState::new(),
            range,
            interval: None,
            value: range.0,
            on_change: None,
            top_left: Point::ZERO,
            measured: None,
            assigned: None,
        }
    }

    /// Sets the top-left corner and returns self.
    pub fn with_top_left(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }

    /// Sets the quantization interval and returns self. The interval
    /// must be positive. The current value is re-snapped.
    pub fn with_interval(mut self, interval: f64) -> Self {
        assert!(interval > 0.0, "slider interval must be positive");
        self.interval = Some(interval);
        self.set_value(self.value);
        self
    }

    /// Sets the initial value (clamped and snapped) and returns self.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Sets the function to be called whenever the value changes.
    pub fn with_on_change(mut self, on_change: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The inclusive range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// The quantization interval, if any.
    pub fn interval(&self) -> Option<f64> {
        self.interval
    }

    /// Assign a value: clamp into the range, snap to the interval when
    /// one is configured, then clamp again since snapping can push the
    /// value past the upper bound.
    pub fn set_value(&mut self, raw: f64) -> Update {
        let (lower, upper) = self.range;
        let mut value = raw.clamp(lower, upper);
        if let Some(interval) = self.interval {
            value = lower + ((value - lower) / interval).round() * interval;
            value = value.clamp(lower, upper);
        }
        if value != self.value {
            self.value = value;
            if let Some(on_change) = &mut self.on_change {
                on_change(value);
            }
            Update::DRAW
        } else {
            Update::empty()
        }
    }

    /// Width of the value track: the bounding width minus padding on
    /// both sides.
    fn track_width(&self) -> i32 {
        (self.bounds().width() - 2 * self.style.padding).max(1)
    }

    /// Map a global pointer location onto a raw (unclamped) value.
    pub fn value_from_pointer(&self, global: Point) -> f64 {
        let bounds = self.bounds();
        let local_x = (global.x - bounds.left() - self.style.padding) as f64;
        let normal = local_x / self.track_width() as f64;
        let (lower, upper) = self.range;
        lower + normal * (upper - lower)
    }

    /// The fraction of the range the current value sits at.
    fn normalized(&self) -> f64 {
        let (lower, upper) = self.range;
        if upper == lower {
            0.0
        } else {
            (self.value - lower) / (upper - lower)
        }
    }
}

impl Widget for Slider {
    fn id(&self) -> ControlId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let size = self.assigned.or(self.measured);
        Rect::new(self.top_left, size.unwrap_or(Size::ZERO))
    }

    fn desired_size(&self) -> Option<Size> {
        self.measured
    }

    fn set_top_left(&mut self, top_left: Point) {
        self.top_left = top_left;
    }

    fn assign_rect(&mut self, rect: Rect) {
        self.top_left = rect.origin;
        self.assigned = Some(rect.size);
    }

    fn calculate(&mut self, _text: &mut dyn TextMeasurer) -> Update {
        // Leaf control: measured once, cached until torn down.
        if self.measured.is_none() {
            self.measured = Some(Size::new(TRACK_WIDTH, TRACK_HEIGHT));
            Update::LAYOUT | Update::DRAW
        } else {
            Update::empty()
        }
    }

    fn pointer_event(&mut self, event: &PointerEvent) -> Update {
        let mut update = self.interaction.apply(event);
        match event {
            PointerEvent::Clicked { position } => {
                update |= self.set_value(self.value_from_pointer(*position));
            }
            PointerEvent::Dragged { position, .. } if self.interaction.is_pressed() => {
                update |= self.set_value(self.value_from_pointer(*position));
            }
            _ => {}
        }
        update
    }

    fn render(&mut self, graphics: &mut dyn Graphics) {
        let bounds = self.bounds();
        if bounds.size.is_empty() {
            return;
        }

        self.interaction.sync_cursor(graphics, &self.style);

        let pad = self.style.padding;
        let center_y = bounds.center_y() as f64;
        let track_left = bounds.left() + pad;
        // The drawn track is one thumb-width shorter than the value
        // track so the thumb never leaves the padded area.
        let track_span = (bounds.width() - 2 * pad - THUMB_SIZE).max(0);

        graphics.stroke(
            &Stroke::new(self.style.stroke_width),
            Default::default(),
            &self.style.stroke,
            None,
            &shape_to_path(&Line::new(
                (track_left as f64, center_y),
                ((track_left + track_span) as f64, center_y),
            )),
        );

        let thumb_x = track_left + (self.normalized() * track_span as f64).round() as i32;
        let thumb = Rect::new(
            Point::new(thumb_x, bounds.center_y() - THUMB_SIZE / 2),
            Size::new(THUMB_SIZE, THUMB_SIZE),
        );
        let radius = (self.style.rounding * THUMB_SIZE as f32) as f64;
        graphics.fill(
            Fill::NonZero,
            Default::default(),
            self.interaction.fill(&self.style),
            None,
            &shape_to_path(&RoundedRect::from_rect(
                thumb.to_kurbo(),
                RoundedRectRadii::from_single_radius(radius),
            )),
        );
    }
}
