use plinth_core::app::update::Update;
use plinth_core::event::{ControlId, PointerEvent};
use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::text::TextMeasurer;
use plinth_core::vgi::{shape_to_path, Graphics};
use plinth_core::widget::Widget;
use plinth_theme::style::ControlStyle;
use vello::kurbo::{BezPath, RoundedRect, RoundedRectRadii, Stroke};
use vello::peniko::Fill;

/// Displays a single run of text.
///
/// The label's desired size is its fixed size when one is set, otherwise
/// the measured text bounding box. Measurement goes through the external
/// [TextMeasurer]; while the measurer reports "not ready" the label stays
/// unmeasured and any owning panel defers.
///
/// When the fixed size is smaller than the measured text, a clip region
/// equal to the label's rect is installed around the text. The clip shape
/// is derived once and re-derived only when the size or top-left next
/// changes.
pub struct Label {
    id: ControlId,
    style: ControlStyle,
    text: String,
    top_left: Point,
    fixed_size: Option<Size>,
    measured: Option<Size>,
    assigned: Option<Size>,
    clip: Option<BezPath>,
}

impl Label {
    /// Create a new label with the given text.
    pub fn new(text: impl Into<String>, style: &ControlStyle) -> Self {
        Self {
            id: ControlId::next(),
            style: style.clone(),
            text: text.into(),
            top_left: Point::ZERO,
            fixed_size: None,
            measured: None,
            assigned: None,
            clip: None,
        }
    }

    /// Sets the top-left corner and returns self.
    pub fn with_top_left(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }

    /// Sets a fixed size and returns self. Text larger than the fixed
    /// rect is clipped to it.
    pub fn with_fixed_size(mut self, size: Size) -> Self {
        self.fixed_size = Some(size);
        self.clip = None;
        self
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Invalidates the measured size.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.measured = None;
        self.clip = None;
    }

    /// The measured text size, once available.
    pub fn measured_size(&self) -> Option<Size> {
        self.measured
    }

    /// Whether the current rect is smaller than the measured text and a
    /// clip region applies.
    fn needs_clip(&self, rect: Rect) -> bool {
        match self.measured {
            Some(text_size) => {
                rect.width() < text_size.width || rect.height() < text_size.height
            }
            None => false,
        }
    }
}

impl Widget for Label {
    fn id(&self) -> ControlId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let size = self.assigned.or_else(|| self.desired_size());
        Rect::new(self.top_left, size.unwrap_or(Size::ZERO))
    }

    fn desired_size(&self) -> Option<Size> {
        self.fixed_size.or(self.measured)
    }

    fn set_top_left(&mut self, top_left: Point) {
        if top_left != self.top_left {
            self.top_left = top_left;
            self.clip = None;
        }
    }

    fn assign_rect(&mut self, rect: Rect) {
        self.set_top_left(rect.origin);
        if self.assigned != Some(rect.size) {
            self.assigned = Some(rect.size);
            self.clip = None;
        }
    }

    fn calculate(&mut self, text: &mut dyn TextMeasurer) -> Update {
        if self.measured.is_some() {
            return Update::empty();
        }
        match text.measure(&self.text, &self.style.font) {
            Some(size) => {
                self.measured = Some(size);
                Update::LAYOUT | Update::DRAW
            }
            None => {
                log::trace!("label deferring, text metrics not ready");
                Update::empty()
            }
        }
    }

    fn pointer_event(&mut self, _event: &PointerEvent) -> Update {
        Update::empty()
    }

    fn render(&mut self, graphics: &mut dyn Graphics) {
        let rect = self.bounds();
        if rect.size.is_empty() && self.measured.is_none() {
            return;
        }

        if self.style.label_chrome {
            let radius =
                (self.style.rounding * rect.width().min(rect.height()) as f32) as f64;
            let shape = shape_to_path(&RoundedRect::from_rect(
                rect.to_kurbo(),
                RoundedRectRadii::from_single_radius(radius),
            ));
            graphics.fill(
                Fill::NonZero,
                Default::default(),
                &self.style.fill,
                None,
                &shape,
            );
            graphics.stroke(
                &Stroke::new(self.style.stroke_width),
                Default::default(),
                &self.style.stroke,
                None,
                &shape,
            );
        }

        let clipped = self.needs_clip(rect);
        if clipped {
            // Cached: the same path is reused until geometry changes.
            let clip = self
                .clip
                .get_or_insert_with(|| shape_to_path(&rect.to_kurbo()));
            graphics.push_layer(clip);
        }

        graphics.draw_text(
            &self.style.font,
            &self.style.text,
            vello::kurbo::Point::new(rect.left() as f64, rect.top() as f64),
            &self.text,
        );

        if clipped {
            graphics.pop_layer();
        }
    }
}
