use nalgebra::Vector2;
use plinth_core::app::update::Update;
use plinth_core::event::{ControlId, PointerEvent};
use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::interaction::InteractionState;
use plinth_core::text::TextMeasurer;
use plinth_core::vgi::{shape_to_path, Graphics};
use plinth_core::widget::Widget;
use plinth_theme::style::ControlStyle;
use vello::kurbo::{RoundedRect, RoundedRectRadii, Stroke};
use vello::peniko::Fill;

/// An interactive area with a text caption that runs a closure when
/// clicked.
///
/// While hovered *and* pressed the rendered rect is shifted by a fixed
/// small offset, producing a pressed-in look. The logical bounding rect
/// that the event substrate hit-tests against never moves.
pub struct Button {
    id: ControlId,
    style: ControlStyle,
    text: String,
    interaction: InteractionState,
    on_click: Option<Box<dyn FnMut(Point)>>,
    top_left: Point,
    measured_text: Option<Size>,
    assigned: Option<Size>,
}

impl Button {
    /// Create a new button with the given caption.
    pub fn new(text: impl Into<String>, style: &ControlStyle) -> Self {
        Self {
            id: ControlId::next(),
            style: style.clone(),
            text: text.into(),
            interaction: InteractionState::new(),
            on_click: None,
            top_left: Point::ZERO,
            measured_text: None,
            assigned: None,
        }
    }

    /// Sets the top-left corner and returns self.
    pub fn with_top_left(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }

    /// Sets the function to be called when the button is clicked. The
    /// closure receives the click location in the button's local space.
    pub fn with_on_click(mut self, on_click: impl FnMut(Point) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// The offset applied to the rendered rect while pressed-in.
    pub fn press_offset() -> Vector2<i32> {
        Vector2::new(1, 2)
    }

    /// The interaction state, for embedders deriving extra visuals.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    fn visual_rect(&self) -> Rect {
        let rect = self.bounds();
        if self.interaction.shows_pressed() {
            rect.translated(Self::press_offset())
        } else {
            rect
        }
    }
}

impl Widget for Button {
    fn id(&self) -> ControlId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let size = self.assigned.or_else(|| self.desired_size());
        Rect::new(self.top_left, size.unwrap_or(Size::ZERO))
    }

    fn desired_size(&self) -> Option<Size> {
        let pad = self.style.padding;
        self.measured_text
            .map(|text| Size::new(text.width + 2 * pad, text.height + 2 * pad))
    }

    fn set_top_left(&mut self, top_left: Point) {
        self.top_left = top_left;
    }

    fn assign_rect(&mut self, rect: Rect) {
        self.top_left = rect.origin;
        self.assigned = Some(rect.size);
    }

    fn calculate(&mut self, text: &mut dyn TextMeasurer) -> Update {
        if self.measured_text.is_some() {
            return Update::empty();
        }
        match text.measure(&self.text, &self.style.font) {
            Some(size) => {
                self.measured_text = Some(size);
                Update::LAYOUT | Update::DRAW
            }
            None => {
                log::trace!("button deferring, text metrics not ready");
                Update::empty()
            }
        }
    }

    fn pointer_event(&mut self, event: &PointerEvent) -> Update {
        let update = self.interaction.apply(event);
        if let PointerEvent::Clicked { position } = event {
            if let Some(on_click) = &mut self.on_click {
                let local = Point::new(
                    position.x - self.top_left.x,
                    position.y - self.top_left.y,
                );
                on_click(local);
            }
        }
        update
    }

    fn render(&mut self, graphics: &mut dyn Graphics) {
        let rect = self.visual_rect();
        if rect.size.is_empty() {
            return;
        }

        self.interaction.sync_cursor(graphics, &self.style);

        let radius = (self.style.rounding * rect.width().min(rect.height()) as f32) as f64;
        let shape = shape_to_path(&RoundedRect::from_rect(
            rect.to_kurbo(),
            RoundedRectRadii::from_single_radius(radius),
        ));
        graphics.fill(
            Fill::NonZero,
            Default::default(),
            self.interaction.fill(&self.style),
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

        let pad = self.style.padding;
        graphics.draw_text(
            &self.style.font,
            &self.style.text,
            vello::kurbo::Point::new((rect.left() + pad) as f64, (rect.top() + pad) as f64),
            &self.text,
        );
    }
}
