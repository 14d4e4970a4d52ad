use plinth_core::app::update::Update;
use plinth_core::event::{ControlId, PointerEvent};
use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::layout::{Alignment, HorizontalAlignment, LayoutStyle, Property, Rule, VerticalAlignment};
use plinth_core::text::TextMeasurer;
use plinth_core::vgi::{shape_to_path, Graphics};
use plinth_core::widget::{BoxedWidget, Widget, WidgetChildrenExt, WidgetLayoutExt};
use plinth_theme::style::ControlStyle;
use vello::kurbo::{RoundedRect, RoundedRectRadii, Stroke};
use vello::peniko::Fill;

/// A container widget that owns an ordered list of children and assigns
/// their rectangles.
///
/// The panel negotiates sizes lazily: on a calculation pass it asks every
/// child for its desired size and, only once all of them report one,
/// aligns and distributes the child rects according to its [LayoutStyle]
/// and wraps its own size around the result plus padding. If any child is
/// not yet measured the panel silently defers and retries next pass.
///
/// The cached size is invalidated by a layout-style change, a top-left
/// change, or (only while not owned by another panel) an external size
/// change, so a stretch-owned panel never fights its parent's assignment.
pub struct Panel {
    id: ControlId,
    style: ControlStyle,
    layout_style: LayoutStyle,
    children: Vec<BoxedWidget>,
    top_left: Point,
    size: Size,
    cached_size: Option<Size>,
    owned: bool,
}

impl Panel {
    /// Create an empty panel with the given style and layout style.
    pub fn new(style: &ControlStyle, layout_style: LayoutStyle) -> Self {
        Self {
            id: ControlId::next(),
            style: style.clone(),
            layout_style,
            children: Vec::new(),
            top_left: Point::ZERO,
            size: Size::ZERO,
            cached_size: None,
            owned: false,
        }
    }

    /// Sets the top-left corner and returns self.
    pub fn with_top_left(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }

    /// Sets the extent used by aligned layout styles and returns self.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// The current layout style.
    pub fn layout_style(&self) -> LayoutStyle {
        self.layout_style
    }

    /// Whether the panel has a valid cached size.
    pub fn is_measured(&self) -> bool {
        self.cached_size.is_some()
    }

    /// The children, in distribution order.
    pub fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    /// Whether this panel is owned by another panel.
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Set the panel's extent.
    ///
    /// While owned by a parent the new extent is recorded but does not
    /// invalidate the cached size; the parent's assignment wins.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            if !self.owned {
                self.cached_size = None;
            }
        }
    }

    /// The content area: the panel's rect inset by one padding unit.
    fn content_origin(&self) -> Point {
        let pad = self.style.padding;
        Point::new(self.top_left.x + pad, self.top_left.y + pad)
    }

    /// Desired sizes of all children, or `None` while any child is still
    /// unmeasured. Rects keep each child's current origin so aligned
    /// styles see the children's current rectangles.
    fn child_rects(&self) -> Option<Vec<Rect>> {
        let mut rects = Vec::with_capacity(self.children.len());
        for child in &self.children {
            rects.push(Rect::new(child.bounds().origin, child.desired_size()?));
        }
        Some(rects)
    }

    fn arrange(&mut self) -> Option<Size> {
        let Some(mut rects) = self.child_rects() else {
            log::trace!("panel deferring measurement, child not yet measured");
            return None;
        };

        let pad = self.style.padding;
        let origin = self.content_origin();

        match self.layout_style {
            LayoutStyle::UniformRow => {
                let target = Size::new(
                    Property::MaxWidth.measure(&rects),
                    Property::MaxHeight.measure(&rects),
                );
                let source = Rect::new(origin, target);
                Alignment::stretch().apply(&mut rects, source);
                Rule::DistributeHorizontally {
                    left: source.left(),
                    spacing: pad,
                }
                .apply(&mut rects);
            }
            LayoutStyle::UniformColumn => {
                let target = Size::new(
                    Property::MaxWidth.measure(&rects),
                    Property::MaxHeight.measure(&rects),
                );
                let source = Rect::new(origin, target);
                Alignment::stretch().apply(&mut rects, source);
                Rule::DistributeVertically {
                    top: source.top(),
                    spacing: pad,
                }
                .apply(&mut rects);
            }
            LayoutStyle::Row(vertical) => {
                let content = Size::new(self.size.width - 2 * pad, self.size.height - 2 * pad);
                let source = Rect::new(origin, content);
                Alignment::new(HorizontalAlignment::Left, vertical).apply(&mut rects, source);
                Rule::DistributeHorizontally {
                    left: source.left(),
                    spacing: pad,
                }
                .apply(&mut rects);
            }
            LayoutStyle::Column(horizontal) => {
                let content = Size::new(self.size.width - 2 * pad, self.size.height - 2 * pad);
                let source = Rect::new(origin, content);
                Alignment::new(horizontal, VerticalAlignment::Top).apply(&mut rects, source);
                Rule::DistributeVertically {
                    top: source.top(),
                    spacing: pad,
                }
                .apply(&mut rects);
            }
        }

        for (child, rect) in self.children.iter_mut().zip(&rects) {
            child.assign_rect(*rect);
        }

        Some(Size::new(
            Property::FullWidth.measure(&rects) + 2 * pad,
            Property::FullHeight.measure(&rects) + 2 * pad,
        ))
    }
}

impl WidgetChildrenExt for Panel {
    fn set_children(&mut self, children: Vec<BoxedWidget>) {
        self.children = children;
        for child in &mut self.children {
            child.set_owned(true);
        }
        self.cached_size = None;
    }

    fn add_child(&mut self, child: impl Widget + 'static) {
        let mut child: BoxedWidget = Box::new(child);
        child.set_owned(true);
        self.children.push(child);
        self.cached_size = None;
    }
}

impl WidgetLayoutExt for Panel {
    fn set_layout_style(&mut self, layout_style: LayoutStyle) {
        if layout_style != self.layout_style {
            self.layout_style = layout_style;
            self.cached_size = None;
        }
    }
}

impl Widget for Panel {
    fn id(&self) -> ControlId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.top_left, self.cached_size.unwrap_or(Size::ZERO))
    }

    fn desired_size(&self) -> Option<Size> {
        self.cached_size
    }

    fn set_top_left(&mut self, top_left: Point) {
        if top_left != self.top_left {
            self.top_left = top_left;
            self.cached_size = None;
        }
    }

    fn assign_rect(&mut self, rect: Rect) {
        self.set_top_left(rect.origin);
        // Assigned size never invalidates: the parent owns it.
        self.size = rect.size;
    }

    fn set_owned(&mut self, owned: bool) {
        self.owned = owned;
    }

    fn calculate(&mut self, text: &mut dyn TextMeasurer) -> Update {
        let mut update = Update::empty();
        for child in &mut self.children {
            update |= child.calculate(text);
        }

        if self.cached_size.is_none() {
            if let Some(size) = self.arrange() {
                self.size = size;
                self.cached_size = Some(size);
                update |= Update::LAYOUT | Update::DRAW;
            }
        }

        update
    }

    fn pointer_event(&mut self, _event: &PointerEvent) -> Update {
        // Panels group; they do not interact.
        Update::empty()
    }

    fn dispatch(&mut self, target: ControlId, event: &PointerEvent) -> Option<Update> {
        if target == self.id {
            return Some(self.pointer_event(event));
        }
        for child in &mut self.children {
            if let Some(update) = child.dispatch(target, event) {
                return Some(update);
            }
        }
        None
    }

    fn render(&mut self, graphics: &mut dyn Graphics) {
        let Some(size) = self.cached_size else {
            return;
        };

        let rect = Rect::new(self.top_left, size);
        let radius = (self.style.rounding * size.width.min(size.height) as f32) as f64;
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

        // Children draw themselves; the panel only paints its own chrome.
        for child in &mut self.children {
            child.render(graphics);
        }
    }
}
