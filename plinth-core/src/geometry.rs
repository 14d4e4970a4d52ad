//! Geometry value types with integer surface coordinates.
//!
//! All derived values (edges, centers) are computed, never stored, so a
//! rect can not get out of sync with itself.

use nalgebra::Vector2;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by the given delta.
    pub fn translated(&self, delta: Vector2<i32>) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    /// The delta from `other` to this point.
    pub fn offset_from(&self, other: Point) -> Vector2<i32> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

/// A width/height pair. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in surface pixels.
    pub width: i32,
    /// Height in surface pixels.
    pub height: i32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size, clamping negative dimensions to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle: top-left point plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent. Width and height stay non-negative through every operation.
    pub size: Size,
}

impl Rect {
    /// The empty rect at the origin.
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rect from its top-left corner and size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rect from coordinates and dimensions.
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// The left edge.
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    /// The top edge.
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// The right edge (left + width).
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    /// The bottom edge (top + height).
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    /// The horizontal center.
    pub fn center_x(&self) -> i32 {
        self.origin.x + self.size.width / 2
    }

    /// The vertical center.
    pub fn center_y(&self) -> i32 {
        self.origin.y + self.size.height / 2
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Width of the rect.
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Height of the rect.
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// This rect moved by the given delta.
    pub fn translated(&self, delta: Vector2<i32>) -> Rect {
        Rect::new(self.origin.translated(delta), self.size)
    }

    /// This rect grown by `amount` on every side. A negative amount
    /// shrinks the rect; width and height clamp at zero.
    pub fn inflated(&self, amount: i32) -> Rect {
        Rect::new(
            Point::new(self.origin.x - amount, self.origin.y - amount),
            Size::new(self.size.width + 2 * amount, self.size.height + 2 * amount),
        )
    }

    /// Whether the point lies inside the rect (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Convert to a kurbo rect for the drawing surface.
    pub fn to_kurbo(&self) -> vello::kurbo::Rect {
        vello::kurbo::Rect::new(
            self.left() as f64,
            self.top() as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}
