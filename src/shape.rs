use std::{
    f64::consts::{FRAC_1_SQRT_2, SQRT_2},
    fmt::Display,
};

use crate::{
    config::{Id, BOUND, MARGIN},
    region::{Point, Rect},
};

/// The four kinds of shape a picture can hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    TriangleUp,
    TriangleDown,
}
impl ShapeKind {
    /// Every kind, in the order the sampler indexes them
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::TriangleDown,
        ShapeKind::TriangleUp,
    ];

    pub fn is_triangle(&self) -> bool {
        matches!(self, ShapeKind::TriangleUp | ShapeKind::TriangleDown)
    }
}

/// A shape placed on the canvas.
///
/// Besides its native parameters a shape carries two rectangles fixed at
/// construction: the outer one encloses the whole shape and drives overlap,
/// overflow, and direction tests; the inner one is enclosed by the shape and
/// is the target of containment tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: Option<Id>,
    kind: ShapeKind,
    origin: Point,
    size: i32,
    outer: Rect,
    inner: Rect,
}
impl Shape {
    // Creation

    /// Create a shape whose outer rectangle has its left-bottom corner at (x, y).
    ///
    /// `size` is the width for squares, the diameter for circles, and the
    /// base length for triangles.
    pub fn new(kind: ShapeKind, x: i32, y: i32, size: i32) -> Self {
        let (outer, inner) = match kind {
            ShapeKind::Square => {
                let rect = Rect::new(x, y, size, size);
                (rect, rect)
            }
            ShapeKind::Circle => circle_rects(x, y, size),
            ShapeKind::TriangleUp => triangle_rects(x, y, size, true),
            ShapeKind::TriangleDown => triangle_rects(x, y, size, false),
        };
        Self {
            id: None,
            kind,
            origin: Point::new(x, y),
            size,
            outer,
            inner,
        }
    }
    pub fn square(x: i32, y: i32, width: i32) -> Self {
        Self::new(ShapeKind::Square, x, y, width)
    }
    pub fn circle(x: i32, y: i32, diameter: i32) -> Self {
        Self::new(ShapeKind::Circle, x, y, diameter)
    }
    pub fn triangle(x: i32, y: i32, width: i32, point_up: bool) -> Self {
        let kind = if point_up {
            ShapeKind::TriangleUp
        } else {
            ShapeKind::TriangleDown
        };
        Self::new(kind, x, y, width)
    }

    // Getters
    pub fn id(&self) -> Option<Id> {
        self.id
    }
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
    pub fn origin(&self) -> Point {
        self.origin
    }
    pub fn size(&self) -> i32 {
        self.size
    }
    pub fn outer(&self) -> &Rect {
        &self.outer
    }
    pub fn inner(&self) -> &Rect {
        &self.inner
    }

    pub(crate) fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }

    // Predicates

    /// Check whether this shape fits within the inner rectangle of `other`
    pub fn is_inside(&self, other: &Shape) -> bool {
        self.outer.is_inside(&other.inner, MARGIN)
    }
    pub fn is_overlapped(&self, other: &Shape) -> bool {
        self.outer.is_overlapped(&other.outer, MARGIN)
    }
    pub fn is_east_of(&self, other: &Shape) -> bool {
        self.outer.is_east_of(&other.outer)
    }
    pub fn is_north_of(&self, other: &Shape) -> bool {
        self.outer.is_north_of(&other.outer)
    }
    /// Overlapped without either shape containing the other
    pub fn conflict(&self, other: &Shape) -> bool {
        self.is_overlapped(other) && !self.is_inside(other) && !other.is_inside(self)
    }
    /// Check whether the shape reaches the canvas bound
    pub fn overflow(&self) -> bool {
        let rt = self.outer.right_top();
        rt.x() >= BOUND || rt.y() >= BOUND
    }
}
impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ShapeKind::Square => write!(f, "Square({}, {})", self.origin, self.size),
            ShapeKind::Circle => write!(f, "Circle({}, {})", self.origin, self.size / 2),
            ShapeKind::TriangleUp => write!(f, "TriangleUp({}, {})", self.origin, self.size),
            ShapeKind::TriangleDown => write!(f, "TriangleDown({}, {})", self.origin, self.size),
        }
    }
}

/// Outer box of the circle and the square inscribed in it
fn circle_rects(x: i32, y: i32, diameter: i32) -> (Rect, Rect) {
    let outer = Rect::new(x, y, diameter, diameter);
    let radius = f64::from(diameter / 2);
    let offset = radius - FRAC_1_SQRT_2 * radius;
    let side = (SQRT_2 * radius) as i32;
    let inner = Rect::new(
        (f64::from(x) + offset) as i32,
        (f64::from(y) + offset) as i32,
        side,
        side,
    );
    (outer, inner)
}

/// Outer box of an equilateral triangle and a square resting on its base
fn triangle_rects(x: i32, y: i32, width: i32, point_up: bool) -> (Rect, Rect) {
    let height = (f64::from(width) * 3f64.sqrt() / 2.0).ceil() as i32;
    let outer = Rect::new(x, y, width, height);
    let side = if height + width == 0 {
        0
    } else {
        height * width / (height + width)
    };
    let inner_x = x + (width - side) / 2;
    let inner_y = if point_up { y } else { y + height - side };
    (outer, Rect::new(inner_x, inner_y, side, side))
}
