use super::Point;

/// Axis-aligned rectangle given by its left-bottom corner and its size.
///
/// All predicates that take a `margin` compare edges after shifting them by
/// that many units, so the same rectangle pair can be accepted or rejected
/// depending on how much separation is demanded.
///
/// ```rust
/// use bongard::region::Rect;
///
/// let outer = Rect::new(0, 0, 10, 10);
/// let inner = Rect::new(2, 2, 6, 6);
/// assert!(inner.is_inside(&outer, 2));
/// assert!(!inner.is_inside(&outer, 3));
/// assert!(inner.is_overlapped(&outer, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    left_bottom: Point,
    right_top: Point,
    width: i32,
    height: i32,
}
impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "Rectangle size should be non-negative, found {}x{}",
            width,
            height
        );
        Self {
            left_bottom: Point::new(x, y),
            right_top: Point::new(x + width, y + height),
            width,
            height,
        }
    }

    // Getters
    pub fn left_bottom(&self) -> Point {
        self.left_bottom
    }
    pub fn right_top(&self) -> Point {
        self.right_top
    }
    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn xlo(&self) -> i32 {
        self.left_bottom.x()
    }
    pub fn xhi(&self) -> i32 {
        self.right_top.x()
    }
    pub fn ylo(&self) -> i32 {
        self.left_bottom.y()
    }
    pub fn yhi(&self) -> i32 {
        self.right_top.y()
    }

    // Predicates

    /// Check whether every edge of this rectangle sits at least `margin` inside `other`
    pub fn is_inside(&self, other: &Rect, margin: i32) -> bool {
        self.xlo() >= other.xlo() + margin
            && self.ylo() >= other.ylo() + margin
            && self.xhi() <= other.xhi() - margin
            && self.yhi() <= other.yhi() - margin
    }
    /// Check whether the projections on both axes meet once widened by `margin`
    pub fn is_overlapped(&self, other: &Rect, margin: i32) -> bool {
        self.xlo() <= other.xhi() + margin
            && self.xhi() + margin >= other.xlo()
            && self.ylo() <= other.yhi() + margin
            && self.yhi() + margin >= other.ylo()
    }
    /// Strictly right of `other`
    pub fn is_east_of(&self, other: &Rect) -> bool {
        self.xlo() > other.xhi()
    }
    /// Strictly above `other`
    pub fn is_north_of(&self, other: &Rect) -> bool {
        self.ylo() > other.yhi()
    }
}
