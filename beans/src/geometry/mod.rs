pub mod intersection;

/// Axis-aligned rectangle stored as its four integer bounds.
/// `right` and `bottom` are exclusive, so a rect whose left edge
/// meets its right edge (or top meets bottom) is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

pub type PointF = glam::Vec2;

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

#[inline(always)]
pub const fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    Rect {
        left,
        top,
        right,
        bottom,
    }
}

#[inline(always)]
pub const fn point_f(x: f32, y: f32) -> PointF {
    glam::Vec2::new(x, y)
}
