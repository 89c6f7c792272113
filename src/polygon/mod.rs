mod edges;
mod ordering;
mod store;

pub use edges::{edges, Edge, EdgeMode};
pub use ordering::{centroid, OrderingPolicy};
pub use store::{VertexStore, MAX_VERTICES};

use crate::color::Color;

/// A point in 2D surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Truncate toward zero to a pixel coordinate
    #[inline]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// A placed point with its marker color
///
/// The color is cosmetic; fill geometry only looks at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }
}

/// Axis-aligned integer rectangle, `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// One past the last column
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the last row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() as f32
            && p.x < self.right() as f32
            && p.y >= self.top() as f32
            && p.y < self.bottom() as f32
    }

    /// Overlap of two rectangles (empty rect at `self` origin when disjoint)
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return Rect::new(self.x, self.y, 0, 0);
        }
        Rect::new(left, top, (right - left) as u32, (bottom - top) as u32)
    }
}
