use super::Surface;
use crate::color::Color;
use crate::polygon::Point;

/// Integer Bresenham traversal between two pixels, endpoints inclusive
///
/// Clone before iterating to walk the same line again.
#[derive(Debug, Clone)]
pub struct Line {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Line {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        let (x1, y1) = start;
        let (x2, y2) = end;
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            end_x: x2,
            end_y: y2,
            dx,
            dy,
            sx: if x1 <= x2 { 1 } else { -1 },
            sy: if y1 <= y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = (self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Each step advances the major axis by exactly one
        let remaining = if self.dx >= self.dy {
            (self.end_x - self.x).unsigned_abs() as usize + 1
        } else {
            (self.end_y - self.y).unsigned_abs() as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Line {}

/// Pixels covering the segment from `start` to `end`, truncated toward zero
pub fn rasterize(start: Point, end: Point) -> Line {
    Line::new(start.to_pixel(), end.to_pixel())
}

/// Paint the segment from `start` to `end`
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, start: Point, end: Point, color: Color) {
    for (x, y) in rasterize(start, end) {
        surface.set_pixel(x, y, color);
    }
}
