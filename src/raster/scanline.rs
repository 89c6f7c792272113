use std::ops::Range;

use super::{draw_line, Surface};
use crate::color::Color;
use crate::polygon::{edges, Edge, EdgeMode, Point, Rect};

/// Collect the sorted x-coordinates where `edges` cross row `y`
///
/// `out` is cleared first so one buffer can be reused for every row.
/// Crossings outside `x_range` are dropped.
pub fn row_intersections(edges: &[Edge], y: i32, x_range: Range<i32>, out: &mut Vec<i32>) {
    out.clear();
    let yf = y as f32;

    for edge in edges {
        if edge.crosses_row(yf) {
            let x = edge.x_at_row(yf);
            if x_range.contains(&x) {
                out.push(x);
            }
        }
    }

    out.sort_unstable();
}

/// Fill the polygon bounded by the closed edges of `points` (even-odd rule)
///
/// Rows are limited to `clip` and the surface height, crossings to the
/// columns of `clip` and the surface width. Fewer than three points paint
/// nothing; a trailing unpaired crossing on a row is ignored.
pub fn fill<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color, clip: Rect) {
    if points.len() < 3 {
        return;
    }

    let bounds = clip.intersect(&Rect::new(0, 0, surface.width(), surface.height()));
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }

    let closed: Vec<Edge> = edges(points, EdgeMode::Closed).collect();
    // Preallocate intersection buffer (reused per scanline)
    let mut intersections = Vec::with_capacity(closed.len());

    for y in bounds.top()..bounds.bottom() {
        row_intersections(&closed, y, bounds.left()..bounds.right(), &mut intersections);

        for pair in intersections.chunks_exact(2) {
            let row = y as f32;
            draw_line(
                surface,
                Point::new(pair[0] as f32, row),
                Point::new(pair[1] as f32, row),
                color,
            );
        }
    }
}
