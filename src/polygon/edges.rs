use super::Point;

/// Which consecutive-pair edges to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Only the strokes between placed points, `i` in `[0, n-1)`
    Open,
    /// Includes the closing edge from the last point back to the first, `i` in `[0, n)`
    Closed,
}

/// A directed segment between two consecutive vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Half-open crossing test: exactly one endpoint lies strictly below row `y`
    ///
    /// Horizontal edges never cross, so `x_at_row` is never asked to divide by zero.
    #[inline]
    pub fn crosses_row(&self, y: f32) -> bool {
        (self.from.y > y) != (self.to.y > y)
    }

    /// X coordinate where the edge meets row `y`, truncated toward zero
    ///
    /// Only meaningful when `crosses_row(y)` holds.
    #[inline]
    pub fn x_at_row(&self, y: f32) -> i32 {
        let (p1, p2) = (self.from, self.to);
        (p1.x + (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y)) as i32
    }
}

/// Edges of the vertex sequence
///
/// Fewer than two points yield no edges. With two points, `Closed` yields the
/// segment and its reverse.
pub fn edges(points: &[Point], mode: EdgeMode) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    let count = match mode {
        _ if n < 2 => 0,
        EdgeMode::Open => n - 1,
        EdgeMode::Closed => n,
    };
    (0..count).map(move |i| Edge::new(points[i], points[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 200.0),
        ]
    }

    #[test]
    fn test_closed_edges_wrap_around() {
        let pts = square();
        let closed: Vec<Edge> = edges(&pts, EdgeMode::Closed).collect();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[3], Edge::new(pts[3], pts[0]));
    }

    #[test]
    fn test_open_edges_skip_closing_segment() {
        let pts = square();
        let open: Vec<Edge> = edges(&pts, EdgeMode::Open).collect();
        assert_eq!(open.len(), 3);
        assert_eq!(open[2], Edge::new(pts[2], pts[3]));
    }

    #[test]
    fn test_degenerate_counts() {
        let one = [Point::new(1.0, 1.0)];
        assert_eq!(edges(&one, EdgeMode::Closed).count(), 0);
        assert_eq!(edges(&[], EdgeMode::Open).count(), 0);

        let two = [Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let closed: Vec<Edge> = edges(&two, EdgeMode::Closed).collect();
        assert_eq!(closed, vec![Edge::new(two[0], two[1]), Edge::new(two[1], two[0])]);
        assert_eq!(edges(&two, EdgeMode::Open).count(), 1);
    }

    #[test]
    fn test_horizontal_edge_never_crosses() {
        let e = Edge::new(Point::new(0.0, 10.0), Point::new(50.0, 10.0));
        for y in 0..20 {
            assert!(!e.crosses_row(y as f32));
        }
    }

    #[test]
    fn test_crossing_is_half_open() {
        let e = Edge::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert!(e.crosses_row(0.0));
        assert!(e.crosses_row(9.0));
        assert!(!e.crosses_row(10.0));
        assert!(!e.crosses_row(-1.0));
    }

    #[test]
    fn test_x_at_row_interpolates() {
        let e = Edge::new(Point::new(10.0, 0.0), Point::new(5.0, 10.0));
        assert_eq!(e.x_at_row(5.0), 7);
        let e = Edge::new(Point::new(5.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(e.x_at_row(5.0), 2);
    }
}
