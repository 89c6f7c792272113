//! Segment intersection and boundary simplicity checks

use crate::polygon::{edges, Edge, EdgeMode, Point};

/// Check if two segments intersect
/// Returns the intersection point, or None for parallel or disjoint segments
pub fn segment_intersection(a: &Edge, b: &Edge) -> Option<Point> {
    let dx1 = a.to.x - a.from.x;
    let dy1 = a.to.y - a.from.y;
    let dx2 = b.to.x - b.from.x;
    let dy2 = b.to.y - b.from.y;

    let cross = dx1 * dy2 - dy1 * dx2;

    // Parallel lines
    if cross.abs() < 0.0001 {
        return None;
    }

    let dx3 = b.from.x - a.from.x;
    let dy3 = b.from.y - a.from.y;

    let t = (dx3 * dy2 - dy3 * dx2) / cross;
    let u = (dx3 * dy1 - dy3 * dx1) / cross;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(a.from.x + t * dx1, a.from.y + t * dy1))
    } else {
        None
    }
}

/// True when two non-adjacent edges of the closed boundary intersect
pub fn self_intersects(points: &[Point]) -> bool {
    let all: Vec<Edge> = edges(points, EdgeMode::Closed).collect();
    let n = all.len();
    for i in 0..n {
        for j in (i + 2)..n {
            // First and last edges share vertex 0
            if i == 0 && j == n - 1 {
                continue;
            }
            if segment_intersection(&all[i], &all[j]).is_some() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_diagonals() {
        let a = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Edge::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert_eq!(segment_intersection(&a, &b), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_parallel_and_disjoint() {
        let a = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let b = Edge::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert_eq!(segment_intersection(&a, &b), None);
        let c = Edge::new(Point::new(20.0, -5.0), Point::new(20.0, 5.0));
        assert_eq!(segment_intersection(&a, &c), None);
    }

    #[test]
    fn test_bowtie_self_intersects() {
        let bowtie = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(self_intersects(&bowtie));

        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(!self_intersects(&square));
    }

    #[test]
    fn test_triangle_is_simple() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)];
        assert!(!self_intersects(&tri));
        assert!(!self_intersects(&tri[..2]));
    }
}
