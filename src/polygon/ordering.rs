use serde::{Deserialize, Serialize};

use super::Point;

/// How the placed points are ordered into a boundary before filling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Click order, exactly as placed
    #[default]
    Insertion,
    /// Ascending `atan2` angle around the centroid
    ///
    /// Untangles any star-shaped point set. Point sets whose true boundary is
    /// not visible from the centroid can still self-intersect.
    Angular,
}

impl OrderingPolicy {
    /// Ordered copy of `points`; the input is never reordered in place
    pub fn order(self, points: &[Point]) -> Vec<Point> {
        let mut ordered = points.to_vec();
        if self == OrderingPolicy::Angular {
            if let Some(c) = centroid(points) {
                let angle = |p: &Point| (p.y - c.y).atan2(p.x - c.x);
                ordered.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
            }
        }
        ordered
    }
}

/// Arithmetic mean of the points, `None` when empty
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f32;
    let sum_x: f32 = points.iter().map(|p| p.x).sum();
    let sum_y: f32 = points.iter().map(|p| p.y).sum();

    Some(Point::new(sum_x / n, sum_y / n))
}
