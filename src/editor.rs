//! Polygon editing session
//!
//! `PolygonEditor` owns everything the host used to keep as loose globals:
//! the placed vertices, the chosen fill color and the ordering policy. The
//! host resolves input into an [`Action`] and hands it to [`PolygonEditor::dispatch`].

use tracing::{debug, warn};

use crate::color::Color;
use crate::error::Result;
use crate::geometry::self_intersects;
use crate::polygon::{edges, EdgeMode, OrderingPolicy, Point, Rect, Vertex, VertexStore};
use crate::raster::{draw_line, fill, Surface};
use crate::util::Rng;

/// A user intent resolved by the host's input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Place a new vertex at the given position
    AppendPoint(Point),
    /// Remove every vertex
    Clear,
    /// Close the outline and fill the interior
    CompletePolygon,
    /// Use this color for subsequent fills
    SelectColor(Color),
}

pub struct PolygonEditor {
    store: VertexStore,
    fill_color: Color,
    outline_color: Color,
    policy: OrderingPolicy,
    completed: bool,
    rng: Rng,
}

impl PolygonEditor {
    pub fn new(capacity: usize, policy: OrderingPolicy, rng: Rng) -> Self {
        Self {
            store: VertexStore::with_capacity(capacity),
            fill_color: Color::DARKGRAY,
            outline_color: Color::DARKGRAY,
            policy,
            completed: false,
            rng,
        }
    }

    pub fn with_colors(mut self, fill_color: Color, outline_color: Color) -> Self {
        self.fill_color = fill_color;
        self.outline_color = outline_color;
        self
    }

    pub fn store(&self) -> &VertexStore {
        &self.store
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OrderingPolicy) {
        self.policy = policy;
    }

    /// Whether the closing edge and fill are currently shown
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Apply one action
    ///
    /// The only failure is `CapacityExceeded`, which leaves the session unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, vertices = self.store.count(), "dispatch");
        match action {
            Action::AppendPoint(position) => {
                let vertex = Vertex::new(position, Color::random(&mut self.rng));
                if let Err(e) = self.store.append(vertex) {
                    warn!(capacity = self.store.capacity(), "vertex store full, point ignored");
                    return Err(e);
                }
                self.completed = false;
            },
            Action::Clear => {
                self.store.clear();
                self.completed = false;
            },
            Action::CompletePolygon => {
                self.completed = true;
                let ordered = self.ordered_positions();
                if ordered.len() > 3 && self_intersects(&ordered) {
                    warn!(policy = ?self.policy, "boundary self-intersects, filling with even-odd rule");
                }
            },
            Action::SelectColor(color) => {
                self.fill_color = color;
            },
        }
        Ok(())
    }

    /// Last vertex position if any
    pub fn last_position(&self) -> Option<Point> {
        self.store.last().map(|v| v.position)
    }

    /// Snap `point` onto the horizontal or vertical through the last vertex
    ///
    /// Keeps whichever axis moved further; identity when nothing is placed.
    pub fn axis_locked(&self, point: Point) -> Point {
        let Some(last) = self.last_position() else {
            return point;
        };
        let (px, py) = point.to_pixel();
        let (lx, ly) = last.to_pixel();
        if (px - lx).abs() > (py - ly).abs() {
            Point::new(px as f32, ly as f32)
        } else {
            Point::new(lx as f32, py as f32)
        }
    }

    /// Vertex positions in the order the policy assigns
    pub fn ordered_positions(&self) -> Vec<Point> {
        self.policy.order(&self.store.positions())
    }

    /// Paint the polygon into `surface`, rows and fill spans limited to `clip`
    ///
    /// While editing only the strokes between placed points are drawn; once
    /// completed the fill goes down first and the closed outline on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, clip: Rect) {
        if self.completed {
            let ordered = self.ordered_positions();
            fill(surface, &ordered, self.fill_color, clip);
            for edge in edges(&ordered, EdgeMode::Closed) {
                draw_line(surface, edge.from, edge.to, self.outline_color);
            }
        } else {
            let positions = self.store.positions();
            for edge in edges(&positions, EdgeMode::Open) {
                draw_line(surface, edge.from, edge.to, self.outline_color);
            }
        }
    }
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self::new(
            crate::polygon::MAX_VERTICES,
            OrderingPolicy::default(),
            Rng::from_time(),
        )
    }
}
