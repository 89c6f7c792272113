use super::{Point, Vertex};
use crate::error::{EditorError, Result};

/// Default upper bound on placed points
pub const MAX_VERTICES: usize = 256;

/// Ordered, bounded list of placed vertices
///
/// Vertices are only ever appended or cleared all at once; a placed
/// vertex never moves.
#[derive(Debug, Clone)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
    capacity: usize,
}

impl VertexStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VERTICES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a vertex, or fail with `CapacityExceeded` leaving the store untouched
    pub fn append(&mut self, vertex: Vertex) -> Result<()> {
        if self.vertices.len() >= self.capacity {
            return Err(EditorError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.vertices.push(vertex);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    /// Vertex at `index`, `None` past the end
    pub fn at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn first(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn last(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Positions in insertion order
    pub fn positions(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.position).collect()
    }
}

impl Default for VertexStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn vertex(x: f32, y: f32) -> Vertex {
        Vertex::new(Point::new(x, y), Color::RED)
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = VertexStore::new();
        store.append(vertex(1.0, 2.0)).unwrap();
        store.append(vertex(3.0, 4.0)).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.at(0).unwrap().position, Point::new(1.0, 2.0));
        assert_eq!(store.at(1).unwrap().position, Point::new(3.0, 4.0));
        assert!(store.at(2).is_none());
    }

    #[test]
    fn test_append_past_capacity_is_rejected() {
        let mut store = VertexStore::new();
        for i in 0..MAX_VERTICES {
            store.append(vertex(i as f32, 0.0)).unwrap();
        }
        let err = store.append(vertex(999.0, 999.0)).unwrap_err();
        assert!(matches!(
            err,
            EditorError::CapacityExceeded { capacity: MAX_VERTICES }
        ));
        assert_eq!(store.count(), MAX_VERTICES);
        assert_eq!(store.last().unwrap().position.x, (MAX_VERTICES - 1) as f32);
    }

    #[test]
    fn test_clear_resets_count() {
        let mut store = VertexStore::with_capacity(8);
        for i in 0..5 {
            store.append(vertex(i as f32, i as f32)).unwrap();
        }
        store.clear();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 8);
    }
}
