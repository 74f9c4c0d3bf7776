//! Shape descriptor: owned vertices and edges
//!
//! A [`Shape`] is pure wireframe geometry. It is either produced by one of
//! the built-in recipes (see [`ShapeKind`]) or parsed from a shape file, and
//! it never changes after construction.

use polyhedra_math::Vec4;

use crate::{ShapeError, ShapeKind};

/// An undirected connection between two vertices, by index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether both endpoints index into a vertex list of this length
    #[inline]
    pub fn fits(&self, vertex_count: usize) -> bool {
        self.start < vertex_count && self.end < vertex_count
    }
}

/// Fixed-capacity edge list
///
/// Recipes push edges into one of these; anything past the capacity is
/// dropped and counted rather than stored.
#[derive(Clone, Debug)]
pub struct EdgeBuffer {
    edges: Vec<Edge>,
    capacity: usize,
    dropped: usize,
}

impl EdgeBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Push an edge, returning false if the buffer is already full
    pub fn push(&mut self, start: usize, end: usize) -> bool {
        if self.edges.len() < self.capacity {
            self.edges.push(Edge::new(start, end));
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of edges rejected because the buffer was full
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// A wireframe shape
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    name: String,
    kind: Option<ShapeKind>,
    is_4d: bool,
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl Shape {
    /// Create a shape from loaded data, checking every edge index
    pub fn new(
        name: impl Into<String>,
        is_4d: bool,
        vertices: Vec<Vec4>,
        edges: Vec<Edge>,
    ) -> Result<Self, ShapeError> {
        let vertex_count = vertices.len();
        if let Some((i, e)) = edges.iter().enumerate().find(|(_, e)| !e.fits(vertex_count)) {
            return Err(ShapeError::EdgeOutOfRange {
                edge: i,
                start: e.start,
                end: e.end,
                vertex_count,
            });
        }

        Ok(Self {
            name: name.into(),
            kind: None,
            is_4d,
            vertices,
            edges,
        })
    }

    /// Create a shape from a built-in recipe
    pub(crate) fn from_recipe(kind: ShapeKind, vertices: Vec<Vec4>, edges: EdgeBuffer) -> Self {
        if edges.dropped() > 0 {
            log::debug!(
                "{}: dropped {} edges past capacity {}",
                kind.name(),
                edges.dropped(),
                edges.capacity()
            );
        }
        Self {
            name: kind.name().to_string(),
            kind: Some(kind),
            is_4d: kind.is_4d(),
            vertices,
            edges: edges.into_edges(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The recipe this shape was built from, `None` for loaded shapes
    #[inline]
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    /// Whether the 4D rotation and perspective stages apply
    #[inline]
    pub fn is_4d(&self) -> bool {
        self.is_4d
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_buffer_truncates() {
        let mut buf = EdgeBuffer::with_capacity(2);
        assert!(buf.push(0, 1));
        assert!(buf.push(1, 2));
        assert!(!buf.push(2, 3));
        assert!(!buf.push(3, 0));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.dropped(), 2);
        assert_eq!(buf.into_edges(), vec![Edge::new(0, 1), Edge::new(1, 2)]);
    }

    #[test]
    fn test_shape_rejects_out_of_range_edge() {
        let vertices = vec![Vec4::ZERO, Vec4::X];
        let result = Shape::new("bad", false, vertices, vec![Edge::new(0, 1), Edge::new(1, 2)]);
        match result {
            Err(ShapeError::EdgeOutOfRange { edge, end, vertex_count, .. }) => {
                assert_eq!(edge, 1);
                assert_eq!(end, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("Expected EdgeOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_shape_has_no_kind() {
        let shape = Shape::new("line", false, vec![Vec4::ZERO, Vec4::X], vec![Edge::new(0, 1)])
            .unwrap();
        assert_eq!(shape.kind(), None);
        assert_eq!(shape.vertex_count(), 2);
        assert_eq!(shape.edge_count(), 1);
        assert_eq!(shape.name(), "line");
    }
}
