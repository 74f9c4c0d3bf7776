//! Line-list geometry for the window renderer
//!
//! Bridges a [`Shape`] and its projected vertices to the buffers the GPU
//! draws: one [`LineVertex`] per shape vertex and two indices per edge.

use polyhedra_core::Shape;

use crate::pipeline::LineVertex;
use crate::projection::ProjectedVertex;

/// GPU-ready line list
#[derive(Clone, Debug, Default)]
pub struct LineGeometry {
    /// Projected vertex positions, rewritten every frame
    pub vertices: Vec<LineVertex>,
    /// Edge endpoints as a line list, fixed per shape
    pub indices: Vec<u32>,
}

impl LineGeometry {
    /// Index buffer for a shape, with room for its vertices
    pub fn from_shape(shape: &Shape) -> Self {
        let indices = shape
            .edges()
            .iter()
            .flat_map(|e| [e.start as u32, e.end as u32])
            .collect();
        Self {
            vertices: vec![LineVertex::default(); shape.vertex_count()],
            indices,
        }
    }

    /// Copy this frame's projected positions
    pub fn update(&mut self, projected: &[ProjectedVertex]) {
        self.vertices.clear();
        self.vertices.extend(projected.iter().map(|p| LineVertex::from(*p)));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra_core::ShapeKind;

    #[test]
    fn test_indices_follow_edges() {
        let cube = ShapeKind::Cube.build();
        let geometry = LineGeometry::from_shape(&cube);
        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.index_count(), 24);
        let first = cube.edges()[0];
        assert_eq!(geometry.indices[0], first.start as u32);
        assert_eq!(geometry.indices[1], first.end as u32);
        assert!(geometry.indices.iter().all(|i| (*i as usize) < 8));
    }

    #[test]
    fn test_update_replaces_positions() {
        let cube = ShapeKind::Cube.build();
        let mut geometry = LineGeometry::from_shape(&cube);
        let projected = vec![ProjectedVertex { x: 0.5, y: 0.25, depth: 1.0 }; 8];
        geometry.update(&projected);
        assert_eq!(geometry.vertex_count(), 8);
        assert!(geometry.vertices.iter().all(|v| v.position == [0.5, 0.25]));
    }
}
