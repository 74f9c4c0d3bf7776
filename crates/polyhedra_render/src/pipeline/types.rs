//! GPU-compatible data types for the line pipeline
//!
//! These types match the layouts in `line.wgsl` exactly.

use bytemuck::{Pod, Zeroable};

use crate::projection::ProjectedVertex;

/// A projected vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

impl From<ProjectedVertex> for LineVertex {
    fn from(v: ProjectedVertex) -> Self {
        Self { position: [v.x, v.y] }
    }
}

/// Uniforms for the line shader
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineUniforms {
    /// RGBA line color
    pub color: [f32; 4],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self { color: [1.0, 1.0, 1.0, 1.0] }
    }
}
