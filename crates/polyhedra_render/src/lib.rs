//! Polyhedra Rendering Library
//!
//! This crate turns shapes and interaction state into pictures, either as
//! characters for a terminal or as a GPU line list for a window.
//!
//! ## Key Components
//!
//! - [`projection`] - The per-vertex transform pipeline shared by both outputs
//! - [`raster::DepthCanvas`] - Supersampled depth-buffered line rasterizer
//! - [`raster::GlyphRamp`] - Depth to character mapping
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LinePipeline`] - Line-list render pipeline
//! - [`line_geometry::LineGeometry`] - Shape to GPU buffer bridge

pub mod projection;
pub mod raster;
pub mod context;
pub mod pipeline;
pub mod line_geometry;

pub use projection::{project_shape, transform_vertex, ProjectedVertex, ProjectionParams, Projector};
pub use raster::{CharGrid, DepthCanvas, GlyphRamp, Sample, DEFAULT_RAMP};
pub use line_geometry::LineGeometry;

// Re-export core types for convenience
pub use polyhedra_core::{Shape, ShapeCatalog, ShapeKind};
pub use polyhedra_input::InteractionState;
