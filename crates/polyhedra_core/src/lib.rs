//! Shape catalog for Polyhedra
//!
//! This crate owns the wireframe geometry the renderers draw:
//!
//! - [`Shape`] - Named vertex list plus index-pair edges
//! - [`ShapeKind`] - The nine built-in construction recipes
//! - [`ShapeCatalog`] - Ordered list of shapes the viewer cycles through
//! - [`shape_file`] - Plain-text shape description files
//! - [`ShapeError`] - Errors raised while reading or writing shape files

mod error;
mod shape;
mod shapes;
pub mod polytopes;
pub mod meshes;
pub mod catalog;
pub mod shape_file;

pub use error::ShapeError;
pub use shape::{Edge, EdgeBuffer, Shape};
pub use shapes::ShapeKind;
pub use catalog::ShapeCatalog;
pub use shape_file::{load_shape, parse_shape, save_shape, write_shape};

// Re-export for convenience
pub use polyhedra_math::Vec4;
