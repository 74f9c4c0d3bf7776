//! 4D Mathematics Library
//!
//! This crate provides the vector and rotation types shared by the
//! Polyhedra shape catalog and renderers.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`RotationPlane`] - The planes the viewer rotates in
//! - [`PlaneRotation`] - A single precomputed plane rotation

mod vec4;
pub mod rotation;

pub use vec4::Vec4;
pub use rotation::{PlaneRotation, RotationPlane};

/// The golden ratio, used by the icosahedron and dodecahedron recipes
pub const PHI: f32 = 1.618_034;
