//! Polyhedra - rotating 3D and 4D wireframes
//!
//! Library side of the `polyhedra` binary: configuration, key mapping, and
//! the terminal and window front ends built on the `polyhedra_*` crates.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod systems;

pub use config::AppConfig;
pub use error::AppError;
