//! Shape error types
//!
//! Errors raised while loading, parsing or writing shape description files.
//! Procedural shapes never fail, so every variant here comes from file I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for shape file operations
#[derive(Debug)]
pub enum ShapeError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// The name/flag or count lines could not be parsed
    Header(String),
    /// A vertex or edge record could not be parsed, or records are missing
    Body(String),
    /// An edge refers to a vertex the shape does not have
    EdgeOutOfRange {
        edge: usize,
        start: usize,
        end: usize,
        vertex_count: usize,
    },
    /// A shape name that cannot be written to the file format
    InvalidName(String),
    /// A shape directory that produced no usable shapes
    EmptyCatalog(PathBuf),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Io(err) => write!(f, "Shape IO error: {}", err),
            ShapeError::Header(msg) => write!(f, "Malformed shape header: {}", msg),
            ShapeError::Body(msg) => write!(f, "Malformed shape record: {}", msg),
            ShapeError::EdgeOutOfRange { edge, start, end, vertex_count } => write!(
                f,
                "Edge {} ({}, {}) is out of range for {} vertices",
                edge, start, end, vertex_count
            ),
            ShapeError::InvalidName(name) => write!(f, "Invalid shape name: {:?}", name),
            ShapeError::EmptyCatalog(dir) => {
                write!(f, "No valid shapes found in {}", dir.display())
            }
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ShapeError {
    fn from(err: io::Error) -> Self {
        ShapeError::Io(err)
    }
}
