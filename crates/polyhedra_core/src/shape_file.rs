//! Shape description files
//!
//! Plain text, whitespace-delimited:
//!
//! ```text
//! <name> <is_4d>
//! <vertex_count> <edge_count>
//! v <x> <y> <z> <w>
//! e <start> <end>
//! ...
//! ```
//!
//! Vertex and edge records may be interleaved in any order; parsing stops as
//! soon as both declared counts are satisfied, so anything after that is
//! ignored. Names cannot contain whitespace in the file; spaces are written
//! as `_` and read back as spaces.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use polyhedra_math::Vec4;

use crate::shape::{Edge, Shape};
use crate::ShapeError;

/// Longest shape name the format accepts
pub const MAX_NAME_LEN: usize = 31;

/// Default extension for shape files in a catalog directory
pub const SHAPE_EXTENSION: &str = "shape";

/// Upper bound on records reserved up front; headers are untrusted
const MAX_PREALLOC: usize = 4096;

/// Parse a shape from file contents
pub fn parse_shape(source: &str) -> Result<Shape, ShapeError> {
    let mut tokens = source.split_whitespace();

    // Line 1: name and 4D flag
    let name = tokens
        .next()
        .ok_or_else(|| ShapeError::Header("missing shape name".to_string()))?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ShapeError::Header(format!(
            "name {:?} is longer than {} characters",
            name, MAX_NAME_LEN
        )));
    }
    let is_4d: i32 = header_field(tokens.next(), "4D flag")?;

    // Line 2: counts
    let vertex_count: usize = header_field(tokens.next(), "vertex count")?;
    let edge_count: usize = header_field(tokens.next(), "edge count")?;

    let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOC));
    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOC));

    while vertices.len() < vertex_count || edges.len() < edge_count {
        let Some(tag) = tokens.next() else {
            return Err(ShapeError::Body(format!(
                "expected {} vertices and {} edges, found {} and {}",
                vertex_count,
                edge_count,
                vertices.len(),
                edges.len()
            )));
        };

        match tag {
            "v" => {
                let x = coordinate(tokens.next(), "vertex x")?;
                let y = coordinate(tokens.next(), "vertex y")?;
                let z = coordinate(tokens.next(), "vertex z")?;
                let w = coordinate(tokens.next(), "vertex w")?;
                if vertices.len() < vertex_count {
                    vertices.push(Vec4::new(x, y, z, w));
                }
            }
            "e" => {
                let start = record_field(tokens.next(), "edge start")?;
                let end = record_field(tokens.next(), "edge end")?;
                if edges.len() < edge_count {
                    edges.push(Edge::new(start, end));
                }
            }
            other => log::debug!("Skipping unknown shape record tag {:?}", other),
        }
    }

    Shape::new(name.replace('_', " "), is_4d != 0, vertices, edges)
}

/// Load a shape from a file
pub fn load_shape(path: impl AsRef<Path>) -> Result<Shape, ShapeError> {
    let source = fs::read_to_string(path.as_ref())?;
    parse_shape(&source)
}

/// Write a shape in the description format
pub fn write_shape<W: Write>(shape: &Shape, out: &mut W) -> Result<(), ShapeError> {
    let name = encode_name(shape.name())?;
    writeln!(out, "{} {}", name, u8::from(shape.is_4d()))?;
    writeln!(out, "{} {}", shape.vertex_count(), shape.edge_count())?;
    for v in shape.vertices() {
        writeln!(out, "v {} {} {} {}", v.x, v.y, v.z, v.w)?;
    }
    for e in shape.edges() {
        writeln!(out, "e {} {}", e.start, e.end)?;
    }
    Ok(())
}

/// Write a shape to a file, replacing any existing file
pub fn save_shape(shape: &Shape, path: impl AsRef<Path>) -> Result<(), ShapeError> {
    let mut out = io::BufWriter::new(fs::File::create(path.as_ref())?);
    write_shape(shape, &mut out)?;
    out.flush()?;
    Ok(())
}

/// File name for a shape in an exported catalog
///
/// The position prefix keeps sorted directory order equal to catalog order.
pub fn file_name_for(position: usize, shape: &Shape, extension: &str) -> String {
    let stem: String = shape
        .name()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{:02}_{}.{}", position + 1, stem, extension)
}

fn encode_name(name: &str) -> Result<String, ShapeError> {
    let encoded: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if encoded.is_empty() || encoded.chars().count() > MAX_NAME_LEN {
        return Err(ShapeError::InvalidName(name.to_string()));
    }
    Ok(encoded)
}

fn header_field<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T, ShapeError> {
    let token = token.ok_or_else(|| ShapeError::Header(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| ShapeError::Header(format!("invalid {} {:?}", what, token)))
}

fn record_field<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T, ShapeError> {
    let token = token.ok_or_else(|| ShapeError::Body(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| ShapeError::Body(format!("invalid {} {:?}", what, token)))
}

/// A vertex coordinate; `inf` and `NaN` parse as floats but are rejected
fn coordinate(token: Option<&str>, what: &str) -> Result<f32, ShapeError> {
    let value: f32 = record_field(token, what)?;
    if !value.is_finite() {
        return Err(ShapeError::Body(format!("{} is not finite: {}", what, value)));
    }
    Ok(value)
}
