//! Compact polytopes built from coordinate permutations
//!
//! Every polytope here follows the same recipe: enumerate the vertices from
//! the shape's defining coordinates, then connect every pair of vertices
//! whose distance is within a tolerance of the known edge length. At these
//! sizes (at most 24 vertices) the O(n²) pair scan is the whole algorithm.

use polyhedra_math::{Vec4, PHI};

use crate::shape::EdgeBuffer;

/// Connect every unordered vertex pair whose 4D distance is within
/// `tolerance` of `edge_length`
pub fn connect_by_length(
    vertices: &[Vec4],
    edge_length: f32,
    tolerance: f32,
    capacity: usize,
) -> EdgeBuffer {
    let mut edges = EdgeBuffer::with_capacity(capacity);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let dist = vertices[i].distance(vertices[j]);
            if (dist - edge_length).abs() < tolerance {
                edges.push(i, j);
            }
        }
    }
    edges
}

/// Every ±1 combination across the first `dims` axes
///
/// Vertex i has coordinates based on the bits of i (bit 0 = x, bit 3 = w).
fn unit_corners(dims: usize) -> Vec<Vec4> {
    (0..1usize << dims)
        .map(|i| {
            let bit = |axis: usize| {
                if axis >= dims {
                    0.0
                } else if i & (1 << axis) != 0 {
                    1.0
                } else {
                    -1.0
                }
            };
            Vec4::new(bit(0), bit(1), bit(2), bit(3))
        })
        .collect()
}

/// Cyclic permutations of (0, ±a, ±b)
fn cyclic_signed(a: f32, b: f32) -> Vec<Vec4> {
    let mut out = Vec::with_capacity(12);
    for rotation in 0..3 {
        for sa in [1.0, -1.0] {
            for sb in [1.0, -1.0] {
                let coords = [0.0, sa * a, sb * b];
                out.push(Vec4::point3(
                    coords[rotation % 3],
                    coords[(rotation + 1) % 3],
                    coords[(rotation + 2) % 3],
                ));
            }
        }
    }
    out
}

/// Cube: (±1, ±1, ±1), edge length 2
pub fn cube(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let vertices = unit_corners(3);
    let edges = connect_by_length(&vertices, 2.0, 0.01, capacity);
    (vertices, edges)
}

/// Icosahedron: cyclic permutations of (0, ±1, ±φ), edge length 2
pub fn icosahedron(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let vertices = cyclic_signed(1.0, PHI);
    let edges = connect_by_length(&vertices, 2.0, 0.025, capacity);
    (vertices, edges)
}

/// Dodecahedron: (±1, ±1, ±1) plus cyclic permutations of (0, ±1/φ, ±φ)
///
/// The edge length of this embedding is 2/φ.
pub fn dodecahedron(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let mut vertices = unit_corners(3);
    vertices.extend(cyclic_signed(1.0 / PHI, PHI));
    let edges = connect_by_length(&vertices, 2.0 / PHI, 0.01, capacity);
    (vertices, edges)
}

/// Tesseract: (±1, ±1, ±1, ±1), edge length 2
pub fn tesseract(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let vertices = unit_corners(4);
    let edges = connect_by_length(&vertices, 2.0, 0.01, capacity);
    (vertices, edges)
}

/// Truncated octahedron: all permutations of (0, ±1, ±2), edge length √2
pub fn truncated_octahedron(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0],
    ];

    let mut vertices = Vec::with_capacity(24);
    for perm in PERMUTATIONS {
        for s1 in [1.0, -1.0] {
            for s2 in [1.0, -1.0] {
                // Magnitudes 0, 1, 2; the zero coordinate carries no sign
                let values = [0.0, s1, 2.0 * s2];
                vertices.push(Vec4::point3(values[perm[0]], values[perm[1]], values[perm[2]]));
            }
        }
    }

    let edges = connect_by_length(&vertices, 2.0f32.sqrt(), 0.01, capacity);
    (vertices, edges)
}

/// Stella octangula: two interpenetrating tetrahedra on the cube corners
///
/// Each tetrahedron edge is a face diagonal of the (±1)³ cube, length 2√2.
pub fn stella_octangula(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let vertices = unit_corners(3);
    let edges = connect_by_length(&vertices, 2.0 * 2.0f32.sqrt(), 0.01, capacity);
    (vertices, edges)
}
