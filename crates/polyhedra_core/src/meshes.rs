//! Parametric meshes: sphere, Möbius strip and hypersphere
//!
//! These shapes sample a surface (or 3-manifold) on a regular grid of
//! angular parameters. Edges join grid neighbours directly by index, since a
//! distance threshold cannot recover a lattice whose spacing varies with
//! latitude.

use std::f32::consts::PI;

use polyhedra_math::Vec4;

use crate::shape::EdgeBuffer;

/// Sphere latitude (θ) steps
pub const SPHERE_RES_THETA: usize = 20;
/// Sphere longitude (φ) steps
pub const SPHERE_RES_PHI: usize = 20;
/// Möbius strip steps around the loop
pub const MOBIUS_RES_U: usize = 50;
/// Möbius strip steps across the band
pub const MOBIUS_RES_V: usize = 10;
/// Hypersphere steps for each of its three angles
pub const HYPER_RES_PSI: usize = 10;
pub const HYPER_RES_THETA: usize = 10;
pub const HYPER_RES_PHI: usize = 10;

const SPHERE_RADIUS: f32 = 1.5;
const MOBIUS_RADIUS: f32 = 1.5;
const MOBIUS_HALF_WIDTH: f32 = 0.5;
const HYPERSPHERE_RADIUS: f32 = 1.5;

/// Edge capacity of the sphere grid
pub const SPHERE_EDGE_CAPACITY: usize = SPHERE_RES_THETA * SPHERE_RES_PHI * 2;
/// Edge capacity of the Möbius grid
pub const MOBIUS_EDGE_CAPACITY: usize = MOBIUS_RES_U * MOBIUS_RES_V * 2;
/// Edge capacity of the hypersphere grid
pub const HYPERSPHERE_EDGE_CAPACITY: usize = HYPER_RES_PSI * HYPER_RES_THETA * HYPER_RES_PHI * 6;

/// UV sphere
///
/// The longitude seam is a duplicated column (j = 0 and j = RES_PHI coincide),
/// so the grid closes without an explicit wrap.
pub fn sphere(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let cols = SPHERE_RES_PHI + 1;
    let index = |i: usize, j: usize| i * cols + j;

    let mut vertices = Vec::with_capacity((SPHERE_RES_THETA + 1) * cols);
    for i in 0..=SPHERE_RES_THETA {
        let theta = PI * i as f32 / SPHERE_RES_THETA as f32;
        for j in 0..=SPHERE_RES_PHI {
            let phi = 2.0 * PI * j as f32 / SPHERE_RES_PHI as f32;
            vertices.push(Vec4::point3(
                SPHERE_RADIUS * theta.sin() * phi.cos(),
                SPHERE_RADIUS * theta.cos(),
                SPHERE_RADIUS * theta.sin() * phi.sin(),
            ));
        }
    }

    let mut edges = EdgeBuffer::with_capacity(capacity);
    for i in 0..SPHERE_RES_THETA {
        for j in 0..SPHERE_RES_PHI {
            edges.push(index(i, j), index(i + 1, j));
            edges.push(index(i, j), index(i, j + 1));
        }
    }

    (vertices, edges)
}

/// Möbius strip
///
/// Walking once around the loop flips the band, so the last ring joins the
/// first ring with its cross-band index reversed.
pub fn mobius(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let index = |i: usize, j: usize| i * MOBIUS_RES_V + j;

    let mut vertices = Vec::with_capacity(MOBIUS_RES_U * MOBIUS_RES_V);
    for i in 0..MOBIUS_RES_U {
        let u = 2.0 * PI * i as f32 / MOBIUS_RES_U as f32;
        for j in 0..MOBIUS_RES_V {
            let v = -MOBIUS_HALF_WIDTH
                + 2.0 * MOBIUS_HALF_WIDTH * j as f32 / (MOBIUS_RES_V - 1) as f32;
            let r = MOBIUS_RADIUS + v * (u * 0.5).cos();
            vertices.push(Vec4::point3(r * u.cos(), r * u.sin(), v * (u * 0.5).sin()));
        }
    }

    let mut edges = EdgeBuffer::with_capacity(capacity);
    for i in 0..MOBIUS_RES_U {
        for j in 0..MOBIUS_RES_V {
            if i + 1 < MOBIUS_RES_U {
                edges.push(index(i, j), index(i + 1, j));
            } else {
                edges.push(index(i, j), index(0, MOBIUS_RES_V - 1 - j));
            }
            if j + 1 < MOBIUS_RES_V {
                edges.push(index(i, j), index(i, j + 1));
            }
        }
    }

    (vertices, edges)
}

/// Hypersphere (3-sphere) in hyperspherical coordinates
///
/// ψ and θ run pole to pole over [0, π] and do not wrap; φ runs over
/// [0, 2π) and wraps. Each angle is driven by its own grid index.
pub fn hypersphere(capacity: usize) -> (Vec<Vec4>, EdgeBuffer) {
    let index = |i: usize, j: usize, k: usize| (i * HYPER_RES_THETA + j) * HYPER_RES_PHI + k;

    let mut vertices = Vec::with_capacity(HYPER_RES_PSI * HYPER_RES_THETA * HYPER_RES_PHI);
    for i in 0..HYPER_RES_PSI {
        let psi = PI * i as f32 / (HYPER_RES_PSI - 1) as f32;
        for j in 0..HYPER_RES_THETA {
            let theta = PI * j as f32 / (HYPER_RES_THETA - 1) as f32;
            for k in 0..HYPER_RES_PHI {
                let phi = 2.0 * PI * k as f32 / HYPER_RES_PHI as f32;
                let r = HYPERSPHERE_RADIUS;
                vertices.push(Vec4::new(
                    r * psi.cos(),
                    r * psi.sin() * theta.cos(),
                    r * psi.sin() * theta.sin() * phi.cos(),
                    r * psi.sin() * theta.sin() * phi.sin(),
                ));
            }
        }
    }

    let mut edges = EdgeBuffer::with_capacity(capacity);
    for i in 0..HYPER_RES_PSI {
        for j in 0..HYPER_RES_THETA {
            for k in 0..HYPER_RES_PHI {
                let here = index(i, j, k);
                if i + 1 < HYPER_RES_PSI {
                    edges.push(here, index(i + 1, j, k));
                }
                if j + 1 < HYPER_RES_THETA {
                    edges.push(here, index(i, j + 1, k));
                }
                edges.push(here, index(i, j, (k + 1) % HYPER_RES_PHI));
            }
        }
    }

    (vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_fills_capacity_exactly() {
        let (vertices, edges) = sphere(SPHERE_EDGE_CAPACITY);
        assert_eq!(vertices.len(), 21 * 21);
        assert_eq!(edges.len(), SPHERE_EDGE_CAPACITY);
        assert_eq!(edges.dropped(), 0);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let (vertices, _) = sphere(SPHERE_EDGE_CAPACITY);
        for v in vertices {
            assert!((v.length() - SPHERE_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn test_mobius_seam_is_twisted() {
        let (vertices, edges) = mobius(MOBIUS_EDGE_CAPACITY);
        let edges = edges.into_edges();
        assert_eq!(edges.len(), 950);

        // Seam edges join rings 49 and 0 between nearly coincident points
        let last_ring = (MOBIUS_RES_U - 1) * MOBIUS_RES_V;
        for e in edges.iter().filter(|e| e.start >= last_ring && e.end < MOBIUS_RES_V) {
            let gap = vertices[e.start].distance(vertices[e.end]);
            assert!(gap < 0.3, "seam edge {:?} spans {}", e, gap);
        }
    }

    #[test]
    fn test_hypersphere_theta_uses_its_own_index() {
        let (vertices, _) = hypersphere(HYPERSPHERE_EDGE_CAPACITY);
        // With ψ fixed at the equator, varying j must move the point
        let i = HYPER_RES_PSI / 2;
        let a = vertices[(i * HYPER_RES_THETA) * HYPER_RES_PHI];
        let b = vertices[(i * HYPER_RES_THETA + 3) * HYPER_RES_PHI];
        assert!(a.distance(b) > 0.1);
    }

    #[test]
    fn test_hypersphere_vertices_on_surface() {
        let (vertices, edges) = hypersphere(HYPERSPHERE_EDGE_CAPACITY);
        assert_eq!(vertices.len(), 1000);
        assert_eq!(edges.len(), 2800);
        for v in vertices {
            assert!((v.length() - HYPERSPHERE_RADIUS).abs() < 1e-4);
        }
    }
}
