//! Vertex transform pipeline
//!
//! Every frame, each vertex of the active shape goes through the same fixed
//! sequence:
//!
//! 1. noise (when fuzziness > 0)
//! 2. XW, YW, ZW rotations (4D shapes only)
//! 3. rotation about X, then about Y
//! 4. 4D to 3D perspective divide (4D shapes only)
//! 5. 3D to 2D perspective projection
//! 6. depth from the rotated z
//!
//! The pipeline is pure: the same vertex, state and parameters always give
//! bit-identical output.

use polyhedra_core::Shape;
use polyhedra_input::InteractionState;
use polyhedra_math::{PlaneRotation, RotationPlane, Vec4};

/// Distance from the camera to the 3D origin
const CAMERA_DISTANCE: f32 = 4.0;
/// How strongly z changes the projection factor
const Z_PERSPECTIVE: f32 = 0.5;
/// Distance from the 4D eye to the 3D hyperplane
const W_DISTANCE: f32 = 2.0;
/// How strongly w changes the 4D perspective divide
const W_PERSPECTIVE: f32 = 0.3;
/// How quickly depth falls off with |z|
const DEPTH_FALLOFF: f32 = 0.5;

const NOISE_INDEX_FREQUENCY: f32 = 132.0;
const NOISE_ANGLE_FREQUENCY: f32 = 5.0;

/// Screen mapping for the final projection step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    /// Zoom numerator of the perspective factor
    pub focal: f32,
    /// Horizontal stretch applied to screen x
    pub aspect: f32,
    /// Uniform scale applied after the perspective factor
    pub scale: f32,
    pub centre_x: f32,
    pub centre_y: f32,
}

impl ProjectionParams {
    /// Mapping into a supersampled character grid
    ///
    /// Character cells are about twice as tall as they are wide, so x is
    /// stretched by 2 to keep shapes round.
    pub fn terminal(cols: usize, rows: usize, supersample: usize) -> Self {
        let s = supersample.max(1);
        Self {
            focal: 20.0,
            aspect: 2.0,
            scale: s as f32,
            centre_x: (cols * s) as f32 / 2.0,
            centre_y: (rows * s) as f32 / 2.0,
        }
    }

    /// Mapping into normalized device coordinates for a window
    ///
    /// The aspect squeezes x on wide windows so shapes keep their proportions.
    pub fn ndc(width: u32, height: u32) -> Self {
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            height as f32 / width as f32
        };
        Self {
            focal: 50.0,
            aspect,
            scale: 1.0 / 20.0,
            centre_x: 0.0,
            centre_y: 0.0,
        }
    }
}

/// A vertex after projection
///
/// `depth` is in (0, 1] and grows as the vertex gets closer to the rotated
/// z = 0 plane; it is not a literal distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedVertex {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// The per-frame transform, with every rotation's sine and cosine computed once
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    rotations_4d: [PlaneRotation; 3],
    rotate_x: PlaneRotation,
    rotate_y: PlaneRotation,
    fuzziness: f32,
    noise_phase: f32,
    params: ProjectionParams,
}

impl Projector {
    pub fn new(state: &InteractionState, params: ProjectionParams) -> Self {
        Self {
            rotations_4d: [
                PlaneRotation::new(RotationPlane::XW, state.angle_xw),
                PlaneRotation::new(RotationPlane::YW, state.angle_yw),
                PlaneRotation::new(RotationPlane::ZW, state.angle_zw),
            ],
            rotate_x: PlaneRotation::new(RotationPlane::YZ, state.angle_x),
            rotate_y: PlaneRotation::new(RotationPlane::ZX, state.angle_y),
            fuzziness: state.fuzziness,
            noise_phase: state.angle_x * NOISE_ANGLE_FREQUENCY,
            params,
        }
    }

    /// Run one vertex through the pipeline
    ///
    /// `index` is the vertex's position in its shape and seeds the noise.
    pub fn project(&self, index: usize, vertex: Vec4, is_4d: bool) -> ProjectedVertex {
        let mut v = vertex;

        if self.fuzziness > 0.0 {
            let noise =
                self.fuzziness * (index as f32 * NOISE_INDEX_FREQUENCY + self.noise_phase).sin();
            v = v.offset(noise);
        }

        if is_4d {
            for rotation in &self.rotations_4d {
                v = rotation.apply(v);
            }
        }

        v = self.rotate_x.apply(v);
        v = self.rotate_y.apply(v);

        let (mut x, mut y, mut z) = (v.x, v.y, v.z);
        if is_4d {
            let w_factor = 1.0 / (W_DISTANCE - v.w * W_PERSPECTIVE);
            x *= w_factor;
            y *= w_factor;
            z *= w_factor;
        }

        let p = &self.params;
        let factor = p.focal / (CAMERA_DISTANCE - z * Z_PERSPECTIVE);
        ProjectedVertex {
            x: x * factor * p.aspect * p.scale + p.centre_x,
            y: y * factor * p.scale + p.centre_y,
            depth: 1.0 / (1.0 + z.abs() * DEPTH_FALLOFF),
        }
    }
}

/// Project a single vertex with the current state
pub fn transform_vertex(
    vertex: Vec4,
    index: usize,
    is_4d: bool,
    state: &InteractionState,
    params: &ProjectionParams,
) -> ProjectedVertex {
    Projector::new(state, *params).project(index, vertex, is_4d)
}

/// Project every vertex of `shape` into `out`
///
/// `out` is cleared first and keeps its allocation between frames.
pub fn project_shape(
    shape: &Shape,
    state: &InteractionState,
    params: &ProjectionParams,
    out: &mut Vec<ProjectedVertex>,
) {
    let projector = Projector::new(state, *params);
    out.clear();
    out.extend(
        shape
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| projector.project(i, *v, shape.is_4d())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra_core::ShapeKind;

    fn still_state() -> InteractionState {
        InteractionState {
            auto_rotate: false,
            ..InteractionState::new()
        }
    }

    #[test]
    fn test_zero_state_is_deterministic() {
        let state = still_state();
        let params = ProjectionParams::terminal(80, 40, 2);
        for kind in ShapeKind::ALL {
            let shape = kind.build();
            let mut first = Vec::new();
            let mut second = Vec::new();
            project_shape(&shape, &state, &params, &mut first);
            project_shape(&shape, &state, &params, &mut second);
            assert_eq!(first.len(), shape.vertex_count());
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
                assert_eq!(a.depth.to_bits(), b.depth.to_bits());
            }
        }
    }

    #[test]
    fn test_x_rotation_leaves_x_axis_point() {
        let params = ProjectionParams::terminal(80, 40, 2);
        let still = transform_vertex(Vec4::X, 0, false, &still_state(), &params);
        for angle in [0.3, 1.0, 2.5, -4.0] {
            let state = InteractionState { angle_x: angle, ..still_state() };
            let turned = transform_vertex(Vec4::X, 0, false, &state, &params);
            assert!((turned.x - still.x).abs() < 1e-4, "angle {}", angle);
            assert!((turned.y - still.y).abs() < 1e-4, "angle {}", angle);
        }
    }

    #[test]
    fn test_origin_projects_to_centre() {
        let params = ProjectionParams::terminal(80, 40, 2);
        let p = transform_vertex(Vec4::ZERO, 0, false, &still_state(), &params);
        assert_eq!(p.x, 80.0);
        assert_eq!(p.y, 40.0);
        assert_eq!(p.depth, 1.0);
    }

    #[test]
    fn test_terminal_projection_values() {
        // factor = 20 / 4 = 5 at z = 0; x is stretched by 2 and scaled by 2
        let params = ProjectionParams::terminal(80, 40, 2);
        let p = transform_vertex(Vec4::new(1.0, 1.0, 0.0, 0.0), 0, false, &still_state(), &params);
        assert_eq!(p.x, 1.0 * 5.0 * 2.0 * 2.0 + 80.0);
        assert_eq!(p.y, 1.0 * 5.0 * 2.0 + 40.0);
    }

    #[test]
    fn test_depth_decreases_away_from_plane() {
        let params = ProjectionParams::terminal(80, 40, 1);
        let state = still_state();
        let near = transform_vertex(Vec4::point3(0.0, 0.0, 0.5), 0, false, &state, &params);
        let far = transform_vertex(Vec4::point3(0.0, 0.0, 2.0), 0, false, &state, &params);
        assert!(near.depth > far.depth);
        assert!((far.depth - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_4d_stages_skipped_for_3d_shapes() {
        let params = ProjectionParams::terminal(80, 40, 1);
        let state = InteractionState { angle_xw: 1.2, ..still_state() };
        let v = Vec4::point3(1.0, 0.5, 0.25);
        let with_4d_angle = transform_vertex(v, 0, false, &state, &params);
        let without = transform_vertex(v, 0, false, &still_state(), &params);
        assert_eq!(with_4d_angle, without);
    }

    #[test]
    fn test_4d_divide_at_zero_w() {
        // With w = 0 the divide is a uniform 1/2 scale
        let params = ProjectionParams::terminal(80, 40, 1);
        let state = still_state();
        let flat = transform_vertex(Vec4::new(1.0, 0.0, 0.0, 0.0), 0, true, &state, &params);
        let half = transform_vertex(Vec4::new(0.5, 0.0, 0.0, 0.0), 0, false, &state, &params);
        assert!((flat.x - half.x).abs() < 1e-5);
    }

    #[test]
    fn test_noise_offsets_vertex() {
        let params = ProjectionParams::terminal(80, 40, 1);
        let calm = transform_vertex(Vec4::ZERO, 1, false, &still_state(), &params);
        let state = InteractionState { fuzziness: 0.5, ..still_state() };
        let noisy = transform_vertex(Vec4::ZERO, 1, false, &state, &params);
        assert_ne!(calm, noisy);
    }

    #[test]
    fn test_ndc_square_window_matches_fixed_mapping() {
        let params = ProjectionParams::ndc(800, 800);
        let p = transform_vertex(Vec4::new(1.0, 1.0, 0.0, 0.0), 0, false, &still_state(), &params);
        // factor = 50 / 4, scaled by 1/20
        assert!((p.x - 0.625).abs() < 1e-6);
        assert!((p.y - 0.625).abs() < 1e-6);
    }

    #[test]
    fn test_ndc_wide_window_squeezes_x() {
        let params = ProjectionParams::ndc(1600, 800);
        assert_eq!(params.aspect, 0.5);
        assert_eq!(ProjectionParams::ndc(0, 600).aspect, 1.0);
    }
}
