//! Planar rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. A plane
//! rotation turns one coordinate pair `(a, b)` by an angle and leaves the
//! other two coordinates alone:
//!
//! ```text
//! a' = a cos θ - b sin θ
//! b' = a sin θ + b cos θ
//! ```
//!
//! The viewer composes five of these in a fixed order (XW, YW, ZW, then the
//! two 3D axes), so each one is applied individually rather than folded into
//! a general rotor.

use crate::Vec4;

/// The rotation planes the viewer drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// YZ plane - rotation around the 3D X axis
    YZ,
    /// ZX plane - rotation around the 3D Y axis
    ZX,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Every plane, in the order the viewer lists them
    pub const ALL: [RotationPlane; 5] = [
        RotationPlane::YZ,
        RotationPlane::ZX,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Whether this plane involves the W axis
    #[inline]
    pub fn is_4d(self) -> bool {
        matches!(self, RotationPlane::XW | RotationPlane::YW | RotationPlane::ZW)
    }

    /// Short label used in status lines
    pub fn label(self) -> &'static str {
        match self {
            RotationPlane::YZ => "X",
            RotationPlane::ZX => "Y",
            RotationPlane::XW => "XW",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

/// A single plane rotation with its sine and cosine precomputed
///
/// Built once per frame and applied to every vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub plane: RotationPlane,
    cos: f32,
    sin: f32,
}

impl PlaneRotation {
    /// Create a rotation by `angle` radians in `plane`
    pub fn new(plane: RotationPlane, angle: f32) -> Self {
        Self {
            plane,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Rotate a vector in this plane
    #[inline]
    pub fn apply(&self, v: Vec4) -> Vec4 {
        let (c, s) = (self.cos, self.sin);
        match self.plane {
            RotationPlane::YZ => {
                let (a, b) = turn(v.y, v.z, c, s);
                Vec4::new(v.x, a, b, v.w)
            }
            RotationPlane::ZX => {
                let (a, b) = turn(v.z, v.x, c, s);
                Vec4::new(b, v.y, a, v.w)
            }
            RotationPlane::XW => {
                let (a, b) = turn(v.x, v.w, c, s);
                Vec4::new(a, v.y, v.z, b)
            }
            RotationPlane::YW => {
                let (a, b) = turn(v.y, v.w, c, s);
                Vec4::new(v.x, a, v.z, b)
            }
            RotationPlane::ZW => {
                let (a, b) = turn(v.z, v.w, c, s);
                Vec4::new(v.x, v.y, a, b)
            }
        }
    }
}

#[inline]
fn turn(a: f32, b: f32, c: f32, s: f32) -> (f32, f32) {
    (a * c - b * s, a * s + b * c)
}
