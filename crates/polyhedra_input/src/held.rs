//! Held rotation keys
//!
//! The window front end rotates continuously while a key is down instead of
//! relying on key repeat. Each plane/direction pair is one bit.

use bitflags::bitflags;
use polyhedra_math::RotationPlane;

use crate::{Controls, Direction, InteractionState};

bitflags! {
    /// Rotation keys currently held down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct HeldRotations: u16 {
        const X_POS = 1 << 0;
        const X_NEG = 1 << 1;
        const Y_POS = 1 << 2;
        const Y_NEG = 1 << 3;
        const XW_POS = 1 << 4;
        const XW_NEG = 1 << 5;
        const YW_POS = 1 << 6;
        const YW_NEG = 1 << 7;
        const ZW_POS = 1 << 8;
        const ZW_NEG = 1 << 9;
    }
}

impl HeldRotations {
    /// The bit for one plane and direction
    pub fn flag(plane: RotationPlane, direction: Direction) -> Self {
        match (plane, direction) {
            (RotationPlane::YZ, Direction::Positive) => Self::X_POS,
            (RotationPlane::YZ, Direction::Negative) => Self::X_NEG,
            (RotationPlane::ZX, Direction::Positive) => Self::Y_POS,
            (RotationPlane::ZX, Direction::Negative) => Self::Y_NEG,
            (RotationPlane::XW, Direction::Positive) => Self::XW_POS,
            (RotationPlane::XW, Direction::Negative) => Self::XW_NEG,
            (RotationPlane::YW, Direction::Positive) => Self::YW_POS,
            (RotationPlane::YW, Direction::Negative) => Self::YW_NEG,
            (RotationPlane::ZW, Direction::Positive) => Self::ZW_POS,
            (RotationPlane::ZW, Direction::Negative) => Self::ZW_NEG,
        }
    }

    /// Record a key press or release
    pub fn update(&mut self, plane: RotationPlane, direction: Direction, pressed: bool) {
        self.set(Self::flag(plane, direction), pressed);
    }

    /// Turn every held plane by one step
    ///
    /// Opposite keys held together cancel out.
    pub fn apply(&self, state: &mut InteractionState, controls: &Controls) {
        for plane in RotationPlane::ALL {
            let pos = self.contains(Self::flag(plane, Direction::Positive)) as i32;
            let neg = self.contains(Self::flag(plane, Direction::Negative)) as i32;
            let turn = (pos - neg) as f32;
            if turn != 0.0 {
                state.rotate(plane, turn * controls.rotate_step);
            }
        }
    }
}
