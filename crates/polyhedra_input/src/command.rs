//! Commands produced by the key mappers

use polyhedra_math::RotationPlane;

/// Which way a rotation key turns its plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// A single user action
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Leave the viewer
    Quit,
    /// Flip the auto-rotate flag
    ToggleAutoRotate,
    /// Select a shape by catalog position (0-based)
    SelectShape(usize),
    /// Select the next shape, wrapping around
    NextShape,
    /// Select the previous shape, wrapping around
    PreviousShape,
    /// Turn one rotation plane by one step
    Rotate(RotationPlane, Direction),
    IncreaseFuzziness,
    DecreaseFuzziness,
}
