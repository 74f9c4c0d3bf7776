//! Interaction state
//!
//! Everything the transform pipeline reads each frame besides the geometry:
//! five rotation angles, the fuzziness level, the selected shape and the
//! auto-rotate flag. Input handlers mutate it through [`InteractionState::apply`]
//! and the frame loop advances it with [`InteractionState::tick`].

use polyhedra_math::RotationPlane;

use crate::{Command, Controls};

/// Viewer state shared by the terminal and window front ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    /// Rotation about the X axis (YZ plane)
    pub angle_x: f32,
    /// Rotation about the Y axis (ZX plane)
    pub angle_y: f32,
    pub angle_xw: f32,
    pub angle_yw: f32,
    pub angle_zw: f32,
    /// Noise amplitude, kept within [0, cap]
    pub fuzziness: f32,
    /// Catalog position of the displayed shape
    pub shape_index: usize,
    pub auto_rotate: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            angle_xw: 0.0,
            angle_yw: 0.0,
            angle_zw: 0.0,
            fuzziness: 0.0,
            shape_index: 0,
            auto_rotate: true,
        }
    }

    /// Current angle of one plane
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::YZ => self.angle_x,
            RotationPlane::ZX => self.angle_y,
            RotationPlane::XW => self.angle_xw,
            RotationPlane::YW => self.angle_yw,
            RotationPlane::ZW => self.angle_zw,
        }
    }

    fn angle_mut(&mut self, plane: RotationPlane) -> &mut f32 {
        match plane {
            RotationPlane::YZ => &mut self.angle_x,
            RotationPlane::ZX => &mut self.angle_y,
            RotationPlane::XW => &mut self.angle_xw,
            RotationPlane::YW => &mut self.angle_yw,
            RotationPlane::ZW => &mut self.angle_zw,
        }
    }

    /// Add `delta` radians to one plane's angle
    pub fn rotate(&mut self, plane: RotationPlane, delta: f32) {
        *self.angle_mut(plane) += delta;
    }

    /// Apply a command
    ///
    /// `Quit` does not touch the state; front ends act on it themselves.
    /// Shape selection is clamped (digits) or wrapped (cycling) to
    /// `shape_count`, and fuzziness stays in `[0, controls.fuzziness_cap)`.
    pub fn apply(&mut self, command: Command, controls: &Controls, shape_count: usize) {
        let last = shape_count.saturating_sub(1);
        match command {
            Command::Quit => {}
            Command::ToggleAutoRotate => self.auto_rotate = !self.auto_rotate,
            Command::SelectShape(index) => self.shape_index = index.min(last),
            Command::NextShape => {
                if shape_count > 0 {
                    self.shape_index = (self.shape_index + 1) % shape_count;
                }
            }
            Command::PreviousShape => {
                if shape_count > 0 {
                    self.shape_index = (self.shape_index + shape_count - 1) % shape_count;
                }
            }
            Command::Rotate(plane, direction) => {
                self.rotate(plane, direction.sign() * controls.rotate_step);
            }
            Command::IncreaseFuzziness => {
                // A step that would reach the cap is dropped
                let raised = self.fuzziness + controls.fuzziness_step;
                if raised < controls.fuzziness_cap {
                    self.fuzziness = raised;
                }
            }
            Command::DecreaseFuzziness => {
                self.fuzziness = (self.fuzziness - controls.fuzziness_step).max(0.0);
            }
        }
    }

    /// Advance one frame: add the auto-rotate increments if enabled
    pub fn tick(&mut self, controls: &Controls) {
        if !self.auto_rotate {
            return;
        }
        for plane in RotationPlane::ALL {
            self.rotate(plane, controls.auto_rotate.rate(plane));
        }
    }

    /// Keep the shape index valid after the catalog changes size
    pub fn clamp_shape_index(&mut self, shape_count: usize) {
        self.shape_index = self.shape_index.min(shape_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_defaults() {
        let state = InteractionState::new();
        assert!(state.auto_rotate);
        assert_eq!(state.fuzziness, 0.0);
        assert_eq!(state.shape_index, 0);
        for plane in RotationPlane::ALL {
            assert_eq!(state.angle(plane), 0.0);
        }
    }

    #[test]
    fn test_select_shape_clamps() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.apply(Command::SelectShape(4), &controls, 9);
        assert_eq!(state.shape_index, 4);
        state.apply(Command::SelectShape(8), &controls, 3);
        assert_eq!(state.shape_index, 2);
        state.apply(Command::SelectShape(5), &controls, 0);
        assert_eq!(state.shape_index, 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.apply(Command::PreviousShape, &controls, 9);
        assert_eq!(state.shape_index, 8);
        state.apply(Command::NextShape, &controls, 9);
        assert_eq!(state.shape_index, 0);
        state.apply(Command::NextShape, &controls, 0);
        assert_eq!(state.shape_index, 0);
    }

    #[test]
    fn test_fuzziness_stays_below_cap() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.apply(Command::DecreaseFuzziness, &controls, 9);
        assert_eq!(state.fuzziness, 0.0);
        for _ in 0..100 {
            state.apply(Command::IncreaseFuzziness, &controls, 9);
            assert!(state.fuzziness < controls.fuzziness_cap);
        }
        assert!(state.fuzziness >= controls.fuzziness_cap - controls.fuzziness_step);
    }

    #[test]
    fn test_fuzziness_step_reaching_cap_is_dropped() {
        let controls = Controls {
            fuzziness_step: 0.5,
            fuzziness_cap: 1.0,
            ..Controls::terminal()
        };
        let mut state = InteractionState::new();
        state.apply(Command::IncreaseFuzziness, &controls, 9);
        assert_eq!(state.fuzziness, 0.5);
        state.apply(Command::IncreaseFuzziness, &controls, 9);
        assert_eq!(state.fuzziness, 0.5);
        state.apply(Command::DecreaseFuzziness, &controls, 9);
        state.apply(Command::DecreaseFuzziness, &controls, 9);
        assert_eq!(state.fuzziness, 0.0);
    }

    #[test]
    fn test_rotate_command() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.apply(Command::Rotate(RotationPlane::XW, Direction::Positive), &controls, 9);
        state.apply(Command::Rotate(RotationPlane::ZX, Direction::Negative), &controls, 9);
        assert_eq!(state.angle_xw, controls.rotate_step);
        assert_eq!(state.angle_y, -controls.rotate_step);
        assert_eq!(state.angle_x, 0.0);
    }

    #[test]
    fn test_tick_respects_auto_rotate() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.tick(&controls);
        assert_eq!(state.angle_x, controls.auto_rotate.x);
        assert_eq!(state.angle_zw, controls.auto_rotate.zw);

        state.apply(Command::ToggleAutoRotate, &controls, 9);
        let before = state;
        state.tick(&controls);
        assert_eq!(state, before);
    }

    #[test]
    fn test_quit_is_noop() {
        let controls = Controls::terminal();
        let mut state = InteractionState::new();
        state.apply(Command::Quit, &controls, 9);
        assert_eq!(state, InteractionState::new());
    }
}
