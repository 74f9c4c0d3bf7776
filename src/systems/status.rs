//! Status text for both front ends
//!
//! The terminal draws these lines above the frame; the window folds the same
//! fields into its title.

use polyhedra_core::Shape;
use polyhedra_input::InteractionState;
use polyhedra_math::RotationPlane;

pub const BANNER: &str = "--- POLYHEDRA ---";
pub const CONTROLS_HELP: &str =
    "Controls: [1-9] shape  [</>] cycle  [WASD] rotate  [IJKL UO] 4D  [F/G] fuzz  [R] auto  [Q] quit";

/// Snapshot of what is on screen
pub struct Status<'a> {
    pub shape: &'a Shape,
    pub state: &'a InteractionState,
}

impl<'a> Status<'a> {
    pub fn new(shape: &'a Shape, state: &'a InteractionState) -> Self {
        Self { shape, state }
    }

    fn shape_line(&self) -> String {
        format!(
            "Shape: {} | V: {} | E: {} | {}",
            self.shape.name(),
            self.shape.vertex_count(),
            self.shape.edge_count(),
            if self.shape.is_4d() { "4D" } else { "3D" },
        )
    }

    fn angle_line(&self) -> String {
        let angles: Vec<String> = RotationPlane::ALL
            .iter()
            .map(|&plane| format!("{}: {:.2}", plane.label(), self.state.angle(plane)))
            .collect();
        format!("Angles {}", angles.join(" "))
    }

    fn fuzziness_line(&self) -> String {
        format!(
            "Fuzziness: {:.2} | Auto-rotate: {}",
            self.state.fuzziness,
            if self.state.auto_rotate { "ON" } else { "OFF" },
        )
    }

    /// Fixed-height header drawn above the terminal frame
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            BANNER.to_string(),
            self.shape_line(),
            self.angle_line(),
            self.fuzziness_line(),
            CONTROLS_HELP.to_string(),
        ]
    }

    /// Window title carrying the header fields
    pub fn title(&self, base: &str) -> String {
        format!(
            "{} - {} - Fuzziness: {:.2} - Auto: {}",
            base,
            self.shape_line(),
            self.state.fuzziness,
            if self.state.auto_rotate { "ON" } else { "OFF" },
        )
    }
}

/// Number of lines [`Status::header_lines`] returns
pub const HEADER_HEIGHT: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra_core::ShapeKind;

    #[test]
    fn test_header_fields() {
        let shape = ShapeKind::Tesseract.build();
        let mut state = InteractionState::new();
        state.fuzziness = 0.25;
        state.auto_rotate = false;
        let lines = Status::new(&shape, &state).header_lines();

        assert_eq!(lines.len(), HEADER_HEIGHT);
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], "Shape: Tesseract | V: 16 | E: 32 | 4D");
        assert_eq!(lines[2], "Angles X: 0.00 Y: 0.00 XW: 0.00 YW: 0.00 ZW: 0.00");
        assert_eq!(lines[3], "Fuzziness: 0.25 | Auto-rotate: OFF");
    }

    #[test]
    fn test_angle_line_follows_state() {
        let shape = ShapeKind::Cube.build();
        let mut state = InteractionState::new();
        state.angle_x = 0.5;
        state.angle_zw = -1.25;
        let lines = Status::new(&shape, &state).header_lines();
        assert_eq!(lines[2], "Angles X: 0.50 Y: 0.00 XW: 0.00 YW: 0.00 ZW: -1.25");
    }

    #[test]
    fn test_title_contains_shape() {
        let shape = ShapeKind::Cube.build();
        let state = InteractionState::new();
        let title = Status::new(&shape, &state).title("Polyhedra");
        assert!(title.starts_with("Polyhedra - Shape: Cube | V: 8 | E: 12 | 3D"));
        assert!(title.ends_with("Auto: ON"));
    }
}
