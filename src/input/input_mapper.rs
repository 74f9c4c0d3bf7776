//! Input mapping from raw key events to viewer commands
//!
//! Both front ends share one key table keyed by character; the terminal and
//! window mappers only translate their own key types into it.

use crossterm::event::{KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};
use polyhedra_input::{Command, Direction};
use polyhedra_math::RotationPlane;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Maps raw key events to commands
pub struct InputMapper;

impl InputMapper {
    /// Shared key table, case-insensitive
    pub fn map_char(c: char) -> Option<Command> {
        use Direction::{Negative, Positive};
        use RotationPlane::{XW, YW, YZ, ZW, ZX};

        let command = match c.to_ascii_lowercase() {
            d @ '1'..='9' => Command::SelectShape(d as usize - '1' as usize),
            'q' => Command::Quit,
            'r' => Command::ToggleAutoRotate,
            'w' => Command::Rotate(YZ, Negative),
            's' => Command::Rotate(YZ, Positive),
            'a' => Command::Rotate(ZX, Negative),
            'd' => Command::Rotate(ZX, Positive),
            'i' => Command::Rotate(XW, Negative),
            'k' => Command::Rotate(XW, Positive),
            'j' => Command::Rotate(YW, Negative),
            'l' => Command::Rotate(YW, Positive),
            'u' => Command::Rotate(ZW, Negative),
            'o' => Command::Rotate(ZW, Positive),
            'f' => Command::IncreaseFuzziness,
            'g' => Command::DecreaseFuzziness,
            _ => return None,
        };
        Some(command)
    }

    /// Map a crossterm key event
    ///
    /// Presses and auto-repeats map; releases do not. Ctrl+C quits since raw
    /// mode swallows the signal.
    pub fn map_terminal(event: &KeyEvent) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        match event.code {
            TermKey::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            TermKey::Char(c) => Self::map_char(c),
            TermKey::Esc => Some(Command::Quit),
            TermKey::Left => Some(Command::PreviousShape),
            TermKey::Right => Some(Command::NextShape),
            _ => None,
        }
    }

    /// Map a winit key press
    ///
    /// Returns `None` for releases and for unmapped keys. Rotation keys are
    /// also reported through [`InputMapper::window_rotation`] so the window
    /// can track them while held.
    pub fn map_window(key: KeyCode, state: ElementState) -> Option<Command> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(Command::Quit),
            KeyCode::ArrowLeft => Some(Command::PreviousShape),
            KeyCode::ArrowRight => Some(Command::NextShape),
            other => Self::window_char(other).and_then(Self::map_char),
        }
    }

    /// Plane and direction of a rotation key, for held-key tracking
    pub fn window_rotation(key: KeyCode) -> Option<(RotationPlane, Direction)> {
        match Self::window_char(key).and_then(Self::map_char) {
            Some(Command::Rotate(plane, direction)) => Some((plane, direction)),
            _ => None,
        }
    }

    fn window_char(key: KeyCode) -> Option<char> {
        let c = match key {
            KeyCode::Digit1 => '1',
            KeyCode::Digit2 => '2',
            KeyCode::Digit3 => '3',
            KeyCode::Digit4 => '4',
            KeyCode::Digit5 => '5',
            KeyCode::Digit6 => '6',
            KeyCode::Digit7 => '7',
            KeyCode::Digit8 => '8',
            KeyCode::Digit9 => '9',
            KeyCode::KeyQ => 'q',
            KeyCode::KeyR => 'r',
            KeyCode::KeyW => 'w',
            KeyCode::KeyS => 's',
            KeyCode::KeyA => 'a',
            KeyCode::KeyD => 'd',
            KeyCode::KeyI => 'i',
            KeyCode::KeyK => 'k',
            KeyCode::KeyJ => 'j',
            KeyCode::KeyL => 'l',
            KeyCode::KeyU => 'u',
            KeyCode::KeyO => 'o',
            KeyCode::KeyF => 'f',
            KeyCode::KeyG => 'g',
            _ => return None,
        };
        Some(c)
    }
}
