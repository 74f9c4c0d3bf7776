//! Interaction handling for Polyhedra
//!
//! Front-end independent: key mappers in the binary turn terminal or window
//! key events into [`Command`]s, and this crate turns commands into changes
//! of [`InteractionState`].

mod command;
mod controls;
mod held;
mod state;

pub use command::{Command, Direction};
pub use controls::{Controls, RotationRates};
pub use held::HeldRotations;
pub use state::InteractionState;
