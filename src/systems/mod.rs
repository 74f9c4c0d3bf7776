//! Application systems
//!
//! The pieces each front end is assembled from: terminal session and frame
//! loop, window and GPU render systems, frame pacing and status text.

mod frame_clock;
mod render;
mod status;
mod terminal;
mod window;

pub use frame_clock::FrameClock;
pub use render::{RenderError, RenderSystem};
pub use status::{Status, HEADER_HEIGHT};
pub use terminal::{present, TerminalError, TerminalSession, TerminalSystem};
pub use window::{WindowError, WindowSystem};
