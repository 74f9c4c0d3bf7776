//! Input handling module
//!
//! Maps raw terminal and window key events to viewer commands.

mod input_mapper;

pub use input_mapper::InputMapper;
