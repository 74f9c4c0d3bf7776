//! Top-level application error
//!
//! Every fallible step `main` runs funnels into [`AppError`], which it logs
//! before exiting nonzero.

use polyhedra_core::ShapeError;

use crate::config::ConfigError;
use crate::systems::{RenderError, TerminalError, WindowError};

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Shape(ShapeError),
    Terminal(TerminalError),
    Window(WindowError),
    Render(RenderError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Shape(e) => write!(f, "{}", e),
            AppError::Terminal(e) => write!(f, "{}", e),
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Shape(e) => Some(e),
            AppError::Terminal(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<ShapeError> for AppError {
    fn from(e: ShapeError) -> Self {
        AppError::Shape(e)
    }
}

impl From<TerminalError> for AppError {
    fn from(e: TerminalError) -> Self {
        AppError::Terminal(e)
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}
