//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`POLY_SECTION__KEY`)
//! 4. Command-line flags, applied by `main`

use figment::{Figment, providers::{Format, Toml, Env}};
use polyhedra_core::ShapeKind;
use polyhedra_input::{Controls, RotationRates};
use polyhedra_render::DEFAULT_RAMP;
use crate::systems::HEADER_HEIGHT;
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Terminal renderer configuration
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Window renderer configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Key step sizes and auto-rotate rates
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Which shapes to show
    #[serde(default)]
    pub shapes: ShapesConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`POLY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load and validate configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config = Self::extract_from(config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge the config files and environment without validating
    ///
    /// For callers that apply further overrides before [`AppConfig::validate`].
    pub fn extract_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // POLY_TERMINAL__FRAME_MS=30 -> terminal.frame_ms = 30
        figment = figment.merge(Env::prefixed("POLY_").split("__"));

        Ok(figment.extract()?)
    }

    /// Reject values the renderers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.terminal;
        if t.width == 0 || t.height == 0 {
            return Err(ConfigError::invalid("terminal.width and terminal.height must be positive"));
        }
        if t.supersample == 0 {
            return Err(ConfigError::invalid("terminal.supersample must be at least 1"));
        }
        let rows = t.height.checked_add(HEADER_HEIGHT);
        if t.width > u16::MAX as usize || rows.map_or(true, |rows| rows > u16::MAX as usize) {
            return Err(ConfigError::invalid(format!(
                "terminal.width and terminal.height plus {} header rows must fit in {} cells",
                HEADER_HEIGHT,
                u16::MAX
            )));
        }
        let samples = t
            .width
            .checked_mul(t.supersample)
            .and_then(|n| n.checked_mul(t.height))
            .and_then(|n| n.checked_mul(t.supersample));
        if samples.is_none() {
            return Err(ConfigError::invalid("terminal.supersample is too large for the terminal size"));
        }
        if t.ramp.is_empty() {
            return Err(ConfigError::invalid("terminal.ramp must not be empty"));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window.width and window.height must be positive"));
        }
        let c = &self.controls;
        if !(c.fuzziness_cap >= 0.0) || !(c.fuzziness_step >= 0.0) {
            return Err(ConfigError::invalid(
                "controls.fuzziness_cap and controls.fuzziness_step must be non-negative",
            ));
        }
        if self.shapes.builtin.is_empty() && self.shapes.directory.is_none() {
            return Err(ConfigError::invalid(
                "shapes.builtin is empty and no shapes.directory is set",
            ));
        }
        if self.shapes.extension.is_empty() {
            return Err(ConfigError::invalid("shapes.extension must not be empty"));
        }
        Ok(())
    }
}

/// Terminal renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Character columns of the drawing area
    pub width: usize,
    /// Character rows of the drawing area
    pub height: usize,
    /// Samples per character cell along each axis
    pub supersample: usize,
    /// Target frame interval in milliseconds
    pub frame_ms: u64,
    /// Depth glyphs, sparse to solid
    pub ramp: String,
    /// Draw a marker glyph at vertices
    pub mark_vertices: bool,
    /// The marker glyph
    pub vertex_glyph: char,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            supersample: 2,
            frame_ms: 50,
            ramp: DEFAULT_RAMP.to_string(),
            mark_vertices: true,
            vertex_glyph: 'O',
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Line color [r, g, b, a]
    pub line_color: [f32; 4],
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Polyhedra".to_string(),
            width: 800,
            height: 800,
            vsync: true,
            line_color: [1.0, 1.0, 1.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Step sizes and auto-rotate rates for both front ends
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Radians per rotate key press in the terminal
    pub terminal_rotate_step: f32,
    /// Radians per frame while a rotate key is held in the window
    pub window_rotate_step: f32,
    /// Fuzziness change per key press
    pub fuzziness_step: f32,
    /// Fuzziness stays strictly below this
    pub fuzziness_cap: f32,
    pub terminal_auto_rotate: RotationRates,
    pub window_auto_rotate: RotationRates,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        let terminal = Controls::terminal();
        let window = Controls::window();
        Self {
            terminal_rotate_step: terminal.rotate_step,
            window_rotate_step: window.rotate_step,
            fuzziness_step: terminal.fuzziness_step,
            fuzziness_cap: terminal.fuzziness_cap,
            terminal_auto_rotate: terminal.auto_rotate,
            window_auto_rotate: window.auto_rotate,
        }
    }
}

impl ControlsConfig {
    /// Controls for the terminal front end
    pub fn terminal(&self) -> Controls {
        Controls {
            rotate_step: self.terminal_rotate_step,
            fuzziness_step: self.fuzziness_step,
            fuzziness_cap: self.fuzziness_cap,
            auto_rotate: self.terminal_auto_rotate,
        }
    }

    /// Controls for the window front end
    pub fn window(&self) -> Controls {
        Controls {
            rotate_step: self.window_rotate_step,
            fuzziness_step: self.fuzziness_step,
            fuzziness_cap: self.fuzziness_cap,
            auto_rotate: self.window_auto_rotate,
        }
    }
}

/// Shape catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// Built-in shapes, in display order
    pub builtin: Vec<ShapeKind>,
    /// Directory of shape files to load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Extension of shape files in `directory`
    pub extension: String,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            builtin: ShapeKind::ALL.to_vec(),
            directory: None,
            extension: polyhedra_core::shape_file::SHAPE_EXTENSION.to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// A value that parsed but cannot be used
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
