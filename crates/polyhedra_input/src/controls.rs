//! Step sizes and auto-rotate rates

use polyhedra_math::RotationPlane;
use serde::{Deserialize, Serialize};

/// Per-frame angle increments applied while auto-rotate is on
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRates {
    pub x: f32,
    pub y: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationRates {
    /// Rates tuned for the terminal frame interval
    pub const TERMINAL: RotationRates = RotationRates {
        x: 0.02,
        y: 0.03,
        xw: 0.015,
        yw: 0.01,
        zw: 0.025,
    };

    /// Rates tuned for a vsynced window
    pub const WINDOW: RotationRates = RotationRates {
        x: 0.004,
        y: 0.006,
        xw: 0.003,
        yw: 0.002,
        zw: 0.005,
    };

    /// Rate for one plane
    pub fn rate(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::YZ => self.x,
            RotationPlane::ZX => self.y,
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }
}

impl Default for RotationRates {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Tunables that turn commands into state changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    /// Angle change per rotate command, in radians
    pub rotate_step: f32,
    /// Fuzziness change per command
    pub fuzziness_step: f32,
    /// Fuzziness stays strictly below this
    pub fuzziness_cap: f32,
    /// Auto-rotate increments
    pub auto_rotate: RotationRates,
}

impl Controls {
    pub fn terminal() -> Self {
        Self {
            rotate_step: 0.1,
            fuzziness_step: 0.05,
            fuzziness_cap: 1.0,
            auto_rotate: RotationRates::TERMINAL,
        }
    }

    pub fn window() -> Self {
        Self {
            rotate_step: 0.01,
            fuzziness_step: 0.05,
            fuzziness_cap: 1.0,
            auto_rotate: RotationRates::WINDOW,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::terminal()
    }
}
