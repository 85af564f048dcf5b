use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, Transition};
use crate::tilt::{TiltConfig, TiltSurface};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tilt", inline)]
#[serde(default)]
/// Pointer-driven card tilt.
pub struct TiltOptions {
    /// Maximum rotation on either axis, degrees.
    #[schemars(title = "Max Angle", range(min = 0.0, max = 45.0), extend("step" = 0.5))]
    pub max_angle: f32,
    /// Clamp on the highlight offset from center, px.
    #[schemars(title = "Max Offset", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub max_offset: f32,
    /// Scale applied while hovered.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub hover_scale: f32,
    /// CSS perspective distance, px.
    #[schemars(skip)]
    pub perspective: f32,
    /// Return-to-rest duration after the pointer leaves, ms.
    #[schemars(title = "Settle Time", range(min = 0, max = 3000), extend("step" = 50))]
    pub settle_ms: u64,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max_angle: 12.0,
            max_offset: 250.0,
            hover_scale: 1.05,
            perspective: 1000.0,
            settle_ms: 600,
        }
    }
}

impl TiltOptions {
    /// Geometry limits.
    #[must_use]
    pub fn config(&self) -> TiltConfig {
        TiltConfig {
            max_angle: self.max_angle,
            max_offset: self.max_offset,
        }
    }

    /// Return-to-rest transition.
    #[must_use]
    pub fn settle(&self) -> Transition {
        Transition::new(
            Duration::from_millis(self.settle_ms),
            EasingFunction::SNAPPY,
        )
    }

    /// A fresh surface with these settings.
    #[must_use]
    pub fn surface(&self) -> TiltSurface {
        TiltSurface::new(self.config(), self.hover_scale, self.settle())
    }
}
