use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::typewriter::TypewriterTiming;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Typewriter", inline)]
#[serde(default)]
/// Cycling headline timing.
pub struct TypewriterOptions {
    /// Delay between typed characters, ms.
    #[schemars(title = "Type Interval", range(min = 10, max = 1000), extend("step" = 10))]
    pub type_interval_ms: u64,
    /// Delay between deleted characters, ms.
    #[schemars(title = "Delete Interval", range(min = 10, max = 1000), extend("step" = 10))]
    pub delete_interval_ms: u64,
    /// Hold time with the full phrase visible, ms.
    #[schemars(title = "Dwell", range(min = 0, max = 10000), extend("step" = 100))]
    pub dwell_ms: u64,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            type_interval_ms: 100,
            delete_interval_ms: 50,
            dwell_ms: 1500,
        }
    }
}

impl TypewriterOptions {
    /// Tick intervals, with type and delete raised to the schema minimum.
    #[must_use]
    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            type_interval: Duration::from_millis(self.type_interval_ms),
            delete_interval: Duration::from_millis(self.delete_interval_ms),
            dwell: Duration::from_millis(self.dwell_ms),
        }
        .clamped()
    }
}
