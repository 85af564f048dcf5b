use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, Transition};
use crate::reveal::{EntranceSequence, RevealConfig, RevealPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
/// Defaults for scroll-triggered reveals. Surfaces may override the policy.
pub struct RevealOptions {
    /// Visible fraction that counts as in view.
    #[schemars(title = "Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub threshold: f32,
    /// Reveal once instead of on every entry.
    #[schemars(title = "Trigger Once")]
    pub trigger_once: bool,
    /// Delay between staggered children, ms.
    #[schemars(title = "Stagger", range(min = 0, max = 1000), extend("step" = 10))]
    pub stagger_ms: u64,
    /// Entrance duration per child, ms.
    #[schemars(title = "Duration", range(min = 0, max = 3000), extend("step" = 50))]
    pub duration_ms: u64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            trigger_once: true,
            stagger_ms: 150,
            duration_ms: 500,
        }
    }
}

impl RevealOptions {
    /// Default policy.
    #[must_use]
    pub fn policy(&self) -> RevealPolicy {
        if self.trigger_once {
            RevealPolicy::Once
        } else {
            RevealPolicy::Continuous
        }
    }

    /// Coordinator config for a section of `items` children.
    #[must_use]
    pub fn config(&self, items: usize) -> RevealConfig {
        RevealConfig {
            threshold: self.threshold,
            policy: self.policy(),
            sequence: EntranceSequence::new(
                items,
                Duration::from_millis(self.stagger_ms),
                Transition::new(
                    Duration::from_millis(self.duration_ms),
                    EasingFunction::EASE_OUT,
                ),
            ),
        }
    }
}
