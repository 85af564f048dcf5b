use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, Transition};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Panel swaps and touch hover.
pub struct InteractionOptions {
    /// Panel content fade, ms.
    #[schemars(title = "Panel Fade", range(min = 0, max = 2000), extend("step" = 50))]
    pub panel_fade_ms: u64,
    /// How long a touch keeps an item hovered after the finger lifts, ms.
    #[schemars(title = "Touch Hold", range(min = 0, max = 5000), extend("step" = 100))]
    pub touch_hold_ms: u64,
    /// Delay before the cursor spotlight appears, ms.
    #[schemars(title = "Spotlight Delay", range(min = 0, max = 5000), extend("step" = 100))]
    pub spotlight_delay_ms: u64,
    /// How long a transient notice stays up, ms.
    #[schemars(title = "Notice Hold", range(min = 500, max = 10000), extend("step" = 250))]
    pub notice_hold_ms: u64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            panel_fade_ms: 500,
            touch_hold_ms: 1500,
            spotlight_delay_ms: 1000,
            notice_hold_ms: 3000,
        }
    }
}

impl InteractionOptions {
    /// Panel swap transition.
    #[must_use]
    pub fn panel_fade(&self) -> Transition {
        Transition::new(
            Duration::from_millis(self.panel_fade_ms),
            EasingFunction::EASE_OUT,
        )
    }

    /// Touch hover hold.
    #[must_use]
    pub fn touch_hold(&self) -> Duration {
        Duration::from_millis(self.touch_hold_ms)
    }

    /// Cursor spotlight show delay.
    #[must_use]
    pub fn spotlight_delay(&self) -> Duration {
        Duration::from_millis(self.spotlight_delay_ms)
    }

    /// Transient notice hold.
    #[must_use]
    pub fn notice_hold(&self) -> Duration {
        Duration::from_millis(self.notice_hold_ms)
    }
}
