//! Transition describes how the host should animate to a new visual state.

use std::time::Duration;

use super::easing::EasingFunction;

/// How to animate from the current visual state to a new target.
///
/// Engines attach one to every change they emit; the host's interpolator
/// (CSS transitions, a motion library, or [`Tween`](super::Tween)) carries
/// it out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Length of the animation.
    pub duration: Duration,
    /// Wait before the animation starts.
    pub delay: Duration,
    /// Timing curve.
    pub easing: EasingFunction,
}

impl Transition {
    /// Jump straight to the target.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            delay: Duration::ZERO,
            easing: EasingFunction::Linear,
        }
    }

    /// Transition of the given length and curve, no delay.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// Panel content swap (500ms ease-out fade/slide).
    #[must_use]
    pub fn fade() -> Self {
        Self::new(Duration::from_millis(500), EasingFunction::EASE_OUT)
    }

    /// Card returning to rest after the pointer leaves (600ms snappy).
    #[must_use]
    pub fn settle() -> Self {
        Self::new(Duration::from_millis(600), EasingFunction::SNAPPY)
    }

    /// Start after `delay`.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total time from trigger to finish.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Whether the transition completes immediately.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.total().is_zero()
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::fade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_transition() {
        let t = Transition::instant();
        assert!(t.is_instant());
        assert_eq!(t.total(), Duration::ZERO);
    }

    #[test]
    fn test_default_is_fade() {
        let t = Transition::default();
        assert_eq!(t.duration, Duration::from_millis(500));
        assert_eq!(t.easing, EasingFunction::EASE_OUT);
    }

    #[test]
    fn test_delay_adds_to_total() {
        let t = Transition::settle().delayed(Duration::from_millis(150));
        assert_eq!(t.total(), Duration::from_millis(750));
        assert!(!t.is_instant());
    }
}
