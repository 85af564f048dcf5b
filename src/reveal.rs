//! Scroll-triggered section reveals.
//!
//! A [`RevealCoordinator`] watches one surface's intersection ratio and
//! starts its [`EntranceSequence`] when the ratio first crosses the
//! threshold. Whether later exits and re-entries replay the entrance is a
//! per-instance [`RevealPolicy`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Transition;
use crate::engine::SurfaceId;
use crate::env::{SignalSource, SubscriptionId, Topic};

/// How a section reacts after its first reveal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Reveal once; later exits and re-entries are ignored.
    #[default]
    Once,
    /// Play on every entry and reverse on every exit.
    Continuous,
}

/// Visibility flags for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    /// Set on the first crossing into view; never cleared.
    pub has_entered_once: bool,
    /// Whether the section is above threshold right now.
    pub is_currently_visible: bool,
}

/// Staggered entrance for a section's children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSequence {
    /// Number of children animated.
    pub items: usize,
    /// Extra delay per child index.
    pub stagger: Duration,
    /// Transition of a single child before staggering.
    pub transition: Transition,
}

impl EntranceSequence {
    /// Sequence of `items` children with the given stagger.
    #[must_use]
    pub fn new(items: usize, stagger: Duration, transition: Transition) -> Self {
        Self {
            items,
            stagger,
            transition,
        }
    }

    /// Transition for child `index`, delayed by `index * stagger`.
    #[must_use]
    pub fn item(&self, index: usize) -> Transition {
        let extra = self.stagger.saturating_mul(index as u32);
        self.transition.delayed(self.transition.delay + extra)
    }

    /// Time until the last child finishes.
    #[must_use]
    pub fn total(&self) -> Duration {
        match self.items.checked_sub(1) {
            Some(last) => self.item(last).total(),
            None => Duration::ZERO,
        }
    }
}

impl Default for EntranceSequence {
    fn default() -> Self {
        Self::new(1, Duration::from_millis(150), Transition::fade())
    }
}

/// Entrance playback request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    /// Play the entrance forwards.
    Play(EntranceSequence),
    /// Play the entrance backwards (continuous sections leaving view).
    Reverse(EntranceSequence),
}

/// Per-instance reveal configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction that counts as "in view", in `[0, 1]`.
    pub threshold: f32,
    /// Replay behaviour.
    pub policy: RevealPolicy,
    /// Entrance to play.
    pub sequence: EntranceSequence,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            policy: RevealPolicy::Once,
            sequence: EntranceSequence::default(),
        }
    }
}

/// Gates one section's entrance on its intersection with the viewport.
#[derive(Debug)]
pub struct RevealCoordinator {
    surface: SurfaceId,
    config: RevealConfig,
    state: VisibilityState,
    subscription: Option<SubscriptionId>,
    torn_down: bool,
}

impl RevealCoordinator {
    /// Coordinator for `surface`. Nothing is observed until
    /// [`observe`](Self::observe).
    #[must_use]
    pub fn new(surface: SurfaceId, config: RevealConfig) -> Self {
        Self {
            surface,
            config,
            state: VisibilityState::default(),
            subscription: None,
            torn_down: false,
        }
    }

    /// Visibility flags.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Whether an intersection subscription is held.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// A trigger-once section that has already entered needs no further
    /// observation.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.config.policy == RevealPolicy::Once && self.state.has_entered_once
    }

    /// Start observing this surface's intersections.
    pub fn observe(&mut self, source: &mut dyn SignalSource) {
        if self.torn_down || self.subscription.is_some() {
            return;
        }
        self.subscription =
            Some(source.subscribe(Topic::Intersection(self.surface)));
    }

    /// Feed the latest visible fraction.
    pub fn on_intersection(&mut self, ratio: f32) -> Option<RevealEvent> {
        if self.torn_down {
            return None;
        }
        let visible = self.crosses(ratio);
        let was_visible = self.state.is_currently_visible;
        let settled = self.is_settled();
        self.state.is_currently_visible = visible;
        if visible == was_visible || settled {
            return None;
        }

        if visible {
            self.state.has_entered_once = true;
            log::debug!("{} revealed", self.surface);
            Some(RevealEvent::Play(self.config.sequence))
        } else if self.config.policy == RevealPolicy::Continuous {
            Some(RevealEvent::Reverse(self.config.sequence))
        } else {
            None
        }
    }

    /// Drop the observation. Safe to call more than once; after teardown
    /// every intersection is ignored.
    pub fn teardown(&mut self, source: &mut dyn SignalSource) {
        self.torn_down = true;
        self.release(source);
    }

    /// Drop the observation but keep the state (used once a trigger-once
    /// section has settled).
    pub fn release(&mut self, source: &mut dyn SignalSource) {
        if let Some(id) = self.subscription.take() {
            let _ = source.unsubscribe(id);
        }
    }

    fn crosses(&self, ratio: f32) -> bool {
        let ratio = if ratio.is_finite() { ratio } else { 0.0 };
        let threshold = self.config.threshold.clamp(0.0, 1.0);
        if threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SyntheticSignals;

    fn coordinator(policy: RevealPolicy) -> RevealCoordinator {
        RevealCoordinator::new(
            SurfaceId(7),
            RevealConfig {
                policy,
                ..RevealConfig::default()
            },
        )
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = coordinator(RevealPolicy::Once);
        assert!(reveal.on_intersection(0.1).is_none());
        assert!(!reveal.state().has_entered_once);
    }

    #[test]
    fn once_plays_a_single_time() {
        let mut reveal = coordinator(RevealPolicy::Once);
        assert!(matches!(
            reveal.on_intersection(0.5),
            Some(RevealEvent::Play(_))
        ));
        assert!(reveal.on_intersection(0.0).is_none());
        assert!(reveal.on_intersection(0.9).is_none());
        assert!(reveal.state().has_entered_once);
        assert!(reveal.is_settled());
    }

    #[test]
    fn continuous_plays_and_reverses() {
        let mut reveal = coordinator(RevealPolicy::Continuous);
        let events: Vec<_> = [0.3, 0.4, 0.0, 0.25]
            .into_iter()
            .filter_map(|r| reveal.on_intersection(r))
            .collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RevealEvent::Play(_)));
        assert!(matches!(events[1], RevealEvent::Reverse(_)));
        assert!(matches!(events[2], RevealEvent::Play(_)));
        assert!(!reveal.is_settled());
    }

    #[test]
    fn teardown_unsubscribes_and_freezes_state() {
        let mut signals = SyntheticSignals::new();
        let mut reveal = coordinator(RevealPolicy::Continuous);
        reveal.observe(&mut signals);
        assert_eq!(signals.active_subscriptions(), 1);

        reveal.teardown(&mut signals);
        assert_eq!(signals.active_subscriptions(), 0);
        assert!(reveal.on_intersection(1.0).is_none());
        assert_eq!(reveal.state(), VisibilityState::default());

        reveal.observe(&mut signals);
        assert_eq!(signals.active_subscriptions(), 0);
    }

    #[test]
    fn stagger_delays_each_child() {
        let seq = EntranceSequence::new(
            4,
            Duration::from_millis(150),
            Transition::fade(),
        );
        assert_eq!(seq.item(0).delay, Duration::ZERO);
        assert_eq!(seq.item(2).delay, Duration::from_millis(300));
        assert_eq!(seq.total(), Duration::from_millis(450 + 500));
    }

    #[test]
    fn nan_ratio_counts_as_hidden() {
        let mut reveal = coordinator(RevealPolicy::Once);
        assert!(reveal.on_intersection(f32::NAN).is_none());
    }
}
