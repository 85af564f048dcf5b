use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::SurfaceId;
use crate::input::InteractionEvent;
use crate::tilt::SurfaceRect;

/// Viewport dimensions in CSS pixels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct ViewportMetrics {
    /// Inner width.
    pub width: u32,
    /// Inner height.
    pub height: u32,
}

impl ViewportMetrics {
    /// Viewport of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One intersection observation for an observed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Surface whose region was observed.
    pub surface: SurfaceId,
    /// Fraction of the region's area inside the viewport, in `[0, 1]`.
    pub ratio: f32,
}

/// A signal delivered by the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// The viewport was resized.
    Resize(ViewportMetrics),
    /// A surface's visible fraction changed.
    Intersection(IntersectionEntry),
    /// Pointer or touch interaction on a surface.
    Interaction {
        /// Surface the interaction targets.
        surface: SurfaceId,
        /// The unified interaction event.
        event: InteractionEvent,
        /// The surface's bounding rectangle at event time.
        rect: SurfaceRect,
    },
}

impl Signal {
    /// Topic a subscriber must hold to receive this signal.
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::Resize(_) => Topic::Resize,
            Self::Intersection(entry) => Topic::Intersection(entry.surface),
            Self::Interaction { surface, .. } => Topic::Interaction(*surface),
        }
    }
}

/// What a subscription listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Viewport resize signals.
    Resize,
    /// Intersection changes of one surface's region.
    Intersection(SurfaceId),
    /// Pointer/touch interaction on one surface.
    Interaction(SurfaceId),
}

/// Handle returned by [`SignalSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Source of environment signals with subscribe/unsubscribe semantics.
///
/// Subscribing registers interest (and, in a browser, the underlying
/// listener or observer); unsubscribing must release it.
pub trait SignalSource {
    /// Register interest in `topic`.
    fn subscribe(&mut self, topic: Topic) -> SubscriptionId;

    /// Release a subscription. Returns `false` if it was not active.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Number of live subscriptions.
    fn active_subscriptions(&self) -> usize;
}

/// In-memory signal source for tests and headless hosts.
///
/// Tracks subscriptions so tests can assert that teardown released every
/// observer, and filters synthetic signals down to the ones somebody is
/// listening to.
#[derive(Debug, Default)]
pub struct SyntheticSignals {
    next_id: u64,
    subscriptions: FxHashMap<SubscriptionId, Topic>,
}

impl SyntheticSignals {
    /// A source with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any live subscription would receive `signal`.
    #[must_use]
    pub fn accepts(&self, signal: &Signal) -> bool {
        let topic = signal.topic();
        self.subscriptions.values().any(|t| *t == topic)
    }

    /// Topic of a live subscription.
    #[must_use]
    pub fn topic_of(&self, id: SubscriptionId) -> Option<Topic> {
        self.subscriptions.get(&id).copied()
    }
}

impl SignalSource for SyntheticSignals {
    fn subscribe(&mut self, topic: Topic) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let _ = self.subscriptions.insert(id, topic);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_then_unsubscribe() {
        let mut source = SyntheticSignals::new();
        let id = source.subscribe(Topic::Resize);
        assert_eq!(source.active_subscriptions(), 1);
        assert!(source.accepts(&Signal::Resize(ViewportMetrics::new(800, 600))));

        assert!(source.unsubscribe(id));
        assert!(!source.unsubscribe(id));
        assert_eq!(source.active_subscriptions(), 0);
        assert!(!source.accepts(&Signal::Resize(ViewportMetrics::new(800, 600))));
    }

    #[test]
    fn intersection_topics_are_per_surface() {
        let mut source = SyntheticSignals::new();
        let _ = source.subscribe(Topic::Intersection(SurfaceId(1)));
        let seen = Signal::Intersection(IntersectionEntry {
            surface: SurfaceId(1),
            ratio: 0.5,
        });
        let other = Signal::Intersection(IntersectionEntry {
            surface: SurfaceId(2),
            ratio: 0.5,
        });
        assert!(source.accepts(&seen));
        assert!(!source.accepts(&other));
    }
}
