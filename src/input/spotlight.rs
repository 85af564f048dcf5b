use std::time::Duration;

use glam::Vec2;

use crate::env::{TimerHost, TimerId};

/// How long after mounting the spotlight appears.
pub const SPOTLIGHT_DELAY: Duration = Duration::from_millis(1000);

/// Visibility and position of the spotlight after a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightChange {
    /// Whether the spotlight is drawn.
    pub visible: bool,
    /// Pointer position in client pixels.
    pub position: Vec2,
}

/// A soft light that follows the pointer across a section.
///
/// It stays hidden for a short delay after [`start`](Self::start) and is
/// suppressed on mobile widths, where there is no hovering pointer.
/// Position updates are tracked while hidden so the light appears where
/// the pointer already is.
#[derive(Debug)]
pub struct CursorSpotlight {
    delay: Duration,
    pending: Option<TimerId>,
    armed: bool,
    suppressed: bool,
    position: Vec2,
}

impl CursorSpotlight {
    /// A spotlight that appears `delay` after it starts.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed: false,
            suppressed: false,
            position: Vec2::ZERO,
        }
    }

    /// Whether the spotlight is drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.armed && !self.suppressed
    }

    /// Last tracked pointer position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the show delay is still running.
    #[must_use]
    pub fn delay_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule the show delay. Does nothing once armed or already waiting.
    pub fn start(&mut self, timers: &mut dyn TimerHost) {
        if self.armed || self.pending.is_some() {
            return;
        }
        self.pending = Some(timers.set_timeout(self.delay));
    }

    /// A timer fired. Only the spotlight's own delay has an effect.
    pub fn on_timer(&mut self, id: TimerId) -> Option<SpotlightChange> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;
        self.armed = true;
        self.visible().then(|| self.change())
    }

    /// Pointer moved to `position`.
    pub fn track(&mut self, position: Vec2) -> Option<SpotlightChange> {
        if self.position == position {
            return None;
        }
        self.position = position;
        self.visible().then(|| self.change())
    }

    /// Hide on mobile widths, show again above them.
    pub fn set_suppressed(&mut self, suppressed: bool) -> Option<SpotlightChange> {
        let was = self.visible();
        self.suppressed = suppressed;
        (self.visible() != was).then(|| self.change())
    }

    /// Cancel the show delay if it has not fired.
    pub fn teardown(&mut self, timers: &mut dyn TimerHost) {
        if let Some(id) = self.pending.take() {
            let _ = timers.clear_timeout(id);
        }
    }

    fn change(&self) -> SpotlightChange {
        SpotlightChange {
            visible: self.visible(),
            position: self.position,
        }
    }
}

impl Default for CursorSpotlight {
    fn default() -> Self {
        Self::new(SPOTLIGHT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::VirtualClock;

    #[test]
    fn appears_after_the_delay_at_the_tracked_position() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::default();
        spotlight.start(&mut clock);

        assert!(spotlight.track(Vec2::new(40.0, 60.0)).is_none());
        assert!(clock.advance(Duration::from_millis(999)).is_empty());
        let fired = clock.advance(Duration::from_millis(1));
        assert_eq!(fired.len(), 1);

        let change = spotlight.on_timer(fired[0]).unwrap();
        assert!(change.visible);
        assert_eq!(change.position, Vec2::new(40.0, 60.0));

        let change = spotlight.track(Vec2::new(41.0, 60.0)).unwrap();
        assert_eq!(change.position.x, 41.0);
    }

    #[test]
    fn teardown_before_the_delay_never_shows() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::default();
        spotlight.start(&mut clock);
        spotlight.teardown(&mut clock);

        assert_eq!(clock.pending(), 0);
        assert!(!spotlight.delay_pending());
        assert!(clock.advance(Duration::from_secs(5)).is_empty());
        assert!(!spotlight.visible());
    }

    #[test]
    fn start_twice_schedules_once() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::new(Duration::from_millis(200));
        spotlight.start(&mut clock);
        spotlight.start(&mut clock);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn suppression_hides_and_restores() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::new(Duration::from_millis(10));
        spotlight.start(&mut clock);
        let fired = clock.advance(Duration::from_millis(10));
        let _ = spotlight.on_timer(fired[0]);

        let change = spotlight.set_suppressed(true).unwrap();
        assert!(!change.visible);
        assert!(spotlight.set_suppressed(true).is_none());
        assert!(spotlight.track(Vec2::ONE).is_none());
        assert!(spotlight.set_suppressed(false).unwrap().visible);
    }

    #[test]
    fn suppressed_spotlight_stays_hidden_when_the_delay_fires() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::new(Duration::from_millis(10));
        let _ = spotlight.set_suppressed(true);
        spotlight.start(&mut clock);
        let fired = clock.advance(Duration::from_millis(10));
        assert!(spotlight.on_timer(fired[0]).is_none());
        assert!(!spotlight.visible());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut clock = VirtualClock::new();
        let mut spotlight = CursorSpotlight::default();
        let foreign = clock.set_timeout(Duration::from_millis(5));
        spotlight.start(&mut clock);
        assert!(spotlight.on_timer(foreign).is_none());
        assert!(spotlight.delay_pending());
    }
}
