//! Transient notices that hide themselves after a hold.
//!
//! Used for confirmations such as "download started": the host shows the
//! notice and the engine hides it again once the hold elapses.

use std::time::Duration;

use crate::env::{TimerHost, TimerId};

/// How long a notice stays up.
pub const NOTICE_HOLD: Duration = Duration::from_millis(3000);

/// A notice that is visible for a fixed hold after each show.
#[derive(Debug)]
pub struct TransientNotice {
    hold: Duration,
    visible: bool,
    pending: Option<TimerId>,
}

impl TransientNotice {
    /// A hidden notice with the given hold.
    #[must_use]
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            visible: false,
            pending: None,
        }
    }

    /// Whether the notice is showing.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether a hide is scheduled.
    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Show the notice. Showing it again while visible restarts the hold.
    ///
    /// Returns `true` when the notice was hidden before.
    pub fn show(&mut self, timers: &mut dyn TimerHost) -> bool {
        self.cancel(timers);
        self.pending = Some(timers.set_timeout(self.hold));
        !std::mem::replace(&mut self.visible, true)
    }

    /// A timer fired. Returns `true` when it hid the notice.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        std::mem::replace(&mut self.visible, false)
    }

    /// Cancel the pending hide.
    pub fn teardown(&mut self, timers: &mut dyn TimerHost) {
        self.cancel(timers);
    }

    fn cancel(&mut self, timers: &mut dyn TimerHost) {
        if let Some(id) = self.pending.take() {
            let _ = timers.clear_timeout(id);
        }
    }
}

impl Default for TransientNotice {
    fn default() -> Self {
        Self::new(NOTICE_HOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::VirtualClock;

    #[test]
    fn hides_after_the_hold() {
        let mut clock = VirtualClock::new();
        let mut notice = TransientNotice::default();
        assert!(notice.show(&mut clock));
        assert!(notice.visible());

        assert!(clock.advance(Duration::from_millis(2999)).is_empty());
        let fired = clock.advance(Duration::from_millis(1));
        assert!(notice.on_timer(fired[0]));
        assert!(!notice.visible());
        assert!(!notice.hide_pending());
    }

    #[test]
    fn showing_again_restarts_the_hold() {
        let mut clock = VirtualClock::new();
        let mut notice = TransientNotice::default();
        let _ = notice.show(&mut clock);
        let _ = clock.advance(Duration::from_millis(2000));
        assert!(!notice.show(&mut clock));
        assert_eq!(clock.pending(), 1);

        assert!(clock.advance(Duration::from_millis(2999)).is_empty());
        let fired = clock.advance(Duration::from_millis(1));
        assert!(notice.on_timer(fired[0]));
    }

    #[test]
    fn teardown_clears_the_hide() {
        let mut clock = VirtualClock::new();
        let mut notice = TransientNotice::new(Duration::from_millis(50));
        let _ = notice.show(&mut clock);
        notice.teardown(&mut clock);
        assert_eq!(clock.pending(), 0);
        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut clock = VirtualClock::new();
        let mut notice = TransientNotice::default();
        let foreign = clock.set_timeout(Duration::from_millis(5));
        let _ = notice.show(&mut clock);
        assert!(!notice.on_timer(foreign));
        assert!(notice.visible());
    }
}
