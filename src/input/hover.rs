use std::time::Duration;

use super::event::PointerKind;
use crate::env::{TimerHost, TimerId};

/// How long a touch reveal stays up after the finger lifts.
pub const TOUCH_HOLD: Duration = Duration::from_millis(1500);

/// Hovered key before and after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange<K> {
    /// Key hovered before the change.
    pub previous: Option<K>,
    /// Key hovered after the change.
    pub current: Option<K>,
}

/// Tracks which item of a group is revealed by hover.
///
/// Mouse hover clears as soon as the pointer leaves. Touch has no hover,
/// so a touch reveal is held for [`TOUCH_HOLD`] after the finger lifts;
/// starting another interaction cancels the pending release.
#[derive(Debug)]
pub struct HoverLatch<K> {
    hovered: Option<K>,
    pending_release: Option<TimerId>,
    touch_hold: Duration,
}

impl<K: Copy + Eq> HoverLatch<K> {
    /// A latch with the default touch hold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_touch_hold(TOUCH_HOLD)
    }

    /// A latch holding touch reveals for `touch_hold`.
    #[must_use]
    pub fn with_touch_hold(touch_hold: Duration) -> Self {
        Self {
            hovered: None,
            pending_release: None,
            touch_hold,
        }
    }

    /// Currently revealed key.
    #[must_use]
    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// Whether a delayed touch release is scheduled.
    #[must_use]
    pub fn release_pending(&self) -> bool {
        self.pending_release.is_some()
    }

    /// Pointer entered or touch started on `key`.
    pub fn begin(
        &mut self,
        key: K,
        timers: &mut dyn TimerHost,
    ) -> Option<HoverChange<K>> {
        self.cancel_release(timers);
        self.set(Some(key))
    }

    /// Pointer left or touch ended on `key`.
    pub fn end(
        &mut self,
        key: K,
        kind: PointerKind,
        timers: &mut dyn TimerHost,
    ) -> Option<HoverChange<K>> {
        if self.hovered != Some(key) {
            return None;
        }
        match kind {
            PointerKind::Mouse => {
                self.cancel_release(timers);
                self.set(None)
            }
            PointerKind::Touch => {
                self.cancel_release(timers);
                self.pending_release = Some(timers.set_timeout(self.touch_hold));
                None
            }
        }
    }

    /// A timer fired. Only the latch's own release timer has an effect.
    pub fn on_timer(&mut self, id: TimerId) -> Option<HoverChange<K>> {
        if self.pending_release != Some(id) {
            return None;
        }
        self.pending_release = None;
        self.set(None)
    }

    /// Release the pending timer, if any. The latch keeps its key so a
    /// remount shows the same state.
    pub fn teardown(&mut self, timers: &mut dyn TimerHost) {
        self.cancel_release(timers);
    }

    fn cancel_release(&mut self, timers: &mut dyn TimerHost) {
        if let Some(id) = self.pending_release.take() {
            let _ = timers.clear_timeout(id);
        }
    }

    fn set(&mut self, next: Option<K>) -> Option<HoverChange<K>> {
        if self.hovered == next {
            return None;
        }
        let previous = std::mem::replace(&mut self.hovered, next);
        Some(HoverChange {
            previous,
            current: next,
        })
    }
}

impl<K: Copy + Eq> Default for HoverLatch<K> {
    fn default() -> Self {
        Self::new()
    }
}
