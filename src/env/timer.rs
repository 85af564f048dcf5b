use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use rustc_hash::FxHashMap;

/// Handle to a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Schedules one-shot timers on a single-threaded event loop.
///
/// A host never invokes callbacks itself; it reports which [`TimerId`]s
/// fired and the owner routes them. Every timer can be cleared before it
/// fires.
pub trait TimerHost {
    /// Time elapsed since the host was created.
    fn now(&self) -> Duration;

    /// Schedule a timer `delay` from now.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// never scheduled.
    fn clear_timeout(&mut self, id: TimerId) -> bool;

    /// Number of timers still waiting to fire.
    fn pending(&self) -> usize;
}

/// Deterministic timer host for tests and headless previews.
///
/// Time only moves when [`advance`](Self::advance),
/// [`pop_due`](Self::pop_due) or [`advance_to_next`](Self::advance_to_next)
/// is called. Timers with equal due times fire in scheduling order.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), ()>,
    due_at: FxHashMap<TimerId, Duration>,
}

impl VirtualClock {
    /// A clock at time zero with no pending timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Fire the earliest timer whose due time is at or before `deadline`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let (due, id) = *self.queue.keys().next()?;
        if due > deadline {
            return None;
        }
        let _ = self.queue.remove(&(due, id));
        let _ = self.due_at.remove(&id);
        self.now = self.now.max(due);
        Some(id)
    }

    /// Jump to the earliest pending timer and fire it.
    pub fn advance_to_next(&mut self) -> Option<TimerId> {
        let due = self.next_due()?;
        self.pop_due(due)
    }

    /// Move the clock forward by `by`, firing every timer that was already
    /// scheduled and falls due inside the window.
    ///
    /// Timers scheduled while handling the returned ids are not included;
    /// loop on [`pop_due`](Self::pop_due) to run follow-up ticks.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.pop_due(deadline) {
            fired.push(id);
        }
        self.now = deadline;
        fired
    }

    /// Move the clock to `deadline` without firing anything due earlier.
    /// Used after a [`pop_due`](Self::pop_due) loop has drained the window.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl TimerHost for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        let _ = self.queue.insert((due, id), ());
        let _ = self.due_at.insert(id, due);
        id
    }

    fn clear_timeout(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_due_order() {
        let mut clock = VirtualClock::new();
        let late = clock.set_timeout(ms(300));
        let early = clock.set_timeout(ms(100));
        let tie = clock.set_timeout(ms(100));

        assert_eq!(clock.advance(ms(500)), vec![early, tie, late]);
        assert_eq!(clock.now(), ms(500));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn advance_leaves_future_timers() {
        let mut clock = VirtualClock::new();
        let id = clock.set_timeout(ms(150));
        assert!(clock.advance(ms(100)).is_empty());
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.advance(ms(50)), vec![id]);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut clock = VirtualClock::new();
        let id = clock.set_timeout(ms(10));
        assert!(clock.clear_timeout(id));
        assert!(!clock.clear_timeout(id));
        assert!(clock.advance(ms(1000)).is_empty());
    }

    #[test]
    fn advance_to_next_moves_time() {
        let mut clock = VirtualClock::new();
        let id = clock.set_timeout(ms(1500));
        assert_eq!(clock.advance_to_next(), Some(id));
        assert_eq!(clock.now(), ms(1500));
        assert_eq!(clock.advance_to_next(), None);
    }
}
