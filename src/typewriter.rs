//! Cycling typewriter text.
//!
//! [`Typewriter`] is the pure state machine: each [`tick`](Typewriter::tick)
//! advances one step and returns how long to wait before the next one.
//! [`TypewriterDriver`] binds it to a [`TimerHost`], keeping exactly one
//! timer pending while running and clearing it on stop.

use std::time::Duration;

use crate::env::{TimerHost, TimerId};
use crate::error::VitrineError;

/// Typewriter phase.
///
/// The pause between phrases has zero length, so it is not a phase of its
/// own: the tick that deletes the last character also moves to the next
/// phrase and back to [`Typing`](Self::Typing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypewriterPhase {
    /// Revealing one more character per tick.
    Typing,
    /// Holding the full phrase before deleting.
    PausedBeforeDelete,
    /// Removing one character per tick.
    Deleting,
}

/// Shortest type or delete interval. A zero-length tick would reschedule
/// itself at the same instant forever.
pub const MIN_TICK: Duration = Duration::from_millis(10);

/// Tick intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Interval between typed characters.
    pub type_interval: Duration,
    /// Interval between deleted characters.
    pub delete_interval: Duration,
    /// How long the full phrase stays up before deleting starts.
    pub dwell: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            dwell: Duration::from_millis(1500),
        }
    }
}

impl TypewriterTiming {
    /// Type and delete intervals raised to at least [`MIN_TICK`]. The dwell
    /// may be zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        if self.type_interval < MIN_TICK || self.delete_interval < MIN_TICK {
            log::warn!(
                "typewriter intervals {:?}/{:?} raised to {MIN_TICK:?}",
                self.type_interval,
                self.delete_interval
            );
        }
        Self {
            type_interval: self.type_interval.max(MIN_TICK),
            delete_interval: self.delete_interval.max(MIN_TICK),
            dwell: self.dwell,
        }
    }
}

/// Types out and deletes each phrase in turn, forever.
///
/// Character counts are in `char`s, so multi-byte phrases never split a
/// code point. The visible text is always a prefix of the active phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    lengths: Vec<usize>,
    timing: TypewriterTiming,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Start typing the first phrase from an empty display. Intervals
    /// shorter than [`MIN_TICK`] are raised to it.
    pub fn new(
        phrases: Vec<String>,
        timing: TypewriterTiming,
    ) -> Result<Self, VitrineError> {
        if phrases.is_empty() {
            return Err(VitrineError::EmptyPhrases);
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lengths,
            timing: timing.clamped(),
            phrase_index: 0,
            visible_chars: 0,
            phase: TypewriterPhase::Typing,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Index of the active phrase.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of visible characters of the active phrase.
    #[must_use]
    pub fn visible_chars(&self) -> usize {
        self.visible_chars
    }

    /// The phrases being cycled.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Visible prefix of the active phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        let end = phrase
            .char_indices()
            .nth(self.visible_chars)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Delay before the next tick, given the current phase.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => self.timing.type_interval,
            TypewriterPhase::PausedBeforeDelete => self.timing.dwell,
            TypewriterPhase::Deleting => self.timing.delete_interval,
        }
    }

    /// Advance one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        let len = self.lengths[self.phrase_index];
        match self.phase {
            TypewriterPhase::Typing => {
                if self.visible_chars < len {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= len {
                    self.phase = TypewriterPhase::PausedBeforeDelete;
                }
            }
            TypewriterPhase::PausedBeforeDelete => {
                self.phase = TypewriterPhase::Deleting;
                // An empty phrase has nothing to delete.
                if self.visible_chars == 0 {
                    self.advance_phrase();
                }
            }
            TypewriterPhase::Deleting => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.advance_phrase();
                }
            }
        }
        self.next_delay()
    }

    fn advance_phrase(&mut self) {
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        self.visible_chars = 0;
        self.phase = TypewriterPhase::Typing;
    }
}

/// Runs a [`Typewriter`] on a [`TimerHost`].
///
/// While running there is exactly one pending timer. [`stop`](Self::stop)
/// clears it, and a timer that fires anyway (a host that raced the
/// cancellation) is ignored, so a stopped driver never mutates.
#[derive(Debug)]
pub struct TypewriterDriver {
    typewriter: Typewriter,
    pending: Option<TimerId>,
}

impl TypewriterDriver {
    /// Wrap a typewriter. Nothing is scheduled until [`start`](Self::start).
    #[must_use]
    pub fn new(typewriter: Typewriter) -> Self {
        Self {
            typewriter,
            pending: None,
        }
    }

    /// The wrapped state machine.
    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule the first tick. No-op when already running.
    pub fn start(&mut self, timers: &mut dyn TimerHost) {
        if self.pending.is_none() {
            let delay = self.typewriter.next_delay();
            self.pending = Some(timers.set_timeout(delay));
        }
    }

    /// Handle a fired timer. Returns the new visible text when it changed.
    pub fn on_timer(
        &mut self,
        id: TimerId,
        timers: &mut dyn TimerHost,
    ) -> Option<String> {
        if self.pending != Some(id) {
            return None;
        }
        let before = self.typewriter.visible_chars();
        let before_index = self.typewriter.phrase_index();
        let delay = self.typewriter.tick();
        self.pending = Some(timers.set_timeout(delay));

        let changed = self.typewriter.visible_chars() != before
            || self.typewriter.phrase_index() != before_index;
        changed.then(|| self.typewriter.text().to_owned())
    }

    /// Clear the pending tick.
    pub fn stop(&mut self, timers: &mut dyn TimerHost) {
        if let Some(id) = self.pending.take() {
            let _ = timers.clear_timeout(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::VirtualClock;

    fn writer(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|p| (*p).to_owned()).collect(),
            TypewriterTiming::default(),
        )
        .unwrap()
    }

    #[test]
    fn zero_intervals_are_raised_to_min_tick() {
        let zero = TypewriterTiming {
            type_interval: Duration::ZERO,
            delete_interval: Duration::ZERO,
            dwell: Duration::ZERO,
        };
        let mut tw = Typewriter::new(vec!["ab".to_owned()], zero).unwrap();
        assert_eq!(tw.next_delay(), MIN_TICK);
        let _ = tw.tick();
        let _ = tw.tick();
        // Dwell keeps its zero length.
        assert_eq!(tw.next_delay(), Duration::ZERO);
        assert_eq!(tw.tick(), MIN_TICK);
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let err = Typewriter::new(Vec::new(), TypewriterTiming::default());
        assert!(matches!(err, Err(VitrineError::EmptyPhrases)));
    }

    #[test]
    fn n_type_ticks_reach_pause() {
        let mut tw = writer(&["creative problem solver"]);
        let n = tw.phrases()[0].chars().count();
        for i in 1..=n {
            assert_eq!(tw.phase(), TypewriterPhase::Typing);
            let _ = tw.tick();
            assert_eq!(tw.visible_chars(), i);
        }
        assert_eq!(tw.phase(), TypewriterPhase::PausedBeforeDelete);
        assert_eq!(tw.next_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn dwell_then_n_delete_ticks_advance_phrase() {
        let mut tw = writer(&["abc", "de"]);
        for _ in 0..3 {
            let _ = tw.tick();
        }
        // Dwell tick.
        assert_eq!(tw.tick(), Duration::from_millis(50));
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        assert_eq!(tw.visible_chars(), 3);
        for _ in 0..3 {
            let _ = tw.tick();
        }
        assert_eq!(tw.visible_chars(), 0);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn concrete_two_phrase_sequence() {
        let mut tw = writer(&["ab", "c"]);
        let mut seen = Vec::new();
        for _ in 0..9 {
            let _ = tw.tick();
            seen.push((tw.text().to_owned(), tw.phase()));
        }
        use TypewriterPhase::{Deleting, PausedBeforeDelete, Typing};
        let expected = [
            ("a", Typing),
            ("ab", PausedBeforeDelete),
            ("ab", Deleting),
            ("a", Deleting),
            ("", Typing),
            ("c", PausedBeforeDelete),
            ("c", Deleting),
            ("", Typing),
            ("a", Typing),
        ];
        for ((text, phase), (want_text, want_phase)) in seen.iter().zip(expected) {
            assert_eq!(text, want_text);
            assert_eq!(*phase, want_phase);
        }
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn full_cycle_returns_to_initial_state() {
        let initial = writer(&["responsive web apps", "interactive UIs", "x"]);
        let mut tw = initial.clone();
        let ticks: usize =
            tw.phrases().iter().map(|p| 2 * p.chars().count() + 1).sum();
        for _ in 0..ticks {
            let _ = tw.tick();
        }
        assert_eq!(tw, initial);
        for _ in 0..ticks {
            let _ = tw.tick();
        }
        assert_eq!(tw, initial);
    }

    #[test]
    fn visible_text_is_always_a_prefix() {
        let mut tw = writer(&["héllo wörld", "✓"]);
        for _ in 0..200 {
            let _ = tw.tick();
            let phrase = &tw.phrases()[tw.phrase_index()];
            assert!(phrase.starts_with(tw.text()));
            assert!(tw.visible_chars() <= phrase.chars().count());
        }
    }

    #[test]
    fn last_delete_tick_lands_on_next_phrase() {
        let mut tw = writer(&["a", "b"]);
        let _ = tw.tick();
        let _ = tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        let delay = tw.tick();
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.text(), "");
        assert_eq!(delay, Duration::from_millis(100));
    }

    #[test]
    fn empty_phrase_is_skipped_without_stalling() {
        let mut tw = writer(&["", "a"]);
        let _ = tw.tick();
        assert_eq!(tw.phase(), TypewriterPhase::PausedBeforeDelete);
        let _ = tw.tick();
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn driver_follows_virtual_time() {
        let mut clock = VirtualClock::new();
        let mut driver = TypewriterDriver::new(writer(&["ab", "c"]));
        driver.start(&mut clock);

        let mut texts = Vec::new();
        let deadline = Duration::from_millis(100 + 100 + 1500 + 50 + 50);
        while let Some(id) = clock.pop_due(deadline) {
            if let Some(text) = driver.on_timer(id, &mut clock) {
                texts.push(text);
            }
        }
        assert_eq!(texts, vec!["a", "ab", "a", ""]);
        assert_eq!(driver.typewriter().phrase_index(), 1);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn stopped_driver_never_mutates() {
        let mut clock = VirtualClock::new();
        let mut driver = TypewriterDriver::new(writer(&["abc"]));
        driver.start(&mut clock);
        let first = clock.advance_to_next().unwrap();
        let _ = driver.on_timer(first, &mut clock);
        let snapshot = driver.typewriter().clone();

        driver.stop(&mut clock);
        assert_eq!(clock.pending(), 0);
        assert!(clock.advance(Duration::from_secs(10)).is_empty());

        // A late fire of the old handle is ignored as well.
        assert!(driver.on_timer(first, &mut clock).is_none());
        assert_eq!(driver.typewriter(), &snapshot);
        assert!(!driver.is_running());
    }
}
