use std::time::Duration;

use super::transition::Transition;

/// A transition started at a known time.
///
/// Times are offsets from the host clock's origin (see
/// [`TimerHost::now`](crate::env::TimerHost::now)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// When the transition was triggered.
    pub started: Duration,
    /// Curve, length and delay.
    pub transition: Transition,
}

impl Tween {
    /// Start `transition` at `now`.
    #[must_use]
    pub fn start(now: Duration, transition: Transition) -> Self {
        Self {
            started: now,
            transition,
        }
    }

    /// Raw progress in `[0, 1]`. Zero during the delay.
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let begin = self.started + self.transition.delay;
        let elapsed = now.saturating_sub(begin);
        if self.transition.duration.is_zero() {
            return if now >= begin { 1.0 } else { 0.0 };
        }
        (elapsed.as_secs_f32() / self.transition.duration.as_secs_f32())
            .min(1.0)
    }

    /// Progress shaped by the transition's easing curve.
    #[inline]
    #[must_use]
    pub fn eased_progress(&self, now: Duration) -> f32 {
        self.transition.easing.evaluate(self.progress(now))
    }

    /// Whether the transition has finished at `now`.
    #[must_use]
    pub fn is_done(&self, now: Duration) -> bool {
        now >= self.started + self.transition.total()
    }

    /// Interpolate between `from` and `to`. Returns `to` exactly once done.
    #[must_use]
    pub fn lerp(&self, from: f32, to: f32, now: Duration) -> f32 {
        if self.is_done(now) {
            return to;
        }
        from + (to - from) * self.eased_progress(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn progress_respects_delay() {
        let tween = Tween::start(
            ms(100),
            Transition::new(ms(200), EasingFunction::Linear).delayed(ms(50)),
        );
        assert_eq!(tween.progress(ms(120)), 0.0);
        assert!((tween.progress(ms(250)) - 0.5).abs() < 1e-6);
        assert_eq!(tween.progress(ms(400)), 1.0);
    }

    #[test]
    fn lerp_lands_exactly_on_target() {
        let tween = Tween::start(ms(0), Transition::settle());
        assert_eq!(tween.lerp(12.0, 0.0, ms(600)), 0.0);
        assert_eq!(tween.lerp(-7.5, 0.0, ms(10_000)), 0.0);
        let mid = tween.lerp(12.0, 0.0, ms(100));
        assert!(mid < 12.0 && mid > 0.0);
    }

    #[test]
    fn instant_tween_is_done_immediately() {
        let tween = Tween::start(ms(40), Transition::instant());
        assert!(tween.is_done(ms(40)));
        assert_eq!(tween.lerp(1.0, 3.0, ms(40)), 3.0);
    }
}
