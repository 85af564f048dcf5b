//! Inline CSS for engine state.

use vitrine::animation::{EasingFunction, Transition};
use vitrine::input::SpotlightChange;
use vitrine::layout::OrbitSlot;
use vitrine::scenery::Star;
use vitrine::tilt::TiltChange;

/// CSS timing function for `easing`.
pub fn timing_function(easing: EasingFunction) -> String {
    match easing {
        EasingFunction::Linear => "linear".to_owned(),
        EasingFunction::QuadraticIn => "cubic-bezier(0.55, 0.085, 0.68, 0.53)".to_owned(),
        EasingFunction::QuadraticOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_owned(),
        EasingFunction::CubicBezier { x1, y1, x2, y2 } => {
            format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
        }
    }
}

/// `transition` declaration animating `property` with `transition`.
pub fn transition(property: &str, transition: &Transition) -> String {
    format!(
        "transition: {property} {}ms {} {}ms;",
        transition.duration.as_millis(),
        timing_function(transition.easing),
        transition.delay.as_millis(),
    )
}

/// Card transform for a tilt change.
pub fn tilt(change: Option<&TiltChange>, perspective: f32) -> String {
    let Some(change) = change else {
        return format!("transform: perspective({perspective}px);");
    };
    let state = change.state;
    format!(
        "transform: perspective({perspective}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3}); {}",
        state.rotation_x,
        state.rotation_y,
        change.scale,
        transition("transform", &change.transition),
    )
}

/// Absolute placement of one orbit bubble around the ring center.
pub fn orbit_bubble(slot: &OrbitSlot) -> String {
    let half = slot.size / 2.0;
    format!(
        "position: absolute; left: calc(50% + {:.1}px); top: calc(50% + {:.1}px); \
         width: {:.0}px; height: {:.0}px; animation-delay: {}ms;",
        slot.position.x - half,
        slot.position.y - half,
        slot.size,
        slot.size,
        slot.entrance_delay.as_millis(),
    )
}

/// Background star with its twinkle animation timing.
pub fn star(star: &Star) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; \
         animation-duration: {}ms; animation-delay: {}ms;",
        star.position.x * 100.0,
        star.position.y * 100.0,
        star.size,
        star.size,
        star.opacity,
        star.twinkle.as_millis(),
        star.delay.as_millis(),
    )
}

/// Fixed radial light centred on the pointer.
pub fn spotlight(change: &SpotlightChange) -> String {
    format!(
        "position: fixed; inset: 0; pointer-events: none; \
         background: radial-gradient(600px at {:.0}px {:.0}px, rgba(29, 78, 216, 0.15), transparent 80%);",
        change.position.x, change.position.y,
    )
}
