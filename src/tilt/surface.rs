use std::time::Duration;

use super::{compute_tilt, SurfaceRect, TiltConfig, TiltState};
use crate::animation::{Transition, Tween};
use crate::input::InteractionEvent;

/// A tilt state change for the host to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltChange {
    /// Target tilt.
    pub state: TiltState,
    /// Whether the pointer is over the surface.
    pub hovered: bool,
    /// Surface scale (hover lift).
    pub scale: f32,
    /// How to animate to `state`.
    pub transition: Transition,
}

/// One tilt card's interaction lifecycle.
///
/// Begin and move track the pointer directly. End settles back to exactly
/// [`TiltState::ZERO`] over the settle transition; sampling with
/// [`current`](Self::current) after it finishes never leaves a residue.
#[derive(Debug, Clone)]
pub struct TiltSurface {
    config: TiltConfig,
    hover_scale: f32,
    settle: Transition,
    hovered: bool,
    target: TiltState,
    settle_from: TiltState,
    settling: Option<Tween>,
}

impl TiltSurface {
    /// A flat, un-hovered surface.
    #[must_use]
    pub fn new(config: TiltConfig, hover_scale: f32, settle: Transition) -> Self {
        Self {
            config,
            hover_scale,
            settle,
            hovered: false,
            target: TiltState::ZERO,
            settle_from: TiltState::ZERO,
            settling: None,
        }
    }

    /// Whether the pointer is over the surface.
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// The state the surface is heading to.
    #[must_use]
    pub fn target(&self) -> TiltState {
        self.target
    }

    /// Apply one interaction event.
    ///
    /// Returns `None` when nothing visible changed.
    pub fn handle(
        &mut self,
        event: InteractionEvent,
        rect: SurfaceRect,
        now: Duration,
    ) -> Option<TiltChange> {
        match event {
            InteractionEvent::Begin { position, .. }
            | InteractionEvent::Move { position } => {
                let next = compute_tilt(position, rect, self.config);
                if !rect.has_area() {
                    log::debug!("tilt surface has no area; staying flat");
                }
                if self.hovered && next == self.target {
                    return None;
                }
                self.hovered = true;
                self.target = next;
                self.settling = None;
                Some(self.change(Transition::instant()))
            }
            InteractionEvent::End { .. } => {
                if !self.hovered {
                    return None;
                }
                self.settle_from = self.current(now);
                self.hovered = false;
                self.target = TiltState::ZERO;
                self.settling = Some(Tween::start(now, self.settle));
                Some(self.change(self.settle))
            }
        }
    }

    /// The rendered tilt at `now`, following the settle curve after the
    /// pointer leaves.
    #[must_use]
    pub fn current(&self, now: Duration) -> TiltState {
        let Some(tween) = self.settling else {
            return self.target;
        };
        if tween.is_done(now) {
            return self.target;
        }
        let from = self.settle_from;
        let to = self.target;
        TiltState {
            rotation_x: tween.lerp(from.rotation_x, to.rotation_x, now),
            rotation_y: tween.lerp(from.rotation_y, to.rotation_y, now),
            offset_x: tween.lerp(from.offset_x, to.offset_x, now),
            offset_y: tween.lerp(from.offset_y, to.offset_y, now),
        }
    }

    fn change(&self, transition: Transition) -> TiltChange {
        TiltChange {
            state: self.target,
            hovered: self.hovered,
            scale: if self.hovered { self.hover_scale } else { 1.0 },
            transition,
        }
    }
}

impl Default for TiltSurface {
    fn default() -> Self {
        Self::new(TiltConfig::default(), 1.05, Transition::settle())
    }
}
