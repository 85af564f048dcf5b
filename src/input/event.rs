use glam::Vec2;

/// Unified interaction events.
///
/// Desktop hover and mobile touch both reduce to begin/move/end so the tilt
/// engine and hover reveal never branch on device type.
///
/// # Example
///
/// ```ignore
/// let change = tilt.handle(
///     InteractionEvent::Move { position: Vec2::new(120.0, 80.0) },
///     rect,
///     timers.now(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    /// Pointer entered the surface or a touch started on it.
    Begin {
        /// Position in client (viewport) pixels.
        position: Vec2,
        /// Which kind of pointer started the interaction.
        kind: PointerKind,
    },
    /// Pointer or touch moved while over the surface.
    Move {
        /// Position in client (viewport) pixels.
        position: Vec2,
    },
    /// Pointer left the surface or the touch ended.
    End {
        /// Which kind of pointer ended the interaction.
        kind: PointerKind,
    },
}

impl InteractionEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::Begin { position, .. } | Self::Move { position } => {
                Some(*position)
            }
            Self::End { .. } => None,
        }
    }
}

/// Platform-agnostic pointer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    /// Mouse or pen hover.
    #[default]
    Mouse,
    /// Finger on a touch screen.
    Touch,
}

#[cfg(feature = "web")]
impl InteractionEvent {
    /// Convert a DOM mouse event (`mouseenter`, `mousemove`, `mouseleave`).
    #[must_use]
    pub fn from_mouse(event: &web_sys::MouseEvent) -> Self {
        let position =
            Vec2::new(event.client_x() as f32, event.client_y() as f32);
        match event.type_().as_str() {
            "mouseenter" | "mouseover" | "pointerenter" => Self::Begin {
                position,
                kind: PointerKind::Mouse,
            },
            "mouseleave" | "mouseout" | "pointerleave" => Self::End {
                kind: PointerKind::Mouse,
            },
            _ => Self::Move { position },
        }
    }

    /// Convert a DOM touch event (`touchstart`, `touchmove`, `touchend`).
    ///
    /// Uses the first changed touch point.
    #[must_use]
    pub fn from_touch(event: &web_sys::TouchEvent) -> Self {
        let position = event
            .changed_touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
            .unwrap_or(Vec2::ZERO);
        match event.type_().as_str() {
            "touchstart" => Self::Begin {
                position,
                kind: PointerKind::Touch,
            },
            "touchend" | "touchcancel" => Self::End {
                kind: PointerKind::Touch,
            },
            _ => Self::Move { position },
        }
    }
}
