//! Events the engine emits for the host to render.

use super::command::{SurfaceId, SurfaceKind};
use crate::input::SpotlightChange;
use crate::layout::{LayoutChange, OrbitSlot};
use crate::reveal::RevealEvent;
use crate::showcase::SceneDescription;
use crate::tabs::{PanelKey, PanelSwap};
use crate::tilt::TiltChange;

/// A visible change on one surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationEvent {
    /// A surface was mounted and shows its initial state.
    Mounted {
        /// New surface.
        surface: SurfaceId,
        /// Its kind.
        kind: SurfaceKind,
    },
    /// A surface was torn down.
    Unmounted {
        /// Removed surface.
        surface: SurfaceId,
    },
    /// Tilt target changed.
    TiltChanged {
        /// Tilt card.
        surface: SurfaceId,
        /// New target and transition.
        change: TiltChange,
    },
    /// Typewriter text changed.
    TextChanged {
        /// Typewriter surface.
        surface: SurfaceId,
        /// Visible prefix.
        text: String,
    },
    /// Active panel changed.
    PanelChanged {
        /// Tabs surface.
        surface: SurfaceId,
        /// The swap to animate.
        swap: PanelSwap<PanelKey>,
    },
    /// Responsive layout changed.
    LayoutChanged {
        /// Skill orbit surface.
        surface: SurfaceId,
        /// Resolved bin and parameters.
        change: LayoutChange,
        /// Bubble placements for the new parameters.
        slots: Vec<OrbitSlot>,
    },
    /// A section entrance should play or reverse.
    Revealed {
        /// Reveal surface.
        surface: SurfaceId,
        /// Playback request.
        event: RevealEvent,
    },
    /// Hover state of a hover item changed.
    HoverChanged {
        /// Hover surface.
        surface: SurfaceId,
        /// Whether the item is revealed.
        hovered: bool,
    },
    /// The 3D showcase needs a new frame.
    ShowcaseChanged {
        /// Showcase surface.
        surface: SurfaceId,
        /// Scene to draw.
        scene: SceneDescription,
    },
    /// The cursor spotlight moved, appeared or hid.
    SpotlightChanged {
        /// Spotlight surface.
        surface: SurfaceId,
        /// Visibility and position.
        change: SpotlightChange,
    },
    /// A notice was shown or hid itself.
    NoticeChanged {
        /// Notice surface.
        surface: SurfaceId,
        /// Whether the notice is showing.
        visible: bool,
    },
}

impl PresentationEvent {
    /// Surface the event belongs to.
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        match self {
            Self::Mounted { surface, .. }
            | Self::Unmounted { surface }
            | Self::TiltChanged { surface, .. }
            | Self::TextChanged { surface, .. }
            | Self::PanelChanged { surface, .. }
            | Self::LayoutChanged { surface, .. }
            | Self::Revealed { surface, .. }
            | Self::HoverChanged { surface, .. }
            | Self::ShowcaseChanged { surface, .. }
            | Self::SpotlightChanged { surface, .. }
            | Self::NoticeChanged { surface, .. } => *surface,
        }
    }
}
