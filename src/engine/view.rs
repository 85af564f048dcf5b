//! Renderable page state folded from engine events.

use rustc_hash::FxHashMap;

use super::command::{SurfaceId, SurfaceKind};
use super::event::PresentationEvent;
use crate::input::SpotlightChange;
use crate::layout::{LayoutChange, OrbitSlot};
use crate::reveal::RevealEvent;
use crate::showcase::SceneDescription;
use crate::tabs::PanelKey;
use crate::tilt::TiltChange;

/// What a UI layer needs to draw one surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceView {
    /// Tilt card; `None` until the pointer first interacts.
    Tilt(Option<TiltChange>),
    /// Visible typewriter text.
    Text(String),
    /// Active panel.
    Panel(PanelKey),
    /// Section reveal state.
    Reveal {
        /// Entrance has played at least once.
        revealed: bool,
        /// Last playback request, if any.
        last: Option<RevealEvent>,
    },
    /// Skill orbit; `None` until the first viewport is known.
    Orbit(Option<(LayoutChange, Vec<OrbitSlot>)>),
    /// Hover item.
    Hover(bool),
    /// 3D showcase scene.
    Showcase(Option<SceneDescription>),
    /// Cursor spotlight; `None` until it first appears.
    Spotlight(Option<SpotlightChange>),
    /// Whether a notice is showing.
    Notice(bool),
}

impl SurfaceView {
    fn initial(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Tilt => Self::Tilt(None),
            SurfaceKind::Typewriter => Self::Text(String::new()),
            SurfaceKind::Tabs => Self::Panel(PanelKey::default()),
            SurfaceKind::Reveal => Self::Reveal {
                revealed: false,
                last: None,
            },
            SurfaceKind::SkillOrbit => Self::Orbit(None),
            SurfaceKind::Hover => Self::Hover(false),
            SurfaceKind::Showcase => Self::Showcase(None),
            SurfaceKind::Spotlight => Self::Spotlight(None),
            SurfaceKind::Notice => Self::Notice(false),
        }
    }
}

/// Per-surface view model.
///
/// ```ignore
/// for event in engine.advance(Duration::from_millis(100)) {
///     view.apply(&event);
/// }
/// assert_eq!(view.text(headline), Some("r"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageView {
    surfaces: FxHashMap<SurfaceId, SurfaceView>,
}

impl PageView {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event. Events for unknown surfaces are ignored.
    pub fn apply(&mut self, event: &PresentationEvent) {
        match event {
            PresentationEvent::Mounted { surface, kind } => {
                let _ = self
                    .surfaces
                    .insert(*surface, SurfaceView::initial(*kind));
                return;
            }
            PresentationEvent::Unmounted { surface } => {
                let _ = self.surfaces.remove(surface);
                return;
            }
            _ => {}
        }

        let Some(view) = self.surfaces.get_mut(&event.surface()) else {
            log::trace!("no view for {}", event.surface());
            return;
        };
        match (view, event) {
            (
                SurfaceView::Tilt(tilt),
                PresentationEvent::TiltChanged { change, .. },
            ) => *tilt = Some(*change),
            (
                SurfaceView::Text(text),
                PresentationEvent::TextChanged { text: next, .. },
            ) => next.clone_into(text),
            (
                SurfaceView::Panel(active),
                PresentationEvent::PanelChanged { swap, .. },
            ) => *active = swap.to,
            (
                SurfaceView::Reveal { revealed, last },
                PresentationEvent::Revealed { event, .. },
            ) => {
                *revealed |= matches!(event, RevealEvent::Play(_));
                *last = Some(*event);
            }
            (
                SurfaceView::Orbit(orbit),
                PresentationEvent::LayoutChanged { change, slots, .. },
            ) => *orbit = Some((*change, slots.clone())),
            (
                SurfaceView::Hover(hovered),
                PresentationEvent::HoverChanged { hovered: next, .. },
            ) => *hovered = *next,
            (
                SurfaceView::Showcase(scene),
                PresentationEvent::ShowcaseChanged { scene: next, .. },
            ) => *scene = Some(next.clone()),
            (
                SurfaceView::Spotlight(spotlight),
                PresentationEvent::SpotlightChanged { change, .. },
            ) => *spotlight = Some(*change),
            (
                SurfaceView::Notice(visible),
                PresentationEvent::NoticeChanged { visible: next, .. },
            ) => *visible = *next,
            (view, event) => {
                log::warn!("event {event:?} does not apply to {view:?}");
            }
        }
    }

    /// View of `surface`.
    #[must_use]
    pub fn get(&self, surface: SurfaceId) -> Option<&SurfaceView> {
        self.surfaces.get(&surface)
    }

    /// Number of mounted surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surface is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Typewriter text.
    #[must_use]
    pub fn text(&self, surface: SurfaceId) -> Option<&str> {
        match self.get(surface)? {
            SurfaceView::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Active panel.
    #[must_use]
    pub fn active_panel(&self, surface: SurfaceId) -> Option<PanelKey> {
        match self.get(surface)? {
            SurfaceView::Panel(key) => Some(*key),
            _ => None,
        }
    }

    /// Whether a reveal section has played its entrance.
    #[must_use]
    pub fn is_revealed(&self, surface: SurfaceId) -> bool {
        matches!(
            self.get(surface),
            Some(SurfaceView::Reveal { revealed: true, .. })
        )
    }

    /// Latest tilt change.
    #[must_use]
    pub fn tilt(&self, surface: SurfaceId) -> Option<&TiltChange> {
        match self.get(surface)? {
            SurfaceView::Tilt(change) => change.as_ref(),
            _ => None,
        }
    }

    /// Current orbit layout and placements.
    #[must_use]
    pub fn orbit(
        &self,
        surface: SurfaceId,
    ) -> Option<&(LayoutChange, Vec<OrbitSlot>)> {
        match self.get(surface)? {
            SurfaceView::Orbit(orbit) => orbit.as_ref(),
            _ => None,
        }
    }

    /// Whether a hover item is revealed.
    #[must_use]
    pub fn is_hovered(&self, surface: SurfaceId) -> bool {
        matches!(self.get(surface), Some(SurfaceView::Hover(true)))
    }

    /// Latest showcase scene.
    #[must_use]
    pub fn scene(&self, surface: SurfaceId) -> Option<&SceneDescription> {
        match self.get(surface)? {
            SurfaceView::Showcase(scene) => scene.as_ref(),
            _ => None,
        }
    }

    /// Spotlight state, if it is showing.
    #[must_use]
    pub fn spotlight(&self, surface: SurfaceId) -> Option<&SpotlightChange> {
        match self.get(surface)? {
            SurfaceView::Spotlight(Some(change)) if change.visible => {
                Some(change)
            }
            _ => None,
        }
    }

    /// Whether a notice is showing.
    #[must_use]
    pub fn is_notice_visible(&self, surface: SurfaceId) -> bool {
        matches!(self.get(surface), Some(SurfaceView::Notice(true)))
    }
}
