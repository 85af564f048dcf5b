//! Mounted surface state and per-surface timer bookkeeping.

use rustc_hash::FxHashMap;

use super::command::SurfaceId;
use crate::env::{SubscriptionId, TimerHost, TimerId};
use crate::input::{CursorSpotlight, HoverLatch};
use crate::layout::ResponsiveLayout;
use crate::notice::TransientNotice;
use crate::reveal::RevealCoordinator;
use crate::showcase::ShowcaseState;
use crate::tabs::{PanelKey, TabController};
use crate::tilt::TiltSurface;
use crate::typewriter::TypewriterDriver;

/// Engine state of one surface.
#[derive(Debug)]
pub(super) enum Surface {
    Tilt(TiltSurface),
    Typewriter(TypewriterDriver),
    Tabs(TabController<PanelKey>),
    Reveal(RevealCoordinator),
    SkillOrbit {
        layout: ResponsiveLayout,
        items: usize,
    },
    Hover(HoverLatch<()>),
    Showcase(ShowcaseState),
    Spotlight(CursorSpotlight),
    Notice(TransientNotice),
}

/// A surface plus the signal subscriptions the engine made for it.
///
/// Reveal coordinators manage their own intersection subscription, so it is
/// not listed here.
#[derive(Debug)]
pub(super) struct Mounted {
    pub surface: Surface,
    pub subscriptions: Vec<SubscriptionId>,
}

/// Timer host view that records which surface owns each timer, so fired
/// timers can be routed and unmount can clear whatever is left.
pub(super) struct ScopedTimers<'a> {
    host: &'a mut dyn TimerHost,
    owner: SurfaceId,
    owners: &'a mut FxHashMap<TimerId, SurfaceId>,
}

impl<'a> ScopedTimers<'a> {
    pub fn new(
        host: &'a mut dyn TimerHost,
        owner: SurfaceId,
        owners: &'a mut FxHashMap<TimerId, SurfaceId>,
    ) -> Self {
        Self {
            host,
            owner,
            owners,
        }
    }
}

impl TimerHost for ScopedTimers<'_> {
    fn now(&self) -> std::time::Duration {
        self.host.now()
    }

    fn set_timeout(&mut self, delay: std::time::Duration) -> TimerId {
        let id = self.host.set_timeout(delay);
        let _ = self.owners.insert(id, self.owner);
        id
    }

    fn clear_timeout(&mut self, id: TimerId) -> bool {
        let _ = self.owners.remove(&id);
        self.host.clear_timeout(id)
    }

    fn pending(&self) -> usize {
        self.host.pending()
    }
}
