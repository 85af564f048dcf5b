//! Presentation engine: mounts surfaces and routes timers and signals.
//!
//! The engine owns every surface on the page together with the injected
//! [`TimerHost`] and [`SignalSource`]. Hosts feed it three kinds of input:
//!
//! - [`PageCommand`]s via [`execute`](PresentationEngine::execute)
//! - environment [`Signal`]s via
//!   [`handle_signal`](PresentationEngine::handle_signal)
//! - fired timers via [`handle_timer`](PresentationEngine::handle_timer)
//!
//! Each call returns the [`PresentationEvent`]s to render, in order.
//! Unmounting a surface clears every timer it scheduled and drops every
//! subscription made for it; a timer that fires after that is ignored.

mod command;
mod event;
mod surface;
mod view;

use std::time::Duration;

pub use command::{PageCommand, SurfaceId, SurfaceKind, SurfaceSpec};
pub use event::PresentationEvent;
use rustc_hash::FxHashMap;
pub use view::{PageView, SurfaceView};

use self::surface::{Mounted, ScopedTimers, Surface};
use crate::env::{
    Signal, SignalSource, SubscriptionId, TimerHost, TimerId, Topic,
    ViewportMetrics, VirtualClock,
};
use crate::error::VitrineError;
use crate::input::{CursorSpotlight, HoverLatch, InteractionEvent};
use crate::layout::{orbit_ring, DeviceClass};
use crate::notice::TransientNotice;
use crate::options::Options;
use crate::reveal::RevealCoordinator;
use crate::showcase::ShowcaseState;
use crate::tabs::TabController;
use crate::tilt::SurfaceRect;
use crate::typewriter::{Typewriter, TypewriterDriver};

/// Drives every interactive surface on a page.
pub struct PresentationEngine<T: TimerHost, S: SignalSource> {
    timers: T,
    signals: S,
    options: Options,
    surfaces: FxHashMap<SurfaceId, Mounted>,
    timer_owners: FxHashMap<TimerId, SurfaceId>,
    viewport: Option<ViewportMetrics>,
}

impl<T: TimerHost, S: SignalSource> PresentationEngine<T, S> {
    /// An empty page.
    pub fn new(timers: T, signals: S, options: Options) -> Self {
        Self {
            timers,
            signals,
            options,
            surfaces: FxHashMap::default(),
            timer_owners: FxHashMap::default(),
            viewport: None,
        }
    }

    // ── Accessors ──

    /// Timer host.
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Timer host, mutably (hosts drain fired timers through it).
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Signal source.
    pub fn signals(&self) -> &S {
        &self.signals
    }

    /// Signal source, mutably (browser hosts bind elements through it).
    pub fn signals_mut(&mut self) -> &mut S {
        &mut self.signals
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Latest viewport seen.
    pub fn viewport(&self) -> Option<ViewportMetrics> {
        self.viewport
    }

    /// Mounted surface ids, ascending.
    pub fn mounted(&self) -> Vec<SurfaceId> {
        let mut ids: Vec<SurfaceId> = self.surfaces.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether `surface` is mounted.
    pub fn is_mounted(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains_key(&surface)
    }

    /// Number of timers currently owned by `surface`.
    pub fn timers_owned_by(&self, surface: SurfaceId) -> usize {
        self.timer_owners.values().filter(|o| **o == surface).count()
    }

    // ── Commands ──

    /// Run one page command.
    pub fn execute(
        &mut self,
        command: PageCommand,
    ) -> Result<Vec<PresentationEvent>, VitrineError> {
        match command {
            PageCommand::Mount { surface, spec } => self.mount(surface, spec),
            PageCommand::Unmount { surface } => self.unmount(surface),
            PageCommand::Select { surface, key } => self.select(surface, &key),
            PageCommand::Notify { surface } => self.notify(surface),
        }
    }

    fn mount(
        &mut self,
        id: SurfaceId,
        spec: SurfaceSpec,
    ) -> Result<Vec<PresentationEvent>, VitrineError> {
        let kind = spec.kind();
        // A rejected spec leaves any surface already mounted as `id` alone.
        let mut surface = self.build(id, spec)?;

        let mut events = Vec::new();
        if self.surfaces.contains_key(&id) {
            log::warn!("{id} mounted twice; tearing down the old surface");
            events.extend(self.unmount(id)?);
        }

        let (subscriptions, initial) = self.activate(id, &mut surface);
        log::debug!("mounted {id} ({kind:?})");
        let _ = self.surfaces.insert(
            id,
            Mounted {
                surface,
                subscriptions,
            },
        );
        events.push(PresentationEvent::Mounted { surface: id, kind });
        events.extend(initial);
        Ok(events)
    }

    /// Construct the surface for `spec` without touching timers or signals.
    fn build(
        &self,
        id: SurfaceId,
        spec: SurfaceSpec,
    ) -> Result<Surface, VitrineError> {
        let interaction = &self.options.interaction;
        Ok(match spec {
            SurfaceSpec::Tilt => Surface::Tilt(self.options.tilt.surface()),
            SurfaceSpec::Typewriter { phrases } => {
                Surface::Typewriter(TypewriterDriver::new(Typewriter::new(
                    phrases,
                    self.options.typewriter.timing(),
                )?))
            }
            SurfaceSpec::Tabs => {
                Surface::Tabs(TabController::new(interaction.panel_fade()))
            }
            SurfaceSpec::Reveal { items, policy } => {
                let mut config = self.options.reveal.config(items);
                if let Some(policy) = policy {
                    config.policy = policy;
                }
                Surface::Reveal(RevealCoordinator::new(id, config))
            }
            SurfaceSpec::SkillOrbit { items } => Surface::SkillOrbit {
                layout: self.options.layout.resolver(),
                items,
            },
            SurfaceSpec::Hover => Surface::Hover(HoverLatch::with_touch_hold(
                interaction.touch_hold(),
            )),
            SurfaceSpec::Showcase { asset } => Surface::Showcase(
                ShowcaseState::new(asset, self.options.showcase.presets()),
            ),
            SurfaceSpec::Spotlight => Surface::Spotlight(CursorSpotlight::new(
                interaction.spotlight_delay(),
            )),
            SurfaceSpec::Notice => {
                Surface::Notice(TransientNotice::new(interaction.notice_hold()))
            }
        })
    }

    /// Start timers, subscribe to signals and compute the initial events
    /// for a freshly built surface.
    fn activate(
        &mut self,
        id: SurfaceId,
        surface: &mut Surface,
    ) -> (Vec<SubscriptionId>, Vec<PresentationEvent>) {
        let mut subscriptions = Vec::new();
        let mut initial = Vec::new();
        let device = self.viewport.map(|metrics| self.device(metrics));
        let mut timers =
            ScopedTimers::new(&mut self.timers, id, &mut self.timer_owners);
        match surface {
            Surface::Tilt(_) | Surface::Hover(_) => {
                subscriptions.push(self.signals.subscribe(Topic::Interaction(id)));
            }
            Surface::Typewriter(driver) => driver.start(&mut timers),
            Surface::Tabs(_) | Surface::Notice(_) => {}
            Surface::Reveal(coordinator) => coordinator.observe(&mut self.signals),
            Surface::SkillOrbit { layout, items } => {
                subscriptions.push(self.signals.subscribe(Topic::Resize));
                if let Some(change) =
                    self.viewport.and_then(|m| layout.on_resize(m))
                {
                    initial.push(PresentationEvent::LayoutChanged {
                        surface: id,
                        change,
                        slots: orbit_ring(*items, change.params),
                    });
                }
            }
            Surface::Showcase(state) => {
                subscriptions.push(self.signals.subscribe(Topic::Resize));
                subscriptions.push(self.signals.subscribe(Topic::Interaction(id)));
                if let Some(device) = device {
                    let _ = state.set_compact(device.is_compact);
                }
                initial.push(PresentationEvent::ShowcaseChanged {
                    surface: id,
                    scene: state.describe(),
                });
            }
            Surface::Spotlight(spotlight) => {
                subscriptions.push(self.signals.subscribe(Topic::Resize));
                subscriptions.push(self.signals.subscribe(Topic::Interaction(id)));
                if let Some(device) = device {
                    let _ = spotlight.set_suppressed(device.is_mobile);
                }
                spotlight.start(&mut timers);
            }
        }
        (subscriptions, initial)
    }

    fn unmount(
        &mut self,
        id: SurfaceId,
    ) -> Result<Vec<PresentationEvent>, VitrineError> {
        let Some(mut mounted) = self.surfaces.remove(&id) else {
            return Err(VitrineError::UnknownSurface(id));
        };

        let mut timers =
            ScopedTimers::new(&mut self.timers, id, &mut self.timer_owners);
        match &mut mounted.surface {
            Surface::Typewriter(driver) => driver.stop(&mut timers),
            Surface::Hover(latch) => latch.teardown(&mut timers),
            Surface::Spotlight(spotlight) => spotlight.teardown(&mut timers),
            Surface::Notice(notice) => notice.teardown(&mut timers),
            Surface::Reveal(coordinator) => {
                coordinator.teardown(&mut self.signals);
            }
            Surface::Tilt(_)
            | Surface::Tabs(_)
            | Surface::SkillOrbit { .. }
            | Surface::Showcase(_) => {}
        }
        for subscription in mounted.subscriptions {
            let _ = self.signals.unsubscribe(subscription);
        }

        let leftover: Vec<TimerId> = self
            .timer_owners
            .iter()
            .filter(|(_, owner)| **owner == id)
            .map(|(timer, _)| *timer)
            .collect();
        for timer in leftover {
            log::warn!("{id} left {timer} pending; clearing");
            let _ = self.timer_owners.remove(&timer);
            let _ = self.timers.clear_timeout(timer);
        }

        log::debug!("unmounted {id}");
        Ok(vec![PresentationEvent::Unmounted { surface: id }])
    }

    fn select(
        &mut self,
        id: SurfaceId,
        key: &str,
    ) -> Result<Vec<PresentationEvent>, VitrineError> {
        let Some(Mounted {
            surface: Surface::Tabs(tabs),
            ..
        }) = self.surfaces.get_mut(&id)
        else {
            return Err(VitrineError::UnknownSurface(id));
        };
        let swap = tabs.select_str(key)?;
        Ok(swap
            .map(|swap| PresentationEvent::PanelChanged { surface: id, swap })
            .into_iter()
            .collect())
    }

    fn notify(
        &mut self,
        id: SurfaceId,
    ) -> Result<Vec<PresentationEvent>, VitrineError> {
        let Some(Mounted {
            surface: Surface::Notice(notice),
            ..
        }) = self.surfaces.get_mut(&id)
        else {
            return Err(VitrineError::UnknownSurface(id));
        };
        let mut timers =
            ScopedTimers::new(&mut self.timers, id, &mut self.timer_owners);
        Ok(notice
            .show(&mut timers)
            .then_some(PresentationEvent::NoticeChanged {
                surface: id,
                visible: true,
            })
            .into_iter()
            .collect())
    }

    // ── Signals ──

    /// Apply an environment signal.
    pub fn handle_signal(&mut self, signal: &Signal) -> Vec<PresentationEvent> {
        match signal {
            Signal::Resize(metrics) => self.resize(*metrics),
            Signal::Intersection(entry) => {
                self.intersect(entry.surface, entry.ratio)
            }
            Signal::Interaction {
                surface,
                event,
                rect,
            } => self.interact(*surface, *event, *rect),
        }
    }

    fn device(&self, metrics: ViewportMetrics) -> DeviceClass {
        DeviceClass::classify(
            metrics.width,
            self.options.layout.mobile_below,
            self.options.layout.compact_max,
        )
    }

    fn resize(&mut self, metrics: ViewportMetrics) -> Vec<PresentationEvent> {
        self.viewport = Some(metrics);
        let device = self.device(metrics);
        let mut events = Vec::new();
        for id in self.mounted() {
            let Some(mounted) = self.surfaces.get_mut(&id) else {
                continue;
            };
            match &mut mounted.surface {
                Surface::SkillOrbit { layout, items } => {
                    if let Some(change) = layout.on_resize(metrics) {
                        events.push(PresentationEvent::LayoutChanged {
                            surface: id,
                            change,
                            slots: orbit_ring(*items, change.params),
                        });
                    }
                }
                Surface::Showcase(state) => {
                    if state.set_compact(device.is_compact) {
                        events.push(PresentationEvent::ShowcaseChanged {
                            surface: id,
                            scene: state.describe(),
                        });
                    }
                }
                Surface::Spotlight(spotlight) => {
                    if let Some(change) = spotlight.set_suppressed(device.is_mobile)
                    {
                        events.push(PresentationEvent::SpotlightChanged {
                            surface: id,
                            change,
                        });
                    }
                }
                _ => {}
            }
        }
        events
    }

    fn intersect(
        &mut self,
        id: SurfaceId,
        ratio: f32,
    ) -> Vec<PresentationEvent> {
        let Some(Mounted {
            surface: Surface::Reveal(coordinator),
            ..
        }) = self.surfaces.get_mut(&id)
        else {
            return Vec::new();
        };
        let event = coordinator.on_intersection(ratio);
        if coordinator.is_settled() && coordinator.is_observing() {
            coordinator.release(&mut self.signals);
        }
        event
            .map(|event| PresentationEvent::Revealed { surface: id, event })
            .into_iter()
            .collect()
    }

    fn interact(
        &mut self,
        id: SurfaceId,
        event: InteractionEvent,
        rect: SurfaceRect,
    ) -> Vec<PresentationEvent> {
        let now = self.timers.now();
        let Some(mounted) = self.surfaces.get_mut(&id) else {
            return Vec::new();
        };
        let emitted = match &mut mounted.surface {
            Surface::Tilt(tilt) => tilt
                .handle(event, rect, now)
                .map(|change| PresentationEvent::TiltChanged { surface: id, change }),
            Surface::Hover(latch) => {
                let mut timers = ScopedTimers::new(
                    &mut self.timers,
                    id,
                    &mut self.timer_owners,
                );
                let change = match event {
                    InteractionEvent::Begin { .. } => latch.begin((), &mut timers),
                    InteractionEvent::Move { .. } => None,
                    InteractionEvent::End { kind } => {
                        latch.end((), kind, &mut timers)
                    }
                };
                change.map(|change| PresentationEvent::HoverChanged {
                    surface: id,
                    hovered: change.current.is_some(),
                })
            }
            Surface::Spotlight(spotlight) => event
                .position()
                .and_then(|position| spotlight.track(position))
                .map(|change| PresentationEvent::SpotlightChanged { surface: id, change }),
            Surface::Showcase(state) => state.handle(event, rect.height).then(|| {
                PresentationEvent::ShowcaseChanged {
                    surface: id,
                    scene: state.describe(),
                }
            }),
            _ => None,
        };
        emitted.into_iter().collect()
    }

    // ── Timers ──

    /// Route a fired timer to its owner. Timers that were cleared, or whose
    /// surface is gone, are ignored.
    pub fn handle_timer(&mut self, id: TimerId) -> Vec<PresentationEvent> {
        let Some(owner) = self.timer_owners.remove(&id) else {
            log::trace!("ignoring stale {id}");
            return Vec::new();
        };
        let Some(mounted) = self.surfaces.get_mut(&owner) else {
            return Vec::new();
        };
        let mut timers =
            ScopedTimers::new(&mut self.timers, owner, &mut self.timer_owners);
        let emitted = match &mut mounted.surface {
            Surface::Typewriter(driver) => driver
                .on_timer(id, &mut timers)
                .map(|text| PresentationEvent::TextChanged { surface: owner, text }),
            Surface::Hover(latch) => latch.on_timer(id).map(|change| {
                PresentationEvent::HoverChanged {
                    surface: owner,
                    hovered: change.current.is_some(),
                }
            }),
            Surface::Spotlight(spotlight) => spotlight.on_timer(id).map(|change| {
                PresentationEvent::SpotlightChanged {
                    surface: owner,
                    change,
                }
            }),
            Surface::Notice(notice) => notice.on_timer(id).then_some(
                PresentationEvent::NoticeChanged {
                    surface: owner,
                    visible: false,
                },
            ),
            _ => None,
        };
        emitted.into_iter().collect()
    }

    /// Tear down every surface.
    pub fn clear(&mut self) -> Vec<PresentationEvent> {
        let mut events = Vec::new();
        for id in self.mounted() {
            if let Ok(unmounted) = self.unmount(id) {
                events.extend(unmounted);
            }
        }
        events
    }
}

impl<S: SignalSource> PresentationEngine<VirtualClock, S> {
    /// Move virtual time forward by `by`, running every tick that falls
    /// due, including ticks scheduled along the way.
    pub fn advance(&mut self, by: Duration) -> Vec<PresentationEvent> {
        let deadline = self.timers.now() + by;
        let mut events = Vec::new();
        while let Some(id) = self.timers.pop_due(deadline) {
            events.extend(self.handle_timer(id));
        }
        self.timers.settle(deadline);
        events
    }
}
