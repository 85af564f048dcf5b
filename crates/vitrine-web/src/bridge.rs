//! Glue between the browser and the presentation engine.
//!
//! The engine lives in a shared cell. [`BrowserTimers`] and
//! [`BrowserSignals`] only queue what the browser delivers and then wake
//! the page, which drains both queues into the engine and folds the
//! resulting events into the [`PageView`] signal the components read.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use vitrine::engine::{
    PageCommand, PageView, PresentationEngine, PresentationEvent, SurfaceId,
    SurfaceSpec,
};
use vitrine::env::Signal as EnvSignal;
use vitrine::options::Options;
use vitrine::web::{BrowserSignals, BrowserTimers};
use vitrine::VitrineError;
use wasm_bindgen::JsValue;

type Engine = PresentationEngine<BrowserTimers, BrowserSignals>;

/// Global the host page may set to a JSON options object.
const OPTIONS_GLOBAL: &str = "__VITRINE_OPTIONS__";

/// Shared handle to the page's engine and view.
#[derive(Clone)]
pub struct Page {
    engine: Rc<RefCell<Engine>>,
    view: Signal<PageView>,
    next_surface: Rc<Cell<u64>>,
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine)
    }
}

impl Page {
    /// Build the engine, wire its wake callbacks and seed the viewport.
    pub fn start(view: Signal<PageView>) -> Result<Self, VitrineError> {
        let slot: Rc<RefCell<Weak<RefCell<Engine>>>> =
            Rc::new(RefCell::new(Weak::new()));
        let on_wake = {
            let slot = Rc::clone(&slot);
            Rc::new(move || {
                if let Some(engine) = slot.borrow().upgrade() {
                    wake(&engine, view);
                }
            })
        };

        let timers = BrowserTimers::new({
            let on_wake = Rc::clone(&on_wake);
            move || on_wake()
        })?;
        let signals = BrowserSignals::new(move || on_wake())?;
        let viewport = signals.viewport()?;

        let engine = Rc::new(RefCell::new(Engine::new(
            timers,
            signals,
            read_options(),
        )));
        *slot.borrow_mut() = Rc::downgrade(&engine);

        let page = Self {
            engine,
            view,
            next_surface: Rc::new(Cell::new(1)),
        };
        page.run(|engine| {
            Ok(engine.handle_signal(&EnvSignal::Resize(viewport)))
        });
        log::info!("page started at {}x{}", viewport.width, viewport.height);
        Ok(page)
    }

    /// The page view signal.
    pub fn view(&self) -> Signal<PageView> {
        self.view
    }

    /// Options the engine was built with.
    pub fn options(&self) -> Options {
        self.engine.borrow().options().clone()
    }

    /// A fresh surface id.
    pub fn allocate(&self) -> SurfaceId {
        let id = self.next_surface.get();
        self.next_surface.set(id + 1);
        SurfaceId(id)
    }

    /// Mount `spec` as `surface`.
    pub fn mount(&self, surface: SurfaceId, spec: SurfaceSpec) {
        self.run(|engine| engine.execute(PageCommand::Mount { surface, spec }));
    }

    /// Tear down `surface` and forget its element.
    pub fn unmount(&self, surface: SurfaceId) {
        self.run(|engine| {
            engine.signals_mut().unbind_element(surface);
            engine.execute(PageCommand::Unmount { surface })
        });
    }

    /// Select a panel on a tabs surface.
    pub fn select(&self, surface: SurfaceId, key: &str) {
        self.run(|engine| {
            engine.execute(PageCommand::Select {
                surface,
                key: key.to_owned(),
            })
        });
    }

    /// Show a notice surface.
    pub fn notify(&self, surface: SurfaceId) {
        self.run(|engine| engine.execute(PageCommand::Notify { surface }));
    }

    /// Attach `surface`'s DOM element so its observers and pointer
    /// listeners can start.
    pub fn bind(&self, surface: SurfaceId, element: web_sys::Element) {
        self.run(|engine| {
            engine.signals_mut().bind_element(surface, element)?;
            Ok(Vec::new())
        });
    }

    fn run(
        &self,
        f: impl FnOnce(&mut Engine) -> Result<Vec<PresentationEvent>, VitrineError>,
    ) {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            log::warn!("engine busy, dropping page call");
            return;
        };
        let mut events = match f(&mut engine) {
            Ok(events) => events,
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        };
        events.extend(pump(&mut engine));
        drop(engine);
        publish(self.view, &events);
    }
}

fn wake(engine: &RefCell<Engine>, view: Signal<PageView>) {
    // Queues persist, so a busy engine picks them up on its next call.
    let Ok(mut engine) = engine.try_borrow_mut() else {
        return;
    };
    let events = pump(&mut engine);
    drop(engine);
    publish(view, &events);
}

/// Drain fired timers and queued signals until both queues are empty.
fn pump(engine: &mut Engine) -> Vec<PresentationEvent> {
    let mut events = Vec::new();
    loop {
        let fired = engine.timers_mut().drain_fired();
        let signals = engine.signals_mut().drain();
        if fired.is_empty() && signals.is_empty() {
            return events;
        }
        for id in fired {
            events.extend(engine.handle_timer(id));
        }
        for signal in &signals {
            events.extend(engine.handle_signal(signal));
        }
    }
}

fn publish(mut view: Signal<PageView>, events: &[PresentationEvent]) {
    if events.is_empty() {
        return;
    }
    view.with_mut(|view| {
        for event in events {
            view.apply(event);
        }
    });
}

fn read_options() -> Options {
    let raw = web_sys::window()
        .and_then(|window| {
            js_sys::Reflect::get(&window, &JsValue::from_str(OPTIONS_GLOBAL))
                .ok()
        })
        .and_then(|value| value.as_string());
    match raw.map(|json| serde_json::from_str::<Options>(&json)) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            log::warn!("ignoring {OPTIONS_GLOBAL}: {e}");
            Options::default()
        }
        None => Options::default(),
    }
}

/// Mount `spec` for the lifetime of the calling component.
///
/// The id is allocated on first render; the mount itself runs as an
/// effect so the page view is never written mid-render.
pub fn use_surface(spec: impl FnOnce() -> SurfaceSpec) -> SurfaceId {
    let page = use_context::<Page>();
    let id = use_hook(|| page.allocate());
    let spec = use_hook(spec);
    let _ = use_effect({
        let page = page.clone();
        move || page.mount(id, spec.clone())
    });
    use_drop(move || page.unmount(id));
    id
}

/// `onmounted` handler that binds the element to `surface`.
pub fn bind_on_mount(
    surface: SurfaceId,
) -> impl FnMut(MountedEvent) + 'static {
    let page = use_context::<Page>();
    move |evt: MountedEvent| {
        if let Some(element) = evt.data().downcast::<web_sys::Element>() {
            page.bind(surface, element.clone());
        }
    }
}
