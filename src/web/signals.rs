use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, TouchEvent,
};

use super::{js_error, window};
use crate::engine::SurfaceId;
use crate::env::{
    IntersectionEntry, Signal, SignalSource, SubscriptionId, Topic,
    ViewportMetrics,
};
use crate::error::VitrineError;
use crate::input::InteractionEvent;
use crate::tilt::SurfaceRect;

/// Intersection ratios the observer reports at.
const RATIO_STEPS: usize = 20;

const MOUSE_EVENTS: [&str; 3] = ["mouseenter", "mousemove", "mouseleave"];
const TOUCH_EVENTS: [&str; 4] =
    ["touchstart", "touchmove", "touchend", "touchcancel"];

type Inbox = Rc<RefCell<VecDeque<Signal>>>;

/// A DOM listener that is removed when dropped.
struct Listener {
    target: web_sys::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: web_sys::EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, VitrineError> {
        target
            .add_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(|e| js_error(kind, &e))?;
        Ok(Self {
            target,
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// An intersection observer that disconnects when dropped.
struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

enum Registration {
    Resize(Listener),
    Intersection(SurfaceId, Option<Observer>),
    Interaction(SurfaceId, Vec<Listener>),
}

/// Signal source backed by DOM listeners and intersection observers.
///
/// Surfaces that need intersection or pointer signals must have their
/// element registered with [`bind_element`](Self::bind_element); a
/// subscription made before the element is bound is attached when it is.
/// Dropping a subscription (or the whole source) removes its listeners and
/// disconnects its observer.
pub struct BrowserSignals {
    window: web_sys::Window,
    next_id: u64,
    subscriptions: FxHashMap<SubscriptionId, Registration>,
    elements: FxHashMap<SurfaceId, Element>,
    inbox: Inbox,
    on_signal: Rc<dyn Fn()>,
}

impl BrowserSignals {
    /// Signal source that calls `on_signal` whenever a signal is queued.
    pub fn new(on_signal: impl Fn() + 'static) -> Result<Self, VitrineError> {
        Ok(Self {
            window: window()?,
            next_id: 0,
            subscriptions: FxHashMap::default(),
            elements: FxHashMap::default(),
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            on_signal: Rc::new(on_signal),
        })
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Result<ViewportMetrics, VitrineError> {
        let dimension = |value: Result<JsValue, JsValue>, what: &str| {
            value
                .map_err(|e| js_error(what, &e))
                .map(|v| v.as_f64().unwrap_or(0.0).max(0.0) as u32)
        };
        Ok(ViewportMetrics::new(
            dimension(self.window.inner_width(), "innerWidth")?,
            dimension(self.window.inner_height(), "innerHeight")?,
        ))
    }

    /// Associate `surface` with its DOM element and attach any pending
    /// subscriptions for it.
    pub fn bind_element(
        &mut self,
        surface: SurfaceId,
        element: Element,
    ) -> Result<(), VitrineError> {
        let _ = self.elements.insert(surface, element.clone());
        for registration in self.subscriptions.values_mut() {
            match registration {
                Registration::Intersection(s, observer)
                    if *s == surface && observer.is_none() =>
                {
                    *observer = Some(observe_intersections(
                        &self.inbox,
                        &self.on_signal,
                        surface,
                        &element,
                    )?);
                }
                Registration::Interaction(s, listeners)
                    if *s == surface && listeners.is_empty() =>
                {
                    *listeners = pointer_listeners(
                        &self.inbox,
                        &self.on_signal,
                        surface,
                        &element,
                    )?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Forget `surface`'s element. Its subscriptions stay registered.
    pub fn unbind_element(&mut self, surface: SurfaceId) {
        let _ = self.elements.remove(&surface);
    }

    /// Take every queued signal, oldest first.
    pub fn drain(&mut self) -> Vec<Signal> {
        self.inbox.borrow_mut().drain(..).collect()
    }

    fn register(&self, topic: Topic) -> Result<Registration, VitrineError> {
        match topic {
            Topic::Resize => {
                let inbox = Rc::clone(&self.inbox);
                let on_signal = Rc::clone(&self.on_signal);
                let window = self.window.clone();
                let callback =
                    Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                        let read = |v: Result<JsValue, JsValue>| {
                            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
                                as u32
                        };
                        let metrics = ViewportMetrics::new(
                            read(window.inner_width()),
                            read(window.inner_height()),
                        );
                        inbox.borrow_mut().push_back(Signal::Resize(metrics));
                        on_signal();
                    });
                Ok(Registration::Resize(Listener::attach(
                    self.window.clone().into(),
                    "resize",
                    callback,
                )?))
            }
            Topic::Intersection(surface) => {
                let observer = self
                    .elements
                    .get(&surface)
                    .map(|el| {
                        observe_intersections(&self.inbox, &self.on_signal, surface, el)
                    })
                    .transpose()?;
                Ok(Registration::Intersection(surface, observer))
            }
            Topic::Interaction(surface) => {
                let listeners = match self.elements.get(&surface) {
                    Some(el) => pointer_listeners(
                        &self.inbox,
                        &self.on_signal,
                        surface,
                        el,
                    )?,
                    None => Vec::new(),
                };
                Ok(Registration::Interaction(surface, listeners))
            }
        }
    }
}

impl SignalSource for BrowserSignals {
    fn subscribe(&mut self, topic: Topic) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        match self.register(topic) {
            Ok(registration) => {
                let _ = self.subscriptions.insert(id, registration);
            }
            Err(e) => log::error!("subscribing to {topic:?} failed: {e}"),
        }
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}

fn rect_of(element: &Element) -> SurfaceRect {
    let r = element.get_bounding_client_rect();
    SurfaceRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn observe_intersections(
    inbox: &Inbox,
    on_signal: &Rc<dyn Fn()>,
    surface: SurfaceId,
    element: &Element,
) -> Result<Observer, VitrineError> {
    let inbox = Rc::clone(inbox);
    let on_signal = Rc::clone(on_signal);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                inbox.borrow_mut().push_back(Signal::Intersection(
                    IntersectionEntry {
                        surface,
                        ratio: entry.intersection_ratio() as f32,
                    },
                ));
            }
            on_signal();
        },
    );

    let steps = js_sys::Array::new();
    for i in 0..=RATIO_STEPS {
        let _ = steps.push(&JsValue::from_f64(i as f64 / RATIO_STEPS as f64));
    }
    let init = IntersectionObserverInit::new();
    init.set_threshold(&steps);

    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|e| js_error("IntersectionObserver", &e))?;
    observer.observe(element);
    Ok(Observer {
        observer,
        _callback: callback,
    })
}

fn pointer_listeners(
    inbox: &Inbox,
    on_signal: &Rc<dyn Fn()>,
    surface: SurfaceId,
    element: &Element,
) -> Result<Vec<Listener>, VitrineError> {
    let mut listeners = Vec::new();
    for kind in MOUSE_EVENTS.into_iter().chain(TOUCH_EVENTS) {
        let inbox = Rc::clone(inbox);
        let on_signal = Rc::clone(on_signal);
        let target = element.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let interaction = if let Some(touch) =
                event.dyn_ref::<TouchEvent>()
            {
                InteractionEvent::from_touch(touch)
            } else if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                InteractionEvent::from_mouse(mouse)
            } else {
                return;
            };
            inbox.borrow_mut().push_back(Signal::Interaction {
                surface,
                event: interaction,
                rect: rect_of(&target),
            });
            on_signal();
        });
        listeners.push(Listener::attach(element.clone().into(), kind, callback)?);
    }
    Ok(listeners)
}
