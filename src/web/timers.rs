use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use rustc_hash::FxHashMap;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use super::window;
use crate::env::{TimerHost, TimerId};
use crate::error::VitrineError;

struct LiveTimer {
    handle: i32,
    // Kept alive until the timer fires or is cleared.
    _callback: Closure<dyn FnMut()>,
}

/// Timer host backed by `window.setTimeout`.
///
/// Fired ids are queued and `on_fire` is called; the host then calls
/// [`drain_fired`](Self::drain_fired) and hands each id to the engine.
/// Clearing a timer also drops it from the queue, so a cleared id is never
/// delivered even if the browser already ran its callback.
pub struct BrowserTimers {
    window: web_sys::Window,
    origin: Instant,
    next_id: u64,
    live: FxHashMap<TimerId, LiveTimer>,
    fired: Rc<RefCell<VecDeque<TimerId>>>,
    on_fire: Rc<dyn Fn()>,
}

impl BrowserTimers {
    /// Timers that call `on_fire` whenever one of them fires.
    pub fn new(on_fire: impl Fn() + 'static) -> Result<Self, VitrineError> {
        Ok(Self {
            window: window()?,
            origin: Instant::now(),
            next_id: 0,
            live: FxHashMap::default(),
            fired: Rc::new(RefCell::new(VecDeque::new())),
            on_fire: Rc::new(on_fire),
        })
    }

    /// Take every fired id, oldest first.
    pub fn drain_fired(&mut self) -> Vec<TimerId> {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        for id in &fired {
            let _ = self.live.remove(id);
        }
        fired
    }
}

impl TimerHost for BrowserTimers {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let fired = Rc::clone(&self.fired);
        let on_fire = Rc::clone(&self.on_fire);
        let callback = Closure::<dyn FnMut()>::new(move || {
            fired.borrow_mut().push_back(id);
            on_fire();
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                let _ = self.live.insert(
                    id,
                    LiveTimer {
                        handle,
                        _callback: callback,
                    },
                );
            }
            Err(e) => log::error!("setTimeout failed for {id}: {e:?}"),
        }
        id
    }

    fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.fired.borrow_mut().retain(|queued| *queued != id);
        match self.live.remove(&id) {
            Some(timer) => {
                self.window.clear_timeout_with_handle(timer.handle);
                true
            }
            None => false,
        }
    }

    fn pending(&self) -> usize {
        self.live.len()
    }
}
