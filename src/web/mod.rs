//! Browser adapters for the injected environment (feature `web`).
//!
//! [`BrowserTimers`] implements [`TimerHost`](crate::env::TimerHost) on
//! `setTimeout`/`clearTimeout`, and [`BrowserSignals`] implements
//! [`SignalSource`](crate::env::SignalSource) on a window `resize` listener,
//! per-element pointer listeners and one `IntersectionObserver` per
//! observed element. Both queue what the browser delivers; the host drains
//! the queues into the engine from a single wake callback, so engine state
//! is never touched re-entrantly.

mod signals;
mod timers;

pub use signals::BrowserSignals;
pub use timers::BrowserTimers;
use wasm_bindgen::JsValue;

use crate::error::VitrineError;

/// Route `log` output to the browser console and install the panic hook.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

fn window() -> Result<web_sys::Window, VitrineError> {
    web_sys::window()
        .ok_or_else(|| VitrineError::Browser("no global window".to_owned()))
}

fn js_error(context: &str, err: &JsValue) -> VitrineError {
    VitrineError::Browser(format!("{context}: {err:?}"))
}
