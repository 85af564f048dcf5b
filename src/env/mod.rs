//! Injected environment: timers and environment signals.
//!
//! Engines never touch a real display or event loop directly. Timers go
//! through a [`TimerHost`] and viewport, intersection and pointer signals
//! arrive from a [`SignalSource`]. Tests drive both with [`VirtualClock`]
//! and [`SyntheticSignals`]; the browser build plugs in the adapters from
//! `crate::web`.

/// Environment signal types and the signal source seam.
pub mod signal;
/// Timer host seam and the virtual clock.
pub mod timer;

pub use signal::{
    IntersectionEntry, Signal, SignalSource, SubscriptionId,
    SyntheticSignals, Topic, ViewportMetrics,
};
pub use timer::{TimerHost, TimerId, VirtualClock};
