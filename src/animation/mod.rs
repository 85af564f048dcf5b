//! Easing curves, transition descriptors and tweens.
//!
//! The engines do not animate anything themselves. Every state change they
//! emit carries a [`Transition`] telling the host's interpolator how to get
//! there; [`Tween`] evaluates the same curve when a surface needs to know
//! its in-flight value.

pub mod easing;
pub mod transition;
pub mod tween;

pub use easing::EasingFunction;
pub use transition::Transition;
pub use tween::Tween;
