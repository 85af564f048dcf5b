// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! Interactive presentation core for an animated portfolio site.
//!
//! Vitrine holds the small set of UI state machines behind the site's
//! decorative interactions: pointer-driven 3D tilt cards, a cycling
//! typewriter headline, a tabbed biography panel, viewport-driven layout
//! bins and scroll-triggered section reveals. Rendering is left to a host
//! (the Dioxus front end in `crates/vitrine-web`, or a test harness).
//!
//! # Key entry points
//!
//! - [`engine::PresentationEngine`] - mounts surfaces and routes timers and
//!   environment signals to them
//! - [`engine::PageView`] - folds emitted events into renderable state
//! - [`options::Options`] - tunables (tilt, typewriter timing, layout bins,
//!   reveal thresholds, 3D showcase presets)
//! - [`env`] - injected timer host and signal source, with virtual
//!   implementations for tests
//!
//! # Architecture
//!
//! Everything is single-threaded and event driven. Each surface owns its
//! state exclusively; the only shared resources are the timer host and the
//! signal source, and every registration made against them is released
//! when the owning surface unmounts.

pub mod animation;
pub mod catalog;
pub mod engine;
pub mod env;
pub mod error;
pub mod input;
pub mod layout;
pub mod notice;
pub mod options;
pub mod reveal;
pub mod scenery;
pub mod showcase;
pub mod tabs;
pub mod tilt;
pub mod typewriter;
#[cfg(feature = "web")]
pub mod web;

pub use error::VitrineError;
