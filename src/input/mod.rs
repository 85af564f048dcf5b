//! Input handling: the unified pointer/touch event, the hover-reveal latch
//! and the cursor spotlight built on it.

/// Platform-agnostic interaction events.
pub mod event;
/// Hover reveal state machine with a delayed touch release.
pub mod hover;
/// Delayed pointer-following spotlight.
pub mod spotlight;

pub use event::{InteractionEvent, PointerKind};
pub use hover::{HoverChange, HoverLatch};
pub use spotlight::{CursorSpotlight, SpotlightChange};
