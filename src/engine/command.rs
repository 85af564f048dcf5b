//! The engine's complete page vocabulary.
//!
//! Hosts describe what is on the page with [`PageCommand`]s and pass them to
//! [`PresentationEngine::execute`](super::PresentationEngine::execute).
//! Environment input (resize, intersection, pointer) arrives separately as
//! signals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reveal::RevealPolicy;
use crate::showcase::AssetHandle;

/// Host-assigned identity of one mounted surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

// ── Surface specs ────────────────────────────────────────────────────────

/// What to mount.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceSpec {
    /// A card that tilts toward the pointer.
    Tilt,
    /// A cycling typewriter headline.
    Typewriter {
        /// Phrases to cycle; must be non-empty.
        phrases: Vec<String>,
    },
    /// The biography tab strip.
    Tabs,
    /// A section revealed on scroll.
    Reveal {
        /// Number of staggered children.
        items: usize,
        /// Replay behaviour; `None` uses the configured default.
        policy: Option<RevealPolicy>,
    },
    /// Skill bubbles laid out on a responsive ring.
    SkillOrbit {
        /// Number of bubbles.
        items: usize,
    },
    /// A single item revealed on hover (held briefly after a touch).
    Hover,
    /// The 3D model showcase.
    Showcase {
        /// Model to show.
        asset: AssetHandle,
    },
    /// A light that follows the pointer, shown after a short delay.
    Spotlight,
    /// A confirmation that hides itself after a hold.
    Notice,
}

/// Kind of a mounted surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// See [`SurfaceSpec::Tilt`].
    Tilt,
    /// See [`SurfaceSpec::Typewriter`].
    Typewriter,
    /// See [`SurfaceSpec::Tabs`].
    Tabs,
    /// See [`SurfaceSpec::Reveal`].
    Reveal,
    /// See [`SurfaceSpec::SkillOrbit`].
    SkillOrbit,
    /// See [`SurfaceSpec::Hover`].
    Hover,
    /// See [`SurfaceSpec::Showcase`].
    Showcase,
    /// See [`SurfaceSpec::Spotlight`].
    Spotlight,
    /// See [`SurfaceSpec::Notice`].
    Notice,
}

impl SurfaceSpec {
    /// Kind of surface this mounts.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Tilt => SurfaceKind::Tilt,
            Self::Typewriter { .. } => SurfaceKind::Typewriter,
            Self::Tabs => SurfaceKind::Tabs,
            Self::Reveal { .. } => SurfaceKind::Reveal,
            Self::SkillOrbit { .. } => SurfaceKind::SkillOrbit,
            Self::Hover => SurfaceKind::Hover,
            Self::Showcase { .. } => SurfaceKind::Showcase,
            Self::Spotlight => SurfaceKind::Spotlight,
            Self::Notice => SurfaceKind::Notice,
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────────

/// A page lifecycle or selection operation.
///
/// ```ignore
/// engine.execute(PageCommand::Mount { surface: SurfaceId(1), spec: SurfaceSpec::Tabs })?;
/// engine.execute(PageCommand::Select { surface: SurfaceId(1), key: "skills".into() })?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    /// Mount a surface. An existing surface with the same id is torn down
    /// first, unless the new spec is rejected.
    Mount {
        /// Id chosen by the host.
        surface: SurfaceId,
        /// What to mount.
        spec: SurfaceSpec,
    },
    /// Tear down a surface, releasing every timer and subscription it holds.
    Unmount {
        /// Surface to remove.
        surface: SurfaceId,
    },
    /// Select a panel on a tabs surface.
    Select {
        /// Tabs surface.
        surface: SurfaceId,
        /// Panel identifier (`"bio"`, `"skills"`, `"education"`).
        key: String,
    },
    /// Show a notice surface, restarting its hold if already visible.
    Notify {
        /// Notice surface.
        surface: SurfaceId,
    },
}
