//! Tabbed panel controller.
//!
//! Exactly one key of a closed [`PanelSet`] is active at a time. Selecting
//! the active key is a no-op; selecting another emits a single
//! [`PanelSwap`] carrying the content fade to play.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::Transition;
use crate::error::VitrineError;

/// A small closed set of panel keys.
///
/// `ALL` lists every key in display order; the first entry is the initial
/// selection.
pub trait PanelSet: Copy + Eq + fmt::Debug + 'static {
    /// Every key, in display order.
    const ALL: &'static [Self];

    /// Stable identifier used by hosts (DOM ids, config files).
    fn as_str(self) -> &'static str;

    /// Parse a host-supplied identifier.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

/// The biography panels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelKey {
    /// Short biography.
    #[default]
    Bio,
    /// Skill list.
    Skills,
    /// Education history.
    Education,
}

impl PanelSet for PanelKey {
    const ALL: &'static [Self] = &[Self::Bio, Self::Skills, Self::Education];

    fn as_str(self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Skills => "skills",
            Self::Education => "education",
        }
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKey {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as PanelSet>::parse(s)
            .ok_or_else(|| VitrineError::InvalidSelection(s.to_owned()))
    }
}

/// A content swap between two panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSwap<K> {
    /// Panel fading out.
    pub from: K,
    /// Panel fading in; now the active key.
    pub to: K,
    /// Fade to play, keyed by `to`.
    pub transition: Transition,
}

/// Holds the active panel.
#[derive(Debug, Clone)]
pub struct TabController<K: PanelSet> {
    active: K,
    transition: Transition,
}

impl<K: PanelSet> TabController<K> {
    /// Start on the first key of the set.
    ///
    /// # Panics
    ///
    /// If `K::ALL` is empty.
    #[must_use]
    pub fn new(transition: Transition) -> Self {
        Self {
            active: K::ALL[0],
            transition,
        }
    }

    /// The active key.
    #[must_use]
    pub fn active(&self) -> K {
        self.active
    }

    /// Select `key`. Returns the swap to animate, or `None` when `key` is
    /// already active.
    pub fn select(&mut self, key: K) -> Option<PanelSwap<K>> {
        if key == self.active {
            return None;
        }
        let from = std::mem::replace(&mut self.active, key);
        log::debug!("panel {} -> {}", from.as_str(), key.as_str());
        Some(PanelSwap {
            from,
            to: key,
            transition: self.transition,
        })
    }

    /// Select by host identifier. Unknown identifiers leave the selection
    /// untouched and return [`VitrineError::InvalidSelection`].
    pub fn select_str(
        &mut self,
        name: &str,
    ) -> Result<Option<PanelSwap<K>>, VitrineError> {
        let Some(key) = K::parse(name) else {
            log::warn!("ignoring unknown panel {name:?}");
            return Err(VitrineError::InvalidSelection(name.to_owned()));
        };
        Ok(self.select(key))
    }
}

impl<K: PanelSet> Default for TabController<K> {
    fn default() -> Self {
        Self::new(Transition::fade())
    }
}
