use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{LayoutParams, LayoutTable, ResponsiveLayout};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Responsive bins and device thresholds.
pub struct LayoutOptions {
    /// Widths below 480 px.
    #[schemars(skip)]
    pub extra_small: LayoutParams,
    /// Widths 480 to 639 px.
    #[schemars(skip)]
    pub small: LayoutParams,
    /// Widths 640 to 767 px.
    #[schemars(skip)]
    pub medium: LayoutParams,
    /// Widths 768 to 1023 px.
    #[schemars(skip)]
    pub large: LayoutParams,
    /// Widths from 1024 px.
    #[schemars(skip)]
    pub extra_large: LayoutParams,
    /// Widths below this are treated as mobile.
    #[schemars(title = "Mobile Below", range(min = 320, max = 1920))]
    pub mobile_below: u32,
    /// Widths at or below this use the compact showcase.
    #[schemars(title = "Compact Max", range(min = 320, max = 1920))]
    pub compact_max: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let [extra_small, small, medium, large, extra_large] =
            LayoutTable::default().bins;
        Self {
            extra_small,
            small,
            medium,
            large,
            extra_large,
            mobile_below: 768,
            compact_max: 500,
        }
    }
}

impl LayoutOptions {
    /// Per-bin parameter table.
    #[must_use]
    pub fn table(&self) -> LayoutTable {
        LayoutTable {
            bins: [
                self.extra_small,
                self.small,
                self.medium,
                self.large,
                self.extra_large,
            ],
        }
    }

    /// A fresh resolver with these settings.
    #[must_use]
    pub fn resolver(&self) -> ResponsiveLayout {
        ResponsiveLayout::new(self.table(), self.mobile_below, self.compact_max)
    }
}
