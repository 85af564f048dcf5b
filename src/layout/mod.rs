//! Responsive layout resolution.
//!
//! Viewport width maps to one of five [`LayoutBin`]s, each carrying a fixed
//! [`LayoutParams`] tuple. [`ResponsiveLayout`] recomputes synchronously on
//! every resize and reports when the resolved layout changes.

pub mod orbit;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::env::ViewportMetrics;

pub use orbit::{clamp_drag, orbit_ring, orbit_slot, OrbitSlot};

/// Upper (exclusive) width bounds of the first four bins.
pub const BREAKPOINTS: [u32; 4] = [480, 640, 768, 1024];

/// Discrete viewport-width range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutBin {
    /// `width < 480`.
    ExtraSmall,
    /// `480 <= width < 640`.
    Small,
    /// `640 <= width < 768`.
    Medium,
    /// `768 <= width < 1024`.
    Large,
    /// `width >= 1024`.
    ExtraLarge,
}

impl LayoutBin {
    /// Every bin, narrowest first.
    pub const ALL: [Self; 5] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    /// Bin for a viewport width.
    #[must_use]
    pub fn for_width(width: u32) -> Self {
        let idx = BREAKPOINTS
            .iter()
            .position(|&bound| width < bound)
            .unwrap_or(BREAKPOINTS.len());
        Self::ALL[idx]
    }

    /// Zero-based position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-bin layout parameters for the skill orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutParams {
    /// Base bubble diameter (px).
    pub base_size: f32,
    /// Orbit radius (px).
    pub radius: f32,
    /// Maximum drag distance from rest on each axis (px).
    pub drag_constraint: f32,
}

impl LayoutParams {
    /// Construct a parameter tuple.
    #[must_use]
    pub const fn new(base_size: f32, radius: f32, drag_constraint: f32) -> Self {
        Self {
            base_size,
            radius,
            drag_constraint,
        }
    }
}

/// Parameters for each of the five bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutTable {
    /// Indexed by [`LayoutBin::index`].
    pub bins: [LayoutParams; 5],
}

impl LayoutTable {
    /// Parameters for `bin`.
    #[must_use]
    pub fn params(&self, bin: LayoutBin) -> LayoutParams {
        self.bins[bin.index()]
    }

    /// Resolve a width to its bin and parameters.
    #[must_use]
    pub fn resolve(&self, width: u32) -> (LayoutBin, LayoutParams) {
        let bin = LayoutBin::for_width(width);
        (bin, self.params(bin))
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            bins: [
                LayoutParams::new(50.0, 100.0, 80.0),
                LayoutParams::new(60.0, 110.0, 100.0),
                LayoutParams::new(70.0, 130.0, 120.0),
                LayoutParams::new(85.0, 160.0, 140.0),
                LayoutParams::new(100.0, 180.0, 150.0),
            ],
        }
    }
}

/// Coarse device flags derived from width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceClass {
    /// Reduced decoration (fewer particles, no hover bursts).
    pub is_mobile: bool,
    /// Selects the compact 3D showcase preset.
    pub is_compact: bool,
}

impl DeviceClass {
    /// Classify `width` with `mobile_below` exclusive and `compact_max`
    /// inclusive.
    #[must_use]
    pub fn classify(width: u32, mobile_below: u32, compact_max: u32) -> Self {
        Self {
            is_mobile: width < mobile_below,
            is_compact: width <= compact_max,
        }
    }
}

/// A resolved layout that differs from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutChange {
    /// Viewport that produced this layout.
    pub metrics: ViewportMetrics,
    /// Resolved bin.
    pub bin: LayoutBin,
    /// Parameters of `bin`.
    pub params: LayoutParams,
    /// Device flags for `metrics.width`.
    pub device: DeviceClass,
}

/// Tracks the latest viewport and its resolved layout.
#[derive(Debug, Clone)]
pub struct ResponsiveLayout {
    table: LayoutTable,
    mobile_below: u32,
    compact_max: u32,
    metrics: Option<ViewportMetrics>,
    resolved: Option<(LayoutBin, DeviceClass)>,
}

impl ResponsiveLayout {
    /// Resolver over `table` with the given device thresholds.
    #[must_use]
    pub fn new(table: LayoutTable, mobile_below: u32, compact_max: u32) -> Self {
        Self {
            table,
            mobile_below,
            compact_max,
            metrics: None,
            resolved: None,
        }
    }

    /// Latest viewport seen.
    #[must_use]
    pub fn metrics(&self) -> Option<ViewportMetrics> {
        self.metrics
    }

    /// Current resolution, if any resize has been seen.
    #[must_use]
    pub fn current(&self) -> Option<LayoutChange> {
        let metrics = self.metrics?;
        Some(self.resolve(metrics))
    }

    /// Resolve `metrics` without recording it.
    #[must_use]
    pub fn resolve(&self, metrics: ViewportMetrics) -> LayoutChange {
        let (bin, params) = self.table.resolve(metrics.width);
        LayoutChange {
            metrics,
            bin,
            params,
            device: DeviceClass::classify(
                metrics.width,
                self.mobile_below,
                self.compact_max,
            ),
        }
    }

    /// Record a resize. Returns the new layout when the bin or the device
    /// flags changed; the first resize always reports.
    pub fn on_resize(&mut self, metrics: ViewportMetrics) -> Option<LayoutChange> {
        self.metrics = Some(metrics);
        let change = self.resolve(metrics);
        let key = (change.bin, change.device);
        if self.resolved == Some(key) {
            return None;
        }
        log::debug!("layout -> {:?} at {}px", change.bin, metrics.width);
        self.resolved = Some(key);
        Some(change)
    }
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self::new(LayoutTable::default(), 768, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: u32) -> ViewportMetrics {
        ViewportMetrics::new(width, 800)
    }

    #[test]
    fn boundary_widths_pick_the_right_bin() {
        let cases = [
            (479, LayoutBin::ExtraSmall),
            (480, LayoutBin::Small),
            (639, LayoutBin::Small),
            (640, LayoutBin::Medium),
            (767, LayoutBin::Medium),
            (768, LayoutBin::Large),
            (1023, LayoutBin::Large),
            (1024, LayoutBin::ExtraLarge),
            (1200, LayoutBin::ExtraLarge),
        ];
        for (width, bin) in cases {
            assert_eq!(LayoutBin::for_width(width), bin, "width {width}");
        }
        assert_eq!(LayoutBin::for_width(0), LayoutBin::ExtraSmall);
        assert_eq!(LayoutBin::for_width(u32::MAX), LayoutBin::ExtraLarge);
    }

    #[test]
    fn default_table_params() {
        let table = LayoutTable::default();
        assert_eq!(
            table.resolve(479).1,
            LayoutParams::new(50.0, 100.0, 80.0)
        );
        assert_eq!(
            table.resolve(900).1,
            LayoutParams::new(85.0, 160.0, 140.0)
        );
        assert_eq!(
            table.resolve(1920).1,
            LayoutParams::new(100.0, 180.0, 150.0)
        );
    }

    #[test]
    fn device_thresholds() {
        let d = DeviceClass::classify(500, 768, 500);
        assert!(d.is_mobile && d.is_compact);
        let d = DeviceClass::classify(501, 768, 500);
        assert!(d.is_mobile && !d.is_compact);
        let d = DeviceClass::classify(768, 768, 500);
        assert!(!d.is_mobile && !d.is_compact);
    }

    #[test]
    fn resize_reports_only_layout_changes() {
        let mut layout = ResponsiveLayout::default();
        let first = layout.on_resize(at(1200)).unwrap();
        assert_eq!(first.bin, LayoutBin::ExtraLarge);

        assert!(layout.on_resize(at(1100)).is_none());
        assert_eq!(layout.metrics(), Some(at(1100)));

        let change = layout.on_resize(at(700)).unwrap();
        assert_eq!(change.bin, LayoutBin::Medium);
        assert!(change.device.is_mobile);
    }

    #[test]
    fn settles_on_latest_viewport() {
        let mut layout = ResponsiveLayout::default();
        for width in [1200, 300, 1000, 640, 450, 1024] {
            let _ = layout.on_resize(at(width));
        }
        let current = layout.current().unwrap();
        assert_eq!(current.metrics.width, 1024);
        assert_eq!(current.bin, LayoutBin::ExtraLarge);
    }
}
