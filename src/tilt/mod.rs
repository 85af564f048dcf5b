//! Pointer-driven 3D tilt.
//!
//! [`compute_tilt`] is the pure mapping from a pointer position over a
//! rectangle to a bounded rotation pair plus the pointer offset used to
//! place the spotlight highlight. [`TiltSurface`] wraps it with the
//! enter/move/leave lifecycle of one card.

mod surface;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use surface::{TiltChange, TiltSurface};

/// Axis-aligned bounding rectangle of a surface, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width (may be zero for collapsed elements).
    pub width: f32,
    /// Height (may be zero for collapsed elements).
    pub height: f32,
}

impl SurfaceRect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Whether the rectangle has positive, finite area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Tilt limits for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Largest rotation on either axis, in degrees.
    pub max_angle: f32,
    /// Largest spotlight offset from the center on either axis, in pixels.
    pub max_offset: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle: 12.0,
            max_offset: 250.0,
        }
    }
}

/// Rotation and pointer offset of a tilted surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltState {
    /// Rotation about the horizontal axis, degrees. Positive when the
    /// pointer is above center.
    pub rotation_x: f32,
    /// Rotation about the vertical axis, degrees. Positive when the pointer
    /// is right of center.
    pub rotation_y: f32,
    /// Pointer offset from center, x (px).
    pub offset_x: f32,
    /// Pointer offset from center, y (px).
    pub offset_y: f32,
}

impl TiltState {
    /// Flat, no highlight offset.
    pub const ZERO: TiltState = TiltState {
        rotation_x: 0.0,
        rotation_y: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Whether every component is exactly zero.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::ZERO
    }

    /// Spotlight position relative to the surface center.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

/// Map a pointer position over `rect` to a bounded tilt.
///
/// The offset from center is normalized by the half extents to `[-1, 1]`,
/// scaled by `max_angle`, and the vertical axis is inverted so moving the
/// pointer up tips the top edge away. Both rotations are clamped to
/// `±max_angle`; offsets are clamped to `±max_offset`.
///
/// A rectangle without positive finite area, or a non-finite pointer,
/// yields [`TiltState::ZERO`].
#[must_use]
pub fn compute_tilt(
    pointer: Vec2,
    rect: SurfaceRect,
    config: TiltConfig,
) -> TiltState {
    if !rect.has_area() || !pointer.is_finite() {
        return TiltState::ZERO;
    }

    let max_angle = finite_limit(config.max_angle);
    let max_offset = finite_limit(config.max_offset);

    let offset = pointer - rect.center();
    let half = Vec2::new(rect.width * 0.5, rect.height * 0.5);
    let normalized = offset / half;

    TiltState {
        rotation_x: (-normalized.y * max_angle).clamp(-max_angle, max_angle),
        rotation_y: (normalized.x * max_angle).clamp(-max_angle, max_angle),
        offset_x: offset.x.clamp(-max_offset, max_offset),
        offset_y: offset.y.clamp(-max_offset, max_offset),
    }
}

/// Non-negative finite limit; anything else disables the axis.
fn finite_limit(value: f32) -> f32 {
    if value.is_finite() {
        value.abs()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> SurfaceRect {
        SurfaceRect::new(100.0, 50.0, 360.0, 400.0)
    }

    #[test]
    fn center_is_flat() {
        let state = compute_tilt(card().center(), card(), TiltConfig::default());
        assert_eq!(state.rotation_x, 0.0);
        assert_eq!(state.rotation_y, 0.0);
        assert_eq!(state.offset(), Vec2::ZERO);
    }

    #[test]
    fn corners_reach_max_angle() {
        let rect = card();
        let config = TiltConfig::default();

        // Top-right corner: pointer up tilts away (positive x), right tilts
        // positive y.
        let top_right = Vec2::new(rect.left + rect.width, rect.top);
        let state = compute_tilt(top_right, rect, config);
        assert!((state.rotation_x - 12.0).abs() < 1e-5);
        assert!((state.rotation_y - 12.0).abs() < 1e-5);

        let bottom_left = Vec2::new(rect.left, rect.top + rect.height);
        let state = compute_tilt(bottom_left, rect, config);
        assert!((state.rotation_x + 12.0).abs() < 1e-5);
        assert!((state.rotation_y + 12.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_stays_bounded_for_any_pointer() {
        let rect = card();
        let config = TiltConfig {
            max_angle: 45.0,
            max_offset: 100.0,
        };
        for ix in -10..=20 {
            for iy in -10..=20 {
                let p = Vec2::new(ix as f32 * 40.0, iy as f32 * 40.0);
                let s = compute_tilt(p, rect, config);
                assert!(s.rotation_x.abs() <= 45.0);
                assert!(s.rotation_y.abs() <= 45.0);
                assert!(s.offset_x.abs() <= 100.0);
                assert!(s.offset_y.abs() <= 100.0);
            }
        }
    }

    #[test]
    fn quarter_offset_scales_linearly() {
        let rect = SurfaceRect::new(0.0, 0.0, 200.0, 200.0);
        let state =
            compute_tilt(Vec2::new(150.0, 100.0), rect, TiltConfig::default());
        assert!((state.rotation_y - 6.0).abs() < 1e-5);
        assert_eq!(state.rotation_x, 0.0);
        assert_eq!(state.offset_x, 50.0);
    }

    #[test]
    fn degenerate_rect_is_a_no_op() {
        let config = TiltConfig::default();
        for rect in [
            SurfaceRect::new(10.0, 10.0, 0.0, 120.0),
            SurfaceRect::new(10.0, 10.0, 120.0, 0.0),
            SurfaceRect::new(0.0, 0.0, 0.0, 0.0),
            SurfaceRect::new(0.0, 0.0, f32::NAN, 10.0),
        ] {
            for p in [Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::splat(1e6)] {
                let s = compute_tilt(p, rect, config);
                assert!(s.is_at_rest());
                assert!(!s.rotation_x.is_nan());
            }
        }
    }

    #[test]
    fn non_finite_pointer_is_a_no_op() {
        let s = compute_tilt(
            Vec2::new(f32::INFINITY, 0.0),
            card(),
            TiltConfig::default(),
        );
        assert!(s.is_at_rest());
    }

    #[test]
    fn bogus_limits_do_not_panic() {
        let config = TiltConfig {
            max_angle: -12.0,
            max_offset: f32::NAN,
        };
        let s = compute_tilt(Vec2::new(460.0, 50.0), card(), config);
        assert!((s.rotation_y - 12.0).abs() < 1e-5);
        assert_eq!(s.offset_x, 0.0);
    }
}
