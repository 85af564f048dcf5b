//! Skill bubbles arranged on a circle.

use std::time::Duration;

use glam::Vec2;

use super::LayoutParams;

/// Entrance delay between consecutive bubbles.
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(100);

/// Placement of one bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSlot {
    /// Position in the ring.
    pub index: usize,
    /// Angle on the circle, degrees.
    pub angle_deg: f32,
    /// Rest position relative to the ring center (px).
    pub position: Vec2,
    /// Bubble diameter (px).
    pub size: f32,
    /// Delay before this bubble's entrance animation starts.
    pub entrance_delay: Duration,
}

/// Place bubble `index` of `count` using `params`.
///
/// Bubbles are spread evenly starting at 0 degrees, and sizes cycle through
/// five 5 px steps above `base_size`.
#[must_use]
pub fn orbit_slot(index: usize, count: usize, params: LayoutParams) -> OrbitSlot {
    let angle_deg = if count == 0 {
        0.0
    } else {
        index as f32 * 360.0 / count as f32
    };
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    OrbitSlot {
        index,
        angle_deg,
        position: Vec2::new(cos, sin) * params.radius,
        size: params.base_size + (index % 5) as f32 * 5.0,
        entrance_delay: ENTRANCE_STAGGER * index as u32,
    }
}

/// Place every bubble of a ring of `count`.
#[must_use]
pub fn orbit_ring(count: usize, params: LayoutParams) -> Vec<OrbitSlot> {
    (0..count).map(|i| orbit_slot(i, count, params)).collect()
}

/// Bound a drag offset to `±drag_constraint` on each axis.
#[must_use]
pub fn clamp_drag(offset: Vec2, params: LayoutParams) -> Vec2 {
    let limit = params.drag_constraint.max(0.0);
    if !offset.is_finite() {
        return Vec2::ZERO;
    }
    offset.clamp(Vec2::splat(-limit), Vec2::splat(limit))
}
