//! Decorative particle noise.
//!
//! Star fields, hover sparkles, pointer bursts and drifting motes are pure
//! cosmetics. They are generated from an injected [`StdRng`] so the same
//! seed always yields the same scenery.

use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::layout::DeviceClass;

/// A twinkling background star. Position is a fraction of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in `[0, 1)²`.
    pub position: Vec2,
    /// Diameter, 1 to 3 px.
    pub size: f32,
    /// Resting opacity, 0.2 to 0.7.
    pub opacity: f32,
    /// One twinkle half-cycle, 2 to 5 s.
    pub twinkle: Duration,
    /// Start offset, 0 to 5 s.
    pub delay: Duration,
}

/// A sparkle shown on a hovered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Position in `[0, 1)²`.
    pub position: Vec2,
    /// Pulse length.
    pub duration: Duration,
    /// Start offset, 0 to 1 s.
    pub delay: Duration,
    /// Pause between pulses, 0 to 3 s.
    pub repeat_delay: Duration,
}

/// A particle flung away from the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    /// Spawn point (the pointer).
    pub origin: Vec2,
    /// Landing point, within 60 px of `origin` on each axis.
    pub target: Vec2,
    /// Flight time, 0.7 to 1.9 s.
    pub duration: Duration,
}

/// A mote drifting up across a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    /// Spawn point in px.
    pub origin: Vec2,
    /// Starting opacity, 0.3 to 0.8.
    pub opacity: f32,
    /// Starting scale, 0.3 to 1.0.
    pub scale: f32,
    /// Distance risen before fading, 100 to 300 px.
    pub rise: f32,
    /// Full drift, 20 to 30 s.
    pub duration: Duration,
    /// Start offset, 0 to 20 s.
    pub delay: Duration,
}

/// Maximum burst displacement per axis.
pub const BURST_SPREAD: f32 = 60.0;

/// Seeded generator for all decorative particles.
#[derive(Debug, Clone)]
pub struct Scenery {
    rng: StdRng,
}

impl Scenery {
    /// Deterministic scenery.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scenery seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Background stars.
    pub fn stars(&mut self, count: usize) -> Vec<Star> {
        (0..count)
            .map(|_| Star {
                position: self.unit_point(),
                size: self.rng.random::<f32>() * 2.0 + 1.0,
                opacity: self.rng.random::<f32>() * 0.5 + 0.2,
                twinkle: self.seconds(2.0, 5.0),
                delay: self.seconds(0.0, 5.0),
            })
            .collect()
    }

    /// Sparkles for a hovered card.
    pub fn sparkles(&mut self, count: usize) -> Vec<Sparkle> {
        (0..count)
            .map(|_| Sparkle {
                position: self.unit_point(),
                duration: Duration::from_millis(1500),
                delay: self.seconds(0.0, 1.0),
                repeat_delay: self.seconds(0.0, 3.0),
            })
            .collect()
    }

    /// Particles bursting out of `pointer`.
    pub fn burst(&mut self, pointer: Vec2, count: usize) -> Vec<BurstParticle> {
        (0..count)
            .map(|_| {
                let jitter = Vec2::new(
                    self.rng.random_range(-BURST_SPREAD..=BURST_SPREAD),
                    self.rng.random_range(-BURST_SPREAD..=BURST_SPREAD),
                );
                BurstParticle {
                    origin: pointer,
                    target: pointer + jitter,
                    duration: self.seconds(0.7, 1.9),
                }
            })
            .collect()
    }

    /// Drifting motes across a `viewport`-sized area.
    pub fn motes(&mut self, viewport: Vec2, count: usize) -> Vec<Mote> {
        (0..count)
            .map(|_| Mote {
                origin: self.unit_point() * viewport,
                opacity: self.rng.random::<f32>() * 0.5 + 0.3,
                scale: self.rng.random::<f32>() * 0.7 + 0.3,
                rise: self.rng.random::<f32>() * 200.0 + 100.0,
                duration: self.seconds(20.0, 30.0),
                delay: self.seconds(0.0, 20.0),
            })
            .collect()
    }

    fn unit_point(&mut self) -> Vec2 {
        Vec2::new(self.rng.random::<f32>(), self.rng.random::<f32>())
    }

    fn seconds(&mut self, min: f32, max: f32) -> Duration {
        Duration::from_secs_f32(self.rng.random::<f32>() * (max - min) + min)
    }
}

/// Particle budget per device class.
#[must_use]
pub fn mote_count(device: DeviceClass) -> usize {
    if device.is_mobile {
        8
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scenery() {
        let a = Scenery::seeded(42).stars(50);
        let b = Scenery::seeded(42).stars(50);
        assert_eq!(a, b);
        assert_ne!(a, Scenery::seeded(43).stars(50));
    }

    #[test]
    fn stars_stay_in_range() {
        for star in Scenery::seeded(7).stars(500) {
            assert!((1.0..=3.0).contains(&star.size));
            assert!((0.2..=0.7).contains(&star.opacity));
            assert!(star.twinkle >= Duration::from_secs(2));
            assert!(star.twinkle <= Duration::from_secs(5));
            assert!(star.delay <= Duration::from_secs(5));
            assert!(star.position.cmpge(Vec2::ZERO).all());
            assert!(star.position.cmplt(Vec2::ONE).all());
        }
    }

    #[test]
    fn burst_lands_near_pointer() {
        let pointer = Vec2::new(120.0, 80.0);
        let particles = Scenery::seeded(1).burst(pointer, 100);
        assert_eq!(particles.len(), 100);
        for p in particles {
            assert_eq!(p.origin, pointer);
            let d = (p.target - pointer).abs();
            assert!(d.x <= BURST_SPREAD && d.y <= BURST_SPREAD);
        }
    }

    #[test]
    fn motes_fill_the_viewport() {
        let viewport = Vec2::new(1280.0, 720.0);
        for mote in Scenery::seeded(3).motes(viewport, 200) {
            assert!(mote.origin.cmple(viewport).all());
            assert!((100.0..=300.0).contains(&mote.rise));
        }
    }

    #[test]
    fn mobile_gets_fewer_motes() {
        let mobile = DeviceClass {
            is_mobile: true,
            is_compact: false,
        };
        assert!(mote_count(mobile) < mote_count(DeviceClass::default()));
    }
}
