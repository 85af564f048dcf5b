//! 3D model showcase.
//!
//! The hero section shows a pre-built model the user can spin horizontally.
//! This module owns placement presets and orbit constraints; drawing is
//! delegated to a [`SceneRenderer`] supplied by the host.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;
use crate::input::InteractionEvent;

/// Opaque reference to a pre-built 3D asset (geometry and materials).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    /// Handle for the asset at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

/// Model transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPlacement {
    /// Uniform scale.
    pub scale: f32,
    /// Translation.
    pub position: Vec3,
    /// XYZ Euler rotation, radians.
    pub rotation: Vec3,
}

impl ModelPlacement {
    /// Rotation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Initial camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSetup {
    /// Eye position.
    pub position: Vec3,
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
}

/// Fixed scene lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLighting {
    /// Hemisphere fill.
    pub hemisphere_intensity: f32,
    /// Shadow-casting spot light position.
    pub spot_position: Vec3,
    /// Spot cone angle, radians.
    pub spot_angle: f32,
    /// Spot edge softness in `[0, 1]`.
    pub spot_penumbra: f32,
    /// Spot intensity.
    pub spot_intensity: f32,
    /// Point light at the origin.
    pub point_intensity: f32,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            hemisphere_intensity: 0.15,
            spot_position: Vec3::new(-20.0, 50.0, 10.0),
            spot_angle: 0.12,
            spot_penumbra: 1.0,
            spot_intensity: 1.0,
            point_intensity: 1.0,
        }
    }
}

/// Placement presets selected by the compact flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShowcasePresets {
    /// Narrow viewports.
    pub compact: ModelPlacement,
    /// Everything else.
    pub regular: ModelPlacement,
    /// Starting camera.
    pub camera: CameraSetup,
}

impl ShowcasePresets {
    /// Placement for the given compact flag.
    #[must_use]
    pub fn placement(&self, is_compact: bool) -> ModelPlacement {
        if is_compact {
            self.compact
        } else {
            self.regular
        }
    }
}

impl Default for ShowcasePresets {
    fn default() -> Self {
        let rotation = Vec3::new(-0.01, -0.2, -0.1);
        Self {
            compact: ModelPlacement {
                scale: 0.7,
                position: Vec3::new(0.0, -3.0, -2.2),
                rotation,
            },
            regular: ModelPlacement {
                scale: 0.75,
                position: Vec3::new(0.0, -3.25, -1.5),
                rotation,
            },
            camera: CameraSetup {
                position: Vec3::new(20.0, 3.0, 5.0),
                fov_deg: 25.0,
            },
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    /// Model to draw.
    pub asset: AssetHandle,
    /// Model transform.
    pub placement: ModelPlacement,
    /// Camera eye after orbit constraints.
    pub eye: Vec3,
    /// Camera look-at target.
    pub target: Vec3,
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
    /// Lights.
    pub lighting: SceneLighting,
}

/// Draws scene descriptions. Implemented by the host (WebGL canvas, test
/// recorder).
pub trait SceneRenderer {
    /// Render one frame.
    fn render(&mut self, scene: &SceneDescription) -> Result<(), VitrineError>;
}

// ── Orbit controls ──

/// Spherical orbit around a target.
///
/// Polar angle is measured from +Y. Zoom can be disabled, and the polar
/// range can be collapsed to a single angle to allow horizontal spinning
/// only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    min_polar: f32,
    max_polar: f32,
    zoom_enabled: bool,
    rotate_speed: f32,
}

impl OrbitControls {
    /// Orbit that starts looking at `target` from `eye`.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        let (azimuth, polar) = if distance > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / distance).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, FRAC_PI_2)
        };
        Self {
            target,
            distance,
            azimuth,
            polar,
            min_polar: 0.0,
            max_polar: std::f32::consts::PI,
            zoom_enabled: true,
            rotate_speed: 1.0,
        }
    }

    /// Horizontal-only orbit with zoom disabled.
    #[must_use]
    pub fn horizontal(eye: Vec3, target: Vec3) -> Self {
        Self::new(eye, target)
            .with_polar_range(FRAC_PI_2, FRAC_PI_2)
            .with_zoom(false)
    }

    /// Restrict the polar angle, clamping the current one into range.
    #[must_use]
    pub fn with_polar_range(mut self, min: f32, max: f32) -> Self {
        self.min_polar = min.min(max);
        self.max_polar = max.max(min);
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
        self
    }

    /// Enable or disable zoom.
    #[must_use]
    pub fn with_zoom(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    /// Current azimuth, radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Current polar angle, radians.
    #[must_use]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Eye distance from target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.distance
    }

    /// Rotate by a pointer drag of `delta` px over a view `view_height` px
    /// tall. A drag of the full height turns one revolution.
    pub fn rotate(&mut self, delta: Vec2, view_height: f32) {
        if view_height <= 0.0 || !delta.is_finite() {
            return;
        }
        let scale = TAU * self.rotate_speed / view_height;
        self.azimuth = (self.azimuth - delta.x * scale).rem_euclid(TAU);
        self.polar =
            (self.polar - delta.y * scale).clamp(self.min_polar, self.max_polar);
    }

    /// Scale the distance by `factor`. Returns `false` when zoom is
    /// disabled.
    pub fn zoom(&mut self, factor: f32) -> bool {
        if !self.zoom_enabled || !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        self.distance = (self.distance * factor).clamp(1.0, 1000.0);
        true
    }
}

// ── Showcase state ──

/// Orbit and preset state of one showcase surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseState {
    asset: AssetHandle,
    presets: ShowcasePresets,
    lighting: SceneLighting,
    controls: OrbitControls,
    is_compact: bool,
    drag_from: Option<Vec2>,
}

impl ShowcaseState {
    /// Showcase for `asset` with horizontal orbit controls.
    #[must_use]
    pub fn new(asset: AssetHandle, presets: ShowcasePresets) -> Self {
        Self {
            asset,
            controls: OrbitControls::horizontal(
                presets.camera.position,
                Vec3::ZERO,
            ),
            presets,
            lighting: SceneLighting::default(),
            is_compact: false,
            drag_from: None,
        }
    }

    /// Orbit controls.
    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Whether the compact preset is active.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.is_compact
    }

    /// Switch presets. Returns `true` when the flag changed.
    pub fn set_compact(&mut self, is_compact: bool) -> bool {
        let changed = self.is_compact != is_compact;
        self.is_compact = is_compact;
        changed
    }

    /// Feed a drag gesture. Returns `true` when the camera moved.
    pub fn handle(&mut self, event: InteractionEvent, view_height: f32) -> bool {
        match event {
            InteractionEvent::Begin { position, .. } => {
                self.drag_from = Some(position);
                false
            }
            InteractionEvent::Move { position } => {
                let Some(from) = self.drag_from.replace(position) else {
                    return false;
                };
                let before = self.controls;
                self.controls.rotate(position - from, view_height);
                self.controls != before
            }
            InteractionEvent::End { .. } => {
                self.drag_from = None;
                false
            }
        }
    }

    /// Scene for the current state.
    #[must_use]
    pub fn describe(&self) -> SceneDescription {
        SceneDescription {
            asset: self.asset.clone(),
            placement: self.presets.placement(self.is_compact),
            eye: self.controls.eye(),
            target: self.controls.target(),
            fov_deg: self.presets.camera.fov_deg,
            lighting: self.lighting,
        }
    }
}

/// A showcase bound to a renderer. Frames are drawn on demand only.
#[derive(Debug)]
pub struct Showcase<R: SceneRenderer> {
    state: ShowcaseState,
    renderer: R,
    dirty: bool,
}

impl<R: SceneRenderer> Showcase<R> {
    /// Bind `state` to `renderer`; the first frame is pending.
    pub fn new(state: ShowcaseState, renderer: R) -> Self {
        Self {
            state,
            renderer,
            dirty: true,
        }
    }

    /// Showcase state.
    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    /// The wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Switch presets.
    pub fn set_compact(&mut self, is_compact: bool) {
        self.dirty |= self.state.set_compact(is_compact);
    }

    /// Feed a drag gesture.
    pub fn handle(&mut self, event: InteractionEvent, view_height: f32) {
        self.dirty |= self.state.handle(event, view_height);
    }

    /// Draw if anything changed since the last frame. Renderer failures are
    /// logged and the frame is retried on the next call.
    pub fn frame(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        match self.renderer.render(&self.state.describe()) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                log::error!("showcase render failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerKind;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<SceneDescription>,
        fail: bool,
    }

    impl SceneRenderer for Recorder {
        fn render(
            &mut self,
            scene: &SceneDescription,
        ) -> Result<(), VitrineError> {
            if self.fail {
                return Err(VitrineError::Browser("context lost".to_owned()));
            }
            self.frames.push(scene.clone());
            Ok(())
        }
    }

    fn state() -> ShowcaseState {
        ShowcaseState::new(
            AssetHandle::new("desktop_pc/scene.gltf"),
            ShowcasePresets::default(),
        )
    }

    #[test]
    fn compact_flag_selects_preset() {
        let mut s = state();
        assert_eq!(s.describe().placement.scale, 0.75);
        assert!(s.set_compact(true));
        let scene = s.describe();
        assert_eq!(scene.placement.scale, 0.7);
        assert_eq!(scene.placement.position, Vec3::new(0.0, -3.0, -2.2));
        assert!(!s.set_compact(true));
    }

    #[test]
    fn orbit_is_locked_to_horizon() {
        let mut s = state();
        assert!((s.controls().polar() - FRAC_PI_2).abs() < 1e-6);
        let _ = s.handle(
            InteractionEvent::Begin {
                position: Vec2::ZERO,
                kind: PointerKind::Mouse,
            },
            500.0,
        );
        assert!(s.handle(
            InteractionEvent::Move {
                position: Vec2::new(40.0, -90.0)
            },
            500.0
        ));
        assert!((s.controls().polar() - FRAC_PI_2).abs() < 1e-6);
        assert!(s.describe().eye.y.abs() < 1e-4);
    }

    #[test]
    fn rotation_preserves_distance() {
        let mut controls =
            OrbitControls::horizontal(Vec3::new(20.0, 3.0, 5.0), Vec3::ZERO);
        let d = controls.distance();
        controls.rotate(Vec2::new(123.0, 0.0), 400.0);
        assert!((controls.eye().length() - d).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_disabled() {
        let mut controls =
            OrbitControls::horizontal(Vec3::new(20.0, 3.0, 5.0), Vec3::ZERO);
        let d = controls.distance();
        assert!(!controls.zoom(0.5));
        assert_eq!(controls.distance(), d);
    }

    #[test]
    fn move_without_begin_is_ignored() {
        let mut s = state();
        assert!(!s.handle(
            InteractionEvent::Move {
                position: Vec2::new(10.0, 0.0)
            },
            500.0
        ));
    }

    #[test]
    fn frames_render_on_demand() {
        let mut showcase = Showcase::new(state(), Recorder::default());
        assert!(showcase.frame());
        assert!(!showcase.frame());
        showcase.set_compact(true);
        assert!(showcase.frame());
        assert_eq!(showcase.renderer().frames.len(), 2);
    }

    #[test]
    fn failed_frame_is_retried() {
        let mut showcase = Showcase::new(
            state(),
            Recorder {
                fail: true,
                ..Recorder::default()
            },
        );
        assert!(!showcase.frame());
        showcase.renderer.fail = false;
        assert!(showcase.frame());
    }
}
