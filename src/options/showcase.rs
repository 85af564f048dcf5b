use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::showcase::{CameraSetup, ModelPlacement, ShowcasePresets};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Showcase", inline)]
#[serde(default)]
/// 3D model placement presets.
pub struct ShowcaseOptions {
    /// Model scale on compact viewports.
    #[schemars(title = "Compact Scale", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub compact_scale: f32,
    /// Model translation on compact viewports.
    #[schemars(skip)]
    pub compact_position: [f32; 3],
    /// Model scale elsewhere.
    #[schemars(title = "Regular Scale", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub regular_scale: f32,
    /// Model translation elsewhere.
    #[schemars(skip)]
    pub regular_position: [f32; 3],
    /// Model Euler rotation, radians.
    #[schemars(skip)]
    pub rotation: [f32; 3],
    /// Initial camera position.
    #[schemars(skip)]
    pub camera_position: [f32; 3],
    /// Vertical field of view, degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub fov: f32,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        let presets = ShowcasePresets::default();
        Self {
            compact_scale: presets.compact.scale,
            compact_position: presets.compact.position.to_array(),
            regular_scale: presets.regular.scale,
            regular_position: presets.regular.position.to_array(),
            rotation: presets.regular.rotation.to_array(),
            camera_position: presets.camera.position.to_array(),
            fov: presets.camera.fov_deg,
        }
    }
}

impl ShowcaseOptions {
    /// Placement presets.
    #[must_use]
    pub fn presets(&self) -> ShowcasePresets {
        let rotation = Vec3::from_array(self.rotation);
        ShowcasePresets {
            compact: ModelPlacement {
                scale: self.compact_scale,
                position: Vec3::from_array(self.compact_position),
                rotation,
            },
            regular: ModelPlacement {
                scale: self.regular_scale,
                position: Vec3::from_array(self.regular_position),
                rotation,
            },
            camera: CameraSetup {
                position: Vec3::from_array(self.camera_position),
                fov_deg: self.fov,
            },
        }
    }
}
