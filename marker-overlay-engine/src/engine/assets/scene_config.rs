use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::path::{
    DEFAULT_ENVIRONMENT_DIFFUSE_PATH, DEFAULT_ENVIRONMENT_SPECULAR_PATH, DEFAULT_MODEL_PATH,
};
use crate::constants::render_settings::*;
use crate::constants::scene_defaults::DEFAULT_POINTS;
use crate::engine::overlay::proxy::OccluderProxyConfig;

/// Scene description as a bevy asset. Mirrors `scene.json`; every field is
/// optional in the file and falls back to the compiled-in defaults.
#[derive(Asset, TypePath, Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub model: ModelConfig,
    pub environment: EnvironmentConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub tone_mapping: ToneMappingConfig,
    pub points: Vec<PointConfig>,
    pub occluder_proxies: Vec<OccluderProxyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    pub scale: f32,
    pub offset: [f32; 3],
    /// Rotation about Y in half turns (0..2).
    pub rotation: f32,
    pub cast_shadows: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub diffuse_path: String,
    pub specular_path: String,
    pub intensity: f32,
    pub skybox_brightness: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub damping: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub intensity: f32,
    pub cast_shadows: bool,
    pub shadow_far: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneMappingConfig {
    pub mode: ToneMappingMode,
    pub exposure: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointConfig {
    pub position: [f32; 3],
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMappingMode {
    None,
    #[default]
    Reinhard,
    ReinhardLuminance,
    AcesFitted,
    AgX,
    TonyMcMapface,
    BlenderFilmic,
}

impl ToneMappingMode {
    pub const ALL: [ToneMappingMode; 7] = [
        ToneMappingMode::None,
        ToneMappingMode::Reinhard,
        ToneMappingMode::ReinhardLuminance,
        ToneMappingMode::AcesFitted,
        ToneMappingMode::AgX,
        ToneMappingMode::TonyMcMapface,
        ToneMappingMode::BlenderFilmic,
    ];

    /// Display names, in the same order as `ALL`.
    pub const LABELS: [&'static str; 7] = [
        "None",
        "Reinhard",
        "Reinhard Luminance",
        "ACES Fitted",
        "AgX",
        "Tony McMapface",
        "Blender Filmic",
    ];

    pub fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    pub fn tonemapping(self) -> Tonemapping {
        match self {
            ToneMappingMode::None => Tonemapping::None,
            ToneMappingMode::Reinhard => Tonemapping::Reinhard,
            ToneMappingMode::ReinhardLuminance => Tonemapping::ReinhardLuminance,
            ToneMappingMode::AcesFitted => Tonemapping::AcesFitted,
            ToneMappingMode::AgX => Tonemapping::AgX,
            ToneMappingMode::TonyMcMapface => Tonemapping::TonyMcMapface,
            ToneMappingMode::BlenderFilmic => Tonemapping::BlenderFilmic,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            environment: EnvironmentConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            tone_mapping: ToneMappingConfig::default(),
            points: DEFAULT_POINTS
                .iter()
                .map(|(position, label, text)| PointConfig {
                    position: *position,
                    label: label.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            occluder_proxies: Vec::new(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_MODEL_PATH.to_string(),
            scale: MODEL_SCALE,
            offset: MODEL_OFFSET.to_array(),
            rotation: 0.0,
            cast_shadows: true,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            diffuse_path: DEFAULT_ENVIRONMENT_DIFFUSE_PATH.to_string(),
            specular_path: DEFAULT_ENVIRONMENT_SPECULAR_PATH.to_string(),
            intensity: ENVIRONMENT_INTENSITY,
            skybox_brightness: SKYBOX_BRIGHTNESS,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION.to_array(),
            target: CAMERA_TARGET.to_array(),
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            damping: true,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: LIGHT_POSITION.to_array(),
            target: LIGHT_TARGET.to_array(),
            intensity: LIGHT_INTENSITY,
            cast_shadows: true,
            shadow_far: LIGHT_SHADOW_FAR,
        }
    }
}

impl Default for ToneMappingConfig {
    fn default() -> Self {
        Self {
            mode: ToneMappingMode::Reinhard,
            exposure: TONE_MAPPING_EXPOSURE,
        }
    }
}

impl SceneConfig {
    pub fn model_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.model.offset))
            .with_scale(Vec3::splat(self.model.scale))
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera.position)
    }

    pub fn camera_target(&self) -> Vec3 {
        Vec3::from_array(self.camera.target)
    }
}
