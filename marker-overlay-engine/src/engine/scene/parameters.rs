use bevy::prelude::*;
use bevy::render::camera::Exposure;

use crate::constants::render_settings::{
    ENVIRONMENT_NITS_PER_UNIT, LIGHT_LUX_PER_UNIT, SKYBOX_NITS_PER_UNIT,
};
use crate::engine::assets::scene_config::{SceneConfig, ToneMappingMode};

/// Live rendering parameters. Seeded from the scene config and edited by the
/// debug panel; scene systems re-apply them whenever the resource changes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Model rotation about Y in half turns.
    pub model_rotation: f32,
    pub model_shadows: bool,
    pub environment_intensity: f32,
    pub skybox_brightness: f32,
    pub light_intensity: f32,
    pub light_position: Vec3,
    pub light_target: Vec3,
    pub light_shadows: bool,
    pub shadow_far: f32,
    pub tone_mapping: ToneMappingMode,
    /// Linear exposure multiplier, 1.0 leaves the camera default untouched.
    pub exposure: f32,
}

impl RenderParameters {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            model_rotation: config.model.rotation,
            model_shadows: config.model.cast_shadows,
            environment_intensity: config.environment.intensity,
            skybox_brightness: config.environment.skybox_brightness,
            light_intensity: config.light.intensity,
            light_position: Vec3::from_array(config.light.position),
            light_target: Vec3::from_array(config.light.target),
            light_shadows: config.light.cast_shadows,
            shadow_far: config.light.shadow_far,
            tone_mapping: config.tone_mapping.mode,
            exposure: config.tone_mapping.exposure,
        }
    }

    pub fn model_rotation(&self) -> Quat {
        Quat::from_rotation_y(std::f32::consts::PI * self.model_rotation)
    }

    pub fn light_illuminance(&self) -> f32 {
        self.light_intensity * LIGHT_LUX_PER_UNIT
    }

    pub fn environment_nits(&self) -> f32 {
        self.environment_intensity * ENVIRONMENT_NITS_PER_UNIT
    }

    pub fn skybox_nits(&self) -> f32 {
        self.skybox_brightness * SKYBOX_NITS_PER_UNIT
    }

    /// Doubling the exposure multiplier opens the camera by one stop.
    pub fn camera_exposure(&self) -> Exposure {
        let base = Exposure::default().ev100;
        Exposure {
            ev100: base - self.exposure.max(0.001).log2(),
        }
    }

    pub fn light_transform(&self) -> Transform {
        let transform = Transform::from_translation(self.light_position);
        if self.light_position.distance_squared(self.light_target) > f32::EPSILON {
            transform.looking_at(self.light_target, Vec3::Y)
        } else {
            transform
        }
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}
