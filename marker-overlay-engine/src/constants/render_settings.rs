use bevy::prelude::*;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(4.0, 1.0, -4.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

pub const MODEL_SCALE: f32 = 10.0;
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);

pub const LIGHT_POSITION: Vec3 = Vec3::new(-4.0, 6.5, 2.5);
pub const LIGHT_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const LIGHT_INTENSITY: f32 = 1.0;
/// Illuminance in lux for a light intensity of 1.0.
pub const LIGHT_LUX_PER_UNIT: f32 = 2_000.0;
pub const LIGHT_SHADOW_FAR: f32 = 15.0;

pub const ENVIRONMENT_INTENSITY: f32 = 1.0;
/// Environment light intensity in cd/m² for an environment intensity of 1.0.
pub const ENVIRONMENT_NITS_PER_UNIT: f32 = 900.0;
pub const SKYBOX_BRIGHTNESS: f32 = 1.0;
pub const SKYBOX_NITS_PER_UNIT: f32 = 1_000.0;

pub const TONE_MAPPING_EXPOSURE: f32 = 3.0;

/// Wait between all assets reporting loaded and markers going live.
pub const SCENE_SETTLE_SECONDS: f32 = 0.5;
/// Duration of the loading veil fade once the scene is live.
pub const VEIL_FADE_SECONDS: f32 = 3.0;

pub const MARKER_SIZE: f32 = 40.0;

pub const LOG_FILTER: &str = "wgpu=error,naga=warn,marker_overlay_engine=info";
