use bevy::prelude::*;

use crate::constants::scene_defaults::{POINT_COORDINATE_RANGE, POINT_COORDINATE_STEP};
use crate::engine::assets::scene_config::ToneMappingMode;
use crate::engine::scene::parameters::RenderParameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    Float { min: f32, max: f32, step: f32 },
    Toggle,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    Float(f32),
    Toggle(bool),
    Choice(usize),
}

/// Everything the panel can edit: the render parameters and the first
/// tracked point, which doubles as the test point for placing markers.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugTargets {
    pub parameters: RenderParameters,
    pub test_point: Vec3,
    pub test_point_shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlField {
    TestPointX,
    TestPointY,
    TestPointZ,
    ShowTestPoint,
    ModelRotation,
    ModelShadows,
    EnvironmentIntensity,
    SkyboxBrightness,
    LightIntensity,
    LightPositionX,
    LightPositionY,
    LightPositionZ,
    LightTargetX,
    LightTargetY,
    LightTargetZ,
    LightShadows,
    ShadowFar,
    ToneMapping,
    Exposure,
}

impl ControlField {
    pub fn read(self, targets: &DebugTargets) -> ControlValue {
        let parameters = &targets.parameters;
        match self {
            ControlField::TestPointX => ControlValue::Float(targets.test_point.x),
            ControlField::TestPointY => ControlValue::Float(targets.test_point.y),
            ControlField::TestPointZ => ControlValue::Float(targets.test_point.z),
            ControlField::ShowTestPoint => ControlValue::Toggle(targets.test_point_shown),
            ControlField::ModelRotation => ControlValue::Float(parameters.model_rotation),
            ControlField::ModelShadows => ControlValue::Toggle(parameters.model_shadows),
            ControlField::EnvironmentIntensity => {
                ControlValue::Float(parameters.environment_intensity)
            }
            ControlField::SkyboxBrightness => ControlValue::Float(parameters.skybox_brightness),
            ControlField::LightIntensity => ControlValue::Float(parameters.light_intensity),
            ControlField::LightPositionX => ControlValue::Float(parameters.light_position.x),
            ControlField::LightPositionY => ControlValue::Float(parameters.light_position.y),
            ControlField::LightPositionZ => ControlValue::Float(parameters.light_position.z),
            ControlField::LightTargetX => ControlValue::Float(parameters.light_target.x),
            ControlField::LightTargetY => ControlValue::Float(parameters.light_target.y),
            ControlField::LightTargetZ => ControlValue::Float(parameters.light_target.z),
            ControlField::LightShadows => ControlValue::Toggle(parameters.light_shadows),
            ControlField::ShadowFar => ControlValue::Float(parameters.shadow_far),
            ControlField::ToneMapping => ControlValue::Choice(parameters.tone_mapping.index()),
            ControlField::Exposure => ControlValue::Float(parameters.exposure),
        }
    }

    /// Store `value` if its variant matches the field; mismatches are ignored.
    pub fn write(self, targets: &mut DebugTargets, value: ControlValue) {
        let parameters = &mut targets.parameters;
        match (self, value) {
            (ControlField::TestPointX, ControlValue::Float(v)) => targets.test_point.x = v,
            (ControlField::TestPointY, ControlValue::Float(v)) => targets.test_point.y = v,
            (ControlField::TestPointZ, ControlValue::Float(v)) => targets.test_point.z = v,
            (ControlField::ShowTestPoint, ControlValue::Toggle(v)) => targets.test_point_shown = v,
            (ControlField::ModelRotation, ControlValue::Float(v)) => parameters.model_rotation = v,
            (ControlField::ModelShadows, ControlValue::Toggle(v)) => parameters.model_shadows = v,
            (ControlField::EnvironmentIntensity, ControlValue::Float(v)) => {
                parameters.environment_intensity = v
            }
            (ControlField::SkyboxBrightness, ControlValue::Float(v)) => {
                parameters.skybox_brightness = v
            }
            (ControlField::LightIntensity, ControlValue::Float(v)) => {
                parameters.light_intensity = v
            }
            (ControlField::LightPositionX, ControlValue::Float(v)) => parameters.light_position.x = v,
            (ControlField::LightPositionY, ControlValue::Float(v)) => parameters.light_position.y = v,
            (ControlField::LightPositionZ, ControlValue::Float(v)) => parameters.light_position.z = v,
            (ControlField::LightTargetX, ControlValue::Float(v)) => parameters.light_target.x = v,
            (ControlField::LightTargetY, ControlValue::Float(v)) => parameters.light_target.y = v,
            (ControlField::LightTargetZ, ControlValue::Float(v)) => parameters.light_target.z = v,
            (ControlField::LightShadows, ControlValue::Toggle(v)) => parameters.light_shadows = v,
            (ControlField::ShadowFar, ControlValue::Float(v)) => parameters.shadow_far = v,
            (ControlField::ToneMapping, ControlValue::Choice(index)) => {
                if let Some(mode) = ToneMappingMode::ALL.get(index) {
                    parameters.tone_mapping = *mode;
                }
            }
            (ControlField::Exposure, ControlValue::Float(v)) => parameters.exposure = v,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Control {
    pub name: &'static str,
    pub kind: ControlKind,
    pub field: ControlField,
}

const fn float(
    name: &'static str,
    field: ControlField,
    min: f32,
    max: f32,
    step: f32,
) -> Control {
    Control {
        name,
        kind: ControlKind::Float { min, max, step },
        field,
    }
}

const fn toggle(name: &'static str, field: ControlField) -> Control {
    Control {
        name,
        kind: ControlKind::Toggle,
        field,
    }
}

const POINT_MIN: f32 = POINT_COORDINATE_RANGE.0;
const POINT_MAX: f32 = POINT_COORDINATE_RANGE.1;

/// Panel rows in display order.
pub const CONTROLS: [Control; 19] = [
    toggle("show test point", ControlField::ShowTestPoint),
    float("test point x", ControlField::TestPointX, POINT_MIN, POINT_MAX, POINT_COORDINATE_STEP),
    float("test point y", ControlField::TestPointY, POINT_MIN, POINT_MAX, POINT_COORDINATE_STEP),
    float("test point z", ControlField::TestPointZ, POINT_MIN, POINT_MAX, POINT_COORDINATE_STEP),
    float("rotate model (x PI)", ControlField::ModelRotation, 0.0, 2.0, 0.01),
    toggle("model shadows", ControlField::ModelShadows),
    float("environment intensity", ControlField::EnvironmentIntensity, 1.0, 10.0, 0.1),
    float("skybox brightness", ControlField::SkyboxBrightness, 0.0, 10.0, 0.1),
    float("light intensity", ControlField::LightIntensity, 0.0, 10.0, 0.1),
    float("light x", ControlField::LightPositionX, -10.0, 10.0, 0.1),
    float("light y", ControlField::LightPositionY, -10.0, 10.0, 0.1),
    float("light z", ControlField::LightPositionZ, -10.0, 10.0, 0.1),
    float("light target x", ControlField::LightTargetX, -10.0, 10.0, 0.1),
    float("light target y", ControlField::LightTargetY, -10.0, 10.0, 0.1),
    float("light target z", ControlField::LightTargetZ, -10.0, 10.0, 0.1),
    toggle("light casts shadows", ControlField::LightShadows),
    float("shadow far", ControlField::ShadowFar, 1.0, 20.0, 0.5),
    Control {
        name: "tone mapping",
        kind: ControlKind::Choice(&ToneMappingMode::LABELS),
        field: ControlField::ToneMapping,
    },
    float("tone mapping exposure", ControlField::Exposure, 0.0, 10.0, 0.1),
];

impl Control {
    /// Step the control once in `direction` (+1 up, -1 down). Numeric steps
    /// are scaled by `multiplier` and clamped to the range, toggles flip and
    /// choices wrap around.
    pub fn adjust(&self, targets: &mut DebugTargets, direction: f32, multiplier: f32) {
        let next = match (self.kind, self.field.read(targets)) {
            (ControlKind::Float { min, max, step }, ControlValue::Float(value)) => {
                ControlValue::Float((value + step * direction * multiplier).clamp(min, max))
            }
            (ControlKind::Toggle, ControlValue::Toggle(value)) => ControlValue::Toggle(!value),
            (ControlKind::Choice(options), ControlValue::Choice(index)) => {
                let count = options.len() as i64;
                let offset = if direction < 0.0 { -1 } else { 1 };
                ControlValue::Choice((index as i64 + offset).rem_euclid(count.max(1)) as usize)
            }
            _ => return,
        };
        self.field.write(targets, next);
    }

    pub fn display_value(&self, targets: &DebugTargets) -> String {
        match (self.kind, self.field.read(targets)) {
            (ControlKind::Float { step, .. }, ControlValue::Float(value)) => {
                let decimals = if step < 0.01 { 3 } else { 2 };
                format!("{value:.decimals$}")
            }
            (_, ControlValue::Toggle(value)) => (if value { "on" } else { "off" }).to_string(),
            (ControlKind::Choice(options), ControlValue::Choice(index)) => {
                options.get(index).copied().unwrap_or("?").to_string()
            }
            (_, ControlValue::Float(value)) => format!("{value:.2}"),
            (_, ControlValue::Choice(index)) => index.to_string(),
        }
    }
}
