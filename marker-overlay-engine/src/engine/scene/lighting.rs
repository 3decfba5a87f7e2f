use bevy::pbr::{CascadeShadowConfig, CascadeShadowConfigBuilder};
use bevy::prelude::*;

use crate::engine::scene::parameters::RenderParameters;

#[derive(Component)]
pub struct KeyLight;

pub fn spawn_key_light(commands: &mut Commands, parameters: &RenderParameters) {
    commands.spawn((
        Name::new("KeyLight"),
        KeyLight,
        DirectionalLight {
            illuminance: parameters.light_illuminance(),
            shadows_enabled: parameters.light_shadows,
            ..default()
        },
        parameters.light_transform(),
        shadow_cascades(parameters.shadow_far),
    ));
}

/// Single cascade reaching `far`, clamped so the builder invariants hold for
/// any value the debug panel produces.
pub fn shadow_cascades(far: f32) -> CascadeShadowConfig {
    let far = far.max(1.0);
    CascadeShadowConfigBuilder {
        num_cascades: 1,
        minimum_distance: 0.1,
        maximum_distance: far,
        first_cascade_far_bound: far,
        ..default()
    }
    .build()
}

pub fn apply_light_parameters(
    parameters: Res<RenderParameters>,
    mut lights: Query<
        (&mut DirectionalLight, &mut Transform, &mut CascadeShadowConfig),
        With<KeyLight>,
    >,
) {
    for (mut light, mut transform, mut cascades) in &mut lights {
        light.illuminance = parameters.light_illuminance();
        light.shadows_enabled = parameters.light_shadows;
        *transform = parameters.light_transform();
        *cascades = shadow_cascades(parameters.shadow_far);
    }
}
