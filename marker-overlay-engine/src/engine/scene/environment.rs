use bevy::core_pipeline::Skybox;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::Exposure;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::camera::SceneCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::parameters::RenderParameters;

/// Attach image-based lighting and the skybox to the camera once both
/// cubemaps are in.
pub fn attach_environment(
    mut commands: Commands,
    loading_progress: Res<LoadingProgress>,
    scene_assets: Res<SceneAssets>,
    parameters: Res<RenderParameters>,
    cameras: Query<Entity, (With<SceneCamera>, Without<EnvironmentMapLight>)>,
) {
    if !loading_progress.environment_loaded() {
        return;
    }

    for camera in &cameras {
        commands.entity(camera).insert((
            EnvironmentMapLight {
                diffuse_map: scene_assets.environment_diffuse.clone(),
                specular_map: scene_assets.environment_specular.clone(),
                intensity: parameters.environment_nits(),
                ..default()
            },
            Skybox {
                image: scene_assets.environment_specular.clone(),
                brightness: parameters.skybox_nits(),
                ..default()
            },
        ));
        debug!("Environment attached to camera {camera}");
    }
}

pub fn apply_environment_parameters(
    parameters: Res<RenderParameters>,
    mut cameras: Query<
        (
            &mut Tonemapping,
            &mut Exposure,
            Option<&mut EnvironmentMapLight>,
            Option<&mut Skybox>,
        ),
        With<SceneCamera>,
    >,
) {
    debug!(
        "Tone mapping {} at exposure {:.2}",
        parameters.tone_mapping.label(),
        parameters.exposure
    );
    for (mut tonemapping, mut exposure, environment, skybox) in &mut cameras {
        *tonemapping = parameters.tone_mapping.tonemapping();
        *exposure = parameters.camera_exposure();
        if let Some(mut environment) = environment {
            environment.intensity = parameters.environment_nits();
        }
        if let Some(mut skybox) = skybox {
            skybox.brightness = parameters.skybox_nits();
        }
    }
}
