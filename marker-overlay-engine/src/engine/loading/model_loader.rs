use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::error::{AssetKind, AssetLoadError, AssetPoll, poll_asset};
use crate::engine::loading::occluder_resolver::resolve_model_occluders;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::model::ModelRoot;

/// Third stage: the model is only requested after the environment maps, so
/// its materials never render without reflections.
pub fn request_model(
    mut loading_progress: ResMut<LoadingProgress>,
    mut scene_assets: ResMut<SceneAssets>,
    config: Option<Res<SceneConfig>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_requested || !loading_progress.environment_loaded() {
        return;
    }
    let Some(config) = config else {
        return;
    };

    info!("Loading model from {}", config.model.path);
    scene_assets.model = asset_server.load(&config.model.path);
    loading_progress.model_requested = true;
}

pub fn spawn_model_when_loaded(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    scene_assets: Res<SceneAssets>,
    gltfs: Res<Assets<Gltf>>,
    config: Option<Res<SceneConfig>>,
    asset_server: Res<AssetServer>,
) {
    if !loading_progress.model_requested
        || loading_progress.model_spawned
        || loading_progress.has_failed()
    {
        return;
    }
    let Some(config) = config else {
        return;
    };

    match poll_asset(&asset_server, &scene_assets.model) {
        AssetPoll::Pending => return,
        AssetPoll::Failed(reason) => {
            loading_progress.fail(AssetLoadError::new(AssetKind::Model, &config.model.path, reason));
            return;
        }
        AssetPoll::Loaded => {}
    }

    let Some(gltf) = gltfs.get(&scene_assets.model) else {
        return;
    };
    let Some(scene) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        loading_progress.fail(AssetLoadError::new(
            AssetKind::Model,
            &config.model.path,
            "file contains no scene",
        ));
        return;
    };

    let mut transform = config.model_transform();
    transform.rotation = Quat::from_rotation_y(std::f32::consts::PI * config.model.rotation);

    commands
        .spawn((
            Name::new("Model"),
            ModelRoot,
            SceneRoot(scene),
            transform,
        ))
        .observe(resolve_model_occluders);

    loading_progress.model_spawned = true;
    info!("✓ Model loaded, spawning scene");
}
