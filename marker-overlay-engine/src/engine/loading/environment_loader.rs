use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::error::{AssetKind, AssetLoadError, AssetPoll, poll_asset};
use crate::engine::loading::progress::LoadingProgress;

/// Second stage: request both environment cubemaps once the config is known.
pub fn request_environment(
    mut loading_progress: ResMut<LoadingProgress>,
    mut scene_assets: ResMut<SceneAssets>,
    config: Option<Res<SceneConfig>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.environment_requested || !loading_progress.config_resolved {
        return;
    }
    let Some(config) = config else {
        return;
    };

    info!(
        "Loading environment maps: {} / {}",
        config.environment.diffuse_path, config.environment.specular_path
    );
    scene_assets.environment_diffuse = asset_server.load(&config.environment.diffuse_path);
    scene_assets.environment_specular = asset_server.load(&config.environment.specular_path);
    loading_progress.environment_requested = true;
}

pub fn check_environment_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    scene_assets: Res<SceneAssets>,
    config: Option<Res<SceneConfig>>,
    asset_server: Res<AssetServer>,
) {
    if !loading_progress.environment_requested
        || loading_progress.environment_loaded()
        || loading_progress.has_failed()
    {
        return;
    }
    let Some(config) = config else {
        return;
    };

    let maps = [
        (&scene_assets.environment_diffuse, &config.environment.diffuse_path),
        (&scene_assets.environment_specular, &config.environment.specular_path),
    ];
    let mut loaded = [false; 2];

    for (slot, (handle, path)) in maps.into_iter().enumerate() {
        match poll_asset(&asset_server, handle) {
            AssetPoll::Loaded => loaded[slot] = true,
            AssetPoll::Failed(reason) => {
                loading_progress.fail(AssetLoadError::new(AssetKind::EnvironmentMap, path, reason));
                return;
            }
            AssetPoll::Pending => {}
        }
    }

    loading_progress.environment_diffuse_loaded = loaded[0];
    loading_progress.environment_specular_loaded = loaded[1];
    if loading_progress.environment_loaded() {
        info!("✓ Environment maps loaded");
    }
}
