use bevy::prelude::*;

use crate::constants::path::SCENE_CONFIG_PATH;
use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::error::{AssetKind, AssetLoadError, AssetPoll, poll_asset};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::overlay::proxy::{OccluderProxies, OccluderProxy};
use crate::engine::scene::parameters::RenderParameters;

// Start the loading process
pub fn start_loading(mut scene_assets: ResMut<SceneAssets>, asset_server: Res<AssetServer>) {
    info!("Loading scene config from {SCENE_CONFIG_PATH}");
    scene_assets.config = asset_server.load(SCENE_CONFIG_PATH);
}

/// Turn the config asset into resources. A missing or malformed file is not
/// fatal: the built-in scene is used instead.
pub fn resolve_scene_config(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    scene_assets: Res<SceneAssets>,
    configs: Res<Assets<SceneConfig>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.config_resolved {
        return;
    }

    let config = match poll_asset(&asset_server, &scene_assets.config) {
        AssetPoll::Pending => return,
        AssetPoll::Loaded => {
            let Some(config) = configs.get(&scene_assets.config) else {
                return;
            };
            config.clone()
        }
        AssetPoll::Failed(reason) => {
            let error = AssetLoadError::new(AssetKind::SceneConfig, SCENE_CONFIG_PATH, reason);
            warn!("{error}, using built-in scene");
            SceneConfig::default()
        }
    };

    info!(
        "✓ Scene config resolved: {} tracked points, {} occluder proxies",
        config.points.len(),
        config.occluder_proxies.len()
    );

    let proxies = config
        .occluder_proxies
        .iter()
        .map(OccluderProxy::from)
        .collect();
    commands.insert_resource(OccluderProxies::new(proxies));
    commands.insert_resource(RenderParameters::from_config(&config));
    commands.insert_resource(config);
    loading_progress.config_resolved = true;
}
