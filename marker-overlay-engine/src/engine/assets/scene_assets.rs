use bevy::gltf::Gltf;
use bevy::prelude::*;

use super::scene_config::SceneConfig;

/// Handles of the assets the loading pipeline waits on, filled in stage by stage.
#[derive(Resource, Default)]
pub struct SceneAssets {
    pub config: Handle<SceneConfig>,
    pub environment_diffuse: Handle<Image>,
    pub environment_specular: Handle<Image>,
    pub model: Handle<Gltf>,
}
