//! Scene content around the overlay: model, key light, environment and the
//! tracked points, plus the live parameters that drive them.

use bevy::prelude::*;

use self::parameters::RenderParameters;
use crate::engine::assets::scene_config::SceneConfig;

/// Image-based lighting, skybox and camera tone mapping.
pub mod environment;

/// Directional key light with configurable shadow reach.
pub mod lighting;

/// Model root, standard-material mesh list and model parameters.
pub mod model;

/// Render parameters seeded from config and edited live.
pub mod parameters;

/// Tracked points and their screen-space marker nodes.
pub mod points;

/// Populate the scene once the config is known: key light and tracked
/// points with their markers. The model follows from the loading pipeline.
pub fn populate_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    parameters: Res<RenderParameters>,
) {
    lighting::spawn_key_light(&mut commands, &parameters);
    points::spawn_tracked_points(&mut commands, &config.points);
}
