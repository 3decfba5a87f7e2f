//! Scene description and the asset handles loaded from it.

/// Handles for every asset the loading pipeline tracks.
pub mod scene_assets;

/// `scene.json` asset with compiled-in defaults.
pub mod scene_config;
