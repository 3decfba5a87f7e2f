//! Compiled-in defaults. Every value here can be overridden by `scene.json`
//! except the asset paths of the config file itself.

/// Asset paths relative to the bevy asset root.
pub mod path;

/// Camera, light, tone mapping and overlay timing defaults.
pub mod render_settings;

/// Default tracked points and debug panel ranges.
pub mod scene_defaults;
