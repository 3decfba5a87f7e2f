//! Staged asset loading with progress tracking.
//!
//! Stages run strictly in order, each gated on the previous one:
//!
//! ```text
//! scene.json ──> environment cubemaps ──> glTF model ──> scene spawned
//!                                                          │
//!                                   occluders + shaded meshes resolved
//! ```
//!
//! A failure at any stage is logged once and freezes the pipeline; the app
//! never leaves the loading state and the overlay stays inactive.

/// Scene config loading with a fallback to the built-in scene.
///
/// Inserts the config, render parameters and occluder proxies once resolved.
pub mod config_loader;

/// Environment cubemap requests and load-state checks.
pub mod environment_loader;

/// Load error type and asset load-state polling.
pub mod error;

/// glTF model request and scene spawning.
pub mod model_loader;

/// Scene-ready observer resolving the occluder set from the model hierarchy.
pub mod occluder_resolver;

/// Stage flags and the progress fraction shown by the loading bar.
pub mod progress;
