//! Runtime UI systems outside the overlay itself.
//!
//! Provides the loading veil with its progress bar and the native FPS readout.

/// FPS text overlay for native builds.
pub mod fps_tracking;

/// Loading veil, progress bar and the fade once the scene is live.
///
/// The bar tracks `LoadingProgress`; on entering `Running` it is hidden and
/// the veil fades out before being despawned.
pub mod loading_screen;
