use bevy::prelude::*;

use super::error::AssetLoadError;

/// Stage flags of the loading pipeline. Each stage only starts once the
/// previous one has completed, so the flags only ever flip from false to true.
#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_resolved: bool,
    pub environment_requested: bool,
    pub environment_diffuse_loaded: bool,
    pub environment_specular_loaded: bool,
    pub model_requested: bool,
    pub model_spawned: bool,
    pub occluders_resolved: bool,
    pub failure: Option<AssetLoadError>,
}

impl LoadingProgress {
    /// Config, two environment cubemaps and the model.
    pub const TRACKED_ASSETS: usize = 4;

    pub fn loaded_assets(&self) -> usize {
        [
            self.config_resolved,
            self.environment_diffuse_loaded,
            self.environment_specular_loaded,
            self.model_spawned,
        ]
        .into_iter()
        .filter(|loaded| *loaded)
        .count()
    }

    /// Fraction of tracked assets loaded, for the progress bar.
    pub fn fraction(&self) -> f32 {
        self.loaded_assets() as f32 / Self::TRACKED_ASSETS as f32
    }

    pub fn environment_loaded(&self) -> bool {
        self.environment_diffuse_loaded && self.environment_specular_loaded
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
            && self.config_resolved
            && self.environment_loaded()
            && self.model_spawned
            && self.occluders_resolved
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Record the first failure and log it; later failures are ignored.
    pub fn fail(&mut self, error: AssetLoadError) {
        if self.failure.is_none() {
            error!("✗ {error}; overlay markers stay inactive");
            self.failure = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::loading::error::AssetKind;

    #[test]
    fn fraction_counts_loaded_assets() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.fraction(), 0.0);

        progress.config_resolved = true;
        progress.environment_diffuse_loaded = true;
        assert_eq!(progress.fraction(), 0.5);

        progress.environment_specular_loaded = true;
        progress.model_spawned = true;
        assert_eq!(progress.fraction(), 1.0);
        assert!(!progress.is_complete());

        progress.occluders_resolved = true;
        assert!(progress.is_complete());
    }

    #[test]
    fn first_failure_is_kept() {
        let mut progress = LoadingProgress::default();
        progress.fail(AssetLoadError::new(AssetKind::EnvironmentMap, "a.ktx2", "missing"));
        progress.fail(AssetLoadError::new(AssetKind::Model, "b.glb", "missing"));

        assert!(progress.has_failed());
        assert_eq!(progress.failure.as_ref().map(|e| e.kind), Some(AssetKind::EnvironmentMap));
    }

    #[test]
    fn failure_blocks_completion() {
        let mut progress = LoadingProgress {
            config_resolved: true,
            environment_diffuse_loaded: true,
            environment_specular_loaded: true,
            model_spawned: true,
            occluders_resolved: true,
            ..default()
        };
        assert!(progress.is_complete());

        progress.fail(AssetLoadError::new(AssetKind::Model, "b.glb", "late"));
        assert!(!progress.is_complete());
    }
}
