use bevy::prelude::*;

use crate::constants::render_settings::SCENE_SETTLE_SECONDS;
use crate::engine::loading::progress::LoadingProgress;

/// Scene readiness gate. The overlay pass and the debug panel only run in
/// `Running`, which is entered exactly once per session.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    AssetsLoaded,
    Running,
}

// Transition to AssetsLoaded state
pub fn transition_to_assets_loaded(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Transitioning to AssetsLoaded state");
        next_state.set(AppState::AssetsLoaded);
    }
}

/// Final transition, held back briefly so the first frames with the model
/// are rendered before the markers come alive.
pub fn transition_to_running(
    time: Res<Time>,
    mut settled: Local<f32>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    *settled += time.delta_secs();
    if *settled >= SCENE_SETTLE_SECONDS {
        info!("→ All systems ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn state_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<AppState>()
            .init_resource::<LoadingProgress>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .add_systems(
                Update,
                transition_to_assets_loaded.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                transition_to_running.run_if(in_state(AppState::AssetsLoaded)),
            );
        app
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    fn complete(progress: &mut LoadingProgress) {
        progress.config_resolved = true;
        progress.environment_requested = true;
        progress.environment_diffuse_loaded = true;
        progress.environment_specular_loaded = true;
        progress.model_requested = true;
        progress.model_spawned = true;
        progress.occluders_resolved = true;
    }

    #[test]
    fn stays_loading_until_complete() {
        let mut app = state_app();
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(state(&app), AppState::Loading);
    }

    #[test]
    fn running_follows_settle_delay() {
        let mut app = state_app();
        complete(&mut app.world_mut().resource_mut::<LoadingProgress>());

        app.update();
        app.update();
        assert_eq!(state(&app), AppState::AssetsLoaded);

        for _ in 0..10 {
            app.update();
        }
        assert_eq!(state(&app), AppState::Running);
    }

    #[test]
    fn failed_load_never_runs() {
        use crate::engine::loading::error::{AssetKind, AssetLoadError};

        let mut app = state_app();
        {
            let mut progress = app.world_mut().resource_mut::<LoadingProgress>();
            complete(&mut progress);
            progress.fail(AssetLoadError::new(AssetKind::Model, "model.glb", "not found"));
        }

        for _ in 0..20 {
            app.update();
        }
        assert_eq!(state(&app), AppState::Loading);
    }
}
