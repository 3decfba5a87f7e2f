// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::constants::render_settings::LOG_FILTER;
use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::{
    configure_scene_camera, orbit_camera::orbit_camera_controller, spawn_scene_camera,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::overlay::OverlayPlugin;
use crate::engine::scene::{
    environment::{apply_environment_parameters, attach_environment},
    lighting::apply_light_parameters,
    model::{ShadedMeshes, apply_model_parameters},
    parameters::RenderParameters,
    points::apply_point_display,
    populate_scene,
};
use crate::engine::systems::loading_screen::{
    begin_veil_fade, fade_loading_veil, spawn_loading_screen, update_loading_bar,
};

// Loading stages
use crate::engine::loading::config_loader::{resolve_scene_config, start_loading};
use crate::engine::loading::environment_loader::{check_environment_loading, request_environment};
use crate::engine::loading::model_loader::{request_model, spawn_model_when_loaded};
use crate::engine::loading::progress::LoadingProgress;

// Transitions
use crate::engine::core::app_state::{AppState, transition_to_assets_loaded, transition_to_running};

// Crate tools modules
use crate::tools::debug_panel::DebugPanelPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]))
        .add_plugins(OverlayPlugin)
        .add_plugins(DebugPanelPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SceneAssets>()
        .init_resource::<RenderParameters>();

    // State-based system scheduling
    app.add_systems(
        Startup,
        (spawn_scene_camera, spawn_loading_screen, start_loading).chain(),
    )
    .add_systems(
        Update,
        (
            // Loading phase systems
            resolve_scene_config,
            request_environment,
            check_environment_loading,
            request_model,
            spawn_model_when_loaded,
            update_loading_bar,
            transition_to_assets_loaded,
        )
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        Update,
        transition_to_running.run_if(in_state(AppState::AssetsLoaded)),
    )
    .add_systems(OnEnter(AppState::Running), begin_veil_fade);

    // Scene systems, driven by the config and by parameter edits
    app.add_systems(
        Update,
        (configure_scene_camera, populate_scene).run_if(resource_added::<SceneConfig>),
    )
    .add_systems(Update, attach_environment.run_if(resource_exists::<SceneConfig>))
    .add_systems(
        Update,
        (apply_light_parameters, apply_environment_parameters)
            .run_if(resource_changed::<RenderParameters>),
    )
    .add_systems(
        Update,
        apply_model_parameters
            .run_if(resource_changed::<RenderParameters>.or(resource_added::<ShadedMeshes>)),
    )
    .add_systems(Update, (orbit_camera_controller, apply_point_display));

    app.add_systems(
        Update,
        fade_loading_veil.run_if(in_state(AppState::Running)),
    );

    // Add the FPS readout only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
