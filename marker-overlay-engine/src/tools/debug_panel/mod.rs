//! Keyboard driven debug panel for live scene tuning.
//!
//! Each row binds a named control to one editable field: the render
//! parameters plus the first tracked point, used as the test point when
//! looking for good marker positions.
//!
//! ## Keys
//!
//! - `H`: show or hide the panel
//! - `Tab` / `Shift+Tab`: next / previous control
//! - `Up` / `Down`: step the selected control (toggles flip, choices cycle)
//! - hold `Shift` while stepping: numeric steps x10
//!
//! Edits go through `RenderParameters` change detection, so the scene
//! systems pick them up on the same frame.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

/// Control table, value accessors and stepping rules.
pub mod controls;

/// Panel nodes, keyboard input and text refresh.
pub mod ui;

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::DebugPanelState>()
            .add_systems(OnEnter(AppState::Running), ui::spawn_debug_panel)
            .add_systems(
                Update,
                (ui::debug_panel_input, ui::update_debug_panel_text)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
