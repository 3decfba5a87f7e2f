use bevy::prelude::*;

use super::controls::{CONTROLS, DebugTargets};
use crate::engine::overlay::marker::TrackedPoint;
use crate::engine::scene::parameters::RenderParameters;

const TEST_POINT_INDEX: usize = 0;
const SHIFT_MULTIPLIER: f32 = 10.0;

#[derive(Resource, Debug, Clone)]
pub struct DebugPanelState {
    pub open: bool,
    pub selected: usize,
}

impl Default for DebugPanelState {
    fn default() -> Self {
        Self {
            open: true,
            selected: 0,
        }
    }
}

impl DebugPanelState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CONTROLS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + CONTROLS.len() - 1) % CONTROLS.len();
    }
}

#[derive(Component)]
pub struct DebugPanelRoot;

#[derive(Component)]
pub struct DebugPanelText;

pub fn spawn_debug_panel(mut commands: Commands, state: Res<DebugPanelState>) {
    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.85)),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                display: if state.open { Display::Flex } else { Display::None },
                flex_direction: FlexDirection::Column,
                ..default()
            },
            ZIndex(20),
        ))
        .with_children(|panel| {
            panel.spawn((
                Name::new("DebugPanelTitle"),
                Text::new("Debug  [H] hide  [Tab] select  [Up/Down] adjust  [Shift] x10"),
                TextFont { font_size: 12.0, ..default() },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
            panel.spawn((
                DebugPanelText,
                Text::new(""),
                TextFont { font_size: 14.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });
}

/// Keyboard driven panel: H shows or hides it, Tab walks the controls and
/// Up/Down adjust the selected one.
pub fn debug_panel_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugPanelState>,
    mut parameters: ResMut<RenderParameters>,
    mut points: Query<&mut TrackedPoint>,
    mut roots: Query<&mut Node, With<DebugPanelRoot>>,
) {
    if keyboard.just_pressed(KeyCode::KeyH) {
        state.open = !state.open;
        for mut node in &mut roots {
            node.display = if state.open { Display::Flex } else { Display::None };
        }
        debug!("Debug panel {}", if state.open { "shown" } else { "hidden" });
    }
    if !state.open {
        return;
    }

    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    if keyboard.just_pressed(KeyCode::Tab) {
        if shift {
            state.select_previous();
        } else {
            state.select_next();
        }
    }

    let direction = if keyboard.just_pressed(KeyCode::ArrowUp) {
        1.0
    } else if keyboard.just_pressed(KeyCode::ArrowDown) {
        -1.0
    } else {
        return;
    };
    let Some(control) = CONTROLS.get(state.selected) else {
        return;
    };

    let mut test_point = points
        .iter_mut()
        .find(|point| point.index == TEST_POINT_INDEX);

    let mut targets = DebugTargets {
        parameters: parameters.clone(),
        test_point: test_point
            .as_ref()
            .map_or(Vec3::ZERO, |point| point.world_position),
        test_point_shown: test_point.as_ref().is_none_or(|point| point.shown),
    };
    let multiplier = if shift { SHIFT_MULTIPLIER } else { 1.0 };
    control.adjust(&mut targets, direction, multiplier);

    debug!("{} = {}", control.name, control.display_value(&targets));

    if let Some(point) = test_point.as_mut() {
        if point.world_position != targets.test_point {
            point.world_position = targets.test_point;
        }
        if point.shown != targets.test_point_shown {
            point.shown = targets.test_point_shown;
        }
    }
    parameters.set_if_neq(targets.parameters);
}

pub fn update_debug_panel_text(
    state: Res<DebugPanelState>,
    parameters: Res<RenderParameters>,
    points: Query<Ref<TrackedPoint>>,
    mut texts: Query<&mut Text, With<DebugPanelText>>,
) {
    let test_point = points.iter().find(|point| point.index == TEST_POINT_INDEX);
    let point_changed = test_point.as_ref().is_some_and(|point| point.is_changed());
    if !state.is_changed() && !parameters.is_changed() && !point_changed {
        return;
    }

    let targets = DebugTargets {
        parameters: parameters.clone(),
        test_point: test_point
            .as_ref()
            .map_or(Vec3::ZERO, |point| point.world_position),
        test_point_shown: test_point.as_ref().is_none_or(|point| point.shown),
    };
    let content = panel_lines(&targets, state.selected);

    for mut text in &mut texts {
        text.0.clone_from(&content);
    }
}

/// One line per control, the selected one prefixed with a cursor.
pub fn panel_lines(targets: &DebugTargets, selected: usize) -> String {
    CONTROLS
        .iter()
        .enumerate()
        .map(|(index, control)| {
            let cursor = if index == selected { ">" } else { " " };
            format!("{cursor} {}: {}", control.name, control.display_value(targets))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
