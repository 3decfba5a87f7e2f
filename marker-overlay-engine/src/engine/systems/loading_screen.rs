use bevy::prelude::*;

use crate::constants::render_settings::VEIL_FADE_SECONDS;
use crate::engine::loading::progress::LoadingProgress;

const BAR_HEIGHT: f32 = 2.0;

/// Full-screen black layer covering the scene while it loads.
#[derive(Component)]
pub struct LoadingVeil;

/// Fill of the horizontal progress bar across the middle of the screen.
#[derive(Component)]
pub struct LoadingBar;

/// Seconds since the veil started fading.
#[derive(Component, Debug, Default)]
pub struct VeilFade {
    pub elapsed: f32,
}

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            LoadingVeil,
            Name::new("LoadingVeil"),
            BackgroundColor(Color::BLACK),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            ZIndex(30),
        ))
        .with_children(|veil| {
            veil.spawn((
                LoadingBar,
                Name::new("LoadingBar"),
                BackgroundColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Percent(50.0),
                    left: Val::Px(0.0),
                    width: Val::Percent(0.0),
                    height: Val::Px(BAR_HEIGHT),
                    ..default()
                },
            ));
        });
}

pub fn update_loading_bar(
    loading_progress: Res<LoadingProgress>,
    mut bars: Query<&mut Node, With<LoadingBar>>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    let width = Val::Percent(loading_progress.fraction() * 100.0);
    for mut node in &mut bars {
        if node.width != width {
            node.width = width;
        }
    }
}

/// Scene is live: the bar is done and the veil starts fading.
pub fn begin_veil_fade(
    mut commands: Commands,
    veils: Query<Entity, With<LoadingVeil>>,
    mut bars: Query<&mut Visibility, With<LoadingBar>>,
) {
    for mut visibility in &mut bars {
        *visibility = Visibility::Hidden;
    }
    for veil in &veils {
        commands.entity(veil).insert(VeilFade::default());
    }
}

/// Veil opacity `elapsed` seconds into a fade lasting `duration`.
pub fn veil_alpha(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    (1.0 - elapsed / duration).clamp(0.0, 1.0)
}

pub fn fade_loading_veil(
    mut commands: Commands,
    time: Res<Time>,
    mut veils: Query<(Entity, &mut VeilFade, &mut BackgroundColor), With<LoadingVeil>>,
) {
    for (entity, mut fade, mut background) in &mut veils {
        fade.elapsed += time.delta_secs();
        let alpha = veil_alpha(fade.elapsed, VEIL_FADE_SECONDS);
        background.0.set_alpha(alpha);

        if alpha <= 0.0 {
            commands.entity(entity).despawn();
            debug!("Loading veil removed");
        }
    }
}
