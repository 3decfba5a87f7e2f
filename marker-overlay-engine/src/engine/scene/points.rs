use bevy::prelude::*;

use crate::constants::render_settings::MARKER_SIZE;
use crate::engine::assets::scene_config::PointConfig;
use crate::engine::overlay::marker::{PointMarker, TrackedPoint};

const MARKER_FILL: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
const MARKER_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);
const DESCRIPTION_WIDTH: f32 = 200.0;

/// Spawn one tracked point and its marker per configured point.
///
/// The marker anchor sits at the viewport centre and starts hidden; the
/// overlay pass moves it through its margin and reveals it.
pub fn spawn_tracked_points(commands: &mut Commands, points: &[PointConfig]) {
    for (index, config) in points.iter().enumerate() {
        let marker = spawn_marker(commands, index, config);
        commands.spawn((
            Name::new(format!("TrackedPoint{index}")),
            TrackedPoint {
                index,
                world_position: Vec3::from_array(config.position),
                marker: Some(marker),
                shown: true,
            },
        ));
    }

    info!("✓ {} tracked points spawned", points.len());
}

fn spawn_marker(commands: &mut Commands, index: usize, config: &PointConfig) -> Entity {
    let half = MARKER_SIZE / 2.0;

    commands
        .spawn((
            PointMarker { index },
            Name::new(format!("PointMarker{index}")),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                overflow: Overflow::visible(),
                ..default()
            },
            Visibility::Hidden,
            ZIndex(10),
        ))
        .with_children(|anchor| {
            anchor
                .spawn((
                    Name::new("MarkerLabel"),
                    BackgroundColor(MARKER_FILL),
                    BorderColor(MARKER_BORDER),
                    BorderRadius::MAX,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(-half),
                        top: Val::Px(-half),
                        width: Val::Px(MARKER_SIZE),
                        height: Val::Px(MARKER_SIZE),
                        border: UiRect::all(Val::Px(2.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|label| {
                    label.spawn((
                        Text::new(config.label.clone()),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });

            if !config.text.is_empty() {
                anchor
                    .spawn((
                        Name::new("MarkerDescription"),
                        BackgroundColor(MARKER_FILL),
                        BorderRadius::all(Val::Px(4.0)),
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(half + 8.0),
                            top: Val::Px(-half),
                            width: Val::Px(DESCRIPTION_WIDTH),
                            padding: UiRect::all(Val::Px(8.0)),
                            ..default()
                        },
                    ))
                    .with_children(|description| {
                        description.spawn((
                            Text::new(config.text.clone()),
                            TextFont { font_size: 12.0, ..default() },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        })
        .id()
}

/// Mirror each point's `shown` flag onto its marker's display.
pub fn apply_point_display(
    points: Query<&TrackedPoint, Changed<TrackedPoint>>,
    mut markers: Query<&mut Node, With<PointMarker>>,
) {
    for point in &points {
        let Some(mut node) = point.marker.and_then(|entity| markers.get_mut(entity).ok()) else {
            continue;
        };
        let display = if point.shown { Display::Flex } else { Display::None };
        if node.display != display {
            node.display = display;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn point(label: &str, text: &str) -> PointConfig {
        PointConfig {
            position: [1.0, 2.0, 3.0],
            label: label.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn markers_start_hidden_and_linked() {
        let mut world = World::new();
        let configs = vec![point("1", "first"), point("2", "")];
        world
            .run_system_once(move |mut commands: Commands| {
                spawn_tracked_points(&mut commands, &configs);
            })
            .unwrap();

        let mut points: Vec<TrackedPoint> =
            world.query::<&TrackedPoint>().iter(&world).cloned().collect();
        points.sort_by_key(|point| point.index);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].world_position, Vec3::new(1.0, 2.0, 3.0));

        for point in &points {
            let marker = point.marker.unwrap();
            assert_eq!(world.get::<PointMarker>(marker).unwrap().index, point.index);
            assert_eq!(*world.get::<Visibility>(marker).unwrap(), Visibility::Hidden);
        }

        let with_text = world.get::<Children>(points[0].marker.unwrap()).unwrap().len();
        let without_text = world.get::<Children>(points[1].marker.unwrap()).unwrap().len();
        assert_eq!(with_text, 2);
        assert_eq!(without_text, 1);
    }

    #[test]
    fn shown_flag_drives_display_only() {
        let mut world = World::new();
        let marker = world
            .spawn((PointMarker { index: 0 }, Node::default(), Visibility::Inherited))
            .id();
        let tracked = world
            .spawn(TrackedPoint {
                index: 0,
                world_position: Vec3::ZERO,
                marker: Some(marker),
                shown: false,
            })
            .id();

        world.run_system_once(apply_point_display).unwrap();
        assert_eq!(world.get::<Node>(marker).unwrap().display, Display::None);
        assert_eq!(*world.get::<Visibility>(marker).unwrap(), Visibility::Inherited);

        world.get_mut::<TrackedPoint>(tracked).unwrap().shown = true;
        world.run_system_once(apply_point_display).unwrap();
        assert_eq!(world.get::<Node>(marker).unwrap().display, Display::Flex);
    }
}
