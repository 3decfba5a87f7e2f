//! Scene camera and orbit controls.
//!
//! The camera circles a target point with damped rotation, wheel zoom and
//! drag panning, mirroring the usual orbit-controls behaviour of web viewers.

use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::scene::parameters::RenderParameters;
use self::orbit_camera::OrbitCamera;

/// Orbit camera resource and the per-frame controller system.
pub mod orbit_camera;

/// Marks the camera the overlay projects through.
#[derive(Component)]
pub struct SceneCamera;

/// Spawn the scene camera with the compiled-in defaults. The scene config
/// refines it once resolved.
pub fn spawn_scene_camera(mut commands: Commands) {
    let config = SceneConfig::default();
    let parameters = RenderParameters::default();
    let orbit = OrbitCamera::looking_from(config.camera_position(), config.camera_target());

    commands.spawn((
        Name::new("SceneCamera"),
        SceneCamera,
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        perspective(&config),
        parameters.tone_mapping.tonemapping(),
        parameters.camera_exposure(),
        orbit.transform(),
    ));
    commands.insert_resource(orbit);
}

pub fn configure_scene_camera(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut cameras: Query<(&mut Projection, &mut Transform), With<SceneCamera>>,
) {
    let mut orbit = OrbitCamera::looking_from(config.camera_position(), config.camera_target());
    orbit.enable_damping = config.camera.damping;

    for (mut projection, mut transform) in &mut cameras {
        *projection = perspective(&config);
        *transform = orbit.transform();
    }

    debug!(
        "Camera at {} looking at {}, fov {}°",
        config.camera_position(),
        config.camera_target(),
        config.camera.fov_degrees
    );
    commands.insert_resource(orbit);
}

fn perspective(config: &SceneConfig) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: config.camera.fov_degrees.to_radians(),
        near: config.camera.near,
        far: config.camera.far,
        ..default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn config_moves_camera_and_orbit() {
        let mut world = World::new();
        world.run_system_once(spawn_scene_camera).unwrap();

        let mut config = SceneConfig::default();
        config.camera.position = [0.0, 0.0, 8.0];
        config.camera.fov_degrees = 50.0;
        config.camera.damping = false;
        world.insert_resource(config);
        world.run_system_once(configure_scene_camera).unwrap();

        let (projection, transform) = world
            .query_filtered::<(&Projection, &Transform), With<SceneCamera>>()
            .single(&world)
            .unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 50f32.to_radians()).abs() < 1e-6);
        assert!(transform.translation.distance(Vec3::new(0.0, 0.0, 8.0)) < 1e-4);

        let orbit = world.resource::<OrbitCamera>();
        assert!(!orbit.enable_damping);
        assert!((orbit.distance - 8.0).abs() < 1e-4);
    }
}
