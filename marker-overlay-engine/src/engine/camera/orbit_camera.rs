use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::SceneCamera;

const MAX_PITCH: f32 = 1.55;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    // Pending input, drained by `update`
    yaw_delta: f32,
    pitch_delta: f32,
    zoom_scale: f32,
    pan_offset: Vec3,
}

impl OrbitCamera {
    /// Orbit state that reproduces a camera placed at `position` looking at `target`.
    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::EPSILON);

        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
            ..default()
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    /// Queue a rotation from a mouse drag measured in logical pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        self.yaw_delta -= drag.x * self.rotate_speed;
        self.pitch_delta += drag.y * self.rotate_speed;
    }

    /// Queue a dolly step; positive values move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_scale *= 0.95f32.powf(steps * self.zoom_speed);
    }

    /// Queue a pan from a mouse drag, moving the target in the view plane.
    pub fn pan(&mut self, drag: Vec2) {
        let view = self.transform();
        let scale = self.distance * self.pan_speed;
        self.pan_offset += (*view.left() * drag.x + *view.up() * drag.y) * scale;
    }

    /// Apply queued input. With damping enabled only a fraction of the
    /// pending rotation and pan is consumed per frame, the rest decays.
    pub fn update(&mut self) {
        let factor = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        self.yaw += self.yaw_delta * factor;
        self.pitch = (self.pitch + self.pitch_delta * factor).clamp(-MAX_PITCH, MAX_PITCH);
        self.target += self.pan_offset * factor;
        self.distance =
            (self.distance * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.zoom_scale = 1.0;

        if self.enable_damping {
            self.yaw_delta *= 1.0 - factor;
            self.pitch_delta *= 1.0 - factor;
            self.pan_offset *= 1.0 - factor;
        } else {
            self.yaw_delta = 0.0;
            self.pitch_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 5.0,
            min_distance: 0.5,
            max_distance: 50.0,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 1.0,
            pan_speed: 0.001,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            zoom_scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }
}

/// Left drag orbits, right drag pans, wheel zooms. Runs every frame so the
/// damped motion keeps settling after input stops.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.rotate(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(mouse_delta);
        }
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    orbit.update();
    *camera_transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_from_reproduces_position() {
        let start = Vec3::new(4.0, 1.0, -4.0);
        let orbit = OrbitCamera::looking_from(start, Vec3::ZERO);
        assert!(orbit.position().distance(start) < 1e-4);
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut orbit = OrbitCamera {
            enable_damping: false,
            ..default()
        };
        orbit.rotate(Vec2::new(-100.0, 0.0));
        orbit.update();
        assert!((orbit.yaw - 0.5).abs() < 1e-6);

        orbit.update();
        assert!((orbit.yaw - 0.5).abs() < 1e-6);
    }

    #[test]
    fn damped_rotation_converges() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(-100.0, 0.0));

        orbit.update();
        assert!(orbit.yaw > 0.0 && orbit.yaw < 0.5);

        for _ in 0..500 {
            orbit.update();
        }
        assert!((orbit.yaw - 0.5).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut orbit = OrbitCamera {
            enable_damping: false,
            ..default()
        };
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        orbit.update();
        assert_eq!(orbit.pitch, MAX_PITCH);
    }

    #[test]
    fn zoom_respects_limits() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom(1_000.0);
        orbit.update();
        assert_eq!(orbit.distance, orbit.min_distance);

        orbit.zoom(-10_000.0);
        orbit.update();
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn transform_faces_target() {
        let orbit = OrbitCamera::looking_from(Vec3::new(0.0, 2.0, 6.0), Vec3::Y);
        let forward = *orbit.transform().forward();
        let expected = (Vec3::Y - orbit.position()).normalize();
        assert!(forward.distance(expected) < 1e-4);
    }
}
