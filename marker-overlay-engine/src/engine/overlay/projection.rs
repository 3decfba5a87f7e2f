use bevy::prelude::*;

/// Snapshot of the camera matrices the overlay needs for one frame.
///
/// Built from the live camera each frame so projection and ray construction
/// always agree on the same view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub world_from_view: Mat4,
    pub clip_from_view: Mat4,
}

impl CameraView {
    pub fn new(world_from_view: Mat4, clip_from_view: Mat4) -> Self {
        Self {
            world_from_view,
            clip_from_view,
        }
    }

    /// Read matrices from a bevy camera and its global transform.
    pub fn from_camera(camera: &Camera, camera_transform: &GlobalTransform) -> Self {
        Self::new(camera_transform.compute_matrix(), camera.clip_from_view())
    }

    pub fn position(&self) -> Vec3 {
        self.world_from_view.w_axis.truncate()
    }

    pub fn forward(&self) -> Dir3 {
        Dir3::new(-self.world_from_view.z_axis.truncate()).unwrap_or(Dir3::NEG_Z)
    }

    /// Combined `clip_from_world` matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.clip_from_view * self.world_from_view.inverse()
    }

    /// Project a world point into normalized device coordinates.
    ///
    /// Points behind the camera still produce numbers (the divide flips them);
    /// only a point on the camera plane (`w == 0`) yields non-finite output.
    pub fn project(&self, world_point: Vec3) -> Vec3 {
        let clip = self.view_projection() * world_point.extend(1.0);
        clip.truncate() / clip.w
    }

    /// Ray from the camera position through an NDC location.
    ///
    /// The far end is unprojected at depth 0.5, which lies in front of the
    /// camera for both finite and reverse-z infinite projections.
    pub fn ray_through(&self, ndc: Vec2) -> Ray3d {
        let origin = self.position();
        let world_from_clip = self.world_from_view * self.clip_from_view.inverse();
        let target = world_from_clip.project_point3(ndc.extend(0.5));
        let direction = Dir3::new(target - origin).unwrap_or(self.forward());
        Ray3d::new(origin, direction)
    }
}

/// Logical size of the surface the markers are laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_window(window: &Window) -> Self {
        Self::new(window.width(), window.height())
    }

    /// Pixel offset from the viewport centre for an NDC location.
    ///
    /// NDC y points up while pixel y points down, hence the sign flip.
    pub fn screen_offset(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(ndc.x * self.width * 0.5, -ndc.y * self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_view() -> CameraView {
        let transform = Transform::from_xyz(4.0, 1.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y);
        let projection =
            Mat4::perspective_infinite_reverse_rh(75f32.to_radians(), 16.0 / 9.0, 0.1);
        CameraView::new(transform.compute_matrix(), projection)
    }

    #[test]
    fn look_target_projects_to_screen_centre() {
        let ndc = test_view().project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }

    #[test]
    fn projection_is_pure() {
        let view = test_view();
        let point = Vec3::new(1.385, 0.5, -0.2);
        assert_eq!(view.project(point), view.project(point));
    }

    #[test]
    fn point_above_target_projects_upwards() {
        let ndc = test_view().project(Vec3::new(0.0, 1.0, 0.0));
        assert!(ndc.y > 0.0);
    }

    #[test]
    fn ray_through_projection_passes_through_point() {
        let view = test_view();
        let point = Vec3::new(0.302, -0.1619, 1.819);
        let ndc = view.project(point);
        let ray = view.ray_through(ndc.truncate());

        let to_point = point - ray.origin;
        let along = to_point.dot(*ray.direction);
        let closest = ray.origin + *ray.direction * along;
        assert!(along > 0.0);
        assert!(closest.distance(point) < 1e-3);
    }

    #[test]
    fn ray_starts_at_camera() {
        let view = test_view();
        let ray = view.ray_through(Vec2::new(0.3, -0.7));
        assert!(ray.origin.distance(Vec3::new(4.0, 1.0, -4.0)) < 1e-5);
    }

    #[test]
    fn centre_maps_to_zero_offset_for_any_viewport() {
        for (w, h) in [(1920.0, 1080.0), (800.0, 600.0), (1.0, 1.0)] {
            assert_eq!(Viewport::new(w, h).screen_offset(Vec2::ZERO), Vec2::ZERO);
        }
    }

    #[test]
    fn right_edge_maps_to_half_width() {
        let offset = Viewport::new(1280.0, 720.0).screen_offset(Vec2::new(1.0, 0.0));
        assert_eq!(offset, Vec2::new(640.0, 0.0));
    }

    #[test]
    fn upper_right_quadrant_maps_to_negative_pixel_y() {
        let offset = Viewport::new(1920.0, 1080.0).screen_offset(Vec2::new(0.5, 0.5));
        assert_eq!(offset, Vec2::new(480.0, -270.0));
    }
}
