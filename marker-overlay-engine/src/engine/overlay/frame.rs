use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::marker::{PointMarker, TrackedPoint, UiMarker, bind_marker};
use super::occlusion::{Intersection, MeshOccluders, OccluderSet, OcclusionTester, SceneOccluders};
use super::projection::{CameraView, Viewport};
use super::proxy::OccluderProxies;
use super::visibility::{MarkerVisibility, evaluate_visibility};
use crate::engine::camera::SceneCamera;

/// Everything the binder needs for one point in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerFrame {
    pub ndc: Vec3,
    pub visibility: MarkerVisibility,
    pub offset: Vec2,
    /// Closest thing the ray hit, if anything.
    pub nearest_hit: Option<Intersection>,
}

/// Project, ray cast and decide for one tracked point.
pub fn resolve_marker(
    point: Vec3,
    view: &CameraView,
    viewport: Viewport,
    tester: &mut impl OcclusionTester,
) -> MarkerFrame {
    let ndc = view.project(point);
    let hits = tester.intersect_from_camera(view, ndc.truncate());
    let mut frame = marker_frame_from_hits(point, ndc.truncate(), view.position(), &hits, viewport);
    frame.ndc = ndc;
    frame
}

/// Decision and placement once the projection and the hit list are known.
pub fn marker_frame_from_hits(
    point: Vec3,
    ndc: Vec2,
    camera_position: Vec3,
    hits: &[Intersection],
    viewport: Viewport,
) -> MarkerFrame {
    MarkerFrame {
        ndc: ndc.extend(0.0),
        visibility: evaluate_visibility(point, camera_position, hits),
        offset: viewport.screen_offset(ndc),
        nearest_hit: hits.first().copied(),
    }
}

/// Per-frame marker pass. Scheduled after the camera controls and only once
/// the scene is ready, so an empty occluder set never reads as "visible".
pub fn update_point_markers(
    camera_query: Query<(&Camera, &Transform), With<SceneCamera>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    points: Query<&TrackedPoint>,
    mut markers: Query<(&mut Node, &mut Visibility), With<PointMarker>>,
    occluders: Res<OccluderSet>,
    proxies: Res<OccluderProxies>,
    mut ray_cast: MeshRayCast,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    // The camera is a root entity, so its local transform is already this
    // frame's world transform; GlobalTransform would lag until PostUpdate.
    let view = CameraView::from_camera(camera, &GlobalTransform::from(*camera_transform));
    let viewport = Viewport::from_window(window);
    let mut tester = SceneOccluders {
        meshes: MeshOccluders::new(&mut ray_cast, &occluders),
        proxies: &proxies,
    };

    for point in &points {
        let frame = resolve_marker(point.world_position, &view, viewport, &mut tester);

        let mut element = point
            .marker
            .and_then(|entity| markers.get_mut(entity).ok())
            .map(|(node, visibility)| UiMarker { node, visibility });

        if bind_marker(element.as_mut(), frame.visibility, frame.offset) {
            let state = if frame.visibility.is_visible() { "visible" } else { "hidden" };
            match frame.nearest_hit {
                Some(hit) => debug!(
                    "Marker {} now {state} at ndc {:.3}, nearest hit {:?} at {:.3} ({:.3} away)",
                    point.index, frame.ndc, hit.entity, hit.point, hit.distance
                ),
                None => debug!(
                    "Marker {} now {state} at ndc {:.3}, clear line of sight",
                    point.index, frame.ndc
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::overlay::marker::tests::RecordingElement;
    use crate::engine::overlay::proxy::OccluderProxy;

    fn hit(distance: f32) -> Intersection {
        Intersection {
            distance,
            point: Vec3::ZERO,
            entity: None,
        }
    }

    fn front_view() -> CameraView {
        let transform = Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let projection =
            Mat4::perspective_infinite_reverse_rh(75f32.to_radians(), 16.0 / 9.0, 0.1);
        CameraView::new(transform.compute_matrix(), projection)
    }

    #[test]
    fn full_hd_unobstructed_marker() {
        let viewport = Viewport::new(1920.0, 1080.0);
        let frame = marker_frame_from_hits(
            Vec3::new(1.0, 1.0, 0.0),
            Vec2::new(0.5, 0.5),
            Vec3::new(1.0, 1.0, 5.0),
            &[],
            viewport,
        );

        let mut element = RecordingElement::default();
        bind_marker(Some(&mut element), frame.visibility, frame.offset);

        assert_eq!(element.offset, Some(Vec2::new(480.0, -270.0)));
        assert!(element.visible);
    }

    #[test]
    fn full_hd_marker_behind_occluder() {
        let viewport = Viewport::new(1920.0, 1080.0);
        // Point five units from the camera, occluder hit at three.
        let frame = marker_frame_from_hits(
            Vec3::new(1.0, 1.0, 0.0),
            Vec2::new(0.5, 0.5),
            Vec3::new(1.0, 1.0, 5.0),
            &[hit(3.0)],
            viewport,
        );

        let mut element = RecordingElement {
            visible: true,
            ..default()
        };
        bind_marker(Some(&mut element), frame.visibility, frame.offset);

        assert_eq!(frame.visibility, MarkerVisibility::Hidden);
        assert!(!element.visible);
    }

    #[test]
    fn point_in_front_of_proxy_is_visible() {
        let mut proxies = OccluderProxies::new(vec![OccluderProxy::new(
            Transform::from_xyz(0.0, 0.0, -2.0),
            Vec3::splat(2.0),
        )]);
        let frame = resolve_marker(
            Vec3::new(0.0, 0.0, 3.0),
            &front_view(),
            Viewport::new(800.0, 600.0),
            &mut proxies,
        );

        assert_eq!(frame.visibility, MarkerVisibility::Visible);
        assert!(frame.offset.length() < 1e-3);
    }

    #[test]
    fn point_behind_proxy_is_hidden() {
        let mut proxies = OccluderProxies::new(vec![OccluderProxy::new(
            Transform::from_xyz(0.0, 0.0, 0.0),
            Vec3::splat(2.0),
        )]);
        let frame = resolve_marker(
            Vec3::new(0.2, 0.1, -4.0),
            &front_view(),
            Viewport::new(800.0, 600.0),
            &mut proxies,
        );

        assert_eq!(frame.visibility, MarkerVisibility::Hidden);

        // Front face of the box, seen from z = 10.
        let nearest = frame.nearest_hit.unwrap();
        assert!((nearest.point.z - 1.0).abs() < 1e-3);
        assert_eq!(nearest.entity, None);
        assert!((nearest.distance - 9.0).abs() < 0.01);
    }

    #[test]
    fn clear_line_of_sight_has_no_nearest_hit() {
        let frame = resolve_marker(
            Vec3::new(0.5, 0.0, 0.0),
            &front_view(),
            Viewport::new(800.0, 600.0),
            &mut OccluderProxies::default(),
        );

        assert_eq!(frame.nearest_hit, None);
        assert!(frame.ndc.x > 0.0);
        assert!(frame.ndc.y.abs() < 1e-5);
    }

    #[test]
    fn point_on_proxy_surface_is_visible() {
        let mut proxies = OccluderProxies::new(vec![OccluderProxy::new(
            Transform::from_xyz(0.0, 0.0, 0.0),
            Vec3::splat(2.0),
        )]);
        // Slightly outside the front face to stay clear of rounding.
        let frame = resolve_marker(
            Vec3::new(0.0, 0.0, 1.001),
            &front_view(),
            Viewport::new(800.0, 600.0),
            &mut proxies,
        );

        assert_eq!(frame.visibility, MarkerVisibility::Visible);
    }
}
