//! Screen-space markers that follow 3D points and hide behind geometry.
//!
//! Each frame every tracked point is projected to normalized device
//! coordinates, a ray is cast from the camera through that location against
//! the occluders, and the marker is shown or hidden and moved accordingly.
//!
//! ```text
//! TrackedPoint ──project──> NDC ──ray──> hits (nearest first)
//!                            │              │
//!                            │     distance(point, camera) > nearest?
//!                            │              │
//!                            └──offset──> MarkerElement <── visible / hidden
//! ```

use bevy::prelude::*;

use crate::engine::camera::orbit_camera::orbit_camera_controller;
use crate::engine::core::app_state::AppState;

/// Per-frame marker pass and the pure routine behind it.
pub mod frame;

/// Marker components and the binder that applies decisions to UI nodes.
pub mod marker;

/// Occlusion tester trait, the model occluder set and the mesh ray cast backend.
pub mod occlusion;

/// World → NDC projection, camera rays and NDC → pixel mapping.
pub mod projection;

/// Oriented box occluders declared in the scene config.
pub mod proxy;

/// Visible / hidden decision from the hit list.
pub mod visibility;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<occlusion::OccluderSet>()
            .init_resource::<proxy::OccluderProxies>()
            .add_systems(
                Update,
                frame::update_point_markers
                    .after(orbit_camera_controller)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
