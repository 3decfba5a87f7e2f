use bevy::prelude::*;

use super::occlusion::Intersection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerVisibility {
    Visible,
    Hidden,
}

impl MarkerVisibility {
    pub fn is_visible(self) -> bool {
        self == MarkerVisibility::Visible
    }
}

/// Decide whether a point can be seen from the camera.
///
/// `hits` must be ordered nearest first. A point is hidden only when it lies
/// strictly farther away than the nearest hit, so markers sitting on the
/// surface they annotate stay visible.
pub fn evaluate_visibility(
    point: Vec3,
    camera_position: Vec3,
    hits: &[Intersection],
) -> MarkerVisibility {
    let Some(nearest) = hits.first() else {
        return MarkerVisibility::Visible;
    };

    let point_distance = point.distance(camera_position);
    if point_distance > nearest.distance {
        MarkerVisibility::Hidden
    } else {
        MarkerVisibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(distance: f32) -> Intersection {
        Intersection {
            distance,
            point: Vec3::ZERO,
            entity: None,
        }
    }

    #[test]
    fn clear_line_of_sight_is_visible() {
        let visibility = evaluate_visibility(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, &[]);
        assert_eq!(visibility, MarkerVisibility::Visible);
    }

    #[test]
    fn point_behind_nearest_hit_is_hidden() {
        let visibility = evaluate_visibility(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, &[hit(3.0)]);
        assert_eq!(visibility, MarkerVisibility::Hidden);
    }

    #[test]
    fn point_in_front_of_hit_is_visible() {
        let visibility = evaluate_visibility(Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO, &[hit(3.0)]);
        assert_eq!(visibility, MarkerVisibility::Visible);
    }

    #[test]
    fn point_on_hit_surface_is_visible() {
        let visibility = evaluate_visibility(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO, &[hit(3.0)]);
        assert_eq!(visibility, MarkerVisibility::Visible);
    }

    #[test]
    fn only_nearest_hit_matters() {
        let hits = [hit(6.0), hit(9.0)];
        let visibility = evaluate_visibility(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, &hits);
        assert_eq!(visibility, MarkerVisibility::Visible);
    }
}
