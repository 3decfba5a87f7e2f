use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::occlusion::{Intersection, sort_nearest_first};

/// Oriented box that blocks markers without being part of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccluderProxy {
    pub transform: GlobalTransform,
    pub size: Vec3,
}

impl OccluderProxy {
    pub fn new(transform: Transform, size: Vec3) -> Self {
        Self {
            transform: GlobalTransform::from(transform),
            size,
        }
    }

    /// Distance along the ray to the box surface, if the ray hits it.
    pub fn ray_hit(&self, ray: Ray3d) -> Option<f32> {
        ray_hits_obb(ray.origin, *ray.direction, self.transform, self.size)
    }
}

/// Proxy box as written in the scene config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccluderProxyConfig {
    pub center: [f32; 3],
    pub size: [f32; 3],
    #[serde(default)]
    pub rotation_y_degrees: f32,
}

impl From<&OccluderProxyConfig> for OccluderProxy {
    fn from(config: &OccluderProxyConfig) -> Self {
        let transform = Transform::from_translation(Vec3::from_array(config.center))
            .with_rotation(Quat::from_rotation_y(config.rotation_y_degrees.to_radians()));
        Self::new(transform, Vec3::from_array(config.size))
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct OccluderProxies {
    proxies: Vec<OccluderProxy>,
}

impl OccluderProxies {
    pub fn new(proxies: Vec<OccluderProxy>) -> Self {
        Self { proxies }
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn intersect_ray(&self, ray: Ray3d) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = self
            .proxies
            .iter()
            .filter_map(|proxy| proxy.ray_hit(ray))
            .map(|distance| Intersection {
                distance,
                point: ray.get_point(distance),
                entity: None,
            })
            .collect();
        sort_nearest_first(&mut hits);
        hits
    }
}

impl super::occlusion::OcclusionTester for OccluderProxies {
    fn intersect(&mut self, ray: Ray3d) -> Vec<Intersection> {
        self.intersect_ray(ray)
    }
}

pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    // Local t equals world t as long as the box transform carries no scale.
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_direction.map(|d| if d != 0.0 { 1.0 / d } else { f32::INFINITY });

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (mut t0, mut t1) = (
            (min[axis] - ray_origin[axis]) * inv[axis],
            (max[axis] - ray_origin[axis]) * inv[axis],
        );
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        // Parallel ray outside the slab: 0 * inf produced NaN or the bounds never overlap.
        if t0.is_nan() || t1.is_nan() {
            if ray_origin[axis] < min[axis] || ray_origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}
