use bevy::ecs::entity::EntityHashSet;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;

use super::projection::CameraView;
use super::proxy::OccluderProxies;

/// A single ray hit, measured from the ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub point: Vec3,
    pub entity: Option<Entity>,
}

/// Anything that can report what a ray runs into.
///
/// Implementations must return hits sorted nearest first; an empty list means
/// the line of sight is clear.
pub trait OcclusionTester {
    fn intersect(&mut self, ray: Ray3d) -> Vec<Intersection>;

    /// Cast from the camera through an NDC location.
    fn intersect_from_camera(&mut self, view: &CameraView, ndc: Vec2) -> Vec<Intersection> {
        self.intersect(view.ray_through(ndc))
    }
}

/// Mesh entities of the loaded model, resolved once through the whole
/// scene hierarchy when the model finishes spawning.
#[derive(Resource, Default, Debug)]
pub struct OccluderSet {
    meshes: EntityHashSet,
}

impl OccluderSet {
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            meshes: entities.into_iter().collect(),
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.meshes.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// Ray casts against the model meshes through bevy's mesh ray caster.
pub struct MeshOccluders<'a, 'w, 's> {
    ray_cast: &'a mut MeshRayCast<'w, 's>,
    occluders: &'a OccluderSet,
}

impl<'a, 'w, 's> MeshOccluders<'a, 'w, 's> {
    pub fn new(ray_cast: &'a mut MeshRayCast<'w, 's>, occluders: &'a OccluderSet) -> Self {
        Self {
            ray_cast,
            occluders,
        }
    }
}

impl OcclusionTester for MeshOccluders<'_, '_, '_> {
    fn intersect(&mut self, ray: Ray3d) -> Vec<Intersection> {
        if self.occluders.is_empty() {
            return Vec::new();
        }

        let occluders = self.occluders;
        let filter = |entity: Entity| occluders.contains(entity);
        // Hidden meshes still block the view, and every hit is kept.
        let settings = MeshRayCastSettings::default()
            .with_filter(&filter)
            .with_visibility(RayCastVisibility::Any)
            .never_early_exit();

        self.ray_cast
            .cast_ray(ray, &settings)
            .iter()
            .map(|(entity, hit)| Intersection {
                distance: hit.distance,
                point: hit.point,
                entity: Some(*entity),
            })
            .collect()
    }
}

/// Model meshes and proxy boxes tested together.
pub struct SceneOccluders<'a, M> {
    pub meshes: M,
    pub proxies: &'a OccluderProxies,
}

impl<M: OcclusionTester> OcclusionTester for SceneOccluders<'_, M> {
    fn intersect(&mut self, ray: Ray3d) -> Vec<Intersection> {
        let mut hits = self.meshes.intersect(ray);
        if !self.proxies.is_empty() {
            hits.extend(self.proxies.intersect_ray(ray));
        }
        sort_nearest_first(&mut hits);
        hits
    }
}

pub fn sort_nearest_first(hits: &mut [Intersection]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}
