use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::overlay::occlusion::OccluderSet;
use crate::engine::scene::model::ShadedMeshes;

/// Every mesh entity below `root`, however deeply nested.
pub fn collect_descendant_meshes(
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut stack: Vec<Entity> = Vec::new();
    if let Ok(direct) = children.get(root) {
        stack.extend(direct.iter());
    }

    while let Some(entity) = stack.pop() {
        if meshes.contains(entity) {
            found.push(entity);
        }
        if let Ok(nested) = children.get(entity) {
            stack.extend(nested.iter());
        }
    }

    found
}

/// Final loading stage, triggered once the model scene has been spawned.
///
/// The occluder set and the standard-material mesh list are resolved here a
/// single time instead of walking the hierarchy every frame.
pub fn resolve_model_occluders(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    standard_materials: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
) {
    let root = trigger.target();
    let occluders = collect_descendant_meshes(root, &children, &meshes);
    let shaded: Vec<Entity> = occluders
        .iter()
        .copied()
        .filter(|entity| standard_materials.contains(*entity))
        .collect();

    let occluder_set = OccluderSet::from_entities(occluders);
    info!(
        "✓ Model ready: {} occluder meshes, {} with standard materials",
        occluder_set.len(),
        shaded.len()
    );

    commands.insert_resource(occluder_set);
    commands.insert_resource(ShadedMeshes::new(shaded));
    loading_progress.occluders_resolved = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn nested_meshes_are_collected() {
        let mut world = World::new();
        let mesh = Handle::<Mesh>::default();

        let root = world.spawn(Transform::default()).id();
        let group = world.spawn(Transform::default()).id();
        let outer = world.spawn(Mesh3d(mesh.clone())).id();
        let nested = world.spawn(Mesh3d(mesh.clone())).id();
        let deeper = world.spawn(Mesh3d(mesh.clone())).id();
        let unrelated = world.spawn(Mesh3d(mesh)).id();

        world.entity_mut(root).add_children(&[group, outer]);
        world.entity_mut(group).add_children(&[nested]);
        world.entity_mut(nested).add_children(&[deeper]);

        let found = world
            .run_system_once(move |children: Query<&Children>, meshes: Query<(), With<Mesh3d>>| {
                collect_descendant_meshes(root, &children, &meshes)
            })
            .unwrap();

        assert_eq!(found.len(), 3);
        assert!(found.contains(&outer));
        assert!(found.contains(&nested));
        assert!(found.contains(&deeper));
        assert!(!found.contains(&group));
        assert!(!found.contains(&unrelated));
    }
}
