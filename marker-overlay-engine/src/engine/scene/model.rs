use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use crate::engine::scene::parameters::RenderParameters;

/// Root entity of the spawned glTF scene.
#[derive(Component)]
pub struct ModelRoot;

/// Model meshes shaded with `StandardMaterial`, resolved once when the model
/// is ready so parameter changes never re-inspect the hierarchy.
#[derive(Resource, Debug, Default)]
pub struct ShadedMeshes {
    pub entities: Vec<Entity>,
}

impl ShadedMeshes {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

pub fn apply_model_parameters(
    mut commands: Commands,
    parameters: Res<RenderParameters>,
    shaded: Option<Res<ShadedMeshes>>,
    mut roots: Query<&mut Transform, With<ModelRoot>>,
) {
    let rotation = parameters.model_rotation();
    for mut transform in &mut roots {
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }

    let Some(shaded) = shaded else {
        return;
    };
    for &entity in &shaded.entities {
        let Ok(mut mesh) = commands.get_entity(entity) else {
            continue;
        };
        if parameters.model_shadows {
            mesh.remove::<(NotShadowCaster, NotShadowReceiver)>();
        } else {
            mesh.insert((NotShadowCaster, NotShadowReceiver));
        }
    }
}
