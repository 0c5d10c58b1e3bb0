use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use assembly::parts::PropSpec;

use super::blueprints::blueprint_for;
use super::materials::ensure_materials;
use super::types::{PieceShape, PropBlueprint, PropBody, PropMaterials, PropVisualsAttached};

// ---------------------------------------------------------------------------
// Mesh construction
// ---------------------------------------------------------------------------

/// Build the mesh for one piece, centred on the piece origin.
pub(crate) fn piece_mesh(shape: &PieceShape) -> Mesh {
    match *shape {
        PieceShape::Cuboid {
            width,
            height,
            depth,
        } => Mesh::from(Cuboid::new(width, height, depth)),
        PieceShape::Frustum {
            radius_top,
            radius_bottom,
            height,
            sides,
        } => Mesh::from(
            ConicalFrustum {
                radius_top,
                radius_bottom,
                height,
            }
            .mesh()
            .resolution(sides),
        ),
        PieceShape::Cone {
            radius,
            height,
            sides,
        } => Mesh::from(Cone::new(radius, height).mesh().resolution(sides)),
        PieceShape::Sphere { radius, segments } => {
            Mesh::from(Sphere::new(radius).mesh().uv(segments, segments))
        }
    }
}

/// Spawn a blueprint under `parent`: one body node carrying the blueprint's
/// yaw, with every piece and light as children of the body.
///
/// Returns the body entity.
pub fn spawn_blueprint(
    parent: &mut ChildBuilder,
    blueprint: &PropBlueprint,
    meshes: &mut Assets<Mesh>,
    materials: &PropMaterials,
) -> Entity {
    parent
        .spawn((
            PropBody,
            Transform::from_rotation(Quat::from_rotation_y(blueprint.yaw)),
            Visibility::default(),
        ))
        .with_children(|body| {
            for piece in &blueprint.pieces {
                let mut entity = body.spawn((
                    Mesh3d(meshes.add(piece_mesh(&piece.shape))),
                    MeshMaterial3d(materials.get(piece.material)),
                    Transform::from_translation(piece.offset)
                        .with_rotation(Quat::from_rotation_y(piece.yaw)),
                    Visibility::default(),
                ));
                if !piece.casts_shadow {
                    entity.insert(NotShadowCaster);
                }
            }

            // Shadow maps for a dozen lamp lights cost far more than they add.
            for light in &blueprint.lights {
                body.spawn((
                    PointLight {
                        color: light.color,
                        intensity: light.intensity,
                        range: light.range,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::from_translation(light.offset),
                ));
            }
        })
        .id()
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Build visuals under every part carrier that does not have them yet.
///
/// The carrier's own transform is left alone; it belongs to the assembly
/// controller.
pub fn attach_prop_visuals(
    mut commands: Commands,
    carriers: Query<(Entity, &PropSpec), Without<PropVisualsAttached>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    prop_materials: Option<Res<PropMaterials>>,
) {
    if carriers.is_empty() {
        return;
    }

    let pm = ensure_materials(&mut commands, &mut materials, &mut images, &prop_materials);

    let mut attached = 0usize;
    for (carrier, spec) in &carriers {
        let blueprint = blueprint_for(spec);
        commands
            .entity(carrier)
            .insert(PropVisualsAttached)
            .with_children(|parent| {
                spawn_blueprint(parent, &blueprint, &mut meshes, &pm);
            });
        attached += 1;
    }

    debug!("Attached visuals to {} props", attached);
}
