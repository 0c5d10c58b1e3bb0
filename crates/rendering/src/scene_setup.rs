//! Static scene: lighting and the base platform the town assembles onto.

use bevy::pbr::{CascadeShadowConfigBuilder, NotShadowCaster};
use bevy::prelude::*;

/// Where the sun shines from; it always looks at the origin.
pub const SUN_POSITION: Vec3 = Vec3::new(15.0, 30.0, 15.0);

/// Pale sky behind the backdrop.
pub const SKY_COLOR: Color = Color::srgb(0.89, 0.93, 0.97);

pub const PLATFORM_SIZE: f32 = 35.0;
pub const PLATFORM_THICKNESS: f32 = 0.8;

/// Marker for the base platform.
#[derive(Component)]
pub struct BasePlatform;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(SKY_COLOR));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    // Shadow volume covers the whole platform plus the falling props.
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            num_cascades: 2,
            first_cascade_far_bound: 40.0,
            maximum_distance: 120.0,
            ..default()
        }
        .build(),
    ));

    commands.spawn((
        BasePlatform,
        Mesh3d(meshes.add(Cuboid::new(
            PLATFORM_SIZE,
            PLATFORM_THICKNESS,
            PLATFORM_SIZE,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x90, 0xC6, 0x95),
            perceptual_roughness: 0.9,
            metallic: 0.1,
            ..default()
        })),
        Transform::IDENTITY,
        NotShadowCaster,
    ));

    info!("Scene ready: platform {PLATFORM_SIZE}x{PLATFORM_SIZE}, sun at {SUN_POSITION}");
}
