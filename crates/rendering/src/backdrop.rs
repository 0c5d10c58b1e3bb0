//! City backdrop behind the platform.
//!
//! A textured plane is shown once `textures/city_background.png` loads. If
//! the texture fails to load, a procedural skyline takes its place. Either
//! way the backdrop drifts with assembly progress for a parallax effect.

use bevy::asset::LoadState;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use assembly::scroll::AssemblyProgress;

use crate::prop_factory::{ensure_materials, skyline_blueprint, spawn_blueprint, PropMaterials};

pub const BACKDROP_TEXTURE_PATH: &str = "textures/city_background.png";

pub const BACKDROP_WIDTH: f32 = 100.0;
pub const BACKDROP_HEIGHT: f32 = 50.0;

/// Backdrop centre at progress 0.
pub const BACKDROP_REST: Vec3 = Vec3::new(0.0, 10.0, -30.0);
/// Backdrop centre at progress 1.
pub const BACKDROP_END: Vec3 = Vec3::new(-10.0, -5.0, -30.0);

/// Root of the backdrop. Its transform carries the parallax offset.
#[derive(Component)]
pub struct Backdrop;

/// The textured plane under the backdrop root.
#[derive(Component)]
pub struct BackdropPlane;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropStatus {
    Loading,
    Shown,
    Placeholder,
}

#[derive(Resource)]
pub struct BackdropTexture {
    pub handle: Handle<Image>,
    pub status: BackdropStatus,
}

/// Next status for a backdrop that is still loading.
pub fn next_status(loaded: bool, failed: bool) -> BackdropStatus {
    if loaded {
        BackdropStatus::Shown
    } else if failed {
        BackdropStatus::Placeholder
    } else {
        BackdropStatus::Loading
    }
}

/// Backdrop centre for a given global progress.
pub fn backdrop_position(progress: f32) -> Vec3 {
    BACKDROP_REST.lerp(BACKDROP_END, progress.clamp(0.0, 1.0))
}

pub fn setup_backdrop(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let handle: Handle<Image> = asset_server.load(BACKDROP_TEXTURE_PATH);

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(handle.clone()),
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Backdrop,
            Transform::from_translation(BACKDROP_REST),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                BackdropPlane,
                Mesh3d(meshes.add(Plane3d::new(
                    Vec3::Z,
                    Vec2::new(BACKDROP_WIDTH * 0.5, BACKDROP_HEIGHT * 0.5),
                ))),
                MeshMaterial3d(material),
                Transform::IDENTITY,
                Visibility::Hidden,
                NotShadowCaster,
            ));
        });

    commands.insert_resource(BackdropTexture {
        handle,
        status: BackdropStatus::Loading,
    });
}

/// Spawn the procedural skyline under the backdrop root.
pub(crate) fn spawn_skyline_placeholder(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    existing: &Option<Res<PropMaterials>>,
) {
    let pm = ensure_materials(commands, materials, images, existing);
    let blueprint = skyline_blueprint(BACKDROP_WIDTH, -BACKDROP_HEIGHT * 0.5);
    commands.entity(root).with_children(|parent| {
        spawn_blueprint(parent, &blueprint, meshes, &pm);
    });
}

/// System: resolve the backdrop once its texture finishes or fails loading.
#[allow(clippy::too_many_arguments)]
pub fn watch_backdrop_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut backdrop: ResMut<BackdropTexture>,
    roots: Query<Entity, With<Backdrop>>,
    mut planes: Query<&mut Visibility, With<BackdropPlane>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    prop_materials: Option<Res<PropMaterials>>,
) {
    if backdrop.status != BackdropStatus::Loading {
        return;
    }

    let loaded = images.contains(&backdrop.handle);
    let failed = matches!(
        asset_server.get_load_state(backdrop.handle.id()),
        Some(LoadState::Failed(_))
    );

    match next_status(loaded, failed) {
        BackdropStatus::Loading => {}
        BackdropStatus::Shown => {
            for mut visibility in &mut planes {
                *visibility = Visibility::Inherited;
            }
            info!("Backdrop texture loaded");
            backdrop.status = BackdropStatus::Shown;
        }
        BackdropStatus::Placeholder => {
            warn!(
                "Backdrop texture {} failed to load, using procedural skyline",
                BACKDROP_TEXTURE_PATH
            );
            for root in &roots {
                spawn_skyline_placeholder(
                    &mut commands,
                    root,
                    &mut meshes,
                    &mut materials,
                    &mut images,
                    &prop_materials,
                );
            }
            backdrop.status = BackdropStatus::Placeholder;
        }
    }
}

/// System: slide the backdrop with progress. Gated on progress changes.
pub fn apply_backdrop_parallax(
    progress: Res<AssemblyProgress>,
    mut roots: Query<&mut Transform, With<Backdrop>>,
) {
    let position = backdrop_position(progress.0);
    for mut transform in &mut roots {
        transform.translation = position;
    }
}
