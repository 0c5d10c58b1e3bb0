use bevy::prelude::*;

use assembly::scroll::{map_scroll_to_progress, AssemblyProgress};

pub mod backdrop;
pub mod brick_texture;
pub mod camera;
pub mod prop_factory;
pub mod scene_setup;

#[cfg(test)]
mod test_support;

/// Everything visual: lighting, platform, camera, prop meshes and backdrop.
///
/// Expects `assembly::AssemblyPlugin` to be added as well.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::CameraRig>()
            .add_systems(
                Startup,
                (
                    scene_setup::setup_scene,
                    camera::setup_camera,
                    backdrop::setup_backdrop,
                ),
            )
            .add_systems(
                Update,
                (
                    prop_factory::attach_prop_visuals,
                    camera::drift_camera,
                    // After prop visuals so both share one material set.
                    backdrop::watch_backdrop_load
                        .after(prop_factory::attach_prop_visuals)
                        .run_if(resource_exists::<backdrop::BackdropTexture>),
                    backdrop::apply_backdrop_parallax
                        .after(map_scroll_to_progress)
                        .run_if(resource_changed::<AssemblyProgress>),
                ),
            );
    }
}
