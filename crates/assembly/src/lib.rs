use bevy::prelude::*;

pub mod config;
pub mod controller;
pub mod layout;
pub mod parts;
pub mod scene_rng;
pub mod scroll;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use config::AssemblyConfig;
use parts::PartRegistry;
use scene_rng::SceneRng;
use scroll::{AssemblyProgress, ScrollSignal};

/// Headless core of the scene: spawns the parts and keeps their transforms
/// in step with scroll progress.
///
/// Insert `SceneRng` or `AssemblyConfig` before adding the plugin to
/// override the defaults.
pub struct AssemblyPlugin;

impl Plugin for AssemblyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssemblyConfig>()
            .init_resource::<SceneRng>()
            .init_resource::<PartRegistry>()
            .init_resource::<AssemblyProgress>()
            .add_event::<ScrollSignal>()
            .add_systems(
                Startup,
                (parts::spawn_assembly_parts, controller::apply_assembly).chain(),
            )
            .add_systems(
                Update,
                (
                    scroll::map_scroll_to_progress,
                    controller::apply_assembly
                        .run_if(resource_changed::<AssemblyProgress>),
                )
                    .chain(),
            );
    }
}
