//! Headless App setup shared by the rendering tests.
//!
//! Registers the asset types the rendering systems touch without requiring
//! a GPU or a window.

use bevy::prelude::*;

use assembly::scene_rng::SceneRng;
use assembly::AssemblyPlugin;

/// MinimalPlugins + assets, no assembly core.
pub(crate) fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(AssetPlugin::default());
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();
    app.init_asset::<Image>();
    app
}

/// Headless app running the assembly core with the given seed.
pub(crate) fn headless_scene(seed: u64) -> App {
    let mut app = headless_app();
    app.insert_resource(SceneRng::from_seed_u64(seed));
    app.add_plugins(AssemblyPlugin);
    app
}
