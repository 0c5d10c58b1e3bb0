//! # TestScene: headless harness for the assembly core
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `AssemblyPlugin` so the
//! scroll-to-transform pipeline can be driven without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::config::AssemblyConfig;
use crate::parts::{AssemblyPart, PartRegistry, PropSpec};
use crate::scene_rng::SceneRng;
use crate::scroll::{AssemblyProgress, ScrollSignal};
use crate::AssemblyPlugin;

/// A headless App running the assembly core.
pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    /// Scene generated from the default seed.
    pub fn new() -> Self {
        Self::build(SceneRng::default(), AssemblyConfig::default())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(SceneRng::from_seed_u64(seed), AssemblyConfig::default())
    }

    pub fn with_config(config: AssemblyConfig) -> Self {
        Self::build(SceneRng::default(), config)
    }

    fn build(rng: SceneRng, config: AssemblyConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(rng);
        app.insert_resource(config);
        app.add_plugins(AssemblyPlugin);
        // First update runs Startup: spawn + initial controller pass.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Report a host scroll position and run one frame.
    pub fn scroll_to(&mut self, scroll_y: f32, max_scroll: f32) -> &mut Self {
        self.app.world_mut().send_event(ScrollSignal {
            scroll_y,
            max_scroll,
        });
        self.app.update();
        self
    }

    /// Scroll so that global progress becomes `progress` on a 1000 px page.
    pub fn scroll_to_progress(&mut self, progress: f32) -> &mut Self {
        let fraction = self.app.world().resource::<AssemblyConfig>().completion_fraction;
        self.scroll_to(progress * fraction * 1000.0, 1000.0)
    }

    /// Run `n` frames without any new input.
    pub fn idle(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn progress(&self) -> f32 {
        self.app.world().resource::<AssemblyProgress>().0
    }

    pub fn part_count(&self) -> usize {
        self.app.world().resource::<PartRegistry>().len()
    }

    /// Every registered part in registry order with its current transform.
    pub fn parts(&self) -> Vec<(AssemblyPart, PropSpec, Transform)> {
        let world = self.app.world();
        world
            .resource::<PartRegistry>()
            .iter()
            .filter_map(|entity| {
                let e = world.entity(entity);
                Some((
                    *e.get::<AssemblyPart>()?,
                    *e.get::<PropSpec>()?,
                    *e.get::<Transform>()?,
                ))
            })
            .collect()
    }

    pub fn config(&self) -> AssemblyConfig {
        self.app.world().resource::<AssemblyConfig>().clone()
    }
}
