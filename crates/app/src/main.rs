use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use assembly::scene_rng::SceneRng;

mod launch;
#[cfg(not(target_arch = "wasm32"))]
mod screenshot_tour;
mod web_scroll;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Maketa".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            // Web: render into the page's canvas and let the page keep
            // handling scroll events.
            canvas: Some("#assembly-canvas".to_string()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Overrides are read after DefaultPlugins so their log lines show up.
    app.insert_resource(SceneRng::from_seed_u64(launch::scene_seed()))
        .insert_resource(launch::assembly_config())
        .add_plugins((
            assembly::AssemblyPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_plugins(assembly::scroll::VirtualScrollPlugin);

        // Screenshot mode: captures progress presets and exits
        if std::env::var(screenshot_tour::SCREENSHOT_ENV).is_ok() {
            app.add_plugins(screenshot_tour::ScreenshotTourPlugin);
        }
    }

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(web_scroll::PageScrollPlugin);

    app.run();
}
