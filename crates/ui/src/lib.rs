use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod hud;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<hud::HudVisible>()
            .add_systems(Startup, theme::apply_hud_theme)
            .add_systems(Update, (hud::toggle_hud, hud::hud_ui).chain());
    }
}
