use bevy_egui::{egui, EguiContexts};

/// Translucent dark panels so the HUD does not hide the scene.
pub fn apply_hud_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(24, 28, 36, 210);
    let inactive = egui::Color32::from_rgb(50, 56, 68);
    let accent = egui::Color32::from_rgb(0xF5, 0x9E, 0x0B);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(30, 32, 40);

    // Progress bar fill
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.window_shadow = egui::Shadow::NONE;

    ctx.set_style(style);
}
