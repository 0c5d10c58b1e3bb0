//! Assembly HUD: a small egui window showing how far the town has come
//! together. Hidden by default; F3 toggles it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use assembly::config::AssemblyConfig;
use assembly::controller::settled_count;
use assembly::parts::AssemblyPart;
use assembly::scroll::AssemblyProgress;

pub const HUD_TOGGLE_KEY: KeyCode = KeyCode::F3;

// =============================================================================
// Resources
// =============================================================================

/// Whether the assembly HUD is visible.
#[derive(Resource, Default)]
pub struct HudVisible(pub bool);

// =============================================================================
// Helpers
// =============================================================================

/// Heading text for a progress value, e.g. `"Assembly 47%"`.
pub fn progress_label(progress: f32) -> String {
    let pct = (progress.clamp(0.0, 1.0) * 100.0).round() as u32;
    format!("Assembly {pct}%")
}

/// Short phase name shown under the heading.
fn phase_label(settled: usize, total: usize, progress: f32) -> &'static str {
    if total > 0 && settled == total {
        "Complete"
    } else if progress <= 0.0 {
        "Scattered"
    } else {
        "Falling into place"
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn toggle_hud(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<HudVisible>) {
    if keys.just_pressed(HUD_TOGGLE_KEY) {
        visible.0 = !visible.0;
    }
}

pub fn hud_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<HudVisible>,
    progress: Res<AssemblyProgress>,
    config: Res<AssemblyConfig>,
    parts: Query<&AssemblyPart>,
) {
    if !visible.0 {
        return;
    }

    let total = parts.iter().count();
    let settled = settled_count(progress.0, parts.iter(), &config);

    let mut open = true;
    egui::Window::new("Assembly")
        .open(&mut open)
        .resizable(false)
        .default_width(220.0)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            ui.heading(progress_label(progress.0));
            ui.label(phase_label(settled, total, progress.0));
            ui.separator();
            ui.label(format!("Settled parts: {settled}/{total}"));
            ui.add(egui::ProgressBar::new(progress.0.clamp(0.0, 1.0)).show_percentage());
            ui.weak(format!("{:?} to toggle", HUD_TOGGLE_KEY));
        });

    if !open {
        visible.0 = false;
    }
}
