//! Screenshot tour: scrolls the virtual page to a few progress presets,
//! saves one screenshot per preset to `/tmp` and exits.
//!
//! Enabled by setting `MAKETA_SCREENSHOTS`.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use assembly::config::AssemblyConfig;
use assembly::scroll::{map_scroll_to_progress, ScrollSignal, VirtualPage};

pub const SCREENSHOT_ENV: &str = "MAKETA_SCREENSHOTS";

/// Frames to wait before the first preset so assets and shadows settle.
const WARMUP_FRAMES: u32 = 120;
/// Frames spent on each preset; the capture happens halfway through.
const FRAMES_PER_SHOT: u32 = 12;
const CAPTURE_PHASE: u32 = 6;
/// Extra frames after the last capture so the file gets written.
const EXIT_GRACE_FRAMES: u32 = 20;

pub struct TourShot {
    pub name: &'static str,
    pub progress: f32,
}

pub const TOUR: [TourShot; 4] = [
    TourShot {
        name: "01_scattered",
        progress: 0.0,
    },
    TourShot {
        name: "02_falling",
        progress: 0.35,
    },
    TourShot {
        name: "03_settling",
        progress: 0.6,
    },
    TourShot {
        name: "04_assembled",
        progress: 1.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TourStep {
    Wait,
    /// Scroll to the progress of preset `usize`.
    Pose(usize),
    /// Capture preset `usize`.
    Capture(usize),
    Exit,
}

/// What the tour does on a given frame.
pub fn tour_step(frame: u32, shots: usize) -> TourStep {
    if frame < WARMUP_FRAMES {
        return TourStep::Wait;
    }
    let since = frame - WARMUP_FRAMES;
    let idx = (since / FRAMES_PER_SHOT) as usize;
    if idx >= shots {
        let done = shots as u32 * FRAMES_PER_SHOT;
        return if since >= done + EXIT_GRACE_FRAMES {
            TourStep::Exit
        } else {
            TourStep::Wait
        };
    }
    match since % FRAMES_PER_SHOT {
        0 => TourStep::Pose(idx),
        CAPTURE_PHASE => TourStep::Capture(idx),
        _ => TourStep::Wait,
    }
}

/// Page offset at which the mapper reports `progress`.
pub fn offset_for_progress(progress: f32, completion_fraction: f32, max_scroll: f32) -> f32 {
    progress.clamp(0.0, 1.0) * completion_fraction * max_scroll
}

pub fn screenshot_path(name: &str) -> String {
    format!("/tmp/maketa_{}.png", name)
}

#[derive(Resource, Default)]
struct ScreenshotTour {
    frame: u32,
}

fn drive_screenshot_tour(
    mut commands: Commands,
    mut tour: ResMut<ScreenshotTour>,
    config: Res<AssemblyConfig>,
    mut page: ResMut<VirtualPage>,
    mut signals: EventWriter<ScrollSignal>,
    mut exit: EventWriter<AppExit>,
) {
    tour.frame += 1;

    match tour_step(tour.frame, TOUR.len()) {
        TourStep::Wait => {}
        TourStep::Pose(idx) => {
            let offset = offset_for_progress(
                TOUR[idx].progress,
                config.completion_fraction,
                page.max_scroll(),
            );
            page.scroll_to(offset);
            signals.send(page.signal());
        }
        TourStep::Capture(idx) => {
            let path = screenshot_path(TOUR[idx].name);
            info!("Screenshot tour: saving {}", path);
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
        }
        TourStep::Exit => {
            exit.send(AppExit::Success);
        }
    }
}

pub struct ScreenshotTourPlugin;

impl Plugin for ScreenshotTourPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenshotTour>()
            .init_resource::<VirtualPage>()
            .add_systems(
                Update,
                drive_screenshot_tour.before(map_scroll_to_progress),
            );
    }
}
