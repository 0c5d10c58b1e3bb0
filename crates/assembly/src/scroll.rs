//! Scroll-to-progress mapping and the native scroll source.
//!
//! Whatever drives the scene (the browser page on wasm, a virtual page fed
//! by the mouse wheel on desktop) reports `ScrollSignal`s. The mapper turns
//! the latest one into `AssemblyProgress`, which is the only input of the
//! assembly controller.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::config::AssemblyConfig;

// =============================================================================
// Signal + state
// =============================================================================

/// Host scroll position: current offset and the largest reachable offset.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    pub scroll_y: f32,
    pub max_scroll: f32,
}

/// Normalized global progress in `[0, 1]`. Written only by
/// [`map_scroll_to_progress`].
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct AssemblyProgress(pub f32);

// =============================================================================
// Pure mapping
// =============================================================================

/// Map a scroll offset to global progress.
///
/// A page that cannot scroll (`max_scroll <= 0`) and any non-finite input
/// map to 0. Progress saturates at 1 once `completion_fraction` of the
/// scrollable distance has been covered.
pub fn scroll_progress(scroll_y: f32, max_scroll: f32, completion_fraction: f32) -> f32 {
    if max_scroll.is_nan() || max_scroll <= 0.0 {
        return 0.0;
    }
    let raw = scroll_y / max_scroll;
    let progress = raw / completion_fraction;
    if !progress.is_finite() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Recompute progress for every scroll signal received this frame.
pub fn map_scroll_to_progress(
    mut signals: EventReader<ScrollSignal>,
    config: Res<AssemblyConfig>,
    mut progress: ResMut<AssemblyProgress>,
) {
    for signal in signals.read() {
        progress.0 = scroll_progress(
            signal.scroll_y,
            signal.max_scroll,
            config.completion_fraction,
        );
    }
}

// =============================================================================
// Native virtual page
// =============================================================================

/// Pixels scrolled per wheel "line".
const LINE_HEIGHT_PX: f32 = 40.0;

/// Desktop stand-in for a scrolling web page. The scene sits behind a page
/// `page_viewports` window-heights tall; the wheel and paging keys move
/// through it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct VirtualPage {
    pub offset: f32,
    pub viewport_height: f32,
    pub page_viewports: f32,
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self {
            offset: 0.0,
            viewport_height: 720.0,
            page_viewports: 4.0,
        }
    }
}

impl VirtualPage {
    pub fn max_scroll(&self) -> f32 {
        (self.viewport_height * (self.page_viewports - 1.0)).max(0.0)
    }

    /// Move by `delta` pixels (positive scrolls down the page).
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_scroll());
    }

    /// Jump to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_scroll());
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_scroll());
    }

    pub fn signal(&self) -> ScrollSignal {
        ScrollSignal {
            scroll_y: self.offset,
            max_scroll: self.max_scroll(),
        }
    }
}

/// Wheel delta in page pixels. Wheel-down reports negative `y` and scrolls
/// the page down.
pub fn wheel_delta_px(event: &MouseWheel) -> f32 {
    match event.unit {
        MouseScrollUnit::Line => -event.y * LINE_HEIGHT_PX,
        MouseScrollUnit::Pixel => -event.y,
    }
}

fn scroll_virtual_page(
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    mut page: ResMut<VirtualPage>,
    mut signals: EventWriter<ScrollSignal>,
) {
    let mut delta: f32 = wheel.read().map(wheel_delta_px).sum();

    let page_step = page.viewport_height * 0.9;
    if keys.just_pressed(KeyCode::PageDown) {
        delta += page_step;
    }
    if keys.just_pressed(KeyCode::PageUp) {
        delta -= page_step;
    }
    if keys.just_pressed(KeyCode::End) {
        delta += page.max_scroll();
    }
    if keys.just_pressed(KeyCode::Home) {
        delta -= page.max_scroll();
    }

    if delta == 0.0 {
        return;
    }

    let before = page.offset;
    page.scroll_by(delta);
    if page.offset != before {
        signals.send(page.signal());
    }
}

fn resize_virtual_page(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut page: ResMut<VirtualPage>,
    mut signals: EventWriter<ScrollSignal>,
) {
    let Ok(primary) = primary.get_single() else {
        return;
    };
    let Some(last) = resized.read().filter(|e| e.window == primary).last() else {
        return;
    };
    page.set_viewport_height(last.height);
    debug!(
        "Virtual page resized: viewport {} px, max scroll {} px",
        last.height,
        page.max_scroll()
    );
    signals.send(page.signal());
}

fn init_virtual_page(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut page: ResMut<VirtualPage>,
    mut signals: EventWriter<ScrollSignal>,
) {
    if let Ok(window) = windows.get_single() {
        page.set_viewport_height(window.resolution.height());
    }
    signals.send(page.signal());
}

/// Desktop scroll source. Not used on wasm, where the real page scrolls.
pub struct VirtualScrollPlugin;

impl Plugin for VirtualScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VirtualPage>()
            .add_systems(Startup, init_virtual_page)
            .add_systems(
                Update,
                (resize_virtual_page, scroll_virtual_page)
                    .before(map_scroll_to_progress),
            );
    }
}
