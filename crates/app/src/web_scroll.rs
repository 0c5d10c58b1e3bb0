//! Page scroll source for the web build.
//!
//! The canvas sits inside a tall page; the browser scrolls the page and this
//! module forwards the scroll position to the assembly core.

#![cfg(target_arch = "wasm32")]

use bevy::prelude::*;

use assembly::scroll::{map_scroll_to_progress, ScrollSignal};

/// Current page scroll position and scrollable height, in CSS pixels.
fn read_page_scroll() -> Option<ScrollSignal> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()? as f32;
    let viewport = window.inner_height().ok()?.as_f64()? as f32;
    let document = window.document()?;
    let page_height = document.document_element()?.scroll_height() as f32;
    Some(ScrollSignal {
        scroll_y,
        max_scroll: page_height - viewport,
    })
}

/// Poll the page every frame; only changes are forwarded.
fn poll_page_scroll(mut last: Local<Option<ScrollSignal>>, mut signals: EventWriter<ScrollSignal>) {
    let Some(current) = read_page_scroll() else {
        return;
    };
    if *last == Some(current) {
        return;
    }
    signals.send(current);
    *last = Some(current);
}

pub struct PageScrollPlugin;

impl Plugin for PageScrollPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, poll_page_scroll.before(map_scroll_to_progress));
    }
}
