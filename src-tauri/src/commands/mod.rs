//! Tauri IPC Commands
//!
//! These commands bridge the toolbar/tab strip page to the Rust shell.

pub mod diagnostics;
pub mod downloads;
pub mod navigation;
pub mod settings;
pub mod tabs;

use tauri::{AppHandle, Emitter, Manager};

use crate::state::AppState;

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}

/// Tell the UI webview to refresh the tab strip and address field
pub fn notify_ui(app: &AppHandle, window_label: &str) {
    let ui_label = ui_webview_label(window_label);
    let _ = app.emit_to(ui_label.as_str(), "tabs-updated", ());

    let Some(state) = app.try_state::<AppState>() else {
        return;
    };
    state.take_stale();
    match state.try_with_browser(|browser| Ok(browser.address().to_string())) {
        Some(Ok(address)) => {
            let _ = app.emit_to(ui_label.as_str(), "address-changed", address);
        }
        Some(Err(_)) => {}
        // The holder refreshes once it is done
        None => state.mark_stale(),
    }
}

/// Apply deferred engine events and refresh the UI if any landed
pub fn flush_deferred(app: &AppHandle, window_label: &str) {
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };
    state.drain_pending();
    if state.take_stale() {
        notify_ui(app, window_label);
    }
}
