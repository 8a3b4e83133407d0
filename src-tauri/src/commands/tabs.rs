//! Tab management commands
use serde::Serialize;
use tauri::{AppHandle, State, Window};

use moonshine_core::TabSummary;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<moonshine_core::Result<T>> for CommandResult<T> {
    fn from(result: moonshine_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

// Tab commands are synchronous so they run on the main thread, the same
// context the webview callbacks use.

#[tauri::command]
pub fn create_tab(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<usize> {
    let result = state.with_browser(|browser| browser.add_tab());
    super::notify_ui(&app, window.label());
    result.into()
}

/// `data` is `false` when the close was refused (last tab)
#[tauri::command]
pub fn close_tab(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    index: usize,
) -> CommandResult<bool> {
    let result = state.with_browser(|browser| browser.close_tab(index));
    super::notify_ui(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn activate_tab(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    index: usize,
) -> CommandResult<usize> {
    let result = state.with_browser(|browser| browser.activate_tab(index));
    super::notify_ui(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn get_tabs(state: State<AppState>) -> CommandResult<Vec<TabSummary>> {
    state.with_browser(|browser| Ok(browser.tabs())).into()
}
