//! Navigation commands
use tauri::{AppHandle, State, Window};

use super::tabs::CommandResult;
use crate::state::AppState;

/// Normalize address field input and load it in the active tab
#[tauri::command]
pub fn submit_address(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    input: String,
) -> CommandResult<Option<String>> {
    let result = state.with_browser(|browser| browser.submit(&input));
    super::notify_ui(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn go_back(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<()> {
    let result = state.with_browser(|browser| {
        browser.go_back();
        Ok(())
    });
    super::flush_deferred(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn go_forward(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<()> {
    let result = state.with_browser(|browser| {
        browser.go_forward();
        Ok(())
    });
    super::flush_deferred(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn reload(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<()> {
    let result = state.with_browser(|browser| {
        browser.reload();
        Ok(())
    });
    super::flush_deferred(&app, window.label());
    result.into()
}

#[tauri::command]
pub fn get_address(state: State<AppState>) -> CommandResult<String> {
    state
        .with_browser(|browser| Ok(browser.address().to_string()))
        .into()
}
