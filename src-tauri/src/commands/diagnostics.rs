use tauri::{AppHandle, Window};

use super::tabs::CommandResult;

#[tauri::command]
pub fn frontend_ready(app: AppHandle, window: Window) -> CommandResult<()> {
    tracing::info!(window = %window.label(), "Frontend ready");
    super::notify_ui(&app, window.label());
    CommandResult::ok(())
}
