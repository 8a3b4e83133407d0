//! Download commands and the native save dialog
use serde::Serialize;
use std::path::{Path, PathBuf};
use tauri::State;

use moonshine_core::{DestinationPrompt, Download};

use super::tabs::CommandResult;
use crate::state::AppState;

/// Asks for a destination with the platform save dialog
pub struct SaveDialogPrompt;

impl DestinationPrompt for SaveDialogPrompt {
    fn choose_destination(&self, suggested: &Path) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Save File");
        if let Some(dir) = suggested.parent().filter(|dir| dir.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name().and_then(|name| name.to_str()) {
            dialog = dialog.set_file_name(name);
        }
        dialog.save_file()
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadInfo {
    pub id: String,
    pub url: String,
    pub file_name: String,
    pub destination: Option<String>,
    pub state: String,
    pub created_at: String,
}

impl From<Download> for DownloadInfo {
    fn from(download: Download) -> Self {
        Self {
            file_name: download.file_name(),
            id: download.id,
            url: download.url,
            destination: download
                .destination
                .map(|path| path.to_string_lossy().to_string()),
            state: download.state.as_str().to_string(),
            created_at: download.created_at.to_rfc3339(),
        }
    }
}

#[tauri::command]
pub fn list_downloads(state: State<'_, AppState>) -> CommandResult<Vec<DownloadInfo>> {
    let mut downloads = state.download_manager().list_downloads();
    downloads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    CommandResult::ok(downloads.into_iter().map(DownloadInfo::from).collect())
}

#[tauri::command]
pub fn get_download(state: State<'_, AppState>, id: String) -> CommandResult<DownloadInfo> {
    match state.download_manager().get_download(&id) {
        Ok(download) => CommandResult::ok(download.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
