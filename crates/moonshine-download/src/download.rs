//! Download data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    /// Waiting for the user to pick a destination
    Pending,
    /// Destination chosen, handed back to the engine
    Accepted,
    /// User cancelled the prompt
    Refused,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::Pending => "pending",
            DownloadState::Accepted => "accepted",
            DownloadState::Refused => "refused",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A download the engine wants to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// Path proposed by the engine; may be relative or empty
    pub suggested_path: PathBuf,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, suggested_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            suggested_path: suggested_path.into(),
        }
    }
}

/// What the engine should do with a requested download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadDecision {
    /// Proceed, writing to this path
    Accept(PathBuf),
    /// Leave the download unaccepted
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub id: String,
    pub url: String,
    pub suggested_path: PathBuf,
    pub destination: Option<PathBuf>,
    pub state: DownloadState,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl Download {
    pub fn new(url: String, suggested_path: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url,
            suggested_path,
            destination: None,
            state: DownloadState::Pending,
            created_at: Utc::now(),
            decided_at: None,
        }
    }

    pub fn accept(&mut self, destination: PathBuf) {
        self.destination = Some(destination);
        self.state = DownloadState::Accepted;
        self.decided_at = Some(Utc::now());
    }

    pub fn refuse(&mut self) {
        self.destination = None;
        self.state = DownloadState::Refused;
        self.decided_at = Some(Utc::now());
    }

    /// File name shown in download lists
    pub fn file_name(&self) -> String {
        self.destination
            .as_ref()
            .unwrap_or(&self.suggested_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("download")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_download() {
        let download = Download::new(
            "https://example.com/file.pdf".to_string(),
            PathBuf::from("/downloads/file.pdf"),
        );

        assert_eq!(download.state, DownloadState::Pending);
        assert!(download.destination.is_none());
        assert!(download.decided_at.is_none());
        assert_eq!(download.file_name(), "file.pdf");
    }

    #[test]
    fn test_accept_and_refuse() {
        let mut download = Download::new(
            "https://example.com/a.zip".to_string(),
            PathBuf::from("a.zip"),
        );

        download.accept(PathBuf::from("/tmp/renamed.zip"));
        assert_eq!(download.state, DownloadState::Accepted);
        assert_eq!(download.file_name(), "renamed.zip");
        assert!(download.decided_at.is_some());

        download.refuse();
        assert_eq!(download.state, DownloadState::Refused);
        assert!(download.destination.is_none());
        assert_eq!(download.file_name(), "a.zip");
    }
}
