//! Download manager

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::download::{Download, DownloadDecision, DownloadRequest};
use crate::error::DownloadError;
use crate::prompt::DestinationPrompt;
use crate::Result;

/// Decisions kept before the oldest are forgotten
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Cloning shares the record list, so a handle can be taken out of a locked
/// shell and used while a modal prompt is open.
#[derive(Clone)]
pub struct DownloadManager {
    /// Decisions made this session, oldest first
    downloads: Arc<RwLock<Vec<Download>>>,
    /// Base directory for relative suggestions
    download_dir: PathBuf,
    history_limit: usize,
}

impl DownloadManager {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            downloads: Arc::new(RwLock::new(Vec::new())),
            download_dir,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Keep at most `limit` records (at least one)
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Ask the user where to save `request` and record the answer.
    pub fn request<P>(&self, request: DownloadRequest, prompt: &P) -> DownloadDecision
    where
        P: DestinationPrompt + ?Sized,
    {
        let suggested = self.resolve_suggestion(&request);
        let mut download = Download::new(request.url, suggested.clone());

        tracing::info!(
            download_id = %download.id,
            url = %download.url,
            suggested = %suggested.display(),
            "Download requested"
        );

        let decision = match prompt.choose_destination(&suggested) {
            Some(destination) => {
                download.accept(destination.clone());
                tracing::info!(
                    download_id = %download.id,
                    destination = %destination.display(),
                    "Download accepted"
                );
                DownloadDecision::Accept(destination)
            }
            None => {
                download.refuse();
                tracing::info!(download_id = %download.id, "Download refused by user");
                DownloadDecision::Reject
            }
        };

        let mut downloads = self.downloads.write();
        downloads.push(download);
        if downloads.len() > self.history_limit {
            let excess = downloads.len() - self.history_limit;
            downloads.drain(..excess);
        }
        decision
    }

    pub fn get_download(&self, id: &str) -> Result<Download> {
        self.downloads
            .read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))
    }

    pub fn list_downloads(&self) -> Vec<Download> {
        self.downloads.read().clone()
    }

    /// Path to pre-fill in the prompt
    fn resolve_suggestion(&self, request: &DownloadRequest) -> PathBuf {
        let suggested = &request.suggested_path;
        if suggested.as_os_str().is_empty() {
            return self.download_dir.join(best_effort_file_name(&request.url));
        }
        if suggested.is_absolute() {
            suggested.clone()
        } else {
            self.download_dir.join(suggested)
        }
    }
}

fn best_effort_file_name(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(name) = parsed
            .path_segments()
            .and_then(|mut s| s.next_back())
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return name.to_string();
        }
    }
    "download".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DownloadState;
    use std::cell::RefCell;

    fn cancel(_: &Path) -> Option<PathBuf> {
        None
    }

    #[test]
    fn test_cancelled_prompt_rejects() {
        let manager = DownloadManager::new(PathBuf::from("/downloads"));

        let decision = manager.request(
            DownloadRequest::new("https://example.com/file.bin", "file.bin"),
            &cancel,
        );

        assert_eq!(decision, DownloadDecision::Reject);
        let downloads = manager.list_downloads();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].state, DownloadState::Refused);
        assert!(downloads[0].destination.is_none());
    }

    #[test]
    fn test_chosen_path_accepts() {
        let manager = DownloadManager::new(PathBuf::from("/downloads"));
        let prompt = |_: &Path| -> Option<PathBuf> { Some(PathBuf::from("/home/me/saved.bin")) };

        let decision = manager.request(
            DownloadRequest::new("https://example.com/file.bin", "file.bin"),
            &prompt,
        );

        assert_eq!(
            decision,
            DownloadDecision::Accept(PathBuf::from("/home/me/saved.bin"))
        );
        let id = manager.list_downloads()[0].id.clone();
        let download = manager.get_download(&id).unwrap();
        assert_eq!(download.state, DownloadState::Accepted);
        assert_eq!(download.file_name(), "saved.bin");
    }

    #[test]
    fn test_prompt_prefilled_with_resolved_suggestion() {
        let manager = DownloadManager::new(PathBuf::from("/downloads"));
        let seen = RefCell::new(Vec::new());
        let prompt = |suggested: &Path| -> Option<PathBuf> {
            seen.borrow_mut().push(suggested.to_path_buf());
            None
        };

        manager.request(DownloadRequest::new("https://a.test/x", "file.bin"), &prompt);
        manager.request(
            DownloadRequest::new("https://a.test/x", "/tmp/abs.bin"),
            &prompt,
        );
        manager.request(
            DownloadRequest::new("https://a.test/report.pdf", ""),
            &prompt,
        );
        manager.request(DownloadRequest::new("not a url", ""), &prompt);

        assert_eq!(
            *seen.borrow(),
            vec![
                PathBuf::from("/downloads/file.bin"),
                PathBuf::from("/tmp/abs.bin"),
                PathBuf::from("/downloads/report.pdf"),
                PathBuf::from("/downloads/download"),
            ]
        );
    }

    #[test]
    fn test_clones_share_records() {
        let manager = DownloadManager::new(PathBuf::from("/downloads"));
        let handle = manager.clone();

        handle.request(DownloadRequest::new("https://a.test/f", "f"), &cancel);

        assert_eq!(manager.list_downloads().len(), 1);
        assert!(manager.get_download("missing").is_err());
    }

    #[test]
    fn test_history_drops_oldest_past_limit() {
        let manager = DownloadManager::new(PathBuf::from("/downloads")).with_history_limit(2);

        manager.request(DownloadRequest::new("https://a.test/1", "1"), &cancel);
        let first = manager.list_downloads()[0].id.clone();
        manager.request(DownloadRequest::new("https://a.test/2", "2"), &cancel);
        manager.request(DownloadRequest::new("https://a.test/3", "3"), &cancel);

        let urls: Vec<_> = manager.list_downloads().into_iter().map(|d| d.url).collect();
        assert_eq!(urls, vec!["https://a.test/2", "https://a.test/3"]);
        assert!(matches!(
            manager.get_download(&first),
            Err(DownloadError::NotFound(_))
        ));
    }
}
