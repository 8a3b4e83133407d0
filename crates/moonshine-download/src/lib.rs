//! Moonshine Download Handling
//!
//! The engine streams downloads itself. This crate only decides where a
//! download goes:
//! - Explicit user choice of destination before anything is written
//! - Cancelling the prompt leaves the download unaccepted
//! - Recent decisions are recorded for the session

mod download;
mod error;
mod manager;
mod prompt;

pub use download::{Download, DownloadDecision, DownloadRequest, DownloadState};
pub use error::DownloadError;
pub use manager::{DownloadManager, DEFAULT_HISTORY_LIMIT};
pub use prompt::DestinationPrompt;

pub type Result<T> = std::result::Result<T, DownloadError>;
