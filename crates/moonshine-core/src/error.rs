//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] moonshine_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] moonshine_navigation::NavigationError),

    #[error("Download error: {0}")]
    Download(#[from] moonshine_download::DownloadError),

    #[error("Surface error: {0}")]
    Surface(#[from] moonshine_engine::SurfaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
