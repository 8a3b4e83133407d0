//! Moonshine Core
//!
//! The window shell: composes the tab container and the navigation
//! controller, owns the start-up profile and routes engine events.

mod browser;
mod config;
mod error;
mod home;

pub use browser::{Browser, ShellPhase};
pub use config::{Config, Theme, WindowConfig};
pub use error::CoreError;
pub use home::home_markup;

// Re-export core components
pub use moonshine_download::{
    DestinationPrompt, Download, DownloadDecision, DownloadError, DownloadManager,
    DownloadRequest, DownloadState,
};
pub use moonshine_engine::{
    EngineFlags, HttpCacheMode, Profile, RenderingSurface, SurfaceError, SurfaceEvent,
    SurfaceFactory, TabId,
};
pub use moonshine_navigation::{normalize_target, NavigationController, NavigationError};
pub use moonshine_tabs::{SessionEntry, TabContainer, TabError, TabSummary};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
