//! Browser configuration
//!
//! Read once before the first tab exists and never written afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use moonshine_download::DEFAULT_HISTORY_LIMIT;
use moonshine_engine::Profile;

use crate::error::CoreError;
use crate::Result;

const DARK_STYLESHEET: &str = r#"
body { background: #121212; margin: 0; font-family: "Segoe UI", system-ui, sans-serif; }
.tab { background: #222; color: white; padding: 8px; }
.tab.selected { background: #333; }
.toolbar { background: #1e1e1e; }
.address { background: #2b2b2b; color: white; border: none; border-radius: 6px; padding: 6px; }
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    /// Stylesheet applied to the toolbar and tab strip
    pub stylesheet: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "dark".to_string(),
            stylesheet: DARK_STYLESHEET.trim_start().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Moonshine Browser".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine data (persistent cache) lives here
    pub data_dir: PathBuf,
    /// Base directory for relative download suggestions
    pub download_dir: PathBuf,
    /// Download decisions remembered for the session
    pub download_history: usize,
    /// Search URL template used by the home page (%s replaced with query)
    pub search_engine: String,
    pub window: WindowConfig,
    pub theme: Theme,
    /// Shared by every tab
    pub profile: Profile,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        let download_dir = dirs::download_dir().unwrap_or_else(|| data_dir.join("Downloads"));

        Self {
            data_dir,
            download_dir,
            download_history: DEFAULT_HISTORY_LIMIT,
            search_engine: "https://duckduckgo.com/?q=%s".to_string(),
            window: WindowConfig::default(),
            theme: Theme::default(),
            profile: Profile::default(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Moonshine"))
            .unwrap_or_else(|| PathBuf::from(".moonshine"))
    }

    pub fn default_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Load from a JSON file. A missing file yields the defaults; missing
    /// fields are filled from the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;

        tracing::info!(path = %path.display(), "Loaded config");

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.search_engine.contains("%s") {
            return Err(CoreError::Config(format!(
                "search_engine template has no %s placeholder: {}",
                self.search_engine
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(CoreError::Config("window size must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
