//! Process-wide engine profile
//!
//! Read once at start-up and shared read-only by every surface. Values are
//! handed to the engine as-is.

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/109 Safari/537.36";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpCacheMode {
    /// Persistent on-disk cache
    Disk,
    /// In-memory cache, dropped at exit
    Memory,
    /// No HTTP cache
    None,
}

impl HttpCacheMode {
    /// Whether surfaces should keep state on disk between runs
    pub fn is_persistent(&self) -> bool {
        matches!(self, HttpCacheMode::Disk)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpCacheMode::Disk => "disk",
            HttpCacheMode::Memory => "memory",
            HttpCacheMode::None => "none",
        }
    }
}

impl std::fmt::Display for HttpCacheMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine launch switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineFlags {
    pub gpu_rasterization: bool,
    pub zero_copy: bool,
    pub disable_http2: bool,
    pub ignore_certificate_errors: bool,
    pub disable_sandbox: bool,
}

impl Default for EngineFlags {
    fn default() -> Self {
        Self {
            gpu_rasterization: true,
            zero_copy: true,
            disable_http2: true,
            ignore_certificate_errors: true,
            disable_sandbox: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// HTTP user-agent identity string
    pub user_agent: String,
    pub cache_mode: HttpCacheMode,
    pub flags: EngineFlags,
}

impl Profile {
    /// Chromium-style command-line switches for the enabled flags
    pub fn launch_arguments(&self) -> Vec<String> {
        let flags = &self.flags;
        [
            (flags.gpu_rasterization, "--enable-gpu-rasterization"),
            (flags.zero_copy, "--enable-zero-copy"),
            (flags.disable_http2, "--disable-http2"),
            (flags.ignore_certificate_errors, "--ignore-certificate-errors"),
            (flags.disable_sandbox, "--no-sandbox"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, switch)| switch.to_string())
        .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_mode: HttpCacheMode::Disk,
            flags: EngineFlags::default(),
        }
    }
}
