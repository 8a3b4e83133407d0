//! Stable tab identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies the session entry that hosts a surface.
///
/// Indices shift as tabs close; a `TabId` never changes and is never reused,
/// so engine callbacks route by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
