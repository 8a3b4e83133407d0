//! Session entry
//!
//! One tab: its rendering surface, its label and the last address the
//! engine reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moonshine_engine::{RenderingSurface, SurfaceEvent, TabId};

/// Label shown until the page reports a title
pub const PLACEHOLDER_LABEL: &str = "New Tab";

pub struct SessionEntry<S: RenderingSurface> {
    id: TabId,
    surface: S,
    /// Tab strip label (page title once known)
    display_label: String,
    /// Last address reported by the surface
    last_known_url: String,
    created_at: DateTime<Utc>,
}

impl<S: RenderingSurface> SessionEntry<S> {
    pub fn new(id: TabId, surface: S) -> Self {
        Self {
            id,
            surface,
            display_label: PLACEHOLDER_LABEL.to_string(),
            last_known_url: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    pub fn last_known_url(&self) -> &str {
        &self.last_known_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Fold an engine event into the entry
    pub fn apply(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::LoadFinished { address, .. } | SurfaceEvent::AddressChanged { address } => {
                self.last_known_url = address.clone();
            }
            SurfaceEvent::TitleChanged { title } => {
                let title = title.trim();
                if !title.is_empty() {
                    self.display_label = title.to_string();
                }
            }
        }
    }

    pub fn summary(&self, index: usize, active: bool) -> TabSummary {
        TabSummary {
            id: self.id,
            index,
            label: self.display_label.clone(),
            url: self.last_known_url.clone(),
            active,
        }
    }
}

impl<S: RenderingSurface> Drop for SessionEntry<S> {
    fn drop(&mut self) {
        self.surface.release();
        tracing::debug!(tab_id = %self.id, "Released surface");
    }
}

/// Snapshot of one tab for the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: TabId,
    pub index: usize,
    pub label: String,
    pub url: String,
    pub active: bool,
}
