//! Tab Container
//!
//! Ordered session entries plus the active index. All mutation happens on the
//! UI thread in response to one event at a time.

use moonshine_engine::{Profile, RenderingSurface, SurfaceFactory, TabId};

use crate::entry::{SessionEntry, TabSummary};
use crate::error::TabError;
use crate::Result;

pub struct TabContainer<S: RenderingSurface> {
    entries: Vec<SessionEntry<S>>,
    /// Valid whenever `entries` is non-empty
    active: usize,
}

impl<S: RenderingSurface> TabContainer<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: 0,
        }
    }

    /// Open a tab showing `placeholder` and make it active
    pub fn add<F>(&mut self, factory: &F, profile: &Profile, placeholder: &str) -> Result<usize>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let id = TabId::new();
        let mut surface = factory.create(id, profile)?;
        surface.load_content(placeholder);

        self.entries.push(SessionEntry::new(id, surface));
        let index = self.entries.len() - 1;
        self.set_active(index);

        tracing::info!(tab_id = %id, index, "Created new tab");

        Ok(index)
    }

    /// Remove the entry at `index` and hand it back. Dropping the returned
    /// entry releases its surface.
    pub fn close(&mut self, index: usize) -> Result<SessionEntry<S>> {
        self.check_index(index)?;
        if self.entries.len() == 1 {
            return Err(TabError::LastTab);
        }

        let was_active = index == self.active;
        let entry = self.entries.remove(index);

        if was_active {
            // Left neighbour, else the right one that slid into slot 0
            let next = index.saturating_sub(1);
            self.active = next;
            if let Some(next) = self.entries.get_mut(next) {
                next.surface_mut().set_visible(true);
            }
        } else if index < self.active {
            self.active -= 1;
        }

        tracing::info!(tab_id = %entry.id(), index, active = self.active, "Closed tab");

        Ok(entry)
    }

    /// Make the entry at `index` active
    pub fn activate(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.set_active(index);
        Ok(index)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&SessionEntry<S>> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SessionEntry<S>> {
        self.entries.get_mut(index)
    }

    pub fn find_mut(&mut self, id: TabId) -> Option<&mut SessionEntry<S>> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    pub fn active(&self) -> Option<&SessionEntry<S>> {
        self.entries.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut SessionEntry<S>> {
        self.entries.get_mut(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active().is_some_and(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionEntry<S>> {
        self.entries.iter()
    }

    /// Tab strip snapshot in display order
    pub fn summaries(&self) -> Vec<TabSummary> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.summary(index, index == self.active))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(TabError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Only the active surface is visible
    fn set_active(&mut self, index: usize) {
        if index != self.active {
            if let Some(previous) = self.entries.get_mut(self.active) {
                previous.surface_mut().set_visible(false);
            }
        }
        self.active = index;
        if let Some(current) = self.entries.get_mut(index) {
            current.surface_mut().set_visible(true);
        }
    }
}

impl<S: RenderingSurface> Default for TabContainer<S> {
    fn default() -> Self {
        Self::new()
    }
}
