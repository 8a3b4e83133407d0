//! Headless surface
//!
//! Runs the surface contract without an engine: navigation is recorded in a
//! shared journal and history is a pair of stacks. Used wherever a shell
//! needs to run with no window (tests, tooling).

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::SurfaceError;
use crate::id::TabId;
use crate::profile::Profile;
use crate::surface::{RenderingSurface, SurfaceFactory};
use crate::Result;

/// One command received by a headless surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Navigate(String),
    LoadContent(String),
    Back,
    Forward,
    Reload,
    SetVisible(bool),
    Release,
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceJournal {
    pub tab_id: Option<TabId>,
    pub user_agent: String,
    pub calls: Vec<SurfaceCall>,
    pub address: String,
    pub visible: bool,
    pub released: bool,
    back: Vec<String>,
    forward: Vec<String>,
}

impl SurfaceJournal {
    /// Addresses passed to `navigate`, in order
    pub fn navigations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Navigate(address) => Some(address.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub struct HeadlessSurface {
    journal: Arc<Mutex<SurfaceJournal>>,
}

impl HeadlessSurface {
    pub fn new(tab_id: TabId, profile: &Profile) -> Self {
        let journal = SurfaceJournal {
            tab_id: Some(tab_id),
            user_agent: profile.user_agent.clone(),
            ..SurfaceJournal::default()
        };
        Self {
            journal: Arc::new(Mutex::new(journal)),
        }
    }

    /// Shared handle to this surface's journal; stays readable after release
    pub fn journal(&self) -> Arc<Mutex<SurfaceJournal>> {
        Arc::clone(&self.journal)
    }

    /// Simulate the page moving on its own (link click, redirect)
    pub fn follow(&mut self, address: &str) {
        let mut journal = self.journal.lock();
        let previous = std::mem::replace(&mut journal.address, address.to_string());
        journal.back.push(previous);
        journal.forward.clear();
    }
}

impl RenderingSurface for HeadlessSurface {
    fn navigate(&mut self, address: &str) {
        self.follow(address);
        self.journal
            .lock()
            .calls
            .push(SurfaceCall::Navigate(address.to_string()));
    }

    fn load_content(&mut self, markup: &str) {
        let mut journal = self.journal.lock();
        journal.address.clear();
        journal.calls.push(SurfaceCall::LoadContent(markup.to_string()));
    }

    fn go_back(&mut self) {
        let mut journal = self.journal.lock();
        if let Some(previous) = journal.back.pop() {
            let current = std::mem::replace(&mut journal.address, previous);
            journal.forward.push(current);
        }
        journal.calls.push(SurfaceCall::Back);
    }

    fn go_forward(&mut self) {
        let mut journal = self.journal.lock();
        if let Some(next) = journal.forward.pop() {
            let current = std::mem::replace(&mut journal.address, next);
            journal.back.push(current);
        }
        journal.calls.push(SurfaceCall::Forward);
    }

    fn reload(&mut self) {
        self.journal.lock().calls.push(SurfaceCall::Reload);
    }

    fn current_address(&self) -> String {
        self.journal.lock().address.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        let mut journal = self.journal.lock();
        journal.visible = visible;
        journal.calls.push(SurfaceCall::SetVisible(visible));
    }

    fn release(&mut self) {
        let mut journal = self.journal.lock();
        journal.released = true;
        journal.calls.push(SurfaceCall::Release);
    }
}

/// Factory for headless surfaces. Keeps a handle to every journal it hands
/// out, in creation order.
#[derive(Clone, Default)]
pub struct HeadlessFactory {
    journals: Arc<Mutex<Vec<Arc<Mutex<SurfaceJournal>>>>>,
    fail: bool,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose `create` always fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of surfaces created so far
    pub fn created(&self) -> usize {
        self.journals.lock().len()
    }

    /// Snapshot of the journal of the `n`th surface created
    pub fn journal(&self, n: usize) -> Option<SurfaceJournal> {
        self.journals.lock().get(n).map(|j| j.lock().clone())
    }

    pub fn journal_for(&self, tab_id: TabId) -> Option<SurfaceJournal> {
        self.journals
            .lock()
            .iter()
            .map(|j| j.lock().clone())
            .find(|j| j.tab_id == Some(tab_id))
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(&self, tab_id: TabId, profile: &Profile) -> Result<HeadlessSurface> {
        if self.fail {
            return Err(SurfaceError::Create(format!(
                "headless factory refused tab {}",
                tab_id
            )));
        }

        let surface = HeadlessSurface::new(tab_id, profile);
        self.journals.lock().push(surface.journal());

        tracing::debug!(tab_id = %tab_id, "Created headless surface");

        Ok(surface)
    }
}
