//! Navigation Controller
//!
//! Owns the address field text. Commands go to whichever tab is active in
//! the container passed in; the controller keeps no per-tab state.

use moonshine_engine::{RenderingSurface, TabId};
use moonshine_tabs::TabContainer;

use crate::error::NavigationError;
use crate::target::normalize_target;
use crate::Result;

#[derive(Debug, Default)]
pub struct NavigationController {
    /// Text currently shown in the address field
    address: String,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Navigate the active tab to the normalized form of `raw`.
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    pub fn submit<S: RenderingSurface>(
        &mut self,
        tabs: &mut TabContainer<S>,
        raw: &str,
    ) -> Result<Option<String>> {
        let Some(address) = normalize_target(raw) else {
            tracing::debug!("Ignoring blank address input");
            return Ok(None);
        };

        let entry = tabs.active_mut().ok_or(NavigationError::NoActiveTab)?;
        entry.surface_mut().navigate(&address);

        tracing::info!(tab_id = %entry.id(), address = %address, "Navigating");

        self.address.clone_from(&address);
        Ok(Some(address))
    }

    /// Show the address of the tab at `index`
    pub fn sync<S: RenderingSurface>(&mut self, tabs: &TabContainer<S>, index: usize) {
        if let Some(entry) = tabs.get(index) {
            self.address = entry.surface().current_address();
        }
    }

    /// Follow an address change reported by the engine. Only the active tab
    /// drives the field.
    pub fn on_address_changed<S: RenderingSurface>(
        &mut self,
        tabs: &TabContainer<S>,
        tab_id: TabId,
        address: &str,
    ) {
        if tabs.is_active(tab_id) {
            self.address = address.to_string();
        }
    }

    pub fn back<S: RenderingSurface>(&self, tabs: &mut TabContainer<S>) {
        if let Some(entry) = tabs.active_mut() {
            entry.surface_mut().go_back();
        }
    }

    pub fn forward<S: RenderingSurface>(&self, tabs: &mut TabContainer<S>) {
        if let Some(entry) = tabs.active_mut() {
            entry.surface_mut().go_forward();
        }
    }

    pub fn reload<S: RenderingSurface>(&self, tabs: &mut TabContainer<S>) {
        if let Some(entry) = tabs.active_mut() {
            entry.surface_mut().reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonshine_engine::{HeadlessFactory, HeadlessSurface, Profile, SurfaceCall};

    fn setup(n: usize) -> (TabContainer<HeadlessSurface>, HeadlessFactory) {
        let factory = HeadlessFactory::new();
        let profile = Profile::default();
        let mut tabs = TabContainer::new();
        for _ in 0..n {
            tabs.add(&factory, &profile, "<p>home</p>").unwrap();
        }
        (tabs, factory)
    }

    #[test]
    fn test_submit_navigates_active_tab() {
        let (mut tabs, factory) = setup(2);
        let mut nav = NavigationController::new();

        let address = nav.submit(&mut tabs, "test.org").unwrap();

        assert_eq!(address.as_deref(), Some("https://test.org"));
        assert_eq!(nav.address(), "https://test.org");
        assert_eq!(factory.journal(1).unwrap().navigations(), vec!["https://test.org"]);
        assert!(factory.journal(0).unwrap().navigations().is_empty());
    }

    #[test]
    fn test_submit_blank_is_ignored() {
        let (mut tabs, factory) = setup(1);
        let mut nav = NavigationController::new();

        assert_eq!(nav.submit(&mut tabs, "   ").unwrap(), None);
        assert!(factory.journal(0).unwrap().navigations().is_empty());
    }

    #[test]
    fn test_submit_without_tabs() {
        let mut tabs: TabContainer<HeadlessSurface> = TabContainer::new();
        let mut nav = NavigationController::new();
        assert!(matches!(
            nav.submit(&mut tabs, "example.com"),
            Err(NavigationError::NoActiveTab)
        ));
    }

    #[test]
    fn test_sync_reads_surface_address() {
        let (mut tabs, _) = setup(2);
        let mut nav = NavigationController::new();

        nav.submit(&mut tabs, "b.test").unwrap();
        tabs.activate(0).unwrap();
        nav.submit(&mut tabs, "a.test").unwrap();

        nav.sync(&tabs, 1);
        assert_eq!(nav.address(), "https://b.test");

        // Missing entry leaves the field alone
        nav.sync(&tabs, 9);
        assert_eq!(nav.address(), "https://b.test");
    }

    #[test]
    fn test_background_address_changes_ignored() {
        let (tabs, _) = setup(2);
        let mut nav = NavigationController::new();
        let background = tabs.get(0).unwrap().id();
        let active = tabs.get(1).unwrap().id();

        nav.on_address_changed(&tabs, background, "https://elsewhere.test/");
        assert_eq!(nav.address(), "");

        nav.on_address_changed(&tabs, active, "https://here.test/");
        assert_eq!(nav.address(), "https://here.test/");
    }

    #[test]
    fn test_history_commands_forward_to_active() {
        let (mut tabs, factory) = setup(2);
        let nav = NavigationController::new();

        nav.back(&mut tabs);
        nav.forward(&mut tabs);
        nav.reload(&mut tabs);

        let calls = factory.journal(1).unwrap().calls;
        assert!(calls.ends_with(&[SurfaceCall::Back, SurfaceCall::Forward, SurfaceCall::Reload]));
        assert!(!factory.journal(0).unwrap().calls.contains(&SurfaceCall::Reload));
    }
}
