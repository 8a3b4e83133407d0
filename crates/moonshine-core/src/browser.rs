//! Window shell state
//!
//! Owns the tab container, the navigation controller and the frozen
//! profile. Every engine event enters through `dispatch`.

use std::sync::Arc;

use moonshine_download::DownloadManager;
use moonshine_engine::{Profile, SurfaceEvent, SurfaceFactory, TabId};
use moonshine_navigation::NavigationController;
use moonshine_tabs::{TabContainer, TabError, TabSummary};

use crate::config::{Config, Theme};
use crate::home::home_markup;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    /// Building the default tab
    Constructing,
    /// Event-driven until exit
    Running,
}

pub struct Browser<F: SurfaceFactory> {
    config: Config,
    /// Frozen copy of `config.profile`, handed to every new surface
    profile: Arc<Profile>,
    factory: F,
    tabs: TabContainer<F::Surface>,
    navigation: NavigationController,
    download_manager: DownloadManager,
    home_markup: String,
    phase: ShellPhase,
}

impl<F: SurfaceFactory> Browser<F> {
    /// Build the shell and its default tab
    pub fn new(config: Config, factory: F) -> Result<Self> {
        let profile = Arc::new(config.profile.clone());
        let download_manager = DownloadManager::new(config.download_dir.clone())
            .with_history_limit(config.download_history);
        let home_markup = home_markup(&config.search_engine);

        tracing::info!(
            user_agent = %profile.user_agent,
            cache_mode = %profile.cache_mode,
            flags = ?profile.launch_arguments(),
            "Profile initialized"
        );

        let mut browser = Self {
            config,
            profile,
            factory,
            tabs: TabContainer::new(),
            navigation: NavigationController::new(),
            download_manager,
            home_markup,
            phase: ShellPhase::Constructing,
        };

        browser.add_tab()?;
        browser.phase = ShellPhase::Running;

        tracing::info!("Browser initialized");

        Ok(browser)
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn download_manager(&self) -> &DownloadManager {
        &self.download_manager
    }

    // === Tab operations ===

    pub fn tab_container(&self) -> &TabContainer<F::Surface> {
        &self.tabs
    }

    pub fn tabs(&self) -> Vec<TabSummary> {
        self.tabs.summaries()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.tabs.active().map(|entry| entry.id())
    }

    /// Open a new tab on the home page and switch to it
    pub fn add_tab(&mut self) -> Result<usize> {
        let index = self
            .tabs
            .add(&self.factory, &self.profile, &self.home_markup)?;
        self.navigation.sync(&self.tabs, index);
        Ok(index)
    }

    /// Close the tab at `index`. Returns `false` when the close was refused
    /// because it is the last tab.
    pub fn close_tab(&mut self, index: usize) -> Result<bool> {
        match self.tabs.close(index) {
            Ok(entry) => {
                drop(entry);
                self.navigation.sync(&self.tabs, self.tabs.active_index());
                Ok(true)
            }
            Err(TabError::LastTab) => {
                tracing::warn!(index, "Refused to close the last tab");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "Close tab refused");
                Err(e.into())
            }
        }
    }

    pub fn close_tab_by_id(&mut self, tab_id: TabId) -> Result<bool> {
        let index = self.index_of(tab_id)?;
        self.close_tab(index)
    }

    /// Switch to the tab at `index`; the active tab is unchanged on error
    pub fn activate_tab(&mut self, index: usize) -> Result<usize> {
        match self.tabs.activate(index) {
            Ok(index) => {
                self.navigation.sync(&self.tabs, index);
                Ok(index)
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "Activate tab refused");
                Err(e.into())
            }
        }
    }

    pub fn activate_tab_by_id(&mut self, tab_id: TabId) -> Result<usize> {
        let index = self.index_of(tab_id)?;
        self.activate_tab(index)
    }

    fn index_of(&self, tab_id: TabId) -> Result<usize> {
        Ok(self
            .tabs
            .position(tab_id)
            .ok_or(TabError::NotFound(tab_id))?)
    }

    // === Navigation ===

    /// Address field text
    pub fn address(&self) -> &str {
        self.navigation.address()
    }

    pub fn submit(&mut self, raw: &str) -> Result<Option<String>> {
        Ok(self.navigation.submit(&mut self.tabs, raw)?)
    }

    pub fn go_back(&mut self) {
        self.navigation.back(&mut self.tabs);
    }

    pub fn go_forward(&mut self) {
        self.navigation.forward(&mut self.tabs);
    }

    pub fn reload(&mut self) {
        self.navigation.reload(&mut self.tabs);
    }

    // === Engine events ===

    /// Route an engine event to its tab. Returns `false` when the tab no
    /// longer exists and the event was dropped.
    pub fn dispatch(&mut self, tab_id: TabId, event: SurfaceEvent) -> bool {
        let Some(entry) = self.tabs.find_mut(tab_id) else {
            tracing::debug!(tab_id = %tab_id, ?event, "Dropping event for closed tab");
            return false;
        };

        entry.apply(&event);

        match &event {
            SurfaceEvent::LoadFinished { success, address } => {
                tracing::info!(tab_id = %tab_id, success, address = %address, "Loaded");
            }
            SurfaceEvent::AddressChanged { address } => {
                tracing::debug!(tab_id = %tab_id, address = %address, "Address changed");
            }
            SurfaceEvent::TitleChanged { title } => {
                tracing::debug!(tab_id = %tab_id, title = %title, "Title changed");
            }
        }

        if let Some(address) = event.address() {
            self.navigation
                .on_address_changed(&self.tabs, tab_id, address);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use moonshine_download::{DownloadDecision, DownloadRequest};
    use moonshine_engine::{HeadlessFactory, HttpCacheMode};
    use std::path::{Path, PathBuf};

    fn browser() -> Browser<HeadlessFactory> {
        let mut config = Config::new(PathBuf::from("/tmp/moonshine-test"));
        config.download_dir = PathBuf::from("/downloads");
        Browser::new(config, HeadlessFactory::new()).unwrap()
    }

    #[test]
    fn test_starts_running_with_one_tab() {
        let browser = browser();
        assert_eq!(browser.phase(), ShellPhase::Running);
        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.tab_container().active_index(), 0);
        assert_eq!(browser.address(), "");
    }

    #[test]
    fn test_default_tab_shows_home_page() {
        let browser = browser();
        let journal = browser.factory().journal(0).unwrap();
        match journal.calls.first() {
            Some(moonshine_engine::SurfaceCall::LoadContent(markup)) => {
                assert!(markup.contains("duckduckgo.com"));
            }
            other => panic!("Expected LoadContent, got {:?}", other),
        }
    }

    #[test]
    fn test_factory_failure_fails_construction() {
        let result = Browser::new(Config::default(), HeadlessFactory::failing());
        assert!(matches!(result, Err(CoreError::Tab(TabError::Surface(_)))));
    }

    #[test]
    fn test_profile_shared_by_every_tab() {
        let mut config = Config::default();
        config.profile.user_agent = "Moonshine/Test".to_string();
        config.profile.cache_mode = HttpCacheMode::None;
        let mut browser = Browser::new(config, HeadlessFactory::new()).unwrap();
        browser.add_tab().unwrap();

        for n in 0..2 {
            assert_eq!(
                browser.factory().journal(n).unwrap().user_agent,
                "Moonshine/Test"
            );
        }
        assert_eq!(browser.profile().cache_mode, HttpCacheMode::None);
    }

    #[test]
    fn test_add_close_navigate_scenario() {
        let mut browser = browser();

        assert_eq!(browser.add_tab().unwrap(), 1);
        assert_eq!(browser.tabs().len(), 2);
        assert_eq!(browser.tab_container().active_index(), 1);

        let address = browser.submit("test.org").unwrap();
        assert_eq!(address.as_deref(), Some("https://test.org"));
        assert_eq!(
            browser.factory().journal(1).unwrap().navigations(),
            vec!["https://test.org"]
        );

        assert!(browser.close_tab(1).unwrap());
        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.tab_container().active_index(), 0);
        assert!(browser.factory().journal(1).unwrap().released);
        assert!(!browser.factory().journal(0).unwrap().released);
    }

    #[test]
    fn test_close_last_tab_refused() {
        let mut browser = browser();
        assert!(!browser.close_tab(0).unwrap());
        assert_eq!(browser.tabs().len(), 1);
    }

    #[test]
    fn test_close_out_of_range() {
        let mut browser = browser();
        browser.add_tab().unwrap();
        assert!(browser.close_tab(5).is_err());
        assert_eq!(browser.tabs().len(), 2);
    }

    #[test]
    fn test_activate_out_of_range_keeps_active() {
        let mut browser = browser();
        browser.add_tab().unwrap();
        browser.activate_tab(0).unwrap();

        let result = browser.activate_tab(3);
        assert!(matches!(
            result,
            Err(CoreError::Tab(TabError::OutOfRange { index: 3, len: 2 }))
        ));
        assert_eq!(browser.tab_container().active_index(), 0);
    }

    #[test]
    fn test_activate_syncs_address() {
        let mut browser = browser();
        browser.submit("a.test").unwrap();
        browser.add_tab().unwrap();
        assert_eq!(browser.address(), "");

        browser.activate_tab(0).unwrap();
        assert_eq!(browser.address(), "https://a.test");
    }

    #[test]
    fn test_close_syncs_address_to_new_active() {
        let mut browser = browser();
        browser.submit("a.test").unwrap();
        browser.add_tab().unwrap();
        browser.submit("b.test").unwrap();

        browser.close_tab(1).unwrap();
        assert_eq!(browser.address(), "https://a.test");
    }

    #[test]
    fn test_by_id_operations() {
        let mut browser = browser();
        let first = browser.active_tab_id().unwrap();
        browser.add_tab().unwrap();

        assert_eq!(browser.activate_tab_by_id(first).unwrap(), 0);
        assert!(browser.close_tab_by_id(first).unwrap());
        assert!(matches!(
            browser.activate_tab_by_id(first),
            Err(CoreError::Tab(TabError::NotFound(_)))
        ));
    }

    #[test]
    fn test_dispatch_updates_entry_and_address() {
        let mut browser = browser();
        let id = browser.active_tab_id().unwrap();

        assert!(browser.dispatch(
            id,
            SurfaceEvent::AddressChanged {
                address: "https://redirected.test/".to_string(),
            },
        ));
        assert!(browser.dispatch(
            id,
            SurfaceEvent::TitleChanged {
                title: "Redirected".to_string(),
            },
        ));

        let tabs = browser.tabs();
        assert_eq!(tabs[0].label, "Redirected");
        assert_eq!(tabs[0].url, "https://redirected.test/");
        assert_eq!(browser.address(), "https://redirected.test/");
    }

    #[test]
    fn test_dispatch_from_background_tab() {
        let mut browser = browser();
        let background = browser.active_tab_id().unwrap();
        browser.add_tab().unwrap();

        browser.dispatch(
            background,
            SurfaceEvent::LoadFinished {
                success: true,
                address: "https://background.test/".to_string(),
            },
        );

        assert_eq!(browser.tabs()[0].url, "https://background.test/");
        assert_eq!(browser.address(), "");
    }

    #[test]
    fn test_dispatch_to_closed_tab_is_dropped() {
        let mut browser = browser();
        browser.add_tab().unwrap();
        let closed = browser.active_tab_id().unwrap();
        browser.close_tab(1).unwrap();

        assert!(!browser.dispatch(
            closed,
            SurfaceEvent::TitleChanged {
                title: "Ghost".to_string(),
            },
        ));
        assert_eq!(browser.tabs()[0].label, moonshine_tabs::PLACEHOLDER_LABEL);
    }

    #[test]
    fn test_history_commands_reach_active_surface() {
        let mut browser = browser();
        browser.submit("a.test").unwrap();
        browser.submit("b.test").unwrap();

        browser.go_back();
        browser.go_forward();
        browser.go_back();
        browser.reload();

        let id = browser.active_tab_id().unwrap();
        let journal = browser.factory().journal_for(id).unwrap();
        assert_eq!(journal.address, "https://a.test");
        assert_eq!(
            journal.calls.last(),
            Some(&moonshine_engine::SurfaceCall::Reload)
        );
    }

    #[test]
    fn test_cancelled_download_left_unaccepted() {
        let browser = browser();
        let manager = browser.download_manager().clone();
        let cancel = |_: &Path| -> Option<PathBuf> { None };

        let decision = manager.request(
            DownloadRequest::new("https://example.com/file.bin", "file.bin"),
            &cancel,
        );

        assert_eq!(decision, DownloadDecision::Reject);
        assert!(!Path::new("/downloads/file.bin").exists());
        assert_eq!(browser.download_manager().list_downloads().len(), 1);
    }
}
