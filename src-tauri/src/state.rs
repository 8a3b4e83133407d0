//! Application state management
use moonshine_core::{Browser, DownloadManager, Result, SurfaceEvent, SurfaceFactory, TabId};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::webview::WebviewFactory;

pub type ShellBrowser = Browser<WebviewFactory>;
pub type AppState = ShellState<WebviewFactory>;

/// Outcome of handing an engine event to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Applied to its tab
    Handled,
    /// The tab no longer exists
    Ignored,
    /// The browser was locked; the event waits for the current holder
    Deferred,
}

/// Shared by every command and engine callback.
///
/// Commands lock the browser for one synchronous mutation. Engine callbacks
/// can fire while a command still holds the lock (platform webview creation
/// pumps messages on the UI thread), so they never wait on it: a contended
/// event is queued and the holder applies it before releasing the lock.
pub struct ShellState<F: SurfaceFactory> {
    browser: Mutex<Browser<F>>,
    /// Engine events that arrived while the browser was locked, oldest first
    pending: Mutex<VecDeque<(TabId, SurfaceEvent)>>,
    /// Deferred events changed state the UI has not been told about
    stale: AtomicBool,
    download_manager: DownloadManager,
}

impl<F: SurfaceFactory> ShellState<F> {
    pub fn new(browser: Browser<F>) -> Self {
        let download_manager = browser.download_manager().clone();
        Self {
            browser: Mutex::new(browser),
            pending: Mutex::new(VecDeque::new()),
            stale: AtomicBool::new(false),
            download_manager,
        }
    }

    pub fn with_browser<G, T>(&self, f: G) -> Result<T>
    where
        G: FnOnce(&mut Browser<F>) -> Result<T>,
    {
        let mut guard = self.browser.lock();
        let result = f(&mut guard);
        self.apply_pending(&mut guard);
        result
    }

    /// Like `with_browser`, but `None` instead of waiting when the lock is held
    pub fn try_with_browser<G, T>(&self, f: G) -> Option<Result<T>>
    where
        G: FnOnce(&mut Browser<F>) -> Result<T>,
    {
        let mut guard = self.browser.try_lock()?;
        let result = f(&mut guard);
        self.apply_pending(&mut guard);
        Some(result)
    }

    /// Route an engine event without blocking
    pub fn deliver(&self, tab_id: TabId, event: SurfaceEvent) -> Delivery {
        let Some(mut guard) = self.browser.try_lock() else {
            tracing::debug!(tab_id = %tab_id, "Browser busy, deferring event");
            self.pending.lock().push_back((tab_id, event));
            return Delivery::Deferred;
        };

        // Older deferred events go first
        self.apply_pending(&mut guard);
        if guard.dispatch(tab_id, event) {
            Delivery::Handled
        } else {
            Delivery::Ignored
        }
    }

    /// Apply deferred events if the browser is free. Returns how many were
    /// applied to a live tab.
    pub fn drain_pending(&self) -> usize {
        match self.browser.try_lock() {
            Some(mut guard) => self.apply_pending(&mut guard),
            None => 0,
        }
    }

    pub fn mark_stale(&self) {
        self.stale.store(true, Ordering::Release);
    }

    /// Whether deferred events changed state since the last UI refresh
    pub fn take_stale(&self) -> bool {
        self.stale.swap(false, Ordering::AcqRel)
    }

    /// Shared handle; usable without the browser lock
    pub fn download_manager(&self) -> &DownloadManager {
        &self.download_manager
    }

    fn apply_pending(&self, browser: &mut Browser<F>) -> usize {
        let mut handled = 0;
        loop {
            let batch: Vec<_> = self.pending.lock().drain(..).collect();
            if batch.is_empty() {
                break;
            }
            for (tab_id, event) in batch {
                if browser.dispatch(tab_id, event) {
                    handled += 1;
                }
            }
        }
        if handled > 0 {
            self.mark_stale();
        }
        handled
    }
}
