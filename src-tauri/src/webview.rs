//! Webview-backed rendering surfaces
//!
//! Each tab gets its own child webview within the main window. Engine
//! callbacks capture only the tab id and go through `Browser::dispatch`.

use base64::Engine as _;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tauri::webview::{DownloadEvent, PageLoadEvent, Webview, WebviewBuilder};
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, PhysicalSize, WebviewUrl, Window};

use moonshine_core::{
    DownloadDecision, DownloadRequest, HttpCacheMode, Profile, RenderingSurface, SurfaceError,
    SurfaceEvent, SurfaceFactory, TabId,
};

use crate::commands::{downloads::SaveDialogPrompt, flush_deferred, notify_ui};
use crate::state::{AppState, Delivery};

/// Height of the toolbar plus tab strip drawn by the UI webview
pub const CHROME_HEIGHT: f64 = 84.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentBounds {
    /// Area below the browser chrome for a window of the given size
    pub fn below_chrome(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: CHROME_HEIGHT,
            width,
            height: (height - CHROME_HEIGHT).max(0.0),
        }
    }
}

/// Current content area, shared by the factory and the resize handler
#[derive(Clone)]
pub struct ContentLayout {
    bounds: Arc<RwLock<ContentBounds>>,
}

impl ContentLayout {
    pub fn new(bounds: ContentBounds) -> Self {
        Self {
            bounds: Arc::new(RwLock::new(bounds)),
        }
    }

    pub fn bounds(&self) -> ContentBounds {
        *self.bounds.read()
    }

    /// Recompute the content area for a new window size. A minimized window
    /// (zero size) keeps the previous bounds.
    pub fn resize(&self, width: f64, height: f64) -> Option<ContentBounds> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let bounds = ContentBounds::below_chrome(width, height);
        *self.bounds.write() = bounds;
        Some(bounds)
    }
}

pub fn content_label(window_label: &str, tab_id: TabId) -> String {
    format!("content-{}-{}", window_label, tab_id)
}

fn is_content_label(window_label: &str, label: &str) -> bool {
    label
        .strip_prefix("content-")
        .and_then(|rest| rest.strip_prefix(window_label))
        .is_some_and(|rest| rest.starts_with('-'))
}

/// Move every content webview of `window` to the area below the chrome.
/// Content webviews are not auto-resized: that scales the chrome offset too.
pub fn relayout(window: &Window, size: PhysicalSize<u32>) {
    let Some(layout) = window.try_state::<ContentLayout>() else {
        return;
    };
    let scale = match window.scale_factor() {
        Ok(scale) => scale,
        Err(e) => {
            tracing::warn!(window = %window.label(), error = %e, "No scale factor");
            return;
        }
    };
    let logical = size.to_logical::<f64>(scale);
    let Some(bounds) = layout.resize(logical.width, logical.height) else {
        return;
    };

    for webview in window.webviews() {
        if !is_content_label(window.label(), webview.label()) {
            continue;
        }
        if let Err(e) = webview.set_position(LogicalPosition::new(bounds.x, bounds.y)) {
            tracing::warn!(label = %webview.label(), error = %e, "Failed to set position");
        }
        if let Err(e) = webview.set_size(LogicalSize::new(bounds.width, bounds.height)) {
            tracing::warn!(label = %webview.label(), error = %e, "Failed to set size");
        }
    }
    tracing::debug!(window = %window.label(), ?bounds, "Content webviews resized");
}

pub struct WebviewFactory {
    app: AppHandle,
    window_label: String,
    data_dir: PathBuf,
    layout: ContentLayout,
}

impl WebviewFactory {
    pub fn new(
        app: AppHandle,
        window_label: &str,
        data_dir: PathBuf,
        layout: ContentLayout,
    ) -> Self {
        Self {
            app,
            window_label: window_label.to_string(),
            data_dir,
            layout,
        }
    }

    fn builder(
        &self,
        tab_id: TabId,
        profile: &Profile,
    ) -> Result<WebviewBuilder<tauri::Wry>, SurfaceError> {
        let label = content_label(&self.window_label, tab_id);
        let blank = "about:blank"
            .parse::<url::Url>()
            .map_err(|e| SurfaceError::Create(e.to_string()))?;

        let mut builder = WebviewBuilder::new(&label, WebviewUrl::External(blank))
            .user_agent(&profile.user_agent)
            .additional_browser_args(&profile.launch_arguments().join(" "));

        builder = match profile.cache_mode {
            HttpCacheMode::Disk => builder.data_directory(self.data_dir.join("webview-cache")),
            HttpCacheMode::Memory | HttpCacheMode::None => builder.incognito(true),
        };

        let app_for_load = self.app.clone();
        let window_for_load = self.window_label.clone();
        let app_for_title = self.app.clone();
        let window_for_title = self.window_label.clone();
        let app_for_download = self.app.clone();

        let builder = builder
            .on_page_load(move |_webview, payload| {
                let address = display_address(payload.url());
                let event = match payload.event() {
                    PageLoadEvent::Started => SurfaceEvent::AddressChanged { address },
                    // The platform webview does not report failure; error
                    // pages it renders still count as a finished load
                    PageLoadEvent::Finished => SurfaceEvent::LoadFinished {
                        success: true,
                        address,
                    },
                };
                forward_event(&app_for_load, &window_for_load, tab_id, event);
            })
            .on_document_title_changed(move |_webview, title| {
                forward_event(
                    &app_for_title,
                    &window_for_title,
                    tab_id,
                    SurfaceEvent::TitleChanged { title },
                );
            })
            .on_download(move |_webview, event| match event {
                DownloadEvent::Requested { url, destination } => {
                    let request = DownloadRequest::new(url.as_str(), destination.clone());
                    match resolve_download(&app_for_download, request) {
                        DownloadDecision::Accept(path) => {
                            *destination = path;
                            true
                        }
                        DownloadDecision::Reject => false,
                    }
                }
                DownloadEvent::Finished { url, path, success } => {
                    tracing::info!(
                        tab_id = %tab_id,
                        url = %url,
                        path = ?path,
                        success,
                        "Download finished"
                    );
                    true
                }
                _ => true,
            });

        Ok(builder)
    }
}

impl SurfaceFactory for WebviewFactory {
    type Surface = WebviewSurface;

    fn create(&self, tab_id: TabId, profile: &Profile) -> Result<WebviewSurface, SurfaceError> {
        let window = self
            .app
            .get_window(&self.window_label)
            .ok_or_else(|| SurfaceError::Unavailable(format!("window {}", self.window_label)))?;

        let builder = self.builder(tab_id, profile)?;
        let bounds = self.layout.bounds();

        match window.add_child(
            builder,
            LogicalPosition::new(bounds.x, bounds.y),
            LogicalSize::new(bounds.width, bounds.height),
        ) {
            Ok(webview) => {
                tracing::info!(label = %webview.label(), tab_id = %tab_id, "Created child webview");
                Ok(WebviewSurface { tab_id, webview })
            }
            Err(e) => {
                tracing::error!(tab_id = %tab_id, error = %e, "Failed to create child webview");
                Err(SurfaceError::Create(e.to_string()))
            }
        }
    }
}

pub struct WebviewSurface {
    tab_id: TabId,
    webview: Webview,
}

impl WebviewSurface {
    fn eval(&self, script: &str) {
        if let Err(e) = self.webview.eval(script) {
            tracing::warn!(tab_id = %self.tab_id, error = %e, script, "Webview eval failed");
        }
    }
}

impl RenderingSurface for WebviewSurface {
    fn navigate(&mut self, address: &str) {
        let parsed = match url::Url::parse(address) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(tab_id = %self.tab_id, address, error = %e, "Unparseable address");
                return;
            }
        };
        if let Err(e) = self.webview.navigate(parsed) {
            tracing::warn!(tab_id = %self.tab_id, address, error = %e, "Navigation failed");
        }
    }

    fn load_content(&mut self, markup: &str) {
        let encoded = base64::engine::general_purpose::STANDARD.encode(markup);
        self.navigate(&format!("data:text/html;charset=utf-8;base64,{}", encoded));
    }

    fn go_back(&mut self) {
        self.eval("history.back()");
    }

    fn go_forward(&mut self) {
        self.eval("history.forward()");
    }

    fn reload(&mut self) {
        if let Err(e) = self.webview.reload() {
            tracing::warn!(tab_id = %self.tab_id, error = %e, "Reload failed");
        }
    }

    fn current_address(&self) -> String {
        self.webview
            .url()
            .map(|url| display_address(&url))
            .unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        let result = if visible {
            self.webview.show()
        } else {
            self.webview.hide()
        };
        if let Err(e) = result {
            tracing::warn!(tab_id = %self.tab_id, visible, error = %e, "Failed to toggle webview");
        }
    }

    fn release(&mut self) {
        if let Err(e) = self.webview.close() {
            tracing::warn!(tab_id = %self.tab_id, error = %e, "Failed to close webview");
        }
        tracing::info!(label = %self.webview.label(), "Closed webview");
    }
}

/// Address shown to the user; built-in content has none
fn display_address(url: &url::Url) -> String {
    match url.scheme() {
        "data" => String::new(),
        "about" if url.path() == "blank" => String::new(),
        _ => url.to_string(),
    }
}

/// Runs on the UI thread, possibly while a command holds the browser lock
fn forward_event(app: &AppHandle, window_label: &str, tab_id: TabId, event: SurfaceEvent) {
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };
    match state.deliver(tab_id, event) {
        Delivery::Handled => notify_ui(app, window_label),
        Delivery::Ignored => {}
        Delivery::Deferred => {
            let app_for_flush = app.clone();
            let window_for_flush = window_label.to_string();
            if let Err(e) = app.run_on_main_thread(move || {
                flush_deferred(&app_for_flush, &window_for_flush)
            }) {
                tracing::warn!(tab_id = %tab_id, error = %e, "Failed to schedule event flush");
            }
        }
    }
}

fn resolve_download(app: &AppHandle, request: DownloadRequest) -> DownloadDecision {
    let Some(state) = app.try_state::<AppState>() else {
        return DownloadDecision::Reject;
    };
    // The manager handle needs no browser lock while the modal dialog is open
    state.download_manager().request(request, &SaveDialogPrompt)
}
