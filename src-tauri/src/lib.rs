//! Moonshine Browser - Tauri Application
//!
//! - One window: a UI webview for the toolbar and tab strip, plus one
//!   child webview per tab
//! - Rust owns all tab and navigation state

mod commands;
mod state;
mod webview;

use moonshine_core::{Browser, Config};
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl, WindowEvent};
use webview::{ContentBounds, ContentLayout, WebviewFactory};

const WINDOW_LABEL: &str = "main";

fn load_config() -> Config {
    let path = Config::default_path();
    match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            Config::default()
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    moonshine_core::init_logging();

    let config = load_config();

    tauri::Builder::default()
        .setup(move |app| {
            let width = config.window.width;
            let height = config.window.height;

            let window = WindowBuilder::new(app, WINDOW_LABEL)
                .title(&config.window.title)
                .inner_size(width, height)
                .min_inner_size(800.0, 600.0)
                .center()
                .build()?;

            if let Some(theme) = commands::settings::platform_theme_for(&config.theme.name) {
                app.handle().set_theme(Some(theme));
                let _ = window.set_theme(Some(theme));
            }

            let ui_webview = WebviewBuilder::new(
                commands::ui_webview_label(WINDOW_LABEL),
                WebviewUrl::App("index.html".into()),
            )
            .auto_resize();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(width, height),
            )?;
            let _ = ui_webview.show();

            let layout = ContentLayout::new(ContentBounds::below_chrome(width, height));
            app.manage(layout.clone());

            // Profile is frozen here, before the first tab exists
            let factory = WebviewFactory::new(
                app.handle().clone(),
                WINDOW_LABEL,
                config.data_dir.clone(),
                layout,
            );
            let browser = Browser::new(config.clone(), factory)?;

            app.manage(AppState::new(browser));

            tracing::info!("Moonshine Browser started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Resized(size) = event {
                webview::relayout(window, *size);
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Tab commands
            commands::tabs::create_tab,
            commands::tabs::close_tab,
            commands::tabs::activate_tab,
            commands::tabs::get_tabs,
            // Navigation commands
            commands::navigation::submit_address,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload,
            commands::navigation::get_address,
            // Settings commands
            commands::settings::get_settings,
            // Download commands
            commands::downloads::list_downloads,
            commands::downloads::get_download,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Moonshine browser");
}
