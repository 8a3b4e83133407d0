//! Settings commands

use serde::Serialize;
use tauri::State;

use moonshine_core::{Config, Profile};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SettingsInfo {
    pub window_title: String,
    pub theme: String,
    /// `dark`/`light` when the theme pins the platform theme
    pub platform_theme: Option<String>,
    pub stylesheet: String,
    pub search_engine: String,
    pub user_agent: String,
    pub cache_mode: String,
    pub launch_arguments: Vec<String>,
}

impl SettingsInfo {
    pub fn new(config: &Config, profile: &Profile) -> Self {
        Self {
            window_title: config.window.title.clone(),
            theme: config.theme.name.clone(),
            platform_theme: platform_theme_for(&config.theme.name)
                .map(|_| config.theme.name.clone()),
            stylesheet: config.theme.stylesheet.clone(),
            search_engine: config.search_engine.clone(),
            user_agent: profile.user_agent.clone(),
            cache_mode: profile.cache_mode.to_string(),
            launch_arguments: profile.launch_arguments(),
        }
    }
}

pub fn platform_theme_for(theme: &str) -> Option<tauri::Theme> {
    match theme {
        "dark" => Some(tauri::Theme::Dark),
        "light" => Some(tauri::Theme::Light),
        _ => None,
    }
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> CommandResult<SettingsInfo> {
    state
        .with_browser(|browser| Ok(SettingsInfo::new(browser.config(), browser.profile())))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_theme() {
        assert_eq!(platform_theme_for("dark"), Some(tauri::Theme::Dark));
        assert_eq!(platform_theme_for("light"), Some(tauri::Theme::Light));
        assert_eq!(platform_theme_for("system"), None);
    }

    #[test]
    fn test_settings_report_window_and_theme() {
        let mut config = Config::default();
        config.window.title = "Night Owl".to_string();

        let settings = SettingsInfo::new(&config, &config.profile);

        assert_eq!(settings.window_title, "Night Owl");
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.platform_theme.as_deref(), Some("dark"));
        assert_eq!(settings.stylesheet, config.theme.stylesheet);
        assert_eq!(settings.launch_arguments, config.profile.launch_arguments());

        config.theme.name = "system".to_string();
        assert!(SettingsInfo::new(&config, &config.profile)
            .platform_theme
            .is_none());
    }
}
