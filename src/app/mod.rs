//! Application module - AccordionApp and related functionality.
//!
//! Submodules:
//! - `events` - Event routing (clicks, hotkeys, animation completion)
//! - `fonts` - Custom font installation and live font switching
//! - `run` - eframe::App implementation (per-frame update)

mod events;
mod fonts;
mod run;

pub use fonts::install_font;

use std::path::PathBuf;

use crate::content::ContentEntry;
use crate::core::event_bus::EventBus;
use crate::core::item::AnimationConfig;
use crate::core::list::ListCoordinator;
use crate::dialogs::prefs::AppSettings;
use crate::widgets::status::StatusBar;

/// Window properties that can be changed at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowChrome {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub fixed: bool,
}

impl WindowChrome {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            title: settings.window_title.clone(),
            width: settings.window_width,
            height: settings.window_height,
            fixed: settings.fixed_window,
        }
    }
}

/// Main application state.
///
/// Only `settings` is persisted; the list is rebuilt from the content file on
/// every start.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AccordionApp {
    pub settings: AppSettings,
    #[serde(skip)]
    pub list: ListCoordinator,
    #[serde(skip)]
    pub content_path: PathBuf,
    /// Global event bus: widgets emit, update() drains
    #[serde(skip)]
    pub event_bus: EventBus,
    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub show_settings: bool,
    /// Measured description heights from the last rendered frame
    #[serde(skip)]
    pub measured: Vec<f32>,
    #[serde(skip)]
    pub applied_animation: Option<AnimationConfig>,
    #[serde(skip)]
    pub applied_chrome: Option<WindowChrome>,
    /// Font path currently installed in the context (None inside = built-in)
    #[serde(skip)]
    pub applied_font: Option<Option<PathBuf>>,
}

impl Default for AccordionApp {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            list: ListCoordinator::default(),
            content_path: PathBuf::new(),
            event_bus: EventBus::new(),
            status_bar: StatusBar::new(),
            show_settings: false,
            measured: Vec::new(),
            applied_animation: None,
            applied_chrome: None,
            applied_font: None,
        }
    }
}

impl AccordionApp {
    /// Build the list from loaded content using the current settings.
    pub fn load_entries(&mut self, entries: Vec<ContentEntry>, content_path: PathBuf) {
        let config = self.animation_config();
        self.list = ListCoordinator::from_entries(entries, config);
        self.applied_animation = Some(config);
        self.measured.clear();
        self.content_path = content_path;
    }

    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            duration: self.settings.animation_duration(),
            policy: self.settings.height_policy,
        }
    }

    /// Push changed animation settings into the list.
    fn sync_animation_settings(&mut self) {
        let config = self.animation_config();
        if self.applied_animation != Some(config) {
            log::info!(
                "Animation settings: {}ms, {:?}",
                config.duration.as_millis(),
                config.policy
            );
            self.list.set_animation(config.duration, config.policy);
            self.applied_animation = Some(config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::PanelHeightPolicy;
    use std::time::Duration;

    #[test]
    fn test_load_entries_uses_settings() {
        let mut app = AccordionApp::default();
        app.settings.animation_ms = 100;
        app.settings.height_policy = PanelHeightPolicy::Fixed { height: 50.0 };
        app.load_entries(
            vec![ContentEntry::new("A", "a"), ContentEntry::new("B", "b")],
            PathBuf::from("buttons.json"),
        );
        assert_eq!(app.list.len(), 2);
        assert_eq!(app.list.config().duration, Duration::from_millis(100));
        assert_eq!(app.list.config().policy, PanelHeightPolicy::Fixed { height: 50.0 });
    }

    #[test]
    fn test_sync_animation_settings() {
        let mut app = AccordionApp::default();
        app.load_entries(vec![ContentEntry::new("A", "a")], PathBuf::new());
        app.settings.animation_ms = 600;
        app.sync_animation_settings();
        assert_eq!(app.list.config().duration, Duration::from_millis(600));
    }

    #[test]
    fn test_persisted_state_skips_runtime_fields() {
        let mut app = AccordionApp::default();
        app.load_entries(vec![ContentEntry::new("A", "a")], PathBuf::from("x.json"));
        app.settings.dark_mode = false;

        let json = serde_json::to_string(&app).unwrap();
        assert!(!json.contains("x.json"));

        let restored: AccordionApp = serde_json::from_str(&json).unwrap();
        assert!(!restored.settings.dark_mode);
        assert!(restored.list.is_empty());
    }
}
