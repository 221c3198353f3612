use eframe::egui;
use egui_ltreeview::TreeView;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::animation::DEFAULT_DURATION_MS;
use crate::core::item::{DEFAULT_HEIGHT_BUFFER, FIXED_PANEL_HEIGHT, PanelHeightPolicy};

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    Appearance,
    Animation,
    Window,
}

impl SettingsCategory {
    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::Appearance => "Appearance",
            SettingsCategory::Animation => "Animation",
            SettingsCategory::Window => "Window",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "Appearance" => Some(SettingsCategory::Appearance),
            "Animation" => Some(SettingsCategory::Animation),
            "Window" => Some(SettingsCategory::Window),
            _ => None,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppSettings {
    // Appearance
    pub dark_mode: bool,
    pub font_size: f32,
    pub headline_size: f32,
    /// Optional TTF/OTF file used as the primary proportional font
    pub font_path: Option<PathBuf>,
    pub button_height: f32,
    pub item_spacing: f32,
    pub panel_padding: i8,
    pub button_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub text_color: [u8; 3],

    // Animation
    pub animation_ms: u64,
    pub height_policy: PanelHeightPolicy,

    // Window
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub fixed_window: bool,
    pub headline: String,
    pub intro_text: String,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: 14.0,
            headline_size: 24.0,
            font_path: None,
            button_height: 40.0,
            item_spacing: 5.0,
            panel_padding: 6,
            button_color: [58, 74, 96],
            panel_color: [32, 36, 44],
            text_color: [220, 220, 220],
            animation_ms: DEFAULT_DURATION_MS,
            height_policy: PanelHeightPolicy::default(),
            window_title: "Expandable Buttons Example".to_string(),
            window_width: 1000.0,
            window_height: 700.0,
            fixed_window: true,
            headline: "Headline".to_string(),
            intro_text: "Et totam earum ut soluta accusantium id veritatis recusandae nam voluptatem nesciunt."
                .to_string(),
            selected_settings_category: Some("Appearance".to_string()),
        }
    }
}

impl AppSettings {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn button_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.button_color;
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn panel_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.panel_color;
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn text_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.text_color;
        egui::Color32::from_rgb(r, g, b)
    }
}

fn render_appearance_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.checkbox(&mut settings.dark_mode, "Dark Mode");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=24.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.label("Button Height:");
    ui.add(
        egui::Slider::new(&mut settings.button_height, 24.0..=80.0)
            .suffix(" px")
            .step_by(2.0),
    );
    ui.add_space(8.0);

    ui.label("Item Spacing:");
    ui.add(
        egui::Slider::new(&mut settings.item_spacing, 0.0..=24.0)
            .suffix(" px")
            .step_by(1.0),
    );
    ui.add_space(8.0);

    ui.label("Panel Padding:");
    ui.add(egui::Slider::new(&mut settings.panel_padding, 0..=24).suffix(" px"));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.color_edit_button_srgb(&mut settings.button_color);
        ui.label("Button");
        ui.color_edit_button_srgb(&mut settings.panel_color);
        ui.label("Panel");
        ui.color_edit_button_srgb(&mut settings.text_color);
        ui.label("Text");
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Font file:");
        match &settings.font_path {
            Some(path) => ui.monospace(path.display().to_string()),
            None => ui.weak("built-in"),
        };
        if settings.font_path.is_some() && ui.small_button("Use built-in").clicked() {
            settings.font_path = None;
        }
    });
    ui.weak("Set with --font.");
}

fn render_animation_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Animation");
    ui.add_space(8.0);

    ui.label("Duration:");
    ui.add(egui::Slider::new(&mut settings.animation_ms, 0..=1000).suffix(" ms"));
    ui.add_space(12.0);

    ui.label("Panel height:");
    let mut measured = matches!(settings.height_policy, PanelHeightPolicy::Measured { .. });
    ui.horizontal(|ui| {
        ui.radio_value(&mut measured, true, "Fit to text");
        ui.radio_value(&mut measured, false, "Fixed");
    });

    settings.height_policy = match (measured, settings.height_policy) {
        (true, PanelHeightPolicy::Fixed { .. }) => PanelHeightPolicy::Measured {
            buffer: DEFAULT_HEIGHT_BUFFER,
        },
        (false, PanelHeightPolicy::Measured { .. }) => PanelHeightPolicy::Fixed {
            height: FIXED_PANEL_HEIGHT,
        },
        (_, policy) => policy,
    };

    match &mut settings.height_policy {
        PanelHeightPolicy::Measured { buffer } => {
            ui.label("Buffer below text:");
            ui.add(egui::Slider::new(buffer, 0.0..=60.0).suffix(" px"));
        }
        PanelHeightPolicy::Fixed { height } => {
            ui.label("Height:");
            ui.add(egui::Slider::new(height, 20.0..=600.0).suffix(" px"));
        }
    }
}

fn render_window_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Window");
    ui.add_space(8.0);

    ui.label("Title:");
    ui.text_edit_singleline(&mut settings.window_title);
    ui.add_space(8.0);

    ui.label("Headline:");
    ui.text_edit_singleline(&mut settings.headline);
    ui.add_space(8.0);

    ui.label("Intro:");
    ui.text_edit_multiline(&mut settings.intro_text);
    ui.add_space(8.0);

    ui.checkbox(&mut settings.fixed_window, "Fixed window size");
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut settings.window_width).range(320.0..=3840.0));
        ui.label("x");
        ui.add(egui::DragValue::new(&mut settings.window_height).range(240.0..=2160.0));
    });
}

/// Render settings window with category tree
pub fn render_settings_window(ctx: &egui::Context, show_settings: &mut bool, settings: &mut AppSettings) {
    let mut selected = settings
        .selected_settings_category
        .as_ref()
        .and_then(|s| SettingsCategory::from_str(s))
        .unwrap_or(SettingsCategory::Appearance);

    egui::Window::new("Preferences")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([520.0, 380.0])
        .min_size([420.0, 300.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Left panel: category tree
                ui.vertical(|ui| {
                    ui.set_width(140.0);
                    ui.add_space(4.0);

                    let tree_id = ui.make_persistent_id("settings_tree_view");
                    let (_response, actions) = TreeView::new(tree_id).show(ui, |builder| {
                        builder.leaf(0, SettingsCategory::Appearance.as_str());
                        builder.leaf(1, SettingsCategory::Animation.as_str());
                        builder.leaf(2, SettingsCategory::Window.as_str());
                    });

                    for action in actions {
                        if let egui_ltreeview::Action::SetSelected(node_ids) = action
                            && let Some(&node_id) = node_ids.first()
                        {
                            selected = match node_id {
                                0 => SettingsCategory::Appearance,
                                1 => SettingsCategory::Animation,
                                2 => SettingsCategory::Window,
                                _ => selected,
                            };
                        }
                    }
                });

                ui.separator();

                ui.vertical(|ui| match selected {
                    SettingsCategory::Appearance => render_appearance_settings(ui, settings),
                    SettingsCategory::Animation => render_animation_settings(ui, settings),
                    SettingsCategory::Window => render_window_settings(ui, settings),
                });
            });

            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                log::info!("Preferences reset to defaults");
                *settings = AppSettings {
                    selected_settings_category: Some(selected.as_str().to_string()),
                    ..AppSettings::default()
                };
            }
        });

    settings.selected_settings_category = Some(selected.as_str().to_string());
}
