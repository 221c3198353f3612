use crate::core::list::ListCoordinator;
use eframe::egui;
use std::path::Path;

/// Status bar component
#[derive(Debug, Default)]
pub struct StatusBar {
    pub current_message: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current_message = message.into();
    }

    /// Render status bar at bottom of screen
    pub fn render(&self, ctx: &egui::Context, list: &ListCoordinator, content_path: &Path) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(format!("{} entries", list.len()));

                ui.separator();

                let expanded = list
                    .expanded_index()
                    .and_then(|i| list.get(i))
                    .map(|item| item.label())
                    .unwrap_or("none");
                ui.monospace(format!("Expanded: {expanded}"));

                ui.separator();

                let file = content_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("---");
                ui.monospace(file).on_hover_text(content_path.display().to_string());

                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.monospace(&self.current_message);
                }
            });
        });
    }
}
