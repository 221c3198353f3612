use anyhow::{Context, Result};
use eframe::egui;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::app::AccordionApp;

const CUSTOM_FONT_KEY: &str = "custom";

/// Install a TTF/OTF file as the primary proportional font.
///
/// The built-in fonts stay behind it as fallbacks for missing glyphs.
pub fn install_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font file: {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CUSTOM_FONT_KEY.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, CUSTOM_FONT_KEY.to_owned());
    ctx.set_fonts(fonts);

    info!("Installed font {}", path.display());
    Ok(())
}

impl AccordionApp {
    /// Install or drop the custom font when `settings.font_path` changes.
    ///
    /// A font that fails to load leaves the built-in fonts in place.
    pub fn sync_font(&mut self, ctx: &egui::Context) {
        if self.applied_font.as_ref() == Some(&self.settings.font_path) {
            return;
        }

        match &self.settings.font_path {
            Some(path) => {
                if let Err(e) = install_font(ctx, path) {
                    warn!("{:#}, using built-in fonts", e);
                    ctx.set_fonts(egui::FontDefinitions::default());
                    self.status_bar.set_message("Custom font not loaded");
                }
            }
            None => {
                ctx.set_fonts(egui::FontDefinitions::default());
                if self.applied_font.is_some() {
                    info!("Restored built-in fonts");
                }
            }
        }

        self.applied_font = Some(self.settings.font_path.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_is_an_error() {
        let ctx = egui::Context::default();
        let err = install_font(&ctx, Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.to_string().contains("font.ttf"));
    }

    #[test]
    fn test_sync_font_tracks_setting_changes() {
        let ctx = egui::Context::default();
        let mut app = AccordionApp::default();

        app.sync_font(&ctx);
        assert_eq!(app.applied_font, Some(None));

        app.settings.font_path = Some("/nonexistent/font.ttf".into());
        app.sync_font(&ctx);
        assert_eq!(app.status_bar.current_message, "Custom font not loaded");
        assert_eq!(app.applied_font, Some(app.settings.font_path.clone()));

        // Unchanged path is not retried
        app.status_bar.set_message("");
        app.sync_font(&ctx);
        assert_eq!(app.status_bar.current_message, "");

        // Reset to defaults drops the custom font without a restart
        app.settings.font_path = None;
        app.sync_font(&ctx);
        assert_eq!(app.applied_font, Some(None));
    }
}
