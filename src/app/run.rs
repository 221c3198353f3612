//! Main application loop - eframe::App implementation.
//!
//! Flow of update():
//! 1. Apply theme, fonts, animation and window settings
//! 2. Drain events queued during the previous frame (clicks, hotkeys, settles)
//! 3. Tick animations
//! 4. Render status bar, header and the item list
//! 5. Refit the expanded panel, handle hotkeys, preferences window
//! 6. Keep repainting while anything is in flight

use eframe::egui;
use log::debug;

use crate::app::{AccordionApp, WindowChrome};
use crate::dialogs::prefs::render_settings_window;
use crate::widgets::expandable::ItemStyle;
use crate::widgets::{header, list_view};

impl AccordionApp {
    fn apply_style(&self, ctx: &egui::Context) {
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut style = (*ctx.style()).clone();
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => self.settings.headline_size,
                _ => self.settings.font_size,
            };
        }
        ctx.set_style(style);
    }

    /// Send title/size/resizable to the window when they change.
    pub fn sync_window_chrome(&mut self, ctx: &egui::Context) {
        let chrome = WindowChrome::from_settings(&self.settings);
        if self.applied_chrome.as_ref() == Some(&chrome) {
            return;
        }
        debug!("Window chrome: {:?}", chrome);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(chrome.title.clone()));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            chrome.width,
            chrome.height,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::Resizable(!chrome.fixed));
        self.applied_chrome = Some(chrome);
    }
}

impl eframe::App for AccordionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.apply_style(ctx);
        self.sync_font(ctx);
        self.sync_animation_settings();
        self.sync_window_chrome(ctx);

        self.handle_events(ctx, now);
        self.tick_animations(now);

        self.status_bar.render(ctx, &self.list, &self.content_path);

        let style = ItemStyle::from_settings(&self.settings);
        let emitter = self.event_bus.emitter();
        egui::CentralPanel::default().show(ctx, |ui| {
            header::show(
                ui,
                &self.settings.headline,
                &self.settings.intro_text,
                self.settings.headline_size,
            );
            self.measured = list_view::show(ui, &self.list, &emitter, &style, now);
        });

        if self.refit_expanded() {
            ctx.request_repaint();
        }

        self.handle_keyboard_input(ctx);

        if self.show_settings {
            render_settings_window(ctx, &mut self.show_settings, &mut self.settings);
        }

        // Clicks emitted this frame are applied at the start of the next one
        if self.list.is_animating() || self.event_bus.queue_len() > 0 {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            debug!("App state saved");
        }
    }
}
