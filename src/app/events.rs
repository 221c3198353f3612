//! Event routing for AccordionApp.
//!
//! Widgets and hotkeys emit onto the EventBus during a frame; the queue is
//! drained at the start of the next update() and applied to the list here.

use eframe::egui;
use log::{debug, trace};

use crate::app::AccordionApp;
use crate::core::event_bus::downcast_event;
use crate::core::item_events::{CollapseAllEvent, ItemClickedEvent, PanelSettledEvent};
use crate::dialogs::prefs::prefs_events::TogglePrefsEvent;

impl AccordionApp {
    /// Drain the event queue. Returns true if anything was handled.
    pub fn handle_events(&mut self, ctx: &egui::Context, now: f64) -> bool {
        let events = self.event_bus.poll();
        let handled = !events.is_empty();

        for event in events {
            if let Some(e) = downcast_event::<ItemClickedEvent>(&event) {
                self.list.click(e.index, e.content_height, now);
                continue;
            }
            if downcast_event::<CollapseAllEvent>(&event).is_some() {
                debug!("Collapse all");
                self.list.collapse_all(now);
                continue;
            }
            if let Some(e) = downcast_event::<PanelSettledEvent>(&event) {
                // Panel reached its final size: re-measure the scroll content
                trace!("Panel {} settled (expanded: {})", e.index, e.expanded);
                ctx.request_repaint();
                continue;
            }
            if downcast_event::<TogglePrefsEvent>(&event).is_some() {
                self.show_settings = !self.show_settings;
                continue;
            }
            trace!("Unhandled event: {}", (*event).type_name());
        }

        handled
    }

    /// Advance animations and announce the ones that finished.
    pub fn tick_animations(&mut self, now: f64) {
        for settled in self.list.tick(now) {
            self.event_bus.emit(PanelSettledEvent {
                index: settled.index,
                expanded: settled.expanded,
            });
        }
    }

    /// Keep a settled expanded panel in sync with its measured text height.
    pub fn refit_expanded(&mut self) -> bool {
        let Some(index) = self.list.expanded_index() else {
            return false;
        };
        let Some(&content_height) = self.measured.get(index) else {
            return false;
        };
        self.list.refit(index, content_height)
    }

    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Text fields in the preferences window keep their keys
        if ctx.wants_keyboard_input() {
            return;
        }
        let (escape, f12) = ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.key_pressed(egui::Key::F12)));
        if escape {
            self.event_bus.emit(CollapseAllEvent);
        }
        if f12 {
            self.event_bus.emit(TogglePrefsEvent);
        }
    }
}
