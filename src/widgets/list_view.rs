//! Scrollable list of expandable items.

use eframe::egui;

use crate::core::event_bus::EventEmitter;
use crate::core::list::ListCoordinator;
use crate::widgets::expandable::{self, ItemStyle};

/// Render every item inside a vertical scroll area.
///
/// Returns the measured description height per item, in list order.
pub fn show(
    ui: &mut egui::Ui,
    list: &ListCoordinator,
    emitter: &EventEmitter,
    style: &ItemStyle,
    now: f64,
) -> Vec<f32> {
    let mut measured = Vec::with_capacity(list.len());

    egui::ScrollArea::vertical()
        .id_salt("item_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if list.is_empty() {
                ui.weak("No entries.");
                return;
            }
            for (index, item) in list.items().iter().enumerate() {
                let handle = list.handle(index, emitter.clone());
                measured.push(expandable::show(ui, item, &handle, style, now));
            }
        });

    measured
}
