//! Expandable item widget - a full-width button with an animated panel below.
//!
//! The widget only draws. Clicks go through the item's `ActivationHandle`;
//! the panel height comes from the controller and is sampled at `now`.

use eframe::egui;

use crate::core::item::ItemController;
use crate::core::list::ActivationHandle;
use crate::dialogs::prefs::AppSettings;

/// Below this height the panel is not drawn at all
const MIN_VISIBLE_HEIGHT: f32 = 0.5;

/// Visual parameters resolved from settings once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    pub font_size: f32,
    pub button_height: f32,
    pub spacing: f32,
    pub padding: i8,
    pub button_fill: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_color: egui::Color32,
}

impl ItemStyle {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            font_size: settings.font_size,
            button_height: settings.button_height,
            spacing: settings.item_spacing,
            padding: settings.panel_padding.max(0),
            button_fill: settings.button_color32(),
            panel_fill: settings.panel_color32(),
            text_color: settings.text_color32(),
        }
    }

    fn pad(&self) -> f32 {
        f32::from(self.padding)
    }
}

/// Height of the description laid out at `width`, including panel padding.
pub fn measure_description(ui: &egui::Ui, text: &str, style: &ItemStyle, width: f32) -> f32 {
    let wrap_width = (width - 2.0 * style.pad()).max(1.0);
    let galley = ui.painter().layout(
        text.to_owned(),
        egui::FontId::proportional(style.font_size),
        style.text_color,
        wrap_width,
    );
    galley.size().y + 2.0 * style.pad()
}

/// Draw one item. Returns the measured content height of its description.
pub fn show(
    ui: &mut egui::Ui,
    item: &ItemController,
    handle: &ActivationHandle,
    style: &ItemStyle,
    now: f64,
) -> f32 {
    let width = ui.available_width();
    let content_height = measure_description(ui, item.description(), style, width);

    let label = egui::RichText::new(item.label())
        .size(style.font_size)
        .color(style.text_color);
    let button = egui::Button::new(label)
        .fill(style.button_fill)
        .min_size(egui::vec2(width, style.button_height));

    if ui.add(button).clicked() {
        log::debug!("Button {} '{}' clicked", handle.index(), item.label());
        handle.request_toggle(content_height);
    }

    let height = item.panel_height(now);
    if height > MIN_VISIBLE_HEIGHT {
        show_panel(ui, item.description(), style, width, height);
    }

    ui.add_space(style.spacing);
    content_height
}

fn show_panel(ui: &mut egui::Ui, text: &str, style: &ItemStyle, width: f32, height: f32) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(4), style.panel_fill);

    // Text is laid out at full size and clipped to the animated height
    let inner = rect.shrink(style.pad());
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(inner)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(inner.intersect(ui.clip_rect()));
    child.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(style.font_size)
                .color(style.text_color),
        )
        .wrap()
        .selectable(true),
    );
}
