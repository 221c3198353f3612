use eframe::egui;

/// Centered headline followed by wrapped intro text.
pub fn show(ui: &mut egui::Ui, headline: &str, intro: &str, headline_size: f32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(headline).size(headline_size).strong());
    });
    ui.add_space(6.0);

    let intro = intro.trim();
    if !intro.is_empty() {
        ui.add(egui::Label::new(intro).wrap());
        ui.add_space(8.0);
    }
}
