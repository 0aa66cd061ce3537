//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Render a magnitude badge colored by severity.
pub fn magnitude_badge(ui: &mut egui::Ui, magnitude: f64) {
    let (bg, fg) = theme::magnitude_colors(magnitude);
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(1.0, fg))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("M {}", magnitude))
                        .size(13.0)
                        .color(fg),
                )
                .selectable(false),
            );
        });
}

/// Inline field error label, shown under the offending input.
pub fn field_error(ui: &mut egui::Ui, message: &Option<String>) {
    if let Some(message) = message {
        ui.add(
            egui::Label::new(
                egui::RichText::new(message.as_str())
                    .size(11.0)
                    .color(theme::STATUS_ERROR),
            )
            .selectable(false),
        );
    }
}

/// Section header label for sidebar form groups.
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(egui::RichText::new(text).color(theme::TEXT_DIM).size(11.0))
            .selectable(false),
    );
}
