use eframe::egui::{self, RichText, Sense, Ui};

use crate::ui_constants::{palette, spacing};

/// Fixed loading leaf: spinner plus label, nothing interactive.
pub fn filter_loading(ui: &mut Ui) {
    ui.add_space(spacing::SMALL);
    ui.horizontal(|ui| {
        ui.add(egui::Spinner::new().size(14.0));
        ui.add(
            egui::Label::new(RichText::new("LOADING").size(12.0).color(palette::TEXT_WEAK))
                .selectable(false),
        );
    });
    ui.add_space(spacing::SMALL);
}

/// Fixed error leaf with a clickable RETRY region.
/// Returns true on the frame RETRY was clicked.
pub fn filter_error(ui: &mut Ui) -> bool {
    let mut retry = false;
    ui.add_space(spacing::SMALL);
    ui.add(
        egui::Label::new(
            RichText::new("⚠ ERROR LOADING FILTER")
                .size(12.0)
                .color(palette::ERROR),
        )
        .selectable(false),
    );
    let resp = ui
        .add(
            egui::Label::new(RichText::new("⟳ RETRY").size(12.0).color(palette::ACCENT))
                .sense(Sense::click())
                .selectable(false),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if resp.clicked() {
        retry = true;
    }
    ui.add_space(spacing::SMALL);
    retry
}
