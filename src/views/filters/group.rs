use eframe::egui::{self, RichText, Sense, Ui};

use crate::ui_constants::{palette, spacing};

/// Host-supplied configuration for the group container.
pub struct FilterGroupProps<'a> {
    pub title: &'a str,
    /// Every applied label across the grouped filters; gates CLEAR ALL.
    pub applied: &'a [String],
    /// Host opts in to the CLEAR ALL affordance.
    pub clearable: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilterGroupResponse {
    /// CLEAR ALL was clicked; clearing is entirely the host's job.
    pub clear_all: bool,
}

/// Container around a set of filters: title, optional CLEAR ALL, SHOW/HIDE
/// toggle flipping the host-owned `shown` flag, and the body closure
/// rendered only while shown. Holds no filter data itself.
pub fn filter_group(
    ui: &mut Ui,
    props: &FilterGroupProps,
    shown: &mut bool,
    add_contents: impl FnOnce(&mut Ui),
) -> FilterGroupResponse {
    let mut response = FilterGroupResponse::default();

    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(props.title).strong()).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle = if *shown { "HIDE" } else { "SHOW" };
            if header_action(ui, toggle) {
                *shown = !*shown;
            }
            if props.clearable && !props.applied.is_empty() && header_action(ui, "CLEAR ALL") {
                response.clear_all = true;
            }
        });
    });

    if *shown {
        ui.separator();
        ui.add_space(spacing::SMALL);
        add_contents(ui);
    }

    response
}

/// Small uppercase text action in the group header.
fn header_action(ui: &mut Ui, label: &str) -> bool {
    ui.add(
        egui::Label::new(RichText::new(label).size(12.0).color(palette::ACCENT_SOFT))
            .sense(Sense::click())
            .selectable(false),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
    .clicked()
}
