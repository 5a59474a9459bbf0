use eframe::egui::{
    self, pos2, Align2, Color32, FontId, Id, Key, Modifiers, Rounding, ScrollArea, Sense, Stroke,
    TextEdit, Ui, Vec2,
};

use crate::ui_constants::{filter, palette, spacing};

/// Inline autocomplete input with a suggestion popup.
/// The pending text lives in the caller (`input`) so an external reset can
/// clear it; popup open/selection state is kept in egui temp memory under
/// `key`. A suggestion click or Enter commits: Enter takes the highlighted
/// suggestion when any match is visible, otherwise the raw typed text.
/// Returns Some(committed) on the commit frame, with `input` cleared.
pub fn autocomplete_input(
    ui: &mut Ui,
    key: &str,
    placeholder: &str,
    input: &mut String,
    suggestions: &[String],
) -> Option<String> {
    let rounding = Rounding::same(filter::ROUNDING);

    // Input container
    let available_width = ui.available_width();
    let height = (ui.spacing().interact_size.y * 1.4).clamp(28.0, 40.0);
    let (container_rect, response) =
        ui.allocate_exact_size(Vec2::new(available_width, height), Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::Text);
    let painter = ui.painter();
    painter.rect(
        container_rect,
        rounding,
        palette::PANEL_BG,
        Stroke::new(1.0, palette::BORDER),
    );

    // Highlighted-suggestion index for keyboard navigation
    let sel_id: Id = Id::new(("filter_autocomplete", "sel", key));
    let mut sel_idx: usize = ui
        .memory(|m| m.data.get_temp::<usize>(sel_id))
        .unwrap_or(0);

    // Inline TextEdit inside the container, leaving room for the caret arrow
    let arrow_space = 18.0;
    let inner_rect = container_rect.shrink2(Vec2::new(spacing::MEDIUM, 6.0));
    let edit_rect = egui::Rect::from_min_max(
        inner_rect.min,
        pos2(inner_rect.max.x - arrow_space, inner_rect.max.y),
    );
    let mut edit_response: Option<egui::Response> = None;
    ui.allocate_ui_at_rect(edit_rect, |ui| {
        let r = ui.add_sized(
            [edit_rect.width(), ui.spacing().interact_size.y],
            TextEdit::singleline(input).hint_text(placeholder).frame(false),
        );
        edit_response = Some(r);
    });

    // Open/close popup state
    let popup_id: Id = Id::new(("filter_autocomplete", "popup", key));
    let mut is_open = ui
        .memory(|m| m.data.get_temp::<bool>(popup_id))
        .unwrap_or(false);

    if response.clicked() {
        is_open = true;
        sel_idx = 0;
        if let Some(id) = edit_response.as_ref().map(|r| r.id) {
            ui.memory_mut(|m| m.request_focus(id));
        }
    }
    if let Some(r) = &edit_response {
        if r.clicked() || r.has_focus() || r.changed() {
            if r.changed() {
                sel_idx = 0;
            }
            is_open = true;
        }
    }

    // Caret arrow on the right
    let cx = container_rect.right() - 12.0;
    let cy = container_rect.center().y + 1.0;
    let (w, h) = (8.0, 5.0);
    let col = if is_open {
        Color32::from_gray(230)
    } else {
        Color32::from_gray(200)
    };
    let painter = ui.painter();
    if is_open {
        painter.line_segment(
            [pos2(cx - w * 0.5, cy + h * 0.5), pos2(cx, cy - h * 0.5)],
            Stroke::new(1.5, col),
        );
        painter.line_segment(
            [pos2(cx + w * 0.5, cy + h * 0.5), pos2(cx, cy - h * 0.5)],
            Stroke::new(1.5, col),
        );
        painter.rect_stroke(container_rect, rounding, Stroke::new(1.0, palette::ACCENT));
    } else {
        painter.line_segment(
            [pos2(cx - w * 0.5, cy - h * 0.5), pos2(cx, cy + h * 0.5)],
            Stroke::new(1.5, col),
        );
        painter.line_segment(
            [pos2(cx + w * 0.5, cy - h * 0.5), pos2(cx, cy + h * 0.5)],
            Stroke::new(1.5, col),
        );
    }

    let mut committed: Option<String> = None;

    if is_open {
        // Case-insensitive substring match over the suggestion source
        let query = input.to_lowercase();
        let mut matches: Vec<&String> = suggestions
            .iter()
            .filter(|s| query.is_empty() || s.to_lowercase().contains(&query))
            .collect();
        matches.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        matches.dedup();
        if sel_idx >= matches.len() {
            sel_idx = matches.len().saturating_sub(1);
        }

        let (down, up, enter, esc) = ui.input_mut(|i| {
            (
                i.consume_key(Modifiers::NONE, Key::ArrowDown),
                i.consume_key(Modifiers::NONE, Key::ArrowUp),
                i.consume_key(Modifiers::NONE, Key::Enter),
                i.consume_key(Modifiers::NONE, Key::Escape),
            )
        });
        if down && !matches.is_empty() {
            sel_idx = (sel_idx + 1).min(matches.len() - 1);
        }
        if up {
            sel_idx = sel_idx.saturating_sub(1);
        }
        if enter {
            if let Some(pick) = matches.get(sel_idx) {
                committed = Some((*pick).clone());
            } else if !input.trim().is_empty() {
                // No visible suggestion: the raw text itself is the entry
                committed = Some(input.trim().to_string());
            }
        }
        if esc {
            is_open = false;
        }

        let popup_pos = pos2(
            container_rect.left(),
            container_rect.bottom() + spacing::SMALL,
        );
        let popup_width = container_rect.width();
        let inner = crate::views::ui_helpers::show_popup_area(ui, popup_id, popup_pos, popup_width, |ui| {
            ScrollArea::vertical()
                .max_height(filter::POPUP_MAX_HEIGHT)
                .show(ui, |ui| {
                    ui.set_width(popup_width - spacing::MEDIUM);
                    if matches.is_empty() {
                        ui.add_space(spacing::SMALL);
                        ui.label(
                            egui::RichText::new("Press Enter to add")
                                .color(palette::TEXT_WEAK)
                                .size(12.0),
                        );
                        ui.add_space(spacing::SMALL);
                        return;
                    }
                    for (i, name) in matches.iter().enumerate() {
                        let row_height = ui.spacing().interact_size.y * 1.2;
                        let (row_rect, row_resp) = ui.allocate_exact_size(
                            Vec2::new(ui.available_width(), row_height),
                            Sense::click(),
                        );
                        let row_p = ui.painter();
                        if row_resp.hovered() || i == sel_idx {
                            row_p.rect(
                                row_rect.shrink2(Vec2::new(2.0, 2.0)),
                                Rounding::same(filter::ROUNDING),
                                palette::HOVER,
                                Stroke::NONE,
                            );
                        }
                        row_p.text(
                            pos2(row_rect.left() + spacing::MEDIUM, row_rect.center().y),
                            Align2::LEFT_CENTER,
                            *name,
                            FontId::proportional(14.0),
                            palette::TEXT,
                        );
                        let row_resp = row_resp.on_hover_cursor(egui::CursorIcon::PointingHand);
                        if row_resp.hovered() {
                            sel_idx = i;
                        }
                        if row_resp.clicked() {
                            committed = Some((*name).clone());
                        }
                    }
                });
        });

        // Close when clicking anywhere outside the input and the popup
        let popup_rect = inner.response.rect;
        if crate::views::ui_helpers::clicked_outside(ui, &[popup_rect, container_rect]) {
            is_open = false;
        }
    }

    if committed.is_some() {
        input.clear();
        is_open = false;
        sel_idx = 0;
    }

    ui.memory_mut(|m| {
        m.data.insert_temp(popup_id, is_open);
        m.data.insert_temp(sel_id, sel_idx);
    });

    committed
}
