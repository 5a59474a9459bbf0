use eframe::egui::{self, pos2, Align2, FontId, Rounding, Sense, Stroke, Ui, Vec2};

use crate::ui_constants::{filter, palette, spacing};
use crate::views::filters::FilterOption;

/// Painted checkbox row: box, label, optional right-aligned count.
/// The whole row is clickable. Returns Some(new_value) on the click frame.
/// `full_width` rows stretch across the panel; otherwise the row shrinks to
/// its content so callers can lay rows out horizontally wrapped.
pub fn checkbox_row(
    ui: &mut Ui,
    checked: bool,
    option: &FilterOption,
    full_width: bool,
) -> Option<bool> {
    let font = FontId::proportional(14.0);
    let box_side = filter::CHECKBOX_SIZE;
    let row_height = (ui.spacing().interact_size.y * 1.2).max(box_side + 6.0);

    let label_galley = ui.fonts(|f| f.layout_no_wrap(option.label.clone(), font.clone(), palette::TEXT));
    let count_text = option.count.map(|n| format!("({n})"));
    let count_galley = count_text
        .as_ref()
        .map(|t| ui.fonts(|f| f.layout_no_wrap(t.clone(), FontId::proportional(12.0), palette::TEXT_WEAK)));

    let content_width = box_side
        + spacing::MEDIUM
        + label_galley.size().x
        + count_galley
            .as_ref()
            .map(|g| spacing::MEDIUM + g.size().x)
            .unwrap_or(0.0)
        + spacing::MEDIUM;
    let width = if full_width {
        ui.available_width()
    } else {
        content_width
    };

    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, row_height), Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();

    if response.hovered() {
        painter.rect(
            rect.shrink2(Vec2::new(1.0, 1.0)),
            Rounding::same(4.0),
            palette::HOVER,
            Stroke::NONE,
        );
    }

    // Checkbox square with mark
    let box_rect = egui::Rect::from_center_size(
        pos2(rect.left() + box_side * 0.5 + 2.0, rect.center().y),
        Vec2::splat(box_side),
    );
    if checked {
        painter.rect(box_rect, Rounding::same(3.0), palette::ACCENT, Stroke::NONE);
        let c = box_rect.center();
        let mark = Stroke::new(2.0, palette::POPUP_BG);
        painter.line_segment([pos2(c.x - 3.5, c.y), pos2(c.x - 1.0, c.y + 3.0)], mark);
        painter.line_segment([pos2(c.x - 1.0, c.y + 3.0), pos2(c.x + 3.5, c.y - 3.0)], mark);
    } else {
        painter.rect(
            box_rect,
            Rounding::same(3.0),
            palette::PANEL_BG,
            Stroke::new(1.0, palette::BORDER),
        );
    }

    painter.text(
        pos2(box_rect.right() + spacing::MEDIUM, rect.center().y),
        Align2::LEFT_CENTER,
        &option.label,
        font,
        palette::TEXT,
    );

    if let Some(count) = &count_text {
        let x = if full_width {
            rect.right() - spacing::MEDIUM
        } else {
            rect.right() - spacing::SMALL
        };
        painter.text(
            pos2(x, rect.center().y),
            Align2::RIGHT_CENTER,
            count,
            FontId::proportional(12.0),
            palette::TEXT_WEAK,
        );
    }

    if response.clicked() {
        Some(!checked)
    } else {
        None
    }
}
