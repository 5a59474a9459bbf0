use eframe::egui::{self, pos2, RichText, Sense, Stroke, Ui, Vec2};

use crate::ui_constants::{palette, spacing};
use crate::views::filters::items::autocomplete::autocomplete_input;
use crate::views::filters::items::checkbox_row::checkbox_row;
use crate::views::filters::selection::FilterState;
use crate::views::filters::status::{filter_error, filter_loading};
use crate::views::filters::FilterOption;

/// Host-supplied configuration for one filter instance.
/// The widget never mutates any of this; the authoritative selected list is
/// passed separately as `&mut Vec<String>`.
#[derive(Default)]
pub struct FilterProps<'a> {
    /// Header text; also the autocomplete placeholder in field mode.
    pub label: Option<&'a str>,
    /// Static choice set (ignored for rows in field mode).
    pub options: &'a [FilterOption],
    /// Overrides the autocomplete suggestion source (defaults to option labels).
    pub labels: Option<&'a [String]>,
    /// Free-text entry mode: committed text becomes a checkbox row.
    pub field: bool,
    /// At-most-one-selected mode.
    pub radio: bool,
    /// Async-state passthrough from whatever source populates `options`.
    pub loading: bool,
    pub error: bool,
    /// Lay rows out horizontally wrapped instead of one per line.
    pub wrap: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilterResponse {
    /// The selected list changed this frame (the host's vec was rewritten).
    pub changed: bool,
    /// RETRY was clicked in the error body.
    pub retry: bool,
}

/// Which body renders below the header. Earlier states suppress later ones.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum FilterBody {
    Collapsed,
    Loading,
    Error,
    Options,
}

impl FilterBody {
    fn pick(collapsed: bool, loading: bool, error: bool) -> Self {
        if collapsed {
            FilterBody::Collapsed
        } else if loading {
            FilterBody::Loading
        } else if error {
            FilterBody::Error
        } else {
            FilterBody::Options
        }
    }
}

/// One filter: header with label and CLEAR-or-collapse control, then the
/// body picked by `FilterBody`. Synchronizes with the host list on entry
/// (external clear detection) and writes the recomputed selected list back
/// at the end of the frame.
pub fn filter(
    ui: &mut Ui,
    props: &FilterProps,
    state: &mut FilterState,
    selected: &mut Vec<String>,
) -> FilterResponse {
    state.sync_external(selected);

    let mut response = FilterResponse::default();
    let title = props.label.unwrap_or("FILTER");

    // Header. CLEAR and the collapse caret share the right-hand slot:
    // the caret only renders when there is nothing to clear.
    let clearable =
        !state.selection.is_empty() || (props.field && state.selection.has_entries());
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(title).weak()).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if clearable {
                let resp = ui
                    .add(
                        egui::Label::new(
                            RichText::new("✕ CLEAR").size(12.0).color(palette::ACCENT),
                        )
                        .sense(Sense::click())
                        .selectable(false),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if resp.clicked() {
                    state.reset();
                }
            } else {
                collapse_caret(ui, state);
            }
        });
    });

    match FilterBody::pick(state.collapsed, props.loading, props.error) {
        FilterBody::Collapsed => {}
        FilterBody::Loading => filter_loading(ui),
        FilterBody::Error => {
            if filter_error(ui) {
                response.retry = true;
            }
        }
        FilterBody::Options => show_options(ui, props, state, title),
    }

    response.changed = state.write_back(selected);
    response
}

fn show_options(ui: &mut Ui, props: &FilterProps, state: &mut FilterState, title: &str) {
    if props.field {
        let derived: Vec<String>;
        let suggestions: &[String] = match props.labels {
            Some(labels) => labels,
            None => {
                derived = props.options.iter().map(|o| o.label.clone()).collect();
                &derived
            }
        };
        if let Some(value) = autocomplete_input(ui, title, title, &mut state.input, suggestions) {
            state.commit(&value);
        }
        ui.add_space(spacing::SMALL);
    }

    if props.field {
        // Field mode renders one row per known entry, checked or not, so
        // previously committed text stays visible while unchecked.
        let entries = state.selection.entries().to_vec();
        let rows: Vec<FilterOption> = entries.into_iter().map(FilterOption::new).collect();
        show_rows(ui, props, state, &rows);
    } else {
        show_rows(ui, props, state, props.options);
    }
}

fn show_rows(ui: &mut Ui, props: &FilterProps, state: &mut FilterState, rows: &[FilterOption]) {
    if props.wrap {
        ui.horizontal_wrapped(|ui| {
            for opt in rows {
                row(ui, props, state, opt, false);
            }
        });
    } else {
        for opt in rows {
            row(ui, props, state, opt, true);
        }
    }
}

fn row(ui: &mut Ui, props: &FilterProps, state: &mut FilterState, opt: &FilterOption, full_width: bool) {
    let checked = state.selection.is_selected(&opt.label);
    if let Some(on) = checkbox_row(ui, checked, opt, full_width) {
        if props.radio && on {
            state.selection.select_only(&opt.label);
        } else {
            state.selection.set(&opt.label, on);
        }
    }
}

/// Collapse caret: points down while collapsed, up while expanded.
fn collapse_caret(ui: &mut Ui, state: &mut FilterState) {
    let (rect, resp) = ui.allocate_exact_size(Vec2::splat(16.0), Sense::click());
    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();
    let c = rect.center();
    let (w, h) = (8.0, 5.0);
    let col = if resp.hovered() {
        egui::Color32::from_gray(230)
    } else {
        egui::Color32::from_gray(200)
    };
    if state.collapsed {
        painter.line_segment(
            [pos2(c.x - w * 0.5, c.y - h * 0.5), pos2(c.x, c.y + h * 0.5)],
            Stroke::new(1.5, col),
        );
        painter.line_segment(
            [pos2(c.x + w * 0.5, c.y - h * 0.5), pos2(c.x, c.y + h * 0.5)],
            Stroke::new(1.5, col),
        );
    } else {
        painter.line_segment(
            [pos2(c.x - w * 0.5, c.y + h * 0.5), pos2(c.x, c.y - h * 0.5)],
            Stroke::new(1.5, col),
        );
        painter.line_segment(
            [pos2(c.x + w * 0.5, c.y + h * 0.5), pos2(c.x, c.y - h * 0.5)],
            Stroke::new(1.5, col),
        );
    }
    if resp.clicked() {
        state.collapsed = !state.collapsed;
    }
}
