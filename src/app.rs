// Demo dashboard hosting the filter widgets. The app owns the ground truth
// (shown flag and one selected list per filter); the widgets own their
// transient state and write the selected lists back through the &mut refs.

use eframe::egui::{self, RichText, Sense, Vec2};
use eframe::App;
use std::sync::mpsc;
use std::time::Duration;
use strum::IntoEnumIterator;

use crate::types::{Environment, Health, SyncState};
use crate::ui_constants::{palette, spacing, FILTERS_PANEL_WIDTH};
use crate::views::filters::{
    filter, filter_group, FilterGroupProps, FilterOption, FilterProps, FilterState,
};

mod catalog;

use catalog::{CatalogError, DeployEntry};

const LOG_WINDOW_LINES: usize = 200;

pub struct FilterBoardApp {
    // Host-owned ground truth
    filters_shown: bool,
    health_selected: Vec<String>,
    sync_selected: Vec<String>,
    env_selected: Vec<String>,
    label_selected: Vec<String>,
    // Widget-owned transient state
    health_filter: FilterState,
    sync_filter: FilterState,
    env_filter: FilterState,
    label_filter: FilterState,
    // Catalog load wiring
    entries: Vec<DeployEntry>,
    loading: bool,
    load_error: bool,
    load_started: bool,
    tx: mpsc::Sender<Result<Vec<DeployEntry>, CatalogError>>,
    rx: mpsc::Receiver<Result<Vec<DeployEntry>, CatalogError>>,
    logs_open: bool,
}

impl Default for FilterBoardApp {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            filters_shown: true,
            health_selected: Vec::new(),
            sync_selected: Vec::new(),
            env_selected: Vec::new(),
            label_selected: Vec::new(),
            health_filter: FilterState::new(&[]),
            sync_filter: FilterState::new(&[]),
            env_filter: FilterState::new(&[]),
            label_filter: FilterState::new(&[]),
            entries: Vec::new(),
            loading: false,
            load_error: false,
            load_started: false,
            tx,
            rx,
            logs_open: false,
        }
    }
}

impl App for FilterBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the Logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        while let Ok(res) = self.rx.try_recv() {
            self.loading = false;
            match res {
                Ok(entries) => {
                    log::info!("catalog loaded: {} entries", entries.len());
                    self.entries = entries;
                    self.load_error = false;
                }
                Err(e) => {
                    log::error!("catalog load failed: {e}");
                    self.load_error = true;
                }
            }
            ctx.request_repaint();
        }

        if !self.load_started {
            self.start_load(ctx);
        }

        // Option sets are rebuilt each frame so counts track the catalog.
        let health_options: Vec<FilterOption> = Health::iter()
            .map(|h| {
                let n = self.entries.iter().filter(|e| e.health == h).count();
                FilterOption::with_count(h.to_string(), n as u32)
            })
            .collect();
        let sync_options: Vec<FilterOption> = SyncState::iter()
            .map(|s| {
                let n = self.entries.iter().filter(|e| e.sync == s).count();
                FilterOption::with_count(s.to_string(), n as u32)
            })
            .collect();
        let env_options: Vec<FilterOption> = Environment::iter()
            .map(|e| FilterOption::new(e.to_string()))
            .collect();
        let label_universe = catalog::label_universe(&self.entries);

        let applied: Vec<String> = [
            self.health_selected.as_slice(),
            self.sync_selected.as_slice(),
            self.env_selected.as_slice(),
            self.label_selected.as_slice(),
        ]
        .concat();

        let loading = self.loading;
        let load_error = self.load_error;
        let mut clear_all = false;
        let mut retry = false;
        let mut logs_clicked = false;

        egui::SidePanel::right("filters_panel")
            .exact_width(FILTERS_PANEL_WIDTH)
            .frame(
                egui::Frame::none()
                    .fill(palette::PANEL_BG)
                    .inner_margin(10.0),
            )
            .resizable(false)
            .show(ctx, |ui| {
                let Self {
                    filters_shown,
                    health_selected,
                    sync_selected,
                    env_selected,
                    label_selected,
                    health_filter,
                    sync_filter,
                    env_filter,
                    label_filter,
                    ..
                } = self;

                let group = filter_group(
                    ui,
                    &FilterGroupProps {
                        title: "FILTERS",
                        applied: &applied,
                        clearable: true,
                    },
                    filters_shown,
                    |ui| {
                        let resp = filter(
                            ui,
                            &FilterProps {
                                label: Some("HEALTH"),
                                options: &health_options,
                                loading,
                                error: load_error,
                                ..Default::default()
                            },
                            health_filter,
                            health_selected,
                        );
                        retry |= resp.retry;
                        ui.add_space(spacing::SMALL);
                        ui.separator();

                        let resp = filter(
                            ui,
                            &FilterProps {
                                label: Some("SYNC STATUS"),
                                options: &sync_options,
                                wrap: true,
                                loading,
                                error: load_error,
                                ..Default::default()
                            },
                            sync_filter,
                            sync_selected,
                        );
                        retry |= resp.retry;
                        ui.add_space(spacing::SMALL);
                        ui.separator();

                        let resp = filter(
                            ui,
                            &FilterProps {
                                label: Some("ENVIRONMENT"),
                                options: &env_options,
                                radio: true,
                                ..Default::default()
                            },
                            env_filter,
                            env_selected,
                        );
                        retry |= resp.retry;
                        ui.add_space(spacing::SMALL);
                        ui.separator();

                        let resp = filter(
                            ui,
                            &FilterProps {
                                label: Some("LABELS"),
                                labels: Some(label_universe.as_slice()),
                                field: true,
                                loading,
                                error: load_error,
                                ..Default::default()
                            },
                            label_filter,
                            label_selected,
                        );
                        retry |= resp.retry;
                    },
                );
                clear_all = group.clear_all;

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    if ui
                        .button(format!("Logs ({})", crate::logger::len()))
                        .clicked()
                    {
                        logs_clicked = true;
                    }
                });
            });

        if clear_all {
            self.clear_all();
        }
        if retry {
            self.start_load(ctx);
        }
        if logs_clicked {
            self.logs_open = !self.logs_open;
            ctx.request_repaint();
        }

        self.draw_deployments(ctx);
        self.draw_logs_window(ctx);
    }
}

impl FilterBoardApp {
    /// Spawn the catalog load on a worker thread; results come back over
    /// the channel and are polled in `update`.
    fn start_load(&mut self, ctx: &egui::Context) {
        self.load_started = true;
        self.loading = true;
        self.load_error = false;
        let tx = self.tx.clone();
        let ctx2 = ctx.clone();
        std::thread::spawn(move || {
            // Brief pause so the loading body is visible in the demo.
            std::thread::sleep(Duration::from_millis(400));
            let res = catalog::load();
            let _ = tx.send(res);
            ctx2.request_repaint();
        });
    }

    /// Host-level clear: emptying the lists force-resets every filter
    /// through its external-reset path on the next frame.
    fn clear_all(&mut self) {
        self.health_selected.clear();
        self.sync_selected.clear();
        self.env_selected.clear();
        self.label_selected.clear();
        log::info!("cleared all filters");
    }

    fn draw_deployments(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::MEDIUM);
            ui.heading("Deployments");

            if self.load_error {
                ui.add_space(spacing::XLARGE);
                ui.vertical_centered(|ui| {
                    ui.colored_label(palette::ERROR, "Failed to load the deployment catalog");
                });
                return;
            }
            if self.loading && self.entries.is_empty() {
                ui.add_space(spacing::XLARGE);
                ui.vertical_centered(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading...");
                });
                return;
            }

            let visible: Vec<&DeployEntry> = self
                .entries
                .iter()
                .filter(|e| {
                    catalog::matches(
                        e,
                        &self.health_selected,
                        &self.sync_selected,
                        &self.env_selected,
                        &self.label_selected,
                    )
                })
                .collect();
            ui.add(
                egui::Label::new(
                    RichText::new(format!(
                        "showing {} of {}",
                        visible.len(),
                        self.entries.len()
                    ))
                    .weak()
                    .size(12.0),
                )
                .selectable(false),
            );
            ui.add_space(spacing::SMALL);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in visible {
                        draw_entry_row(ui, entry);
                    }
                });
        });
    }

    fn draw_logs_window(&mut self, ctx: &egui::Context) {
        if !self.logs_open {
            return;
        }
        let mut open = self.logs_open;
        egui::Window::new("Logs")
            .open(&mut open)
            .default_size([560.0, 320.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        crate::logger::for_each_recent(LOG_WINDOW_LINES, |e| {
                            let color = match e.level {
                                log::Level::Error => palette::ERROR,
                                log::Level::Warn => palette::ACCENT_SOFT,
                                _ => palette::TEXT_WEAK,
                            };
                            ui.label(
                                RichText::new(format!(
                                    "[{:>5}] {}: {}",
                                    e.level, e.target, e.msg
                                ))
                                .monospace()
                                .size(12.0)
                                .color(color),
                            );
                        });
                    });
            });
        self.logs_open = open;
    }
}

fn draw_entry_row(ui: &mut egui::Ui, entry: &DeployEntry) {
    ui.add_space(spacing::SMALL);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 4.0, health_color(entry.health));
        ui.add(egui::Label::new(RichText::new(&entry.name).strong()).selectable(false));
        ui.add(
            egui::Label::new(
                RichText::new(format!("{} · {}", entry.project, entry.environment))
                    .weak()
                    .size(12.0),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let color = match entry.sync {
                SyncState::Synced => palette::TEXT_WEAK,
                SyncState::OutOfSync => palette::ACCENT_SOFT,
            };
            ui.add(
                egui::Label::new(RichText::new(entry.sync.to_string()).size(12.0).color(color))
                    .selectable(false),
            );
        });
    });
    ui.horizontal_wrapped(|ui| {
        for label in &entry.labels {
            ui.add(
                egui::Label::new(
                    RichText::new(label)
                        .size(11.0)
                        .color(palette::TEXT_WEAK)
                        .background_color(palette::PANEL_BG),
                )
                .selectable(false),
            );
        }
    });
    ui.separator();
}

fn health_color(health: Health) -> egui::Color32 {
    match health {
        Health::Healthy => egui::Color32::from_rgb(110, 180, 120),
        Health::Progressing => egui::Color32::from_rgb(120, 160, 210),
        Health::Degraded => palette::ERROR,
        Health::Suspended => egui::Color32::from_rgb(200, 170, 90),
        Health::Missing => egui::Color32::from_gray(120),
        Health::Unknown => egui::Color32::from_gray(160),
    }
}
