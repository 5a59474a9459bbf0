// Entry point kept minimal: window config and app startup only.
// All the interesting parts live in app.rs and views/filters/.

use eframe::egui;

mod app;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "FilterBoard",
        native_options,
        Box::new(|_cc| Box::new(app::FilterBoardApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
