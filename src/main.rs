mod analysis;
mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use std::path::Path;

use app::SunspotExplorerApp;
use eframe::egui;
use state::AppState;

/// Loaded at startup when present in the working directory.
const DEFAULT_DATASET: &str = "sunspot_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Session-scoped initialization: load the default dataset if it is
    // sitting next to the binary, otherwise wait for File → Open.
    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATASET);
    if default_path.exists() {
        ui::panels::load_path(&mut state, default_path);
    }

    eframe::run_native(
        "Sunspot Explorer – Solar Activity Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SunspotExplorerApp::new(state)))),
    )
}
