use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, view};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SunspotExplorerApp {
    pub state: AppState,
}

impl SunspotExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SunspotExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: overview + analysis selector ----
        egui::SidePanel::left("analysis_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: trend chart + analysis result ----
        egui::CentralPanel::default().show(ctx, |ui| {
            view::central_panel(ui, &mut self.state);
        });
    }
}
