use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::analysis::AnalysisKind;
use crate::state::AppState;

/// Condensed project-overview text for the side panel.
const OVERVIEW: &str = "The sunspots project analyzes periodic patterns and \
variations in sunspot activity over time. Sunspots, dark patches on the \
Sun's surface, indicate magnetic activity; historical counts collected over \
centuries reveal long-term cycles, trends, and irregularities.\n\n\
Key objectives: periodic pattern identification, trend analysis, anomaly \
detection, and data visualization.";

// ---------------------------------------------------------------------------
// Left side panel – overview + analysis selector
// ---------------------------------------------------------------------------

/// Render the left panel: project overview and the analysis-mode selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sunspots Project");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(OVERVIEW);
            ui.add_space(8.0);
            ui.separator();

            ui.strong("Select analysis technique");
            ui.add_space(4.0);

            if state.dataset.is_none() {
                ui.label("Load a dataset to run an analysis.");
                return;
            }

            for kind in AnalysisKind::ALL {
                let checked = state.selected_analysis == kind;
                if ui.radio(checked, kind.label()).clicked() {
                    state.select_analysis(kind);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let span = ds
                .date_span()
                .map(|(min, max)| format!("{min} – {max}"))
                .unwrap_or_default();
            ui.label(format!(
                "{}: {} observations, {span}",
                state.source_name.as_deref().unwrap_or("dataset"),
                ds.len(),
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sunspot data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Session-scoped load: parse the file and hand the dataset to the state.
/// Also used by `main` for the optional startup load.
pub fn load_path(state: &mut AppState, path: &Path) {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string();

    match crate::data::loader::load_csv(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} observations from {}, span {:?}",
                dataset.len(),
                path.display(),
                dataset.date_span()
            );
            state.set_dataset(dataset, name);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
