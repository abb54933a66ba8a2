use eframe::egui::TextureHandle;

use crate::analysis::{run_analysis, AnalysisKind, AnalysisResult};
use crate::data::aggregate::aggregate_daily;
use crate::data::model::{DailySeries, SunspotDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<SunspotDataset>,

    /// File name of the loaded dataset, for the top bar.
    pub source_name: Option<String>,

    /// Per-date totals for the trend chart (derived once per load).
    pub daily_series: DailySeries,

    /// Currently selected analysis technique.
    pub selected_analysis: AnalysisKind,

    /// Result of the selected analysis (recomputed on every selection
    /// change; None when the dataset is absent or the procedure failed).
    pub result: Option<AnalysisResult>,

    /// Cached heatmap texture for the wavelet view; dropped on recompute.
    pub cwt_texture: Option<TextureHandle>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_name: None,
            daily_series: DailySeries::default(),
            selected_analysis: AnalysisKind::default(),
            result: None,
            cwt_texture: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: derive the daily series and run the
    /// currently selected analysis.
    pub fn set_dataset(&mut self, dataset: SunspotDataset, source_name: String) {
        self.daily_series = aggregate_daily(&dataset);
        self.dataset = Some(dataset);
        self.source_name = Some(source_name);
        self.status_message = None;
        self.recompute();
    }

    /// Switch the analysis technique and recompute its result.
    pub fn select_analysis(&mut self, kind: AnalysisKind) {
        if self.selected_analysis != kind {
            self.selected_analysis = kind;
            self.recompute();
        }
    }

    /// Re-run the selected procedure against the loaded dataset. A failure
    /// becomes a status message; the session stays usable.
    pub fn recompute(&mut self) {
        self.cwt_texture = None;
        self.result = None;

        let Some(dataset) = &self.dataset else {
            return;
        };
        match run_analysis(self.selected_analysis, dataset) {
            Ok(result) => {
                self.status_message = None;
                self.result = Some(result);
            }
            Err(e) => {
                log::warn!(
                    "{} failed: {e}",
                    self.selected_analysis.label()
                );
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;
    use chrono::NaiveDate;

    fn dataset(n: usize) -> SunspotDataset {
        let d0 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        SunspotDataset {
            observations: (0..n)
                .map(|i| Observation {
                    date: d0 + chrono::Days::new(i as u64),
                    sunspots: (i % 11) as f64,
                })
                .collect(),
        }
    }

    #[test]
    fn loading_a_dataset_runs_the_selected_analysis() {
        let mut state = AppState::default();
        state.set_dataset(dataset(10), "test.csv".into());
        assert!(matches!(state.result, Some(AnalysisResult::Summary(_))));
        assert_eq!(state.daily_series.len(), 10);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn selection_change_recomputes_the_result() {
        let mut state = AppState::default();
        state.set_dataset(dataset(10), "test.csv".into());
        state.select_analysis(AnalysisKind::Histogram);
        assert!(matches!(state.result, Some(AnalysisResult::Histogram(_))));
    }

    #[test]
    fn procedure_failure_keeps_the_session_alive() {
        let mut state = AppState::default();
        state.set_dataset(dataset(10), "test.csv".into());
        // Welch needs 256 samples; 10 rows must surface an error message.
        state.select_analysis(AnalysisKind::SpectralAnalysis);
        assert!(state.result.is_none());
        assert!(state.status_message.is_some());

        // The next selection still works.
        state.select_analysis(AnalysisKind::BoxPlot);
        assert!(matches!(state.result, Some(AnalysisResult::BoxPlot(_))));
        assert!(state.status_message.is_none());
    }
}
