use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, TextureOptions, Ui, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotImage, PlotPoint, PlotPoints,
    Points,
};

use crate::analysis::{
    AnalysisKind, AnalysisResult, BoxPlotSummary, FrequencySpectrum, HistogramBin,
    PowerSpectralDensity, ScaleMagnitudeMap, SummaryStats,
};
use crate::color::magnitude_image;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Fixed explanatory text per analysis mode
// ---------------------------------------------------------------------------

const HISTOGRAM_TEXT: &str = "The x-axis shows intervals of the sunspot \
count, the y-axis how many observations fall into each interval. A tall \
first bin means low-activity days dominate the record.";

const FOURIER_TEXT: &str = "The 0 Hz bin is the DC component: the baseline \
(mean) level of the signal over the whole record, not a periodic cycle. It \
is shown as-is; the periodic structure lives in the non-zero frequencies.";

const WAVELET_TEXT: &str = "The continuous wavelet transform localizes \
periodicity in both time and scale. A long cycle such as the ~11-year solar \
cycle shows up as a concentrated band of energy across the larger scales.";

const SPECTRAL_TEXT: &str = "Welch's method averages periodograms of \
overlapping segments. Power concentrated near 0 Hz reflects long-term \
variation; discrete peaks at higher frequencies indicate recurring cycles.";

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the central panel: title, daily-totals trend chart, and the
/// selected analysis result.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a sunspot CSV to begin  (File → Open…)");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Sunspot Data Analysis");
            ui.label("Explore historical sunspot counts and their periodic structure.");
            ui.add_space(8.0);

            ui.strong("Daily sunspot totals");
            trend_chart(ui, state);
            ui.add_space(12.0);
            ui.separator();

            ui.strong(state.selected_analysis.label());
            if let Some(text) = explanation(state.selected_analysis) {
                ui.label(text);
                ui.add_space(4.0);
            }

            match &state.result {
                Some(AnalysisResult::Summary(s)) => summary_table(ui, s),
                Some(AnalysisResult::Histogram(bins)) => histogram_chart(ui, bins),
                Some(AnalysisResult::BoxPlot(s)) => box_plot_chart(ui, s),
                Some(AnalysisResult::FrequencySpectrum(sp)) => spectrum_chart(ui, sp),
                Some(AnalysisResult::PowerSpectralDensity(psd)) => psd_chart(ui, psd),
                Some(AnalysisResult::ScaleMagnitudeMap(map)) => {
                    // Texture is cached per result; state.recompute() drops it.
                    let texture = state.cwt_texture.get_or_insert_with(|| {
                        ui.ctx().load_texture(
                            "cwt_heatmap",
                            magnitude_image(map),
                            TextureOptions::LINEAR,
                        )
                    });
                    wavelet_heatmap(ui, texture, map);
                }
                None => {
                    ui.label("No result to show.");
                }
            }
        });
}

fn explanation(kind: AnalysisKind) -> Option<&'static str> {
    match kind {
        AnalysisKind::Histogram => Some(HISTOGRAM_TEXT),
        AnalysisKind::FourierTransform => Some(FOURIER_TEXT),
        AnalysisKind::WaveletTransform => Some(WAVELET_TEXT),
        AnalysisKind::SpectralAnalysis => Some(SPECTRAL_TEXT),
        AnalysisKind::DescriptiveStatistics | AnalysisKind::BoxPlot => None,
    }
}

// ---------------------------------------------------------------------------
// Trend chart (daily series)
// ---------------------------------------------------------------------------

/// Fractional year for the x axis, so the trend chart reads in calendar
/// years rather than raw day counts.
fn fractional_year(date: NaiveDate) -> f64 {
    let days_in_year = if date.leap_year() { 366.0 } else { 365.0 };
    date.year() as f64 + (date.ordinal0() as f64) / days_in_year
}

fn trend_chart(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = state
        .daily_series
        .points
        .iter()
        .map(|&(date, total)| [fractional_year(date), total])
        .collect();

    Plot::new("trend_chart")
        .height(220.0)
        .x_axis_label("Year")
        .y_axis_label("Number of Sunspots")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("daily total").width(1.0));
        });
}

// ---------------------------------------------------------------------------
// Result views
// ---------------------------------------------------------------------------

fn summary_table(ui: &mut Ui, s: &SummaryStats) {
    let rows: [(&str, String); 8] = [
        ("count", s.count.to_string()),
        ("mean", format!("{:.4}", s.mean)),
        ("std", format!("{:.4}", s.std_dev)),
        ("min", format!("{:.1}", s.min)),
        ("25%", format!("{:.1}", s.q25)),
        ("50%", format!("{:.1}", s.median)),
        ("75%", format!("{:.1}", s.q75)),
        ("max", format!("{:.1}", s.max)),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Statistic");
            });
            header.col(|ui| {
                ui.strong("Number of Sunspots");
            });
        })
        .body(|mut body| {
            for (name, value) in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}

fn histogram_chart(ui: &mut Ui, bins: &[HistogramBin]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new((b.lower + b.upper) / 2.0, b.count as f64).width(b.upper - b.lower)
        })
        .collect();

    Plot::new("histogram_chart")
        .height(320.0)
        .x_axis_label("Number of Sunspots")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("frequency"));
        });
}

fn box_plot_chart(ui: &mut Ui, s: &BoxPlotSummary) {
    let elem = BoxElem::new(
        0.0,
        BoxSpread::new(s.whisker_low, s.q1, s.median, s.q3, s.whisker_high),
    )
    .name("Number of Sunspots")
    .box_width(0.5);

    let outliers: PlotPoints = s.outliers.iter().map(|&v| [0.0, v]).collect();

    Plot::new("box_plot_chart")
        .height(320.0)
        .y_axis_label("Number of Sunspots")
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]));
            plot_ui.points(Points::new(outliers).name("outliers").radius(2.0));
        });
}

fn spectrum_chart(ui: &mut Ui, sp: &FrequencySpectrum) {
    // Display sorted by frequency; the result itself stays in DFT bin order.
    let mut pairs: Vec<[f64; 2]> = sp
        .frequencies
        .iter()
        .zip(&sp.magnitudes)
        .map(|(&f, &m)| [f, m])
        .collect();
    pairs.sort_by(|a, b| a[0].total_cmp(&b[0]));

    Plot::new("fourier_chart")
        .height(320.0)
        .x_axis_label("Frequency (cycles/day)")
        .y_axis_label("Amplitude")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(pairs)).name("Fourier Transform"));
        });
}

fn psd_chart(ui: &mut Ui, psd: &PowerSpectralDensity) {
    let points: PlotPoints = psd
        .frequencies
        .iter()
        .zip(&psd.power)
        .map(|(&f, &p)| [f, p])
        .collect();

    Plot::new("psd_chart")
        .height(320.0)
        .x_axis_label("Frequency (cycles/day)")
        .y_axis_label("Power / Frequency")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Power Spectral Density"));
        });
}

fn wavelet_heatmap(ui: &mut Ui, texture: &egui::TextureHandle, map: &ScaleMagnitudeMap) {
    let n = map.n_samples() as f64;
    let scales = map.n_scales() as f64;
    let center = PlotPoint::new(n / 2.0, 1.0 + scales / 2.0);
    let image = PlotImage::new(
        texture.id(),
        center,
        Vec2::new(n as f32, scales as f32),
    );

    Plot::new("cwt_heatmap")
        .height(320.0)
        .x_axis_label("Time (observation index)")
        .y_axis_label("Scale")
        .show(ui, |plot_ui| {
            plot_ui.image(image);
        });
}
