/// Analysis layer: the transform procedures and their dispatcher.
///
/// Every procedure is a pure function of the loaded dataset and fixed
/// parameters — no UI types in here, so each transform is testable on its
/// own. The dispatcher maps a closed selector enum onto exactly one
/// procedure; there is no fallback branch.
pub mod boxplot;
pub mod fourier;
pub mod histogram;
pub mod spectral;
pub mod stats;
pub mod wavelet;

use crate::data::model::SunspotDataset;
use crate::error::DataError;

pub use boxplot::BoxPlotSummary;
pub use fourier::FrequencySpectrum;
pub use histogram::HistogramBin;
pub use spectral::PowerSpectralDensity;
pub use stats::SummaryStats;
pub use wavelet::ScaleMagnitudeMap;

// ---------------------------------------------------------------------------
// AnalysisKind – the closed set of selectable techniques
// ---------------------------------------------------------------------------

/// The analysis techniques offered by the mode selector. A closed enum: an
/// out-of-set selection cannot be represented, so no default branch exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisKind {
    #[default]
    DescriptiveStatistics,
    Histogram,
    BoxPlot,
    FourierTransform,
    WaveletTransform,
    SpectralAnalysis,
}

impl AnalysisKind {
    /// All kinds, in selector display order.
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::DescriptiveStatistics,
        AnalysisKind::Histogram,
        AnalysisKind::BoxPlot,
        AnalysisKind::FourierTransform,
        AnalysisKind::WaveletTransform,
        AnalysisKind::SpectralAnalysis,
    ];

    /// Human-readable selector label.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::DescriptiveStatistics => "Descriptive Statistics",
            AnalysisKind::Histogram => "Histogram",
            AnalysisKind::BoxPlot => "Box Plot",
            AnalysisKind::FourierTransform => "Fourier Transform",
            AnalysisKind::WaveletTransform => "Wavelet Transform",
            AnalysisKind::SpectralAnalysis => "Spectral Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult – the renderable output of one procedure
// ---------------------------------------------------------------------------

/// The result of running one transform procedure. Consumed immediately by
/// the presentation layer; never persisted.
#[derive(Debug, Clone)]
pub enum AnalysisResult {
    Summary(SummaryStats),
    Histogram(Vec<HistogramBin>),
    BoxPlot(BoxPlotSummary),
    FrequencySpectrum(FrequencySpectrum),
    ScaleMagnitudeMap(ScaleMagnitudeMap),
    PowerSpectralDensity(PowerSpectralDensity),
}

/// Run exactly the procedure matching `kind` against the dataset.
pub fn run_analysis(
    kind: AnalysisKind,
    dataset: &SunspotDataset,
) -> Result<AnalysisResult, DataError> {
    match kind {
        AnalysisKind::DescriptiveStatistics => {
            stats::describe(dataset).map(AnalysisResult::Summary)
        }
        AnalysisKind::Histogram => histogram::histogram(dataset).map(AnalysisResult::Histogram),
        AnalysisKind::BoxPlot => boxplot::box_plot(dataset).map(AnalysisResult::BoxPlot),
        AnalysisKind::FourierTransform => {
            fourier::fourier_transform(dataset).map(AnalysisResult::FrequencySpectrum)
        }
        AnalysisKind::WaveletTransform => {
            wavelet::wavelet_transform(dataset).map(AnalysisResult::ScaleMagnitudeMap)
        }
        AnalysisKind::SpectralAnalysis => {
            spectral::spectral_analysis(dataset).map(AnalysisResult::PowerSpectralDensity)
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
                    sunspots: (i % 37) as f64,
                })
                .collect(),
        }
    }

    #[test]
    fn each_kind_yields_its_matching_variant() {
        let ds = dataset(300);
        for kind in AnalysisKind::ALL {
            let result = run_analysis(kind, &ds).unwrap();
            let matches = matches!(
                (kind, &result),
                (AnalysisKind::DescriptiveStatistics, AnalysisResult::Summary(_))
                    | (AnalysisKind::Histogram, AnalysisResult::Histogram(_))
                    | (AnalysisKind::BoxPlot, AnalysisResult::BoxPlot(_))
                    | (AnalysisKind::FourierTransform, AnalysisResult::FrequencySpectrum(_))
                    | (AnalysisKind::WaveletTransform, AnalysisResult::ScaleMagnitudeMap(_))
                    | (AnalysisKind::SpectralAnalysis, AnalysisResult::PowerSpectralDensity(_))
            );
            assert!(matches, "{kind:?} returned the wrong variant");
        }
    }

    #[test]
    fn selector_order_is_stable() {
        let labels: Vec<&str> = AnalysisKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Descriptive Statistics",
                "Histogram",
                "Box Plot",
                "Fourier Transform",
                "Wavelet Transform",
                "Spectral Analysis",
            ]
        );
    }
}
