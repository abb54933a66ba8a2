use std::f64::consts::PI;

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Power spectral density via Welch's method
// ---------------------------------------------------------------------------

/// Segment length in samples.
pub const SEGMENT_LEN: usize = 256;
/// 50% overlap.
const STEP: usize = SEGMENT_LEN / 2;
/// Sample rate: one observation per day.
const FS: f64 = 1.0;

/// One-sided power spectral density estimate: `frequencies` in cycles per
/// day, `power` in (counts)²·day. Both vectors have `SEGMENT_LEN / 2 + 1`
/// entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectralDensity {
    pub frequencies: Vec<f64>,
    pub power: Vec<f64>,
}

impl PowerSpectralDensity {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Estimate the PSD of the date-sorted sunspot counts with Welch's method:
/// 256-sample segments, 50% overlap, periodic Hann window, per-segment
/// constant detrend, one-sided density scaling (the scipy defaults).
///
/// Fails with [`DataError::Insufficient`] when the dataset holds fewer than
/// one full segment.
pub fn spectral_analysis(dataset: &SunspotDataset) -> Result<PowerSpectralDensity, DataError> {
    let signal = dataset.counts_sorted_by_date();
    if signal.len() < SEGMENT_LEN {
        return Err(DataError::Insufficient {
            analysis: "spectral analysis (Welch)",
            needed: SEGMENT_LEN,
            got: signal.len(),
        });
    }

    let window = hann_window(SEGMENT_LEN);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let n_bins = SEGMENT_LEN / 2 + 1;

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(SEGMENT_LEN);

    let n_segments = (signal.len() - SEGMENT_LEN) / STEP + 1;
    let mut psd = vec![0.0; n_bins];
    let mut buffer = vec![Complex::new(0.0, 0.0); SEGMENT_LEN];

    for seg in 0..n_segments {
        let slice = &signal[seg * STEP..seg * STEP + SEGMENT_LEN];
        let mean = slice.iter().sum::<f64>() / SEGMENT_LEN as f64;
        for (i, (&v, w)) in slice.iter().zip(&window).enumerate() {
            buffer[i] = Complex::new((v - mean) * w, 0.0);
        }
        fft.process(&mut buffer);

        for (k, p) in psd.iter_mut().enumerate() {
            // One-sided: interior bins carry the mirrored half too.
            let two_sided = buffer[k].norm_sqr() / (FS * window_power);
            let factor = if k == 0 || k == n_bins - 1 { 1.0 } else { 2.0 };
            *p += factor * two_sided;
        }
    }

    for p in &mut psd {
        *p /= n_segments as f64;
    }

    Ok(PowerSpectralDensity {
        frequencies: (0..n_bins).map(|k| k as f64 * FS / SEGMENT_LEN as f64).collect(),
        power: psd,
    })
}

/// Periodic Hann window (`scipy.signal.get_window('hann', n)`).
fn hann_window(n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| 0.5 * (1.0 - (2.0 * PI * k as f64 / n as f64).cos()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
