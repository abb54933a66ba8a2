use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Continuous wavelet transform (Morlet)
// ---------------------------------------------------------------------------

/// Integer scales swept by the transform, inclusive.
pub const MIN_SCALE: usize = 1;
pub const MAX_SCALE: usize = 30;

/// Morlet center frequency ω₀.
const OMEGA0: f64 = 5.0;

/// CWT magnitude map over (sample index, scale): one row per scale, one
/// column per input sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMagnitudeMap {
    /// Scales, ascending; `magnitudes[i]` corresponds to `scales[i]`.
    pub scales: Vec<usize>,
    /// `scales.len()` rows × input-length columns.
    pub magnitudes: Vec<Vec<f64>>,
}

impl ScaleMagnitudeMap {
    pub fn n_scales(&self) -> usize {
        self.scales.len()
    }

    pub fn n_samples(&self) -> usize {
        self.magnitudes.first().map_or(0, Vec::len)
    }

    /// Smallest and largest magnitude in the map, for color normalization.
    pub fn magnitude_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.magnitudes {
            for &m in row {
                min = min.min(m);
                max = max.max(m);
            }
        }
        (min, max)
    }
}

/// Continuous wavelet transform of the raw (non-regularized) sunspot
/// sequence with a Morlet wavelet at integer scales 1..=30.
///
/// Per scale `s` the wavelet ψ(x) = π^(−1/4)·exp(iω₀x)·exp(−x²/2) is sampled
/// at x = (k − (M−1)/2)/s over M = min(10·s, N) points, scaled by √(1/s),
/// and convolved with the signal in "same" mode; the map holds |coefficient|.
pub fn wavelet_transform(dataset: &SunspotDataset) -> Result<ScaleMagnitudeMap, DataError> {
    let signal = dataset.counts();
    if signal.is_empty() {
        return Err(DataError::Insufficient {
            analysis: "wavelet transform",
            needed: 1,
            got: 0,
        });
    }

    let scales: Vec<usize> = (MIN_SCALE..=MAX_SCALE).collect();
    let magnitudes = scales
        .iter()
        .map(|&s| {
            let psi = morlet(s, signal.len());
            convolve_same_magnitude(&signal, &psi)
        })
        .collect();

    Ok(ScaleMagnitudeMap { scales, magnitudes })
}

/// Sampled Morlet wavelet at scale `s`, truncated to at most the signal
/// length.
fn morlet(s: usize, signal_len: usize) -> Vec<Complex<f64>> {
    let m = (10 * s).min(signal_len);
    let norm = PI.powf(-0.25) * (1.0 / s as f64).sqrt();
    (0..m)
        .map(|k| {
            let x = (k as f64 - (m as f64 - 1.0) / 2.0) / s as f64;
            let envelope = norm * (-0.5 * x * x).exp();
            Complex::new(envelope * (OMEGA0 * x).cos(), envelope * (OMEGA0 * x).sin())
        })
        .collect()
}

/// |convolve(signal, reverse(conj(psi)))| in "same" mode: output has the
/// signal's length, centered on the full convolution.
fn convolve_same_magnitude(signal: &[f64], psi: &[Complex<f64>]) -> Vec<f64> {
    let n = signal.len();
    let m = psi.len();
    let offset = (m - 1) / 2;

    (0..n)
        .map(|i| {
            let center = i + offset;
            let k_lo = center.saturating_sub(m - 1);
            let k_hi = center.min(n - 1);
            let mut acc = Complex::new(0.0, 0.0);
            for k in k_lo..=k_hi {
                // Reversed, conjugated kernel: h[j] = conj(psi[m-1-j]).
                acc += signal[k] * psi[m - 1 - (center - k)].conj();
            }
            acc.norm()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;
    use chrono::NaiveDate;

    fn dataset(values: &[f64]) -> SunspotDataset {
        let d0 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        SunspotDataset {
            observations: values
                .iter()
                .enumerate()
                .map(|(i, &v)| Observation {
                    date: d0 + chrono::Days::new(i as u64),
                    sunspots: v,
                })
                .collect(),
        }
    }

    #[test]
    fn map_has_thirty_scales_and_one_column_per_sample() {
        let values: Vec<f64> = (0..100).map(|i| (i % 13) as f64).collect();
        let map = wavelet_transform(&dataset(&values)).unwrap();
        assert_eq!(map.n_scales(), 30);
        assert_eq!(map.scales.first(), Some(&1));
        assert_eq!(map.scales.last(), Some(&30));
        assert_eq!(map.n_samples(), 100);
        assert!(map.magnitudes.iter().all(|row| row.len() == 100));
    }

    #[test]
    fn zero_signal_yields_zero_magnitudes() {
        let map = wavelet_transform(&dataset(&[0.0; 50])).unwrap();
        let (min, max) = map.magnitude_range();
        assert_eq!(min, 0.0);
        assert_eq!(max, 0.0);
    }

    #[test]
    fn wavelet_support_is_capped_at_the_signal_length() {
        // 8 samples but scale up to 30: kernel must truncate to 8 taps.
        let map = wavelet_transform(&dataset(&[1.0; 8])).unwrap();
        assert_eq!(map.n_samples(), 8);
        assert!(map.magnitudes.iter().flatten().all(|m| m.is_finite()));
    }

    #[test]
    fn oscillation_responds_strongest_near_its_matching_scale() {
        // Period-20 cosine: the Morlet center scale is s ≈ ω₀·T/2π ≈ 16,
        // so the mid-signal response at scale 16 should dominate scale 2.
        let values: Vec<f64> = (0..400)
            .map(|i| (2.0 * PI * i as f64 / 20.0).cos())
            .collect();
        let map = wavelet_transform(&dataset(&values)).unwrap();
        let at = |scale: usize| map.magnitudes[scale - 1][200];
        assert!(at(16) > at(2));
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        assert!(matches!(
            wavelet_transform(&SunspotDataset::default()),
            Err(DataError::Insufficient { .. })
        ));
    }
}
