use std::collections::BTreeMap;

use chrono::NaiveDate;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Discrete Fourier transform of the regularized daily series
// ---------------------------------------------------------------------------

/// Magnitude spectrum of the zero-filled daily series. `frequencies` are in
/// cycles per day (sample spacing = 1 day) and follow the usual DFT bin
/// layout: non-negative bins first, then the negative half.
///
/// The 0 Hz bin is the DC component: its magnitude equals the sum of the
/// regularized series (the baseline level of the signal, not a periodic
/// cycle). It is reported as-is, never filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySpectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl FrequencySpectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Compute the DFT magnitude spectrum of the dataset.
///
/// The observations are sorted by date and regularized onto a daily grid
/// spanning the min to max date inclusive, with missing days filled with
/// zero, so the transform sees an evenly spaced signal. Rows sharing a date
/// are summed onto that day.
pub fn fourier_transform(dataset: &SunspotDataset) -> Result<FrequencySpectrum, DataError> {
    let series = regularize_daily(dataset)?;
    let n = series.len();

    let mut buffer: Vec<Complex<f64>> = series
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    Ok(FrequencySpectrum {
        frequencies: fft_frequencies(n),
        magnitudes: buffer.iter().map(|c| c.norm()).collect(),
    })
}

/// Zero-filled daily measure sequence from the dataset's min to max date.
pub fn regularize_daily(dataset: &SunspotDataset) -> Result<Vec<f64>, DataError> {
    let (start, end) = dataset.date_span().ok_or(DataError::Insufficient {
        analysis: "Fourier transform",
        needed: 1,
        got: 0,
    })?;

    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in &dataset.observations {
        *totals.entry(obs.date).or_insert(0.0) += obs.sunspots;
    }

    let days = (end - start).num_days() as usize + 1;
    let mut series = Vec::with_capacity(days);
    let mut date = start;
    while series.len() < days {
        series.push(totals.get(&date).copied().unwrap_or(0.0));
        match date.succ_opt() {
            Some(next) => date = next,
            None => break, // end of chrono's date range, span is complete
        }
    }
    Ok(series)
}

/// DFT sample frequencies for `n` samples at unit spacing, in the
/// `np.fft.fftfreq` order: `[0, 1, …, ⌈n/2⌉−1, −⌊n/2⌋, …, −1] / n`.
pub fn fft_frequencies(n: usize) -> Vec<f64> {
    let half = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < half {
                k as f64 / n as f64
            } else {
                (k as f64 - n as f64) / n as f64
            }
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

    fn obs(y: i32, m: u32, d: u32, n: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            sunspots: n,
        }
    }

    #[test]
    fn gaps_are_zero_filled_over_the_full_span() {
        let ds = SunspotDataset {
            observations: vec![obs(2000, 1, 5, 7.0), obs(2000, 1, 1, 5.0)],
        };
        let series = regularize_daily(&ds).unwrap();
        assert_eq!(series, vec![5.0, 0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn spectrum_length_equals_regularized_length() {
        let ds = SunspotDataset {
            observations: vec![obs(2000, 1, 1, 1.0), obs(2000, 1, 10, 2.0)],
        };
        let spectrum = fourier_transform(&ds).unwrap();
        assert_eq!(spectrum.len(), 10);
        assert_eq!(spectrum.magnitudes.len(), 10);
    }

    #[test]
    fn dc_magnitude_equals_series_sum() {
        let ds = SunspotDataset {
            observations: vec![obs(2000, 1, 1, 5.0), obs(2000, 1, 2, 3.0), obs(2000, 1, 4, 7.0)],
        };
        let spectrum = fourier_transform(&ds).unwrap();
        assert_eq!(spectrum.frequencies[0], 0.0);
        assert!((spectrum.magnitudes[0] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn frequencies_follow_the_fftfreq_layout() {
        assert_eq!(fft_frequencies(4), vec![0.0, 0.25, -0.5, -0.25]);
        assert_eq!(fft_frequencies(5), vec![0.0, 0.2, 0.4, -0.4, -0.2]);
    }

    #[test]
    fn single_tone_peaks_at_its_bin() {
        // 1 + cos(2π·4t/32) over 32 days: energy at bins 0, 4 and 28.
        let d0 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let observations: Vec<Observation> = (0..32)
            .map(|i| Observation {
                date: d0 + chrono::Days::new(i as u64),
                sunspots: 1.0 + (2.0 * std::f64::consts::PI * 4.0 * i as f64 / 32.0).cos(),
            })
            .collect();
        let spectrum = fourier_transform(&SunspotDataset { observations }).unwrap();
        assert!((spectrum.magnitudes[4] - 16.0).abs() < 1e-9);
        assert!((spectrum.magnitudes[28] - 16.0).abs() < 1e-9);
        assert!(spectrum.magnitudes[3] < 1e-9);
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        assert!(matches!(
            fourier_transform(&SunspotDataset::default()),
            Err(DataError::Insufficient { .. })
        ));
    }
}
