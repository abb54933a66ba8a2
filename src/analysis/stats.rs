use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Summary of the sunspot-count column: count, mean, sample standard
/// deviation, min, quartiles, max.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1). `NaN` for a single observation.
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute descriptive statistics of the sunspot counts.
pub fn describe(dataset: &SunspotDataset) -> Result<SummaryStats, DataError> {
    let values = dataset.counts();
    if values.is_empty() {
        return Err(DataError::Insufficient {
            analysis: "descriptive statistics",
            needed: 1,
            got: 0,
        });
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values;
    sorted.sort_by(|a, b| a.total_cmp(b));

    Ok(SummaryStats {
        count,
        mean,
        std_dev,
        min: sorted[0],
        q25: percentile_sorted(&sorted, 25.0),
        median: percentile_sorted(&sorted, 50.0),
        q75: percentile_sorted(&sorted, 75.0),
        max: sorted[count - 1],
    })
}

/// Percentile of an ascending-sorted slice with linear interpolation between
/// the two nearest ranks (the numpy/pandas default). `sorted` must be
/// non-empty.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
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
    fn summary_matches_hand_computed_values() {
        // 1..=5: mean 3, sample std sqrt(2.5), quartiles 2/3/4.
        let s = describe(&dataset(&[5.0, 1.0, 3.0, 2.0, 4.0])).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.mean, 3.0);
        assert!((s.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q25, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q75, 4.0);
        assert_eq!(s.max, 5.0);
    }

    #[test]
    fn percentiles_interpolate_linearly() {
        // [1, 2, 3, 4]: q25 lands at rank 0.75 → 1.75.
        let s = describe(&dataset(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert!((s.q25 - 1.75).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.q75 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn single_observation_has_nan_std() {
        let s = describe(&dataset(&[7.0])).unwrap();
        assert_eq!(s.mean, 7.0);
        assert!(s.std_dev.is_nan());
        assert_eq!(s.median, 7.0);
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        let err = describe(&SunspotDataset::default()).unwrap_err();
        assert!(matches!(err, DataError::Insufficient { got: 0, .. }));
    }
}
