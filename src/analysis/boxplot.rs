use super::stats::percentile_sorted;
use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Box plot: five-number summary + 1.5×IQR outliers
// ---------------------------------------------------------------------------

/// Five-number summary of the sunspot counts, plus whisker positions and
/// outliers under the standard 1.5×IQR rule. Whiskers extend to the most
/// extreme data points still inside the fences.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Interquartile range, Q3 − Q1.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute the box-plot summary of the sunspot counts.
pub fn box_plot(dataset: &SunspotDataset) -> Result<BoxPlotSummary, DataError> {
    let mut values = dataset.counts();
    if values.is_empty() {
        return Err(DataError::Insufficient {
            analysis: "box plot",
            needed: 1,
            got: 0,
        });
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let q1 = percentile_sorted(&values, 25.0);
    let median = percentile_sorted(&values, 50.0);
    let q3 = percentile_sorted(&values, 75.0);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let whisker_low = values
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = values
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);

    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Ok(BoxPlotSummary {
        min: values[0],
        q1,
        median,
        q3,
        max: values[values.len() - 1],
        whisker_low,
        whisker_high,
        outliers,
    })
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
    fn five_number_summary_without_outliers() {
        let s = box_plot(&dataset(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q3, 4.0);
        assert_eq!(s.max, 5.0);
        assert!(s.outliers.is_empty());
        assert_eq!(s.whisker_low, 1.0);
        assert_eq!(s.whisker_high, 5.0);
    }

    #[test]
    fn extreme_value_is_flagged_as_outlier() {
        // 1..=5 plus 100: Q1=2, Q3=4.75 → high fence 8.875.
        let s = box_plot(&dataset(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0])).unwrap();
        assert_eq!(s.outliers, vec![100.0]);
        // Whisker stops at the largest in-fence value, not the outlier.
        assert_eq!(s.whisker_high, 5.0);
        assert_eq!(s.max, 100.0);
    }

    #[test]
    fn iqr_matches_quartiles() {
        let s = box_plot(&dataset(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert_eq!(s.iqr(), 2.0);
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        assert!(matches!(
            box_plot(&SunspotDataset::default()),
            Err(DataError::Insufficient { .. })
        ));
    }
}
