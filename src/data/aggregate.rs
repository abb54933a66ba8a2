use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::{DailySeries, SunspotDataset};

// ---------------------------------------------------------------------------
// Daily aggregation for the trend chart
// ---------------------------------------------------------------------------

/// Group observations by exact date and sum the sunspot counts within each
/// group. The result is sorted ascending by date with one entry per distinct
/// date; dates with no observations are simply absent (the Fourier procedure
/// does its own zero-filled regularization).
pub fn aggregate_daily(dataset: &SunspotDataset) -> DailySeries {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in &dataset.observations {
        *totals.entry(obs.date).or_insert(0.0) += obs.sunspots;
    }
    DailySeries {
        points: totals.into_iter().collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
