use crate::data::model::SunspotDataset;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Fixed-bin-count histogram
// ---------------------------------------------------------------------------

/// Number of equal-width bins, matching the dashboard's fixed layout.
pub const BIN_COUNT: usize = 20;

/// One histogram bin: `[lower, upper)` except the last bin, which includes
/// its upper bound so the maximum value is counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Partition the sunspot counts into [`BIN_COUNT`] equal-width bins over
/// `[min, max]`. When all values are identical the range degenerates; it is
/// widened to `[min − 0.5, max + 0.5]` (matplotlib's convention) so the bins
/// keep a non-zero width.
pub fn histogram(dataset: &SunspotDataset) -> Result<Vec<HistogramBin>, DataError> {
    let values = dataset.counts();
    if values.is_empty() {
        return Err(DataError::Insufficient {
            analysis: "histogram",
            needed: 1,
            got: 0,
        });
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / BIN_COUNT as f64;

    let mut bins: Vec<HistogramBin> = (0..BIN_COUNT)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in &values {
        let idx = (((v - min) / width) as usize).min(BIN_COUNT - 1);
        bins[idx].count += 1;
    }

    Ok(bins)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
