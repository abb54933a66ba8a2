use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation (one row of the source file): the calendar date built
/// from the Year/Month/Day columns plus the sunspot count for that date.
///
/// The count is stored as `f64` because every downstream transform operates
/// on floating point; the loader still rejects anything that does not parse
/// as a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub sunspots: f64,
}

// ---------------------------------------------------------------------------
// SunspotDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, in file order. Loaded once per session and held
/// immutably; every transform works on a derived copy.
#[derive(Debug, Clone, Default)]
pub struct SunspotDataset {
    pub observations: Vec<Observation>,
}

impl SunspotDataset {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The sunspot counts in file order.
    pub fn counts(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.sunspots).collect()
    }

    /// The sunspot counts reordered by ascending date. Rows sharing a date
    /// keep their file order (stable sort).
    pub fn counts_sorted_by_date(&self) -> Vec<f64> {
        let mut rows: Vec<&Observation> = self.observations.iter().collect();
        rows.sort_by_key(|o| o.date);
        rows.iter().map(|o| o.sunspots).collect()
    }

    /// Earliest and latest observation dates, or `None` when empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.observations.iter().map(|o| o.date).min()?;
        let max = self.observations.iter().map(|o| o.date).max()?;
        Some((min, max))
    }
}

// ---------------------------------------------------------------------------
// DailySeries – per-date totals for the trend chart
// ---------------------------------------------------------------------------

/// Date-indexed totals, strictly increasing by date, one entry per distinct
/// date present in the dataset. Built by the aggregator; consumed only by
/// the trend display and never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    pub points: Vec<(NaiveDate, f64)>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
