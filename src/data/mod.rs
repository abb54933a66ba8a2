/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///     sunspot_data.csv
///           │
///           ▼
///     ┌──────────┐
///     │  loader   │  parse file → SunspotDataset
///     └──────────┘
///           │
///           ▼
///     ┌────────────────┐
///     │ SunspotDataset │  Vec<Observation>, immutable per session
///     └────────────────┘
///           │
///           ▼
///     ┌───────────┐
///     │ aggregate  │  per-date totals → DailySeries (trend chart)
///     └───────────┘
/// ```
pub mod aggregate;
pub mod loader;
pub mod model;
