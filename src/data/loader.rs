use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use super::model::{Observation, SunspotDataset};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Required header columns, in no particular order.
const COL_YEAR: &str = "Year";
const COL_MONTH: &str = "Month";
const COL_DAY: &str = "Day";
const COL_SUNSPOTS: &str = "Number of Sunspots";

/// Load a sunspot dataset from a delimited file with a header row containing
/// at least `Year`, `Month`, `Day` and `Number of Sunspots`. Each data row
/// must parse as (integer, integer, integer, non-negative integer) and the
/// three date fields must form a valid calendar date.
pub fn load_csv(path: &Path) -> Result<SunspotDataset, DataError> {
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}

/// Reader-based loader so tests can feed CSV text without touching disk.
pub fn load_from_reader<R: Read>(reader: R) -> Result<SunspotDataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn(name))
    };
    let year_idx = col(COL_YEAR)?;
    let month_idx = col(COL_MONTH)?;
    let day_idx = col(COL_DAY)?;
    let sunspots_idx = col(COL_SUNSPOTS)?;

    let mut observations = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result?;

        // Parse into the exact component types so an out-of-range value
        // fails here instead of wrapping into a bogus calendar date.
        let year: i32 = parse_field(&record, year_idx, row_no, COL_YEAR, "calendar year")?;
        let month: u32 = parse_field(&record, month_idx, row_no, COL_MONTH, "month number")?;
        let day: u32 = parse_field(&record, day_idx, row_no, COL_DAY, "day number")?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DataError::InvalidDate {
            row: row_no,
            year,
            month,
            day,
        })?;

        let sunspots: u64 = parse_field(
            &record,
            sunspots_idx,
            row_no,
            COL_SUNSPOTS,
            "non-negative integer",
        )?;

        observations.push(Observation {
            date,
            sunspots: sunspots as f64,
        });
    }

    Ok(SunspotDataset { observations })
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
    expected: &'static str,
) -> Result<T, DataError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<T>().map_err(|_| DataError::InvalidField {
        row,
        column,
        value: raw.to_string(),
        expected,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
