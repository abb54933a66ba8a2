use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong between file and figure
// ---------------------------------------------------------------------------

/// Errors surfaced to the UI as a status message. None of these are retried
/// or recovered silently; a failed render leaves the session usable for the
/// next selection.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: column '{column}' value '{value}' is not a valid {expected}")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("row {row}: {year}-{month}-{day} is not a valid calendar date")]
    InvalidDate {
        row: usize,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("{analysis} needs at least {needed} samples, dataset has {got}")]
    Insufficient {
        analysis: &'static str,
        needed: usize,
        got: usize,
    },
}
