use thiserror::Error;

/// Failures of the ingest boundary. Per-cell damage inside a row (a date
/// that does not parse, a blank clock time) never reaches this type; those
/// rows are carried through analysis and reported, not rejected.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("malformed workbook text")]
    Csv(#[from] csv::Error),
}
