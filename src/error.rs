use thiserror::Error;

/// Fatal pipeline failures. None of these are recoverable: any one of them
/// means the source format or our hand-coded corrections no longer match the
/// upstream data, and the run must stop before anything is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input has {actual} columns, expected {expected}")]
    Schema { expected: usize, actual: usize },

    #[error("expected source column {0:?} is missing")]
    MissingColumn(String),

    #[error("date {value:?} at row {row} does not match DD/MM/YYYY")]
    DateParse { row: usize, value: String },

    #[error("people_fully_vaccinated exceeds people_vaccinated at row {row} (date {date})")]
    Invariant { row: usize, date: String },
}
