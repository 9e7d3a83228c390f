//! Period error types.

use thiserror::Error;

/// Errors from parsing period configuration at the entry boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The frequency value is not recognised.
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    /// The time-frame value is not recognised.
    #[error("Unknown time frame: {0}")]
    UnknownTimeFrame(String),

    /// The custom time-frame unit is not recognised.
    #[error("Unknown time unit: {0}")]
    UnknownTimeUnit(String),
}
