//! Report error types.

use chrono::NaiveDate;
use finsight_shared::types::CurrencyId;
use thiserror::Error;

/// Report generation errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report window ends before it starts.
    #[error("Invalid report range: {start} to {end}")]
    InvalidRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// The requested report currency is not in the currency table.
    #[error("Unknown report currency: {0}")]
    UnknownCurrency(CurrencyId),

    /// The report could not be serialized into a snapshot.
    #[error("Failed to serialize report data: {0}")]
    Serialization(#[from] serde_json::Error),
}
