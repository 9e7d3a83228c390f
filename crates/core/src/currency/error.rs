//! Currency error types.

use finsight_shared::types::CurrencyCode;
use thiserror::Error;

/// Currency-related errors.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// No currency is flagged as the system default.
    #[error("No default currency configured")]
    NoDefaultCurrency,

    /// More than one currency is flagged as the system default.
    #[error("Multiple currencies flagged as default")]
    MultipleDefaultCurrencies,

    /// Two currencies share the same code.
    #[error("Duplicate currency code: {0}")]
    DuplicateCode(CurrencyCode),

    /// A conversion requires an exchange rate that is missing or zero.
    #[error("Missing exchange rate for currency: {0}")]
    MissingRate(CurrencyCode),
}
