//! Multi-currency handling with best-effort data repair.
//!
//! All exchange rates are expressed relative to the single default (base)
//! currency. Conversion between two currencies goes through that base rate.

pub mod conversion;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use conversion::{
    display_round, ConversionAudit, ConversionFallback, Converter, FallbackReason,
    RecordConversion, RepairEvent, ACCUMULATION_DECIMALS,
};
pub use error::CurrencyError;
pub use types::{Currency, CurrencyTable};
