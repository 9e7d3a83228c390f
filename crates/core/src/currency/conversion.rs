//! Currency conversion with best-effort per-record fallback.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Accumulate at 6 decimal places using banker's rounding (round half to even)
//! - Round to the target currency's decimal places only at report emission
//! - A record that cannot be converted keeps its original amount and is
//!   reported in the audit instead of aborting the whole aggregation

use finsight_shared::types::CurrencyId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use super::error::CurrencyError;
use super::types::{Currency, CurrencyTable};

/// Decimal places kept during intermediate accumulation.
pub const ACCUMULATION_DECIMALS: u32 = 6;

/// A data repair the caller should persist: the record had no currency
/// reference, so the system default currency was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepairEvent {
    /// The malformed record.
    pub record_id: Uuid,
    /// The currency deduced for it (always the system default).
    pub deduced_currency_id: CurrencyId,
}

/// Why a record's amount was left unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The record references a currency the table does not contain.
    UnknownCurrency,
    /// The source or target currency has no usable exchange rate.
    MissingRate,
}

/// A conversion that could not be performed; the original amount was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionFallback {
    /// The affected record.
    pub record_id: Uuid,
    /// The currency the record referenced, if any.
    pub currency_id: Option<CurrencyId>,
    /// Why conversion failed.
    pub reason: FallbackReason,
}

/// Repairs and fallbacks collected while converting a batch of records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionAudit {
    /// Currency substitutions the caller should persist back onto records.
    pub repairs: Vec<RepairEvent>,
    /// Records whose amounts were left unconverted.
    pub fallbacks: Vec<ConversionFallback>,
}

impl ConversionAudit {
    /// Absorbs one record conversion, returning the usable amount.
    ///
    /// A record converted in several passes is reported only once.
    pub fn absorb(&mut self, conversion: RecordConversion) -> Decimal {
        if let Some(repair) = conversion.repair {
            self.push_repair(repair);
        }
        if let Some(fallback) = conversion.fallback {
            self.push_fallback(fallback);
        }
        conversion.amount
    }

    /// Merges another audit into this one, dropping duplicates.
    pub fn merge(&mut self, other: Self) {
        for repair in other.repairs {
            self.push_repair(repair);
        }
        for fallback in other.fallbacks {
            self.push_fallback(fallback);
        }
    }

    fn push_repair(&mut self, repair: RepairEvent) {
        if !self.repairs.iter().any(|r| r.record_id == repair.record_id) {
            self.repairs.push(repair);
        }
    }

    fn push_fallback(&mut self, fallback: ConversionFallback) {
        if !self
            .fallbacks
            .iter()
            .any(|f| f.record_id == fallback.record_id)
        {
            self.fallbacks.push(fallback);
        }
    }
}

/// Outcome of converting one record's amount.
#[derive(Debug, Clone, Copy)]
pub struct RecordConversion {
    /// The converted amount, or the original amount on fallback.
    pub amount: Decimal,
    /// Set when the default currency was substituted for a missing reference.
    pub repair: Option<RepairEvent>,
    /// Set when the amount was left unconverted.
    pub fallback: Option<ConversionFallback>,
}

/// Converts amounts between the currencies of a [`CurrencyTable`].
pub struct Converter<'a> {
    table: &'a CurrencyTable,
}

impl<'a> Converter<'a> {
    /// Creates a converter over the given table.
    #[must_use]
    pub const fn new(table: &'a CurrencyTable) -> Self {
        Self { table }
    }

    /// Converts an amount between two currencies via their base-relative rates.
    ///
    /// Same-code conversion returns the amount unchanged, without rounding.
    /// Otherwise computes `amount * (from.rate / to.rate)` and rounds to
    /// [`ACCUMULATION_DECIMALS`] with banker's rounding.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::MissingRate` when either rate is zero.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &Currency,
        to: &Currency,
    ) -> Result<Decimal, CurrencyError> {
        if from.code == to.code {
            return Ok(amount);
        }
        if from.exchange_rate.is_zero() {
            return Err(CurrencyError::MissingRate(from.code.clone()));
        }
        if to.exchange_rate.is_zero() {
            return Err(CurrencyError::MissingRate(to.code.clone()));
        }

        let converted = amount * from.exchange_rate / to.exchange_rate;
        Ok(converted
            .round_dp_with_strategy(ACCUMULATION_DECIMALS, RoundingStrategy::MidpointNearestEven))
    }

    /// Converts one record's amount into the target currency, best-effort.
    ///
    /// A record without a currency reference is treated as being in the
    /// system default currency and a [`RepairEvent`] is emitted so the
    /// caller can persist the deduced currency back onto the record. A
    /// record whose currency is unknown or has no usable rate keeps its
    /// original amount and is reported as a [`ConversionFallback`]. Neither
    /// condition aborts the containing aggregation.
    #[must_use]
    pub fn convert_record(
        &self,
        record_id: Uuid,
        amount: Decimal,
        currency_id: Option<CurrencyId>,
        to: &Currency,
    ) -> RecordConversion {
        let (source, repair) = match currency_id {
            Some(id) => match self.table.get(id) {
                Some(currency) => (currency, None),
                None => {
                    tracing::warn!(
                        record = %record_id,
                        currency = %id,
                        "record references unknown currency, amount left unconverted"
                    );
                    return RecordConversion {
                        amount,
                        repair: None,
                        fallback: Some(ConversionFallback {
                            record_id,
                            currency_id: Some(id),
                            reason: FallbackReason::UnknownCurrency,
                        }),
                    };
                }
            },
            None => {
                let default = self.table.default_currency();
                tracing::warn!(
                    record = %record_id,
                    deduced = %default.code,
                    "record has no currency reference, substituting system default"
                );
                (
                    default,
                    Some(RepairEvent {
                        record_id,
                        deduced_currency_id: default.id,
                    }),
                )
            }
        };

        match self.convert(amount, source, to) {
            Ok(converted) => RecordConversion {
                amount: converted,
                repair,
                fallback: None,
            },
            Err(error) => {
                tracing::warn!(
                    record = %record_id,
                    %error,
                    "conversion failed, using original amount"
                );
                RecordConversion {
                    amount,
                    repair,
                    fallback: Some(ConversionFallback {
                        record_id,
                        currency_id,
                        reason: FallbackReason::MissingRate,
                    }),
                }
            }
        }
    }
}

/// Rounds an amount to a currency's configured decimal places.
///
/// Uses banker's rounding (round half to even). Applied only at the point of
/// report emission, never during accumulation.
#[must_use]
pub fn display_round(amount: Decimal, currency: &Currency) -> Decimal {
    amount.round_dp_with_strategy(
        currency.decimal_places,
        RoundingStrategy::MidpointNearestEven,
    )
}
