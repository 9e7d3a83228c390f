//! Currency records and lookup table.

use std::collections::HashMap;

use finsight_shared::types::{CurrencyCode, CurrencyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// A currency as persisted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// Currency ID.
    pub id: CurrencyId,
    /// ISO 4217 code.
    pub code: CurrencyCode,
    /// Human-readable name (e.g., "US Dollar").
    pub name: String,
    /// Display symbol (e.g., "$").
    pub symbol: String,
    /// Exchange rate relative to the default (base) currency.
    ///
    /// The default currency itself carries rate 1. A zero rate means the
    /// rate was never configured and conversions through it fall back.
    pub exchange_rate: Decimal,
    /// Decimal places used when displaying amounts in this currency.
    pub decimal_places: u32,
    /// Whether this is the system default currency.
    pub is_default: bool,
}

/// In-memory lookup table over the currencies available to a computation.
///
/// Construction enforces the system invariant that exactly one currency is
/// flagged as the default.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    by_id: HashMap<CurrencyId, Currency>,
    default_id: CurrencyId,
}

impl CurrencyTable {
    /// Builds a table from persisted currency rows.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError` if no currency (or more than one) is flagged
    /// as default, or if two currencies share a code.
    pub fn new(currencies: Vec<Currency>) -> Result<Self, CurrencyError> {
        let mut default_id = None;
        let mut seen_codes = HashMap::new();

        for currency in &currencies {
            if let Some(previous) = seen_codes.insert(currency.code.clone(), currency.id) {
                if previous != currency.id {
                    return Err(CurrencyError::DuplicateCode(currency.code.clone()));
                }
            }
            if currency.is_default {
                if default_id.is_some() {
                    return Err(CurrencyError::MultipleDefaultCurrencies);
                }
                default_id = Some(currency.id);
            }
        }

        let default_id = default_id.ok_or(CurrencyError::NoDefaultCurrency)?;
        let by_id = currencies.into_iter().map(|c| (c.id, c)).collect();

        Ok(Self { by_id, default_id })
    }

    /// Looks up a currency by ID.
    #[must_use]
    pub fn get(&self, id: CurrencyId) -> Option<&Currency> {
        self.by_id.get(&id)
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn by_code(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.by_id.values().find(|c| &c.code == code)
    }

    /// Returns the system default (base) currency.
    #[must_use]
    pub fn default_currency(&self) -> &Currency {
        // The constructor guarantees the default is present.
        &self.by_id[&self.default_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn currency(code: &str, rate: Decimal, is_default: bool) -> Currency {
        Currency {
            id: CurrencyId::new(),
            code: CurrencyCode::new(code),
            name: code.to_string(),
            symbol: code.to_string(),
            exchange_rate: rate,
            decimal_places: 2,
            is_default,
        }
    }

    #[test]
    fn test_table_requires_a_default() {
        let result = CurrencyTable::new(vec![currency("USD", dec!(1), false)]);
        assert!(matches!(result, Err(CurrencyError::NoDefaultCurrency)));
    }

    #[test]
    fn test_table_rejects_two_defaults() {
        let result = CurrencyTable::new(vec![
            currency("USD", dec!(1), true),
            currency("EUR", dec!(0.9), true),
        ]);
        assert!(matches!(
            result,
            Err(CurrencyError::MultipleDefaultCurrencies)
        ));
    }

    #[test]
    fn test_table_rejects_duplicate_codes() {
        let result = CurrencyTable::new(vec![
            currency("USD", dec!(1), true),
            currency("USD", dec!(2), false),
        ]);
        assert!(matches!(result, Err(CurrencyError::DuplicateCode(_))));
    }

    #[test]
    fn test_lookups() {
        let usd = currency("USD", dec!(1), true);
        let eur = currency("EUR", dec!(0.9), false);
        let usd_id = usd.id;

        let table = CurrencyTable::new(vec![usd, eur]).unwrap();

        assert_eq!(table.get(usd_id).unwrap().code.as_str(), "USD");
        assert_eq!(
            table.by_code(&CurrencyCode::new("EUR")).unwrap().code.as_str(),
            "EUR"
        );
        assert!(table.default_currency().is_default);
        assert_eq!(table.default_currency().code.as_str(), "USD");
        assert!(table.get(CurrencyId::new()).is_none());
    }
}
