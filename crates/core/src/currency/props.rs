//! Property-based tests for currency conversion.

use finsight_shared::types::{CurrencyCode, CurrencyId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::Converter;
use super::types::{Currency, CurrencyTable};

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

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate exchange rates between 0.100 and 100.000.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (100i64..100_000i64).prop_map(|v| Decimal::new(v, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting a currency into itself returns the amount untouched.
    #[test]
    fn prop_identity_conversion(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);
        let table = CurrencyTable::new(vec![base, other]).unwrap();
        let converter = Converter::new(&table);
        let eur = table.by_code(&CurrencyCode::new("EUR")).unwrap();

        let result = converter.convert(amount, eur, eur).unwrap();
        prop_assert_eq!(result, amount, "Identity conversion must be exact");
    }

    /// Converting A -> B -> A returns the original amount within the
    /// accumulation rounding tolerance.
    #[test]
    fn prop_round_trip_conversion(
        amount in positive_amount(),
        rate_a in positive_rate(),
        rate_b in positive_rate(),
    ) {
        let base = currency("USD", Decimal::ONE, true);
        let a = currency("AAA", rate_a, false);
        let b = currency("BBB", rate_b, false);
        let table = CurrencyTable::new(vec![base, a, b]).unwrap();
        let converter = Converter::new(&table);
        let a = table.by_code(&CurrencyCode::new("AAA")).unwrap();
        let b = table.by_code(&CurrencyCode::new("BBB")).unwrap();

        let there = converter.convert(amount, a, b).unwrap();
        let back = converter.convert(there, b, a).unwrap();

        let tolerance = dec!(0.001);
        let drift = (back - amount).abs();
        prop_assert!(
            drift <= tolerance,
            "Round trip drifted by {} (amount {}, rates {}/{})",
            drift, amount, rate_a, rate_b
        );
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_conversion_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);
        let table = CurrencyTable::new(vec![base, other]).unwrap();
        let converter = Converter::new(&table);
        let usd = table.by_code(&CurrencyCode::new("USD")).unwrap();
        let eur = table.by_code(&CurrencyCode::new("EUR")).unwrap();

        let first = converter.convert(amount, eur, usd).unwrap();
        let second = converter.convert(amount, eur, usd).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Cross-currency results carry at most the accumulation precision.
    #[test]
    fn prop_conversion_precision_bound(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);
        let table = CurrencyTable::new(vec![base, other]).unwrap();
        let converter = Converter::new(&table);
        let usd = table.by_code(&CurrencyCode::new("USD")).unwrap();
        let eur = table.by_code(&CurrencyCode::new("EUR")).unwrap();

        let result = converter.convert(amount, usd, eur).unwrap();
        let scaled = result * Decimal::from(1_000_000u32);
        prop_assert_eq!(
            scaled.round(),
            scaled,
            "Result {} exceeds 6 decimal places",
            result
        );
    }
}
