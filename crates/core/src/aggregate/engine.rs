//! Aggregation over transaction records.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{
    Aggregation, BudgetComparison, DateRange, FixedVariableSplit, GroupBy, GroupSummary,
    TransactionKind, TransactionRecord,
};
use crate::budget::Budget;
use crate::currency::{ConversionAudit, Converter, Currency, CurrencyTable};

/// Stateless aggregation service.
///
/// Each function is a pure computation over already-fetched rows and
/// returns the conversion audit (currency repairs and fallbacks) alongside
/// its result, for the caller to act on.
pub struct AggregationService;

impl AggregationService {
    /// Groups matching records and sums them in the target currency.
    ///
    /// Records outside `range` are ignored. Keys are ordered; time-bucket
    /// keys sort chronologically. A record with several tags contributes to
    /// each tag's group but is counted once in the grand totals.
    #[must_use]
    pub fn group(
        records: &[TransactionRecord],
        range: DateRange,
        group_by: GroupBy,
        target: &Currency,
        table: &CurrencyTable,
    ) -> (Aggregation, ConversionAudit) {
        let converter = Converter::new(table);
        let mut audit = ConversionAudit::default();
        let mut buckets: BTreeMap<String, (Decimal, u64)> = BTreeMap::new();
        let mut total = Decimal::ZERO;
        let mut count: u64 = 0;

        for record in records.iter().filter(|r| range.contains(r.date)) {
            let amount = audit.absorb(converter.convert_record(
                record.id.into_inner(),
                record.amount,
                record.currency_id,
                target,
            ));
            total += amount;
            count += 1;

            for key in Self::keys_for(record, group_by) {
                let bucket = buckets.entry(key).or_insert((Decimal::ZERO, 0));
                bucket.0 += amount;
                bucket.1 += 1;
            }
        }

        let groups = buckets
            .into_iter()
            .map(|(key, (group_total, group_count))| GroupSummary {
                key,
                total: group_total,
                count: group_count,
                average: group_total / Decimal::from(group_count),
            })
            .collect();

        let average = if count == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(count)
        };

        (
            Aggregation {
                groups,
                total,
                count,
                average,
            },
            audit,
        )
    }

    /// Compares each overlapping budget against actual spending in the
    /// report window.
    ///
    /// Spending is summed over the *report's* window, not the budget's own,
    /// and only over expenses matching the budget's category (an
    /// uncategorized budget matches all expenses).
    #[must_use]
    pub fn budget_comparison(
        budgets: &[Budget],
        records: &[TransactionRecord],
        range: DateRange,
        target: &Currency,
        table: &CurrencyTable,
    ) -> (Vec<BudgetComparison>, ConversionAudit) {
        let converter = Converter::new(table);
        let mut audit = ConversionAudit::default();

        let expenses: Vec<&TransactionRecord> = records
            .iter()
            .filter(|r| r.kind == TransactionKind::Expense && range.contains(r.date))
            .collect();

        let mut comparisons = Vec::new();
        for budget in budgets.iter().filter(|b| b.overlaps(range.start, range.end)) {
            let mut spent = Decimal::ZERO;
            for record in expenses
                .iter()
                .filter(|r| budget.category_id.is_none_or(|c| r.category_id == Some(c)))
            {
                spent += audit.absorb(converter.convert_record(
                    record.id.into_inner(),
                    record.amount,
                    record.currency_id,
                    target,
                ));
            }

            let budget_amount = audit.absorb(converter.convert_record(
                budget.id.into_inner(),
                budget.effective_amount(),
                budget.currency_id,
                target,
            ));

            let percent_used = if budget_amount.is_zero() {
                Decimal::ZERO
            } else {
                spent / budget_amount * Decimal::ONE_HUNDRED
            };

            comparisons.push(BudgetComparison {
                budget_id: budget.id,
                name: budget.name.clone(),
                budget_amount,
                spent,
                remaining: budget_amount - spent,
                percent_used,
            });
        }

        (comparisons, audit)
    }

    /// Splits matching records into fixed (recurring) and variable totals.
    #[must_use]
    pub fn fixed_variable_split(
        records: &[TransactionRecord],
        range: DateRange,
        target: &Currency,
        table: &CurrencyTable,
    ) -> (FixedVariableSplit, ConversionAudit) {
        let converter = Converter::new(table);
        let mut audit = ConversionAudit::default();
        let mut split = FixedVariableSplit {
            fixed_total: Decimal::ZERO,
            fixed_count: 0,
            variable_total: Decimal::ZERO,
            variable_count: 0,
        };

        for record in records.iter().filter(|r| range.contains(r.date)) {
            let amount = audit.absorb(converter.convert_record(
                record.id.into_inner(),
                record.amount,
                record.currency_id,
                target,
            ));
            if record.recurring {
                split.fixed_total += amount;
                split.fixed_count += 1;
            } else {
                split.variable_total += amount;
                split.variable_count += 1;
            }
        }

        (split, audit)
    }

    /// Group keys a record contributes to.
    fn keys_for(record: &TransactionRecord, group_by: GroupBy) -> Vec<String> {
        match group_by {
            GroupBy::Category => vec![record
                .category_id
                .map_or_else(|| "uncategorized".to_string(), |id| id.to_string())],
            GroupBy::Subcategory => vec![record
                .subcategory_id
                .map_or_else(|| "uncategorized".to_string(), |id| id.to_string())],
            GroupBy::PaymentMethod => vec![record
                .payment_method_id
                .map_or_else(|| "unspecified".to_string(), |id| id.to_string())],
            GroupBy::Tag => {
                if record.tag_ids.is_empty() {
                    vec!["untagged".to_string()]
                } else {
                    record.tag_ids.iter().map(ToString::to_string).collect()
                }
            }
            GroupBy::Day => vec![record.date.format("%Y-%m-%d").to_string()],
            GroupBy::Week => {
                let week = record.date.iso_week();
                vec![format!("{}-W{:02}", week.year(), week.week())]
            }
            GroupBy::Month => vec![record.date.format("%Y-%m").to_string()],
        }
    }
}
