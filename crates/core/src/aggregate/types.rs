//! Aggregation data types.

use chrono::NaiveDate;
use finsight_shared::types::{
    BudgetId, CategoryId, CurrencyId, PaymentMethodId, SubcategoryId, TagId, TransactionId, UserId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction is money out or money in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money spent.
    Expense,
    /// Money received.
    Earning,
}

/// An expense or earning row as fetched from the persistence layer.
///
/// Records are immutable once aggregated into a report; reports are
/// recomputed from scratch, never incrementally updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Expense or earning.
    pub kind: TransactionKind,
    /// Amount in the record's currency.
    pub amount: Decimal,
    /// Currency of `amount`. `None` is the malformed case repaired during
    /// conversion.
    pub currency_id: Option<CurrencyId>,
    /// Transaction date.
    pub date: NaiveDate,
    /// Category, if assigned.
    pub category_id: Option<CategoryId>,
    /// Subcategory, if assigned.
    pub subcategory_id: Option<SubcategoryId>,
    /// Payment method, if recorded.
    pub payment_method_id: Option<PaymentMethodId>,
    /// Tags attached to the record.
    pub tag_ids: Vec<TagId>,
    /// Whether this is a recurring (fixed) transaction.
    pub recurring: bool,
    /// Free-form description.
    pub description: String,
}

/// Inclusive date range of a report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; callers validate ordering at the entry boundary.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// How to group transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// By category.
    Category,
    /// By subcategory.
    Subcategory,
    /// By tag; a record with several tags contributes to each.
    Tag,
    /// By payment method.
    PaymentMethod,
    /// By calendar date.
    Day,
    /// By ISO week (e.g. "2026-W05").
    Week,
    /// By calendar month (e.g. "2026-01").
    Month,
}

/// Totals for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group key: an entity ID, a time bucket, or a placeholder such as
    /// "uncategorized".
    pub key: String,
    /// Sum of converted amounts.
    pub total: Decimal,
    /// Number of contributing records.
    pub count: u64,
    /// `total / count`.
    pub average: Decimal,
}

/// Result of one grouping pass, in the report currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregation {
    /// Ordered group totals (sparse; empty buckets omitted).
    pub groups: Vec<GroupSummary>,
    /// Grand total over all matching records.
    pub total: Decimal,
    /// Number of matching records (each counted once, however many
    /// groups it contributed to).
    pub count: u64,
    /// `total / count`, zero when no records matched.
    pub average: Decimal,
}

/// Fixed-versus-variable partition of spending.
///
/// Partitions strictly on the `recurring` flag; records without it are
/// variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedVariableSplit {
    /// Total of recurring records.
    pub fixed_total: Decimal,
    /// Number of recurring records.
    pub fixed_count: u64,
    /// Total of non-recurring records.
    pub variable_total: Decimal,
    /// Number of non-recurring records.
    pub variable_count: u64,
}

/// Budget-versus-actual row for one budget overlapping the report window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetComparison {
    /// The budget.
    pub budget_id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Budget allowance (including rollover) in the report currency.
    pub budget_amount: Decimal,
    /// Matching expenses within the report window, converted.
    pub spent: Decimal,
    /// `budget_amount - spent` (negative when overspent).
    pub remaining: Decimal,
    /// `spent / budget_amount * 100`, zero when the allowance is zero.
    pub percent_used: Decimal,
}
