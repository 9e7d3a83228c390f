//! Budget data types.

use chrono::NaiveDate;
use finsight_shared::types::{BudgetId, CategoryId, CurrencyId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Frequency;

/// A budget record.
///
/// "Spent" and "remaining" figures are always derived from transactions at
/// report time, never stored here. The `version` column supports optimistic
/// concurrency: every mutating lifecycle operation bumps it exactly once,
/// and the persistence layer writes back with `WHERE version = <old>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning user.
    pub user_id: UserId,
    /// Budget name.
    pub name: String,
    /// Budgeted amount per period, in the budget's currency.
    pub amount: Decimal,
    /// Currency of `amount`, `rollover_amount` and `rollover_cap`.
    /// `None` is the malformed legacy case repaired during conversion.
    pub currency_id: Option<CurrencyId>,
    /// First day of the current period.
    pub start_date: NaiveDate,
    /// Last day of the current period (inclusive), if bounded.
    pub end_date: Option<NaiveDate>,
    /// Category this budget is scoped to, if any.
    pub category_id: Option<CategoryId>,
    /// Whether the budget renews automatically.
    pub recurring: bool,
    /// Renewal cadence for recurring budgets.
    pub frequency: Frequency,
    /// Whether unspent amounts carry into the next period.
    pub rollover_enabled: bool,
    /// Unspent amount carried in from the previous period.
    pub rollover_amount: Decimal,
    /// Upper bound on `rollover_amount`; zero means uncapped.
    pub rollover_cap: Decimal,
    /// Date the next period begins, for recurring budgets.
    pub next_renewal_date: Option<NaiveDate>,
    /// Optimistic concurrency version.
    pub version: i64,
}

impl Budget {
    /// Budget allowance for the current period, including any rollover.
    #[must_use]
    pub fn effective_amount(&self) -> Decimal {
        if self.rollover_enabled {
            self.amount + self.rollover_amount
        } else {
            self.amount
        }
    }

    /// Returns true if this budget's window overlaps `[start, end]`.
    ///
    /// An open-ended budget overlaps every range that starts before it ends.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date.is_none_or(|budget_end| budget_end >= start)
    }
}

/// The subset of an incoming budget update the lifecycle needs to see.
///
/// Currency auto-follow must not fire when the caller explicitly picked a
/// currency in the same update, so the explicit choice travels here.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetUpdate {
    /// Currency explicitly chosen by the caller in this update, if any.
    pub currency_id: Option<CurrencyId>,
}

/// Result of a renewal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalOutcome {
    /// Whether the budget's dates were advanced.
    pub renewed: bool,
    /// Whether a rollover was computed for the closing period.
    pub rollover_processed: bool,
    /// Version the budget held before mutation, for the conditional write.
    pub expected_version: i64,
}
