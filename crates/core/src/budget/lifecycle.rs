//! Budget rollover, renewal, and currency-follow transitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{Budget, BudgetUpdate, RenewalOutcome};
use crate::currency::{Converter, Currency, CurrencyTable};
use crate::period::cycle_for;

/// Stateless service for budget lifecycle transitions.
///
/// Callers fetch the budget row and the period's spent total, invoke these
/// functions, then persist the mutated budget with a conditional
/// `WHERE version = expected` update. Retrying on a version conflict keeps
/// concurrent renewals from double-advancing the same budget.
pub struct BudgetService;

impl BudgetService {
    /// Validates a budget at the entry boundary.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` for negative amounts, a negative rollover cap,
    /// an end date before the start date, or a recurring budget without a
    /// renewal date.
    pub fn validate(budget: &Budget) -> Result<(), BudgetError> {
        if budget.amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount);
        }
        if budget.rollover_cap < Decimal::ZERO {
            return Err(BudgetError::NegativeRolloverCap);
        }
        if let Some(end) = budget.end_date {
            if end < budget.start_date {
                return Err(BudgetError::EndBeforeStart);
            }
        }
        if budget.recurring && budget.next_renewal_date.is_none() {
            return Err(BudgetError::MissingRenewalDate);
        }
        Ok(())
    }

    /// Carries the closing period's unspent amount into the next period.
    ///
    /// No-op unless the budget is recurring with rollover enabled and the
    /// current period has ended. Overspending never carries a debt forward:
    /// a non-positive leftover resets the rollover to zero. A positive
    /// `rollover_cap` clamps the carried amount.
    ///
    /// Returns whether the budget was mutated (one version bump).
    pub fn process_rollover(budget: &mut Budget, spent: Decimal, today: NaiveDate) -> bool {
        if !(budget.recurring && budget.rollover_enabled) {
            return false;
        }
        let Some(end) = budget.end_date else {
            return false;
        };
        if end > today {
            return false;
        }

        let leftover = budget.effective_amount() - spent;
        budget.rollover_amount = if leftover <= Decimal::ZERO {
            Decimal::ZERO
        } else if budget.rollover_cap > Decimal::ZERO && leftover > budget.rollover_cap {
            budget.rollover_cap
        } else {
            leftover
        };
        budget.version += 1;
        true
    }

    /// Advances a recurring budget into its next period.
    ///
    /// No-op unless the budget is recurring, has a renewal date, and that
    /// date has arrived. Rollover is processed first, against the closing
    /// period, before any dates move. The budget row transitions in place;
    /// no history of past periods is kept. The whole renewal bumps the
    /// version exactly once.
    pub fn renew(budget: &mut Budget, spent: Decimal, today: NaiveDate) -> RenewalOutcome {
        let expected_version = budget.version;
        let skipped = RenewalOutcome {
            renewed: false,
            rollover_processed: false,
            expected_version,
        };

        if !budget.recurring {
            return skipped;
        }
        let Some(renewal_date) = budget.next_renewal_date else {
            return skipped;
        };
        if today < renewal_date {
            return skipped;
        }

        let rollover_processed = Self::process_rollover(budget, spent, today);

        let cycle = cycle_for(renewal_date, budget.frequency);
        budget.start_date = renewal_date;
        budget.end_date = Some(cycle.end_date);
        budget.next_renewal_date = Some(cycle.next_renewal_date);
        budget.version = expected_version + 1;

        RenewalOutcome {
            renewed: true,
            rollover_processed,
            expected_version,
        }
    }

    /// Converts a budget to its owner's preferred currency on update.
    ///
    /// Runs as a single pre-save pass invoked once by the orchestrating
    /// caller, never as a persistence hook, so it cannot re-trigger itself.
    /// Skipped when the update explicitly set a currency (explicit intent
    /// wins) or when the budget already matches the owner's currency.
    /// `amount`, `rollover_amount` and `rollover_cap` move together; if any
    /// rate is missing the budget keeps its current currency untouched.
    ///
    /// Returns whether the budget was mutated.
    pub fn follow_owner_currency(
        budget: &mut Budget,
        update: &BudgetUpdate,
        owner_currency: &Currency,
        table: &CurrencyTable,
    ) -> bool {
        if update.currency_id.is_some() {
            return false;
        }

        let current = budget
            .currency_id
            .and_then(|id| table.get(id))
            .unwrap_or_else(|| table.default_currency());
        if current.code == owner_currency.code {
            return false;
        }

        let converter = Converter::new(table);
        let converted = converter
            .convert(budget.amount, current, owner_currency)
            .and_then(|amount| {
                let rollover = converter.convert(budget.rollover_amount, current, owner_currency)?;
                let cap = converter.convert(budget.rollover_cap, current, owner_currency)?;
                Ok((amount, rollover, cap))
            });

        match converted {
            Ok((amount, rollover_amount, rollover_cap)) => {
                budget.amount = amount;
                budget.rollover_amount = rollover_amount;
                budget.rollover_cap = rollover_cap;
                budget.currency_id = Some(owner_currency.id);
                budget.version += 1;
                true
            }
            Err(error) => {
                tracing::warn!(
                    budget = %budget.id,
                    %error,
                    "currency follow skipped, budget keeps its currency"
                );
                false
            }
        }
    }
}
