//! Budget error types.

use finsight_shared::types::BudgetId;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Amount cannot be negative.
    #[error("Budget amount cannot be negative")]
    NegativeAmount,

    /// Rollover cap cannot be negative.
    #[error("Rollover cap cannot be negative")]
    NegativeRolloverCap,

    /// End date precedes the start date.
    #[error("Budget end date precedes its start date")]
    EndBeforeStart,

    /// A recurring budget needs a renewal date to advance.
    #[error("Recurring budget has no next renewal date")]
    MissingRenewalDate,
}
