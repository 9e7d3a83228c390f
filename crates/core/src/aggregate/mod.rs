//! Grouping and summing of expenses and earnings.
//!
//! Every contributing record is converted into the report currency before
//! summation; amounts in differing currencies are never added raw. Results
//! are sparse: buckets with no transactions are omitted, and any zero-fill
//! for chart display is the caller's responsibility.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AggregationService;
pub use types::{
    Aggregation, BudgetComparison, DateRange, FixedVariableSplit, GroupBy, GroupSummary,
    TransactionKind, TransactionRecord,
};
