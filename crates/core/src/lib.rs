//! Aggregation and forecast engine for Finsight.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It consumes already-fetched rows (transactions, budgets, currencies) and
//! produces serializable results plus explicit write-back instructions for the
//! caller to persist.
//!
//! # Modules
//!
//! - `currency` - Multi-currency conversion with best-effort data repair
//! - `period` - Budget cycle and time-frame calendar math
//! - `budget` - Rollover and renewal lifecycle for recurring budgets
//! - `aggregate` - Grouping and summing of expenses/earnings
//! - `analysis` - Forecast, stability, trend, and diversity scoring
//! - `reports` - Report orchestration and cached snapshots

pub mod aggregate;
pub mod analysis;
pub mod budget;
pub mod currency;
pub mod period;
pub mod reports;
