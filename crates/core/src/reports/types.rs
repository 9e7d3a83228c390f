//! Report data types.

use chrono::{DateTime, NaiveDate, Utc};
use finsight_shared::types::{CurrencyCode, CurrencyId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::aggregate::{BudgetComparison, FixedVariableSplit, GroupBy, GroupSummary};
use crate::analysis::{DiversityReport, ForecastPoint, MonthlyTotal, StabilityReport, TrendDirection};
use crate::currency::ConversionAudit;

/// Which side of the ledger a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Spending report.
    Expenses,
    /// Income report.
    Earnings,
}

/// Parameters of one report generation.
///
/// This is the engine's whole configuration surface: the acting owner, the
/// window, and the presentation choices all arrive explicitly. Nothing is
/// read from ambient session state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportParams {
    /// User the report belongs to; records of other users are ignored.
    pub owner: UserId,
    /// Expenses or earnings.
    pub kind: ReportKind,
    /// First day of the report window.
    pub start_date: NaiveDate,
    /// Last day of the report window (inclusive).
    pub end_date: NaiveDate,
    /// Grouping for the main breakdown.
    pub group_by: GroupBy,
    /// How many months to project past the window.
    pub forecast_months: u32,
    /// Currency all figures are reported in.
    pub target_currency_id: CurrencyId,
}

/// Grand totals of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum over all matching records.
    pub total: Decimal,
    /// Number of matching records.
    pub count: u64,
    /// `total / count`, zero without records.
    pub average: Decimal,
}

/// A generated report, ready for the presentation layer.
///
/// Plain nested data throughout; serializes to the JSON shape the UI
/// renders. Monetary figures are rounded to the report currency's decimal
/// places and percentages to two, both applied only at this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    /// Report owner.
    pub owner: UserId,
    /// Expenses or earnings.
    pub kind: ReportKind,
    /// First day of the window.
    pub start_date: NaiveDate,
    /// Last day of the window.
    pub end_date: NaiveDate,
    /// Code of the report currency.
    pub currency: CurrencyCode,
    /// Grand totals.
    pub totals: ReportTotals,
    /// Main breakdown, grouped as requested.
    pub groups: Vec<GroupSummary>,
    /// Monthly series over the window.
    pub monthly: Vec<MonthlyTotal>,
    /// Fixed-versus-variable partition.
    pub fixed_vs_variable: FixedVariableSplit,
    /// Budget-versus-actual rows; empty for earnings reports.
    pub budget_comparison: Vec<BudgetComparison>,
    /// Monthly history plus projections.
    pub forecast: Vec<ForecastPoint>,
    /// Stability metrics.
    pub stability: StabilityReport,
    /// Trend direction of the monthly series.
    pub trend: TrendDirection,
    /// Diversity of category totals.
    pub diversity: DiversityReport,
    /// Currency repairs and fallbacks for the caller to persist/log.
    pub audit: ConversionAudit,
}

impl ReportResult {
    /// Converts the report into the cached snapshot blob.
    ///
    /// The snapshot is a materialized view: recomputed on demand and
    /// overwritten in place, never a source of truth.
    pub fn into_snapshot(self, generated_at: DateTime<Utc>) -> Result<ReportSnapshot, ReportError> {
        let data = serde_json::to_value(&self)?;
        Ok(ReportSnapshot {
            user_id: self.owner,
            start_date: self.start_date,
            end_date: self.end_date,
            generated_at,
            data,
        })
    }
}

/// Cached report row, written back over any previous snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    /// Report owner.
    pub user_id: UserId,
    /// First day of the window.
    pub start_date: NaiveDate,
    /// Last day of the window.
    pub end_date: NaiveDate,
    /// When this snapshot was computed.
    pub generated_at: DateTime<Utc>,
    /// The serialized report.
    pub data: serde_json::Value,
}
