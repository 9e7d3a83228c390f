//! Report generation service.

use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{ReportKind, ReportParams, ReportResult, ReportTotals};
use crate::aggregate::{
    AggregationService, DateRange, GroupBy, TransactionKind, TransactionRecord,
};
use crate::analysis::{diversity, forecast, stability, trend, MonthlyTotal};
use crate::budget::Budget;
use crate::currency::{display_round, ConversionAudit, Currency, CurrencyTable};

/// Service for generating expense and earning reports.
///
/// A single generation is one synchronous computation over the row
/// snapshot passed in; callers wanting background generation run this
/// function off-request and persist the snapshot afterwards. Repairs and
/// fallbacks collected while converting are returned on the result, never
/// applied here.
pub struct ReportService;

impl ReportService {
    /// Generates a report over the given rows.
    ///
    /// Records and budgets belonging to other users are ignored. Every
    /// figure is converted into the target currency before summation; a
    /// record that cannot be converted contributes its original amount and
    /// shows up in the result's audit instead of failing the report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidRange` when the window ends before it
    /// starts, and `ReportError::UnknownCurrency` when the target currency
    /// is not in the table.
    pub fn generate(
        params: &ReportParams,
        records: &[TransactionRecord],
        budgets: &[Budget],
        table: &CurrencyTable,
    ) -> Result<ReportResult, ReportError> {
        if params.end_date < params.start_date {
            return Err(ReportError::InvalidRange {
                start: params.start_date,
                end: params.end_date,
            });
        }
        let target = table
            .get(params.target_currency_id)
            .ok_or(ReportError::UnknownCurrency(params.target_currency_id))?;

        let range = DateRange::new(params.start_date, params.end_date);
        let kind = match params.kind {
            ReportKind::Expenses => TransactionKind::Expense,
            ReportKind::Earnings => TransactionKind::Earning,
        };
        let rows: Vec<TransactionRecord> = records
            .iter()
            .filter(|r| r.user_id == params.owner && r.kind == kind)
            .cloned()
            .collect();

        let mut audit = ConversionAudit::default();

        let (main, pass) =
            AggregationService::group(&rows, range, params.group_by, target, table);
        audit.merge(pass);

        let (by_month, pass) =
            AggregationService::group(&rows, range, GroupBy::Month, target, table);
        audit.merge(pass);
        let monthly: Vec<MonthlyTotal> = by_month
            .groups
            .iter()
            .map(|g| MonthlyTotal {
                month: g.key.clone(),
                total: g.total,
            })
            .collect();

        let (by_category, pass) =
            AggregationService::group(&rows, range, GroupBy::Category, target, table);
        audit.merge(pass);
        let category_totals: Vec<(String, Decimal)> = by_category
            .groups
            .iter()
            .map(|g| (g.key.clone(), g.total))
            .collect();

        let (fixed_vs_variable, pass) =
            AggregationService::fixed_variable_split(&rows, range, target, table);
        audit.merge(pass);

        let budget_comparison = if params.kind == ReportKind::Expenses {
            let owned: Vec<Budget> = budgets
                .iter()
                .filter(|b| b.user_id == params.owner)
                .cloned()
                .collect();
            let (comparisons, pass) =
                AggregationService::budget_comparison(&owned, &rows, range, target, table);
            audit.merge(pass);
            comparisons
        } else {
            Vec::new()
        };

        let forecast = forecast(&monthly, params.forecast_months);
        let stability = stability(&monthly);
        let trend = trend(&monthly);
        let diversity = diversity(&category_totals);

        let mut result = ReportResult {
            owner: params.owner,
            kind: params.kind,
            start_date: params.start_date,
            end_date: params.end_date,
            currency: target.code.clone(),
            totals: ReportTotals {
                total: main.total,
                count: main.count,
                average: main.average,
            },
            groups: main.groups,
            monthly,
            fixed_vs_variable,
            budget_comparison,
            forecast,
            stability,
            trend,
            diversity,
            audit,
        };
        Self::round_for_display(&mut result, target);
        Ok(result)
    }

    /// Applies emission rounding: monetary figures to the report currency's
    /// decimal places, percentages to two. Analysis above ran on the
    /// unrounded series.
    fn round_for_display(result: &mut ReportResult, target: &Currency) {
        let percent = |value: Decimal| value.round_dp(2);

        result.totals.total = display_round(result.totals.total, target);
        result.totals.average = display_round(result.totals.average, target);

        for group in &mut result.groups {
            group.total = display_round(group.total, target);
            group.average = display_round(group.average, target);
        }
        for month in &mut result.monthly {
            month.total = display_round(month.total, target);
        }
        for point in &mut result.forecast {
            point.total = display_round(point.total, target);
        }

        result.fixed_vs_variable.fixed_total =
            display_round(result.fixed_vs_variable.fixed_total, target);
        result.fixed_vs_variable.variable_total =
            display_round(result.fixed_vs_variable.variable_total, target);

        for row in &mut result.budget_comparison {
            row.budget_amount = display_round(row.budget_amount, target);
            row.spent = display_round(row.spent, target);
            row.remaining = display_round(row.remaining, target);
            row.percent_used = percent(row.percent_used);
        }

        result.stability.mean = result.stability.mean.map(|m| display_round(m, target));
        result.stability.std_dev = result.stability.std_dev.map(|s| display_round(s, target));
        result.stability.coefficient_of_variation =
            result.stability.coefficient_of_variation.map(percent);
        result.stability.score = result.stability.score.map(percent);

        result.diversity.score = percent(result.diversity.score);
        result.diversity.primary_share_percent = percent(result.diversity.primary_share_percent);
    }
}
