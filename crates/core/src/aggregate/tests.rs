//! Unit tests for the aggregation engine.

use chrono::NaiveDate;
use finsight_shared::types::{
    BudgetId, CategoryId, CurrencyCode, CurrencyId, TagId, TransactionId, UserId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::AggregationService;
use super::types::{DateRange, GroupBy, TransactionKind, TransactionRecord};
use crate::budget::Budget;
use crate::currency::{Currency, CurrencyTable};
use crate::period::Frequency;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

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

struct Fixture {
    table: CurrencyTable,
    usd: CurrencyId,
    eur: CurrencyId,
    user: UserId,
}

impl Fixture {
    fn new() -> Self {
        let usd = currency("USD", dec!(1), true);
        let eur = currency("EUR", dec!(2), false);
        let usd_id = usd.id;
        let eur_id = eur.id;
        Self {
            table: CurrencyTable::new(vec![usd, eur]).unwrap(),
            usd: usd_id,
            eur: eur_id,
            user: UserId::new(),
        }
    }

    fn target(&self) -> &Currency {
        self.table.default_currency()
    }

    fn expense(&self, amount: Decimal, currency: Option<CurrencyId>, on: NaiveDate) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(),
            user_id: self.user,
            kind: TransactionKind::Expense,
            amount,
            currency_id: currency,
            date: on,
            category_id: None,
            subcategory_id: None,
            payment_method_id: None,
            tag_ids: Vec::new(),
            recurring: false,
            description: String::new(),
        }
    }

    fn budget(&self, amount: Decimal, category: Option<CategoryId>) -> Budget {
        Budget {
            id: BudgetId::new(),
            user_id: self.user,
            name: "Budget".to_string(),
            amount,
            currency_id: Some(self.usd),
            start_date: date(2026, 1, 1),
            end_date: Some(date(2026, 1, 31)),
            category_id: category,
            recurring: false,
            frequency: Frequency::Monthly,
            rollover_enabled: false,
            rollover_amount: Decimal::ZERO,
            rollover_cap: Decimal::ZERO,
            next_renewal_date: None,
            version: 1,
        }
    }
}

fn january() -> DateRange {
    DateRange::new(date(2026, 1, 1), date(2026, 1, 31))
}

#[test]
fn test_group_by_category_converts_before_summing() {
    let fx = Fixture::new();
    let food = CategoryId::new();
    let mut in_usd = fx.expense(dec!(30), Some(fx.usd), date(2026, 1, 5));
    in_usd.category_id = Some(food);
    // 10 EUR -> 20 USD.
    let mut in_eur = fx.expense(dec!(10), Some(fx.eur), date(2026, 1, 6));
    in_eur.category_id = Some(food);
    let uncategorized = fx.expense(dec!(7), Some(fx.usd), date(2026, 1, 7));

    let (result, audit) = AggregationService::group(
        &[in_usd, in_eur, uncategorized],
        january(),
        GroupBy::Category,
        fx.target(),
        &fx.table,
    );

    assert_eq!(result.count, 3);
    assert_eq!(result.total, dec!(57));
    assert_eq!(result.average, dec!(19));
    assert!(audit.repairs.is_empty());
    assert!(audit.fallbacks.is_empty());

    let food_group = result
        .groups
        .iter()
        .find(|g| g.key == food.to_string())
        .unwrap();
    assert_eq!(food_group.total, dec!(50));
    assert_eq!(food_group.count, 2);
    assert_eq!(food_group.average, dec!(25));

    let other = result.groups.iter().find(|g| g.key == "uncategorized").unwrap();
    assert_eq!(other.total, dec!(7));
}

#[test]
fn test_time_buckets_are_sparse_and_ordered() {
    let fx = Fixture::new();
    // January, March, March - nothing in February.
    let records = vec![
        fx.expense(dec!(10), Some(fx.usd), date(2026, 3, 10)),
        fx.expense(dec!(5), Some(fx.usd), date(2026, 1, 15)),
        fx.expense(dec!(20), Some(fx.usd), date(2026, 3, 20)),
    ];
    let range = DateRange::new(date(2026, 1, 1), date(2026, 12, 31));

    let (result, _) =
        AggregationService::group(&records, range, GroupBy::Month, fx.target(), &fx.table);

    let keys: Vec<&str> = result.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["2026-01", "2026-03"]);
    assert_eq!(result.groups[1].total, dec!(30));
}

#[test]
fn test_week_and_day_bucket_keys() {
    let fx = Fixture::new();
    // 2026-01-01 is a Thursday in ISO week 1.
    let records = vec![fx.expense(dec!(10), Some(fx.usd), date(2026, 1, 1))];
    let range = january();

    let (by_week, _) =
        AggregationService::group(&records, range, GroupBy::Week, fx.target(), &fx.table);
    assert_eq!(by_week.groups[0].key, "2026-W01");

    let (by_day, _) =
        AggregationService::group(&records, range, GroupBy::Day, fx.target(), &fx.table);
    assert_eq!(by_day.groups[0].key, "2026-01-01");
}

#[test]
fn test_range_boundaries_are_inclusive() {
    let fx = Fixture::new();
    let records = vec![
        fx.expense(dec!(1), Some(fx.usd), date(2025, 12, 31)),
        fx.expense(dec!(2), Some(fx.usd), date(2026, 1, 1)),
        fx.expense(dec!(4), Some(fx.usd), date(2026, 1, 31)),
        fx.expense(dec!(8), Some(fx.usd), date(2026, 2, 1)),
    ];

    let (result, _) =
        AggregationService::group(&records, january(), GroupBy::Day, fx.target(), &fx.table);

    assert_eq!(result.count, 2);
    assert_eq!(result.total, dec!(6));
}

#[test]
fn test_multi_tag_record_counts_once_in_grand_total() {
    let fx = Fixture::new();
    let (groceries, household) = (TagId::new(), TagId::new());
    let mut tagged = fx.expense(dec!(10), Some(fx.usd), date(2026, 1, 5));
    tagged.tag_ids = vec![groceries, household];
    let untagged = fx.expense(dec!(3), Some(fx.usd), date(2026, 1, 6));

    let (result, _) = AggregationService::group(
        &[tagged, untagged],
        january(),
        GroupBy::Tag,
        fx.target(),
        &fx.table,
    );

    assert_eq!(result.count, 2);
    assert_eq!(result.total, dec!(13));
    assert_eq!(result.groups.len(), 3);
    let grocery_group = result
        .groups
        .iter()
        .find(|g| g.key == groceries.to_string())
        .unwrap();
    assert_eq!(grocery_group.total, dec!(10));
    assert!(result.groups.iter().any(|g| g.key == "untagged"));
}

#[test]
fn test_missing_currency_is_repaired_not_fatal() {
    let fx = Fixture::new();
    let orphan = fx.expense(dec!(9), None, date(2026, 1, 5));
    let orphan_id = orphan.id;

    let (result, audit) =
        AggregationService::group(&[orphan], january(), GroupBy::Category, fx.target(), &fx.table);

    // Default currency substituted: value contributes as-is in USD.
    assert_eq!(result.total, dec!(9));
    assert_eq!(audit.repairs.len(), 1);
    assert_eq!(audit.repairs[0].record_id, orphan_id.into_inner());
    assert_eq!(audit.repairs[0].deduced_currency_id, fx.usd);
}

#[test]
fn test_budget_comparison_scopes_by_category_and_window() {
    let fx = Fixture::new();
    let food = CategoryId::new();
    let mut food_budget = fx.budget(dec!(100), Some(food));
    food_budget.name = "Food".to_string();

    let mut matching = fx.expense(dec!(40), Some(fx.usd), date(2026, 1, 10));
    matching.category_id = Some(food);
    let mut other_category = fx.expense(dec!(25), Some(fx.usd), date(2026, 1, 11));
    other_category.category_id = Some(CategoryId::new());
    let mut outside_window = fx.expense(dec!(99), Some(fx.usd), date(2026, 3, 1));
    outside_window.category_id = Some(food);

    let (rows, _) = AggregationService::budget_comparison(
        &[food_budget],
        &[matching, other_category, outside_window],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.spent, dec!(40));
    assert_eq!(row.remaining, dec!(60));
    assert_eq!(row.percent_used, dec!(40));
}

#[test]
fn test_budget_comparison_skips_non_overlapping_budgets() {
    let fx = Fixture::new();
    let mut past = fx.budget(dec!(100), None);
    past.start_date = date(2025, 1, 1);
    past.end_date = Some(date(2025, 12, 31));
    let mut open_ended = fx.budget(dec!(100), None);
    open_ended.start_date = date(2025, 6, 1);
    open_ended.end_date = None;

    let (rows, _) = AggregationService::budget_comparison(
        &[past, open_ended],
        &[],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(rows.len(), 1);
}

#[test]
fn test_zero_amount_budget_uses_zero_percent() {
    let fx = Fixture::new();
    let zero_budget = fx.budget(dec!(0), None);
    let spent = fx.expense(dec!(50), Some(fx.usd), date(2026, 1, 10));

    let (rows, _) = AggregationService::budget_comparison(
        &[zero_budget],
        &[spent],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(rows[0].percent_used, Decimal::ZERO);
    assert_eq!(rows[0].remaining, dec!(-50));
}

#[test]
fn test_budget_comparison_includes_rollover_allowance() {
    let fx = Fixture::new();
    let mut budget = fx.budget(dec!(100), None);
    budget.rollover_enabled = true;
    budget.rollover_amount = dec!(20);

    let spent = fx.expense(dec!(60), Some(fx.usd), date(2026, 1, 10));

    let (rows, _) = AggregationService::budget_comparison(
        &[budget],
        &[spent],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(rows[0].budget_amount, dec!(120));
    assert_eq!(rows[0].percent_used, dec!(50));
}

#[test]
fn test_earnings_do_not_count_as_spending() {
    let fx = Fixture::new();
    let budget = fx.budget(dec!(100), None);
    let mut earning = fx.expense(dec!(500), Some(fx.usd), date(2026, 1, 10));
    earning.kind = TransactionKind::Earning;

    let (rows, _) = AggregationService::budget_comparison(
        &[budget],
        &[earning],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(rows[0].spent, Decimal::ZERO);
}

#[test]
fn test_fixed_variable_split() {
    let fx = Fixture::new();
    let mut rent = fx.expense(dec!(800), Some(fx.usd), date(2026, 1, 1));
    rent.recurring = true;
    // 10 EUR -> 20 USD, variable.
    let coffee = fx.expense(dec!(10), Some(fx.eur), date(2026, 1, 4));
    let groceries = fx.expense(dec!(55), Some(fx.usd), date(2026, 1, 9));

    let (split, audit) = AggregationService::fixed_variable_split(
        &[rent, coffee, groceries],
        january(),
        fx.target(),
        &fx.table,
    );

    assert_eq!(split.fixed_total, dec!(800));
    assert_eq!(split.fixed_count, 1);
    assert_eq!(split.variable_total, dec!(75));
    assert_eq!(split.variable_count, 2);
    assert!(audit.repairs.is_empty());
}
