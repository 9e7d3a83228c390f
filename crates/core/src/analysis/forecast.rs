//! Linear trend extrapolation of monthly totals.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use super::types::{ForecastPoint, MonthlyTotal};

/// Projects a monthly series `months_ahead` months forward.
///
/// The history is returned first, each point flagged as not projected,
/// followed by the projections. The projection is linear: the average
/// month-over-month change is applied cumulatively from the last known
/// total, floored at zero (spending and income never project negative).
/// With fewer than two months of history the average change is zero, so
/// projections repeat the last total.
#[must_use]
pub fn forecast(history: &[MonthlyTotal], months_ahead: u32) -> Vec<ForecastPoint> {
    let mut series: Vec<ForecastPoint> = history
        .iter()
        .map(|m| ForecastPoint {
            month: m.month.clone(),
            total: m.total,
            projected: false,
        })
        .collect();

    let Some(last) = history.last() else {
        return series;
    };

    let average_change = if history.len() < 2 {
        Decimal::ZERO
    } else {
        let mut change = Decimal::ZERO;
        for pair in history.windows(2) {
            change += pair[1].total - pair[0].total;
        }
        change / Decimal::from(history.len() as u64 - 1)
    };

    let mut month = last.month.clone();
    for step in 1..=months_ahead {
        if let Some(next) = next_month_key(&month) {
            month = next;
        }
        let total = (last.total + Decimal::from(step) * average_change).max(Decimal::ZERO);
        series.push(ForecastPoint {
            month: month.clone(),
            total,
            projected: true,
        });
    }

    series
}

/// The "YYYY-MM" key following `key`, if it parses.
fn next_month_key(key: &str) -> Option<String> {
    let first_of_month = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()?;
    Some((first_of_month + Months::new(1)).format("%Y-%m").to_string())
}
