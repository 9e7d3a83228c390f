//! Variance-based stability scoring and trend direction.

use rust_decimal::{Decimal, MathematicalOps};

use super::types::{MonthlyTotal, StabilityReport, TrendDirection};

/// Scores how stable a monthly series is.
///
/// Uses the population variance of the monthly totals. The coefficient of
/// variation (`std_dev / mean * 100`) is subtracted from 100 and floored at
/// zero: a flat series scores 100, an erratic one approaches 0. Fewer than
/// two months of data yields the explicit insufficient-data result.
#[must_use]
pub fn stability(history: &[MonthlyTotal]) -> StabilityReport {
    if history.len() < 2 {
        return StabilityReport::insufficient();
    }

    let n = Decimal::from(history.len() as u64);
    let mean = history.iter().map(|m| m.total).sum::<Decimal>() / n;
    let variance = history
        .iter()
        .map(|m| {
            let deviation = m.total - mean;
            deviation * deviation
        })
        .sum::<Decimal>()
        / n;
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    let coefficient_of_variation = if mean.is_zero() {
        Decimal::ZERO
    } else {
        std_dev / mean * Decimal::ONE_HUNDRED
    };
    let score = (Decimal::ONE_HUNDRED - coefficient_of_variation).max(Decimal::ZERO);

    StabilityReport {
        sufficient_data: true,
        mean: Some(mean),
        std_dev: Some(std_dev),
        coefficient_of_variation: Some(coefficient_of_variation),
        score: Some(score),
    }
}

/// Classifies the direction of a monthly series.
///
/// Compares the average of the first half against the second half (an
/// odd-length series gives the extra month to the second half). A change
/// beyond 5% in either direction is a trend; anything else, including
/// fewer than three months of data, is stable by convention.
#[must_use]
pub fn trend(history: &[MonthlyTotal]) -> TrendDirection {
    if history.len() < 3 {
        return TrendDirection::Stable;
    }

    let split = history.len() / 2;
    let first_average = average(&history[..split]);
    let second_average = average(&history[split..]);

    let percent_change = if first_average.is_zero() {
        Decimal::ZERO
    } else {
        (second_average - first_average) / first_average * Decimal::ONE_HUNDRED
    };

    let threshold = Decimal::from(5u32);
    if percent_change > threshold {
        TrendDirection::Increasing
    } else if percent_change < -threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn average(series: &[MonthlyTotal]) -> Decimal {
    if series.is_empty() {
        return Decimal::ZERO;
    }
    series.iter().map(|m| m.total).sum::<Decimal>() / Decimal::from(series.len() as u64)
}
