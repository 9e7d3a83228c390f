//! Concentration scoring via the Herfindahl-Hirschman index.

use rust_decimal::Decimal;

use super::types::DiversityReport;

const DIVERSE_SCORE_FLOOR: u32 = 50;
const PRIMARY_SHARE_CEILING: u32 = 70;

/// Scores how spread out a set of source totals is.
///
/// Each source's market share is squared and summed (HHI); the score is
/// `(1 - HHI) * 100`, so a single dominant source scores near 0 and evenly
/// spread sources approach 100. Zero or one source scores 0 outright. The
/// `sufficiently_diverse` flag additionally requires the primary source to
/// stay under a 70% share.
#[must_use]
pub fn diversity(source_totals: &[(String, Decimal)]) -> DiversityReport {
    let sum: Decimal = source_totals.iter().map(|(_, total)| *total).sum();
    let primary = source_totals
        .iter()
        .max_by_key(|(_, total)| *total)
        .cloned();

    let primary_share_percent = match &primary {
        Some((_, total)) if !sum.is_zero() => *total / sum * Decimal::ONE_HUNDRED,
        _ => Decimal::ZERO,
    };

    let score = if source_totals.len() < 2 || sum.is_zero() {
        Decimal::ZERO
    } else {
        let hhi: Decimal = source_totals
            .iter()
            .map(|(_, total)| {
                let share = *total / sum;
                share * share
            })
            .sum();
        ((Decimal::ONE - hhi) * Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    };

    let sufficiently_diverse = score > Decimal::from(DIVERSE_SCORE_FLOOR)
        && primary_share_percent < Decimal::from(PRIMARY_SHARE_CEILING);

    DiversityReport {
        score,
        primary_source: primary.map(|(key, _)| key),
        primary_share_percent,
        sufficiently_diverse,
    }
}
