//! Calendar arithmetic for budget cycles.
//!
//! End dates are inclusive: a cycle runs from its start date to the day
//! before the next cycle begins. Month arithmetic clamps to the end of
//! shorter months (Jan 31 + 1 month = Feb 28/29), which is chrono's
//! behavior and matches how the application has always renewed budgets.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::types::{Frequency, TimeFrame, TimeUnit};

/// Boundaries of one recurring budget cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCycle {
    /// Last day of the cycle (inclusive).
    pub end_date: NaiveDate,
    /// First day of the next cycle.
    pub next_renewal_date: NaiveDate,
}

/// Computes the inclusive end date of a budget spanning `time_frame` from `start`.
#[must_use]
pub fn end_date_for(start: NaiveDate, time_frame: TimeFrame) -> NaiveDate {
    let day_after_span = match time_frame {
        TimeFrame::OneWeek => start + Days::new(7),
        TimeFrame::OneMonth => start + Months::new(1),
        TimeFrame::ThreeMonths => start + Months::new(3),
        TimeFrame::SixMonths => start + Months::new(6),
        TimeFrame::OneYear => start + Months::new(12),
        TimeFrame::TwoYears => start + Months::new(24),
        TimeFrame::Custom { value, unit } => {
            // A zero-length custom span still covers at least one unit.
            let value = value.max(1);
            match unit {
                TimeUnit::Days => start + Days::new(u64::from(value)),
                TimeUnit::Weeks => start + Days::new(u64::from(value) * 7),
                TimeUnit::Months => start + Months::new(value),
                TimeUnit::Years => start + Months::new(value * 12),
            }
        }
    };
    day_after_span - Days::new(1)
}

/// Computes the boundaries of one `frequency` cycle starting at `start`.
#[must_use]
pub fn cycle_for(start: NaiveDate, frequency: Frequency) -> PeriodCycle {
    let next_renewal_date = match frequency {
        Frequency::Daily => start + Days::new(1),
        Frequency::Weekly => start + Days::new(7),
        Frequency::Monthly => start + Months::new(1),
        Frequency::Quarterly => start + Months::new(3),
        Frequency::Yearly => start + Months::new(12),
    };
    PeriodCycle {
        end_date: next_renewal_date - Days::new(1),
        next_renewal_date,
    }
}

/// Number of `frequency` periods inside the inclusive range `[start, end]`.
///
/// Without an overall end date the budget spans exactly one period. A range
/// that ends before it starts still counts the single period containing the
/// start date.
#[must_use]
pub fn periods_in_time_frame(
    frequency: Frequency,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> u32 {
    let Some(end) = end else { return 1 };

    let days_inclusive = (end - start).num_days() + 1;

    // Complete months elapsed: Jan 15 -> Mar 14 is one whole month, so the
    // range spans two monthly cycles (Jan 15 - Feb 14 and Feb 15 onward).
    let mut whole_months =
        i64::from(end.year() - start.year()) * 12 + i64::from(end.month()) - i64::from(start.month());
    if end.day() < start.day() {
        whole_months -= 1;
    }
    let mut whole_years = i64::from(end.year() - start.year());
    if (end.month(), end.day()) < (start.month(), start.day()) {
        whole_years -= 1;
    }

    let count = match frequency {
        Frequency::Daily => days_inclusive,
        Frequency::Weekly => (days_inclusive + 6) / 7,
        Frequency::Monthly => whole_months + 1,
        Frequency::Quarterly => whole_months / 3 + 1,
        Frequency::Yearly => whole_years + 1,
    };

    u32::try_from(count.max(1)).unwrap_or(u32::MAX)
}
