//! Frequency and time-frame types.
//!
//! Parsing is strict at the entry boundary (`FromStr` returns
//! `PeriodError`). Values already persisted by older versions of the
//! application may hold arbitrary strings, so the `from_str_lenient`
//! constructors keep the legacy behavior of silently defaulting to a
//! monthly period, with a warning log.

use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// How often a recurring budget renews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Renews every day.
    Daily,
    /// Renews every 7 days.
    Weekly,
    /// Renews every calendar month.
    Monthly,
    /// Renews every 3 calendar months.
    Quarterly,
    /// Renews every calendar year.
    Yearly,
}

impl Frequency {
    /// Parses a persisted frequency, defaulting unknown values to monthly.
    ///
    /// Kept for records written before frequency validation existed; new
    /// input should go through `FromStr` instead.
    #[must_use]
    pub fn from_str_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "unknown frequency, defaulting to monthly");
            Self::Monthly
        })
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Frequency {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(PeriodError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Unit for a custom time-frame span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// 7-day weeks.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl std::str::FromStr for TimeUnit {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(Self::Days),
            "week" | "weeks" => Ok(Self::Weeks),
            "month" | "months" => Ok(Self::Months),
            "year" | "years" => Ok(Self::Years),
            _ => Err(PeriodError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Overall horizon of a budget: a fixed span or a custom multiple of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFrame {
    /// One 7-day week.
    OneWeek,
    /// One calendar month.
    OneMonth,
    /// Three calendar months.
    ThreeMonths,
    /// Six calendar months.
    SixMonths,
    /// One calendar year.
    OneYear,
    /// Two calendar years.
    TwoYears,
    /// A custom span: `value` times `unit`.
    Custom {
        /// Number of units.
        value: u32,
        /// The unit of the span.
        unit: TimeUnit,
    },
}

impl TimeFrame {
    /// Parses a persisted time-frame, defaulting unknown values to one month.
    ///
    /// Mirrors `Frequency::from_str_lenient` for legacy rows.
    #[must_use]
    pub fn from_str_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "unknown time frame, defaulting to one month");
            Self::OneMonth
        })
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1_week" => Ok(Self::OneWeek),
            "1_month" => Ok(Self::OneMonth),
            "3_months" => Ok(Self::ThreeMonths),
            "6_months" => Ok(Self::SixMonths),
            "1_year" => Ok(Self::OneYear),
            "2_years" => Ok(Self::TwoYears),
            other => Err(PeriodError::UnknownTimeFrame(other.to_string())),
        }
    }
}
