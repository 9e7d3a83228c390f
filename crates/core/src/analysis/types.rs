//! Analysis data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total for one calendar month, keyed as "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month key (e.g. "2026-01").
    pub month: String,
    /// Total for the month, in the report currency.
    pub total: Decimal,
}

/// One point of a forecast series: history or projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Month key (e.g. "2026-01").
    pub month: String,
    /// Historical total or projected total.
    pub total: Decimal,
    /// True for projected points, false for history.
    pub projected: bool,
}

/// Spending/income stability over a monthly series.
///
/// With fewer than 2 months of data the metrics are `None` and
/// `sufficient_data` is false; a score is never fabricated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Whether enough history existed to compute the metrics.
    pub sufficient_data: bool,
    /// Mean monthly total.
    pub mean: Option<Decimal>,
    /// Population standard deviation.
    pub std_dev: Option<Decimal>,
    /// `std_dev / mean * 100`; zero when the mean is zero.
    pub coefficient_of_variation: Option<Decimal>,
    /// `max(0, 100 - coefficient_of_variation)`.
    pub score: Option<Decimal>,
}

impl StabilityReport {
    /// The insufficient-data result.
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            sufficient_data: false,
            mean: None,
            std_dev: None,
            coefficient_of_variation: None,
            score: None,
        }
    }
}

/// Direction of a monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Second half averages more than 5% above the first.
    Increasing,
    /// Second half averages more than 5% below the first.
    Decreasing,
    /// Within the 5% band, or fewer than 3 months of data.
    Stable,
}

/// Concentration-based diversity of category or income-source totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityReport {
    /// `(1 - HHI) * 100`; zero for fewer than two sources.
    pub score: Decimal,
    /// Key of the largest source, if any.
    pub primary_source: Option<String>,
    /// The largest source's share of the total, as a percentage.
    pub primary_share_percent: Decimal,
    /// `score > 50` and primary share below 70%.
    pub sufficiently_diverse: bool,
}
