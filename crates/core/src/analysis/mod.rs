//! Forecast, stability, trend, and diversity scoring over monthly series.
//!
//! Inputs are the ordered monthly totals produced by the aggregation
//! engine, already converted into the report currency. Metrics that need a
//! minimum amount of history report `sufficient_data = false` (or a
//! documented default) instead of fabricating a score.

pub mod diversity;
pub mod forecast;
pub mod stability;
pub mod types;


pub use diversity::diversity;
pub use forecast::forecast;
pub use stability::{stability, trend};
pub use types::{DiversityReport, ForecastPoint, MonthlyTotal, StabilityReport, TrendDirection};
