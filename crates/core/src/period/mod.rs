//! Budget cycle and time-frame calendar math.
//!
//! A *period* is one recurring budget cycle (its `Frequency`); a
//! *time-frame* is the overall multi-cycle horizon (e.g. six months of
//! monthly periods).

pub mod calendar;
pub mod error;
pub mod types;

pub use calendar::{cycle_for, end_date_for, periods_in_time_frame, PeriodCycle};
pub use error::PeriodError;
pub use types::{Frequency, TimeFrame, TimeUnit};
