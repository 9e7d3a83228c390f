//! Report orchestration and cached snapshots.
//!
//! `ReportService::generate` is a pure function over in-memory rows; the
//! cached `report_data` blob is produced by `ReportResult::into_snapshot`
//! and written back by the caller as a thin, separate persistence step.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{ReportKind, ReportParams, ReportResult, ReportSnapshot, ReportTotals};
