//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the calculator.

mod assessment;
mod cache;
mod report;
mod scoring;

pub use assessment::AssessmentService;
pub use cache::ScoringCache;
pub use report::{build_report, report_filename, REPORT_TITLE};
pub use scoring::{compute_risk, risk_score};
