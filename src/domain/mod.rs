//! Domain layer: Core clinical value types.
//!
//! This module contains pure Rust types with no external dependencies
//! beyond serialization. Nothing here performs I/O.

mod assessment;
mod patient;
mod report;

pub use assessment::{Assessment, RiskAssessment, RiskTier};
pub use patient::{ClinicalInput, Sex, VascularHistory};
pub use report::{FactorSnapshot, PatientSummary, ReportLineItem};
