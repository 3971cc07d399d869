//! # primecvd
//!
//! Core of the PRIME CVD risk calculator: estimates a patient's 10-year
//! cardiovascular-disease recurrence risk from clinical inputs and shapes
//! the data payload for a downloadable report.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core clinical value types (ClinicalInput, RiskAssessment, report lines)
//! - `ports`: Trait definitions for external collaborators (report renderer, branding assets)
//! - `adapters`: Concrete implementations (plain-text renderer, filesystem assets)
//! - `application`: Use cases orchestrating scoring, memoization, and report assembly

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::{build_report, compute_risk, AssessmentService, ScoringCache};
pub use domain::{ClinicalInput, RiskAssessment, RiskTier, Sex, VascularHistory};

/// Result type for primecvd operations
pub type Result<T> = std::result::Result<T, PrimecvdError>;

/// Main error type for primecvd
#[derive(Debug, thiserror::Error)]
pub enum PrimecvdError {
    #[error("Invalid clinical input: {0}")]
    Validation(String),

    #[error("Report rendering failed: {0}")]
    Render(#[from] adapters::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
