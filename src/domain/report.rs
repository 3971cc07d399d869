//! Report payload types.
//!
//! The document renderer (an external collaborator) consumes an ordered
//! sequence of labelled lines; these types are purely presentational.

use serde::{Deserialize, Serialize};

use super::Sex;

/// A single labelled line in the report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLineItem {
    pub label: String,
    pub value: String,
}

impl ReportLineItem {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Patient identity plus headline risk for the report header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub sex: Sex,
    pub age: u32,
    /// Already-rounded risk percentage from the scoring engine
    pub risk_percent: f64,
}

/// The major risk factors listed in the report body, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorSnapshot {
    pub age: u32,
    pub systolic_bp: u32,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
}
