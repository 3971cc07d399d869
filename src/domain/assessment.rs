//! Risk assessment result types.
//!
//! Represents the output of the 10-year CVD risk computation.

use serde::{Deserialize, Serialize};

/// Risk tier classification for UI triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Below 10% 10-year risk
    Low,
    /// 10% to below 20% 10-year risk
    Medium,
    /// 20% or higher 10-year risk
    High,
}

impl RiskTier {
    /// Classify a risk percentage into a tier.
    ///
    /// Band lower bounds are closed: exactly 20.0 is High, exactly 10.0
    /// is Medium.
    #[must_use]
    pub fn from_percent(risk_percent: f64) -> Self {
        if risk_percent >= 20.0 {
            Self::High
        } else if risk_percent >= 10.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get the clinical interpretation shown alongside the result.
    #[must_use]
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - maintain healthy lifestyle",
            Self::Medium => "Moderate risk - consider therapy",
            Self::High => "High risk - intensive therapy recommended",
        }
    }

    /// Get the associated display color (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (12, 157, 88),    // Green (#0C9D58)
            Self::Medium => (255, 165, 0), // Amber (#FFA500)
            Self::High => (255, 75, 75),   // Red (#FF4B4B)
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of the risk computation (percentage plus derived tier).
///
/// Never constructed independently of a percentage; use
/// [`RiskAssessment::from_percent`] so the tier always agrees with the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 10-year CVD risk percentage (0.0 to 100.0, one decimal place)
    pub risk_percent: f64,

    /// Coarse tier derived from the percentage
    pub tier: RiskTier,
}

impl RiskAssessment {
    /// Build an assessment from an already-rounded risk percentage.
    #[must_use]
    pub fn from_percent(risk_percent: f64) -> Self {
        Self {
            risk_percent,
            tier: RiskTier::from_percent(risk_percent),
        }
    }
}

/// A completed assessment with entry timestamp, as shown in the UI history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Patient identifier (local only, optional)
    pub patient_id: Option<String>,

    /// The computed risk result
    pub result: RiskAssessment,

    /// Timestamp of the computation
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Create a new timestamped assessment.
    #[must_use]
    pub fn new(result: RiskAssessment) -> Self {
        Self {
            patient_id: None,
            result,
            created_at: chrono::Utc::now(),
        }
    }
}
