//! Risk scoring engine: linear score accumulation with a logistic squash.
//!
//! `compute_risk` is a total, pure function over pre-validated input: it never
//! fails, blocks, or touches I/O, and identical input always yields a
//! bit-identical result. Range checking is the caller's job
//! ([`ClinicalInput::validate`]); out-of-range values still produce an
//! arithmetic result without complaint.

use crate::domain::{ClinicalInput, RiskAssessment, Sex};

/// Per-unit and per-condition score contributions.
///
/// All terms are additive, so accumulation order never affects the result.
/// LDL cholesterol carries no weight in this formula version; it is kept on
/// the input unchanged rather than folded in here.
mod weights {
    /// Per year of age
    pub const AGE: f64 = 0.04;
    /// Male sex
    pub const MALE: f64 = 0.7;
    /// Per mmHg of systolic blood pressure
    pub const SBP: f64 = 0.02;
    /// Per mmol/L of total cholesterol
    pub const TOTAL_CHOL: f64 = 0.3;
    /// HDL cholesterol below 1.0 mmol/L
    pub const LOW_HDL: f64 = -0.4;
    /// Current smoker
    pub const SMOKER: f64 = 0.6;
    /// Diabetes mellitus
    pub const DIABETES: f64 = 0.8;
    /// eGFR below 60 mL/min/1.73m²
    pub const IMPAIRED_EGFR: f64 = 0.5;
    /// CRP above 2.0 mg/L
    pub const ELEVATED_CRP: f64 = 0.3;
    /// Per affected vascular territory
    pub const VASCULAR: f64 = 0.4;
}

/// Thresholds for the conditional contributions.
const LOW_HDL_THRESHOLD: f64 = 1.0;
const IMPAIRED_EGFR_THRESHOLD: u32 = 60;
const ELEVATED_CRP_THRESHOLD: f64 = 2.0;

/// Accumulate the raw linear risk score.
#[must_use]
pub fn risk_score(input: &ClinicalInput) -> f64 {
    let mut score = 0.0;
    score += f64::from(input.age) * weights::AGE;
    if input.sex == Sex::Male {
        score += weights::MALE;
    }
    score += f64::from(input.systolic_bp) * weights::SBP;
    score += input.total_cholesterol * weights::TOTAL_CHOL;
    if input.hdl_cholesterol < LOW_HDL_THRESHOLD {
        score += weights::LOW_HDL;
    }
    if input.smoker {
        score += weights::SMOKER;
    }
    if input.diabetes {
        score += weights::DIABETES;
    }
    if input.egfr < IMPAIRED_EGFR_THRESHOLD {
        score += weights::IMPAIRED_EGFR;
    }
    if input.crp > ELEVATED_CRP_THRESHOLD {
        score += weights::ELEVATED_CRP;
    }
    score += f64::from(input.vascular.count()) * weights::VASCULAR;
    score
}

/// Standard logistic squash onto a 0-100 percentage.
fn logistic_percent(score: f64) -> f64 {
    100.0 / (1.0 + (-score).exp())
}

/// Round to one decimal place, half away from zero (`f64::round` semantics).
///
/// Applies to the binary value of the percentage; a decimal literal such as
/// 12.45 that has no exact binary representation rounds according to its
/// nearest-f64 value.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the 10-year CVD risk assessment for a patient.
///
/// Pipeline: accumulate the linear score, squash through the logistic
/// function, round to one decimal place, classify into a tier.
#[must_use]
pub fn compute_risk(input: &ClinicalInput) -> RiskAssessment {
    let score = risk_score(input);
    let risk_percent = round_to_tenth(logistic_percent(score));
    RiskAssessment::from_percent(risk_percent)
}
