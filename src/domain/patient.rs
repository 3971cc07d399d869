//! Clinical input types for cardiovascular risk scoring.
//!
//! Field set follows the SMART secondary-prevention risk model inputs
//! (demographics, lipid panel, renal function, inflammation, vascular history).

use serde::{Deserialize, Serialize};

/// Patient sex as used by the scoring coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Prior vascular disease flags.
///
/// The score uses only the count of set flags (0-3), but the individual
/// conditions are kept so the presentation layer can show them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VascularHistory {
    /// Coronary artery disease
    pub cad: bool,
    /// Cerebrovascular disease (stroke or TIA)
    pub stroke_tia: bool,
    /// Peripheral artery disease
    pub pad: bool,
}

impl VascularHistory {
    /// Number of vascular disease territories affected (0-3).
    #[must_use]
    pub fn count(&self) -> u8 {
        u8::from(self.cad) + u8::from(self.stroke_tia) + u8::from(self.pad)
    }
}

/// Immutable clinical input record, constructed once per assessment.
///
/// The scoring engine treats this as pre-validated; callers at the
/// presentation boundary run [`ClinicalInput::validate`] before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    /// Age in years (30-100)
    pub age: u32,

    /// Patient sex
    pub sex: Sex,

    /// Systolic blood pressure in mmHg (90-220)
    pub systolic_bp: u32,

    /// Total cholesterol in mmol/L (2.0-10.0)
    pub total_cholesterol: f64,

    /// HDL cholesterol in mmol/L (0.5-3.0)
    pub hdl_cholesterol: f64,

    /// LDL cholesterol in mmol/L (0.5-6.0, never below HDL).
    /// Collected and validated, but the current coefficient table assigns
    /// it no weight; see `application::scoring`.
    pub ldl_cholesterol: f64,

    /// Current smoking status
    pub smoker: bool,

    /// Diabetes mellitus diagnosis
    pub diabetes: bool,

    /// Estimated GFR in mL/min/1.73m² (15-120)
    pub egfr: u32,

    /// High-sensitivity CRP in mg/L (0.1-20.0)
    pub crp: f64,

    /// Prior vascular disease flags (CAD, stroke/TIA, PAD)
    pub vascular: VascularHistory,
}

impl ClinicalInput {
    /// Validate that all fields are within the documented clinical ranges.
    ///
    /// The scoring engine itself does not re-validate; this is the boundary
    /// check the presentation layer runs before invoking it.
    ///
    /// # Errors
    /// Returns one message per offending field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(30..=100).contains(&self.age) {
            errors.push(format!("Age {} out of range [30, 100]", self.age));
        }
        if !(90..=220).contains(&self.systolic_bp) {
            errors.push(format!(
                "Systolic BP {} out of range [90, 220]",
                self.systolic_bp
            ));
        }
        if !(2.0..=10.0).contains(&self.total_cholesterol) {
            errors.push(format!(
                "Total cholesterol {} out of range [2.0, 10.0]",
                self.total_cholesterol
            ));
        }
        if !(0.5..=3.0).contains(&self.hdl_cholesterol) {
            errors.push(format!(
                "HDL cholesterol {} out of range [0.5, 3.0]",
                self.hdl_cholesterol
            ));
        }
        if !(0.5..=6.0).contains(&self.ldl_cholesterol) {
            errors.push(format!(
                "LDL cholesterol {} out of range [0.5, 6.0]",
                self.ldl_cholesterol
            ));
        }
        if self.ldl_cholesterol < self.hdl_cholesterol {
            errors.push(format!(
                "LDL cholesterol {} cannot be lower than HDL cholesterol {}",
                self.ldl_cholesterol, self.hdl_cholesterol
            ));
        }
        if !(15..=120).contains(&self.egfr) {
            errors.push(format!("eGFR {} out of range [15, 120]", self.egfr));
        }
        if !(0.1..=20.0).contains(&self.crp) {
            errors.push(format!("CRP {} out of range [0.1, 20.0]", self.crp));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ClinicalInput {
        ClinicalInput {
            age: 65,
            sex: Sex::Male,
            systolic_bp: 140,
            total_cholesterol: 5.0,
            hdl_cholesterol: 1.0,
            ldl_cholesterol: 3.5,
            smoker: false,
            diabetes: false,
            egfr: 80,
            crp: 2.0,
            vascular: VascularHistory::default(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let mut input = valid_input();
        input.age = 29;
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Age"));
    }

    #[test]
    fn test_ldl_below_hdl_rejected() {
        let mut input = valid_input();
        input.hdl_cholesterol = 2.0;
        input.ldl_cholesterol = 1.5;
        let errors = input.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.contains("cannot be lower than HDL")));
    }

    #[test]
    fn test_multiple_violations_all_reported() {
        let mut input = valid_input();
        input.systolic_bp = 250;
        input.crp = 30.0;
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_vascular_count() {
        assert_eq!(VascularHistory::default().count(), 0);
        let all = VascularHistory {
            cad: true,
            stroke_tia: true,
            pad: true,
        };
        assert_eq!(all.count(), 3);
        let one = VascularHistory {
            stroke_tia: true,
            ..Default::default()
        };
        assert_eq!(one.count(), 1);
    }
}
