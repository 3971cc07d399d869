//! Assessment service: Orchestrates the risk-calculation use case.
//!
//! This service coordinates:
//! - Boundary validation of clinical input
//! - Memoized risk scoring
//! - Report assembly and rendering

use std::sync::Arc;

use crate::application::cache::ScoringCache;
use crate::application::report::{build_report, REPORT_TITLE};
use crate::domain::{ClinicalInput, FactorSnapshot, PatientSummary, RiskAssessment};
use crate::ports::ReportRenderer;
use crate::PrimecvdError;

/// Service for running risk assessments and producing report documents.
pub struct AssessmentService<R>
where
    R: ReportRenderer,
{
    renderer: Arc<R>,
    cache: ScoringCache,
}

impl<R> AssessmentService<R>
where
    R: ReportRenderer,
    R::Error: Into<crate::adapters::RenderError>,
{
    /// Create a new assessment service.
    pub fn new(renderer: Arc<R>) -> Self {
        Self {
            renderer,
            cache: ScoringCache::new(),
        }
    }

    /// Validate input and compute the risk assessment.
    ///
    /// Validation here is a boundary hardening only; for in-range input the
    /// result is identical to calling [`compute_risk`](crate::compute_risk)
    /// directly.
    ///
    /// # Errors
    /// Returns `Validation` listing every out-of-range field.
    pub fn assess(&mut self, input: &ClinicalInput) -> Result<RiskAssessment, PrimecvdError> {
        input
            .validate()
            .map_err(|errors| PrimecvdError::Validation(errors.join("; ")))?;

        let assessment = self.cache.compute_risk(input);
        tracing::info!(
            "Assessment complete: risk={:.1}%, tier={}",
            assessment.risk_percent,
            assessment.tier
        );
        Ok(assessment)
    }

    /// Assemble and render the report document for a completed assessment.
    ///
    /// # Errors
    /// Returns error if the renderer fails.
    pub fn generate_report(
        &self,
        input: &ClinicalInput,
        assessment: &RiskAssessment,
    ) -> Result<Vec<u8>, PrimecvdError> {
        let patient = PatientSummary {
            sex: input.sex,
            age: input.age,
            risk_percent: assessment.risk_percent,
        };
        let factors = FactorSnapshot {
            age: input.age,
            systolic_bp: input.systolic_bp,
            total_cholesterol: input.total_cholesterol,
            hdl_cholesterol: input.hdl_cholesterol,
        };

        tracing::debug!("Assembling report line items...");
        let lines = build_report(&patient, &factors);

        tracing::debug!("Rendering {} report lines...", lines.len());
        let bytes = self
            .renderer
            .render(REPORT_TITLE, &lines)
            .map_err(|e| PrimecvdError::Render(e.into()))?;

        tracing::info!("Report rendered: {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::text::TextRenderer;
    use crate::domain::{RiskTier, Sex, VascularHistory};

    fn create_test_service() -> AssessmentService<TextRenderer> {
        AssessmentService::new(Arc::new(TextRenderer::new()))
    }

    fn test_input() -> ClinicalInput {
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
    fn test_assess_pipeline() {
        let mut service = create_test_service();
        let assessment = service.assess(&test_input()).expect("Should assess");
        assert_eq!(assessment.risk_percent, 99.9);
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[test]
    fn test_assess_rejects_out_of_range_input() {
        let mut service = create_test_service();
        let mut input = test_input();
        input.age = 120;

        let err = service.assess(&input).unwrap_err();
        assert!(matches!(err, PrimecvdError::Validation(_)));
        assert!(err.to_string().contains("Age"));
    }

    #[test]
    fn test_generate_report_document() {
        let mut service = create_test_service();
        let input = test_input();
        let assessment = service.assess(&input).expect("Should assess");

        let bytes = service
            .generate_report(&input, &assessment)
            .expect("Should render");
        let text = String::from_utf8(bytes).expect("Report should be UTF-8");
        assert!(text.contains("PRIME CVD Risk Report"));
        assert!(text.contains("Patient: Male, 65 years"));
        assert!(text.contains("10-Year CVD Risk: 99.9%"));
    }
}
