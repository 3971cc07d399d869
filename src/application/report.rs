//! Report assembly: shapes an assessment into the document line sequence.
//!
//! Pure and total; trusts its caller to pass a valid assessment. The actual
//! document rendering (pagination, fonts, byte encoding) lives behind the
//! [`ReportRenderer`](crate::ports::ReportRenderer) port.

use chrono::NaiveDate;

use crate::domain::{FactorSnapshot, PatientSummary, ReportLineItem};

/// Title line used by report renderers.
pub const REPORT_TITLE: &str = "PRIME CVD Risk Report";

/// Assemble the fixed-order report line sequence.
///
/// Always exactly six items: patient identity, risk headline, then the four
/// factor lines (age, blood pressure, total cholesterol, HDL cholesterol).
#[must_use]
pub fn build_report(patient: &PatientSummary, factors: &FactorSnapshot) -> Vec<ReportLineItem> {
    vec![
        ReportLineItem::new(
            "Patient",
            format!("{}, {} years", patient.sex, patient.age),
        ),
        ReportLineItem::new(
            "10-Year CVD Risk",
            format!("{:.1}%", patient.risk_percent),
        ),
        ReportLineItem::new("Age", format!("{} years", factors.age)),
        ReportLineItem::new("Blood Pressure", format!("{} mmHg", factors.systolic_bp)),
        ReportLineItem::new(
            "Total Cholesterol",
            format!("{:.1} mmol/L", factors.total_cholesterol),
        ),
        ReportLineItem::new(
            "HDL Cholesterol",
            format!("{:.1} mmol/L", factors.hdl_cholesterol),
        ),
    ]
}

/// Date-stamped download filename for a rendered report.
#[must_use]
pub fn report_filename(date: NaiveDate) -> String {
    format!("cvd_risk_report_{}.txt", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sex;

    #[test]
    fn test_report_line_order() {
        let patient = PatientSummary {
            sex: Sex::Female,
            age: 58,
            risk_percent: 12.3,
        };
        let factors = FactorSnapshot {
            age: 58,
            systolic_bp: 150,
            total_cholesterol: 6.1,
            hdl_cholesterol: 0.9,
        };

        let lines = build_report(&patient, &factors);
        assert_eq!(lines.len(), 6);

        assert_eq!(lines[0], ReportLineItem::new("Patient", "Female, 58 years"));
        assert_eq!(lines[1], ReportLineItem::new("10-Year CVD Risk", "12.3%"));
        assert_eq!(lines[2], ReportLineItem::new("Age", "58 years"));
        assert_eq!(lines[3], ReportLineItem::new("Blood Pressure", "150 mmHg"));
        assert_eq!(
            lines[4],
            ReportLineItem::new("Total Cholesterol", "6.1 mmol/L")
        );
        assert_eq!(
            lines[5],
            ReportLineItem::new("HDL Cholesterol", "0.9 mmol/L")
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        let patient = PatientSummary {
            sex: Sex::Male,
            age: 70,
            risk_percent: 99.9,
        };
        let factors = FactorSnapshot {
            age: 70,
            systolic_bp: 160,
            total_cholesterol: 5.5,
            hdl_cholesterol: 1.1,
        };
        assert_eq!(
            build_report(&patient, &factors),
            build_report(&patient, &factors)
        );
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert_eq!(report_filename(date), "cvd_risk_report_20240501.txt");
    }
}
