//! Value-keyed memoization for the scoring engine.
//!
//! `compute_risk` is referentially transparent, so caching by the full input
//! value is invisible to callers: a hit returns the bit-identical assessment
//! a fresh computation would. Purely an optimization; correctness never
//! depends on it.

use std::collections::HashMap;

use crate::application::scoring::compute_risk;
use crate::domain::{ClinicalInput, RiskAssessment, Sex, VascularHistory};

/// Hashable key covering every field of the input.
///
/// Float fields are keyed by their exact bit patterns, so only truly
/// identical inputs share a cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct InputKey {
    age: u32,
    sex: Sex,
    systolic_bp: u32,
    total_cholesterol: u64,
    hdl_cholesterol: u64,
    ldl_cholesterol: u64,
    smoker: bool,
    diabetes: bool,
    egfr: u32,
    crp: u64,
    vascular: VascularHistory,
}

impl From<&ClinicalInput> for InputKey {
    fn from(input: &ClinicalInput) -> Self {
        Self {
            age: input.age,
            sex: input.sex,
            systolic_bp: input.systolic_bp,
            total_cholesterol: input.total_cholesterol.to_bits(),
            hdl_cholesterol: input.hdl_cholesterol.to_bits(),
            ldl_cholesterol: input.ldl_cholesterol.to_bits(),
            smoker: input.smoker,
            diabetes: input.diabetes,
            egfr: input.egfr,
            crp: input.crp.to_bits(),
            vascular: input.vascular,
        }
    }
}

/// Memoizing wrapper around [`compute_risk`].
#[derive(Debug, Default)]
pub struct ScoringCache {
    entries: HashMap<InputKey, RiskAssessment>,
}

impl ScoringCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the risk assessment, reusing a prior result for identical input.
    pub fn compute_risk(&mut self, input: &ClinicalInput) -> RiskAssessment {
        *self
            .entries
            .entry(InputKey::from(input))
            .or_insert_with(|| compute_risk(input))
    }

    /// Number of distinct inputs seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ClinicalInput {
        ClinicalInput {
            age: 58,
            sex: Sex::Female,
            systolic_bp: 150,
            total_cholesterol: 6.1,
            hdl_cholesterol: 0.9,
            ldl_cholesterol: 3.8,
            smoker: true,
            diabetes: false,
            egfr: 65,
            crp: 3.2,
            vascular: VascularHistory {
                cad: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_cache_matches_direct_computation() {
        let input = sample_input();
        let mut cache = ScoringCache::new();

        let cached = cache.compute_risk(&input);
        let direct = compute_risk(&input);
        assert_eq!(cached.risk_percent.to_bits(), direct.risk_percent.to_bits());
        assert_eq!(cached.tier, direct.tier);
    }

    #[test]
    fn test_repeat_input_hits_cache() {
        let input = sample_input();
        let mut cache = ScoringCache::new();
        assert!(cache.is_empty());

        let first = cache.compute_risk(&input);
        let second = cache.compute_risk(&input);
        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_inputs_get_distinct_slots() {
        let input = sample_input();
        let other = ClinicalInput {
            hdl_cholesterol: 1.1,
            ..input
        };

        let mut cache = ScoringCache::new();
        cache.compute_risk(&input);
        cache.compute_risk(&other);
        assert_eq!(cache.len(), 2);
    }
}
