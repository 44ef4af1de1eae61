//! Range and shape validation for parsed analyses
//!
//! Enum membership and field types are already enforced by typed parsing;
//! this covers the numeric ranges the wire schema promises but the parser
//! alone cannot express.

use crate::model::Analysis;

/// Result of analysis validation
#[derive(Debug)]
pub struct AnalysisValidationResult {
    /// Whether the analysis passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl AnalysisValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

const MAX_SCORE: u8 = 100;

/// Validate a parsed analysis against the numeric ranges of the schema
///
/// Checks:
/// 1. `overallScore` is within 0-100
/// 2. Every claim confidence is within 0-100
/// 3. Claims and summary carry substantive text (warnings only)
pub fn validate_analysis(analysis: &Analysis) -> AnalysisValidationResult {
    let mut result = AnalysisValidationResult::valid();

    if analysis.overall_score > MAX_SCORE {
        result.add_error(format!(
            "overallScore {} is out of range 0-100",
            analysis.overall_score
        ));
    }

    for (i, claim) in analysis.claims.iter().enumerate() {
        if claim.confidence > MAX_SCORE {
            result.add_error(format!(
                "Claim {} confidence {} is out of range 0-100",
                i + 1,
                claim.confidence
            ));
        }

        if claim.text.trim().is_empty() {
            result.add_warning(format!("Claim {} has empty text", i + 1));
        }

        if claim.reason.trim().is_empty() {
            result.add_warning(format!("Claim {} has empty reason", i + 1));
        }
    }

    if analysis.summary.trim().is_empty() {
        result.add_warning("Summary is empty".to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Claim, ClaimStatus, RiskLevel};

    fn analysis_with(overall_score: u8, confidence: u8) -> Analysis {
        Analysis {
            overall_score,
            risk_level: RiskLevel::Low,
            claims: vec![Claim {
                text: "Bell invented the telephone".to_string(),
                status: ClaimStatus::Verified,
                confidence,
                reason: "Well documented historical fact".to_string(),
            }],
            summary: "The response is accurate.".to_string(),
            strategies_used: vec!["knowledge-grounding".to_string()],
        }
    }

    #[test]
    fn test_in_range_analysis_is_valid() {
        let result = validate_analysis(&analysis_with(20, 95));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_boundary_values_are_valid() {
        let result = validate_analysis(&analysis_with(100, 0));
        assert!(result.is_valid);
    }

    #[test]
    fn test_out_of_range_overall_score() {
        let result = validate_analysis(&analysis_with(150, 50));
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("overallScore 150"));
    }

    #[test]
    fn test_out_of_range_claim_confidence() {
        let result = validate_analysis(&analysis_with(50, 120));
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("Claim 1 confidence 120"));
    }

    #[test]
    fn test_empty_claim_text_is_only_a_warning() {
        let mut analysis = analysis_with(50, 50);
        analysis.claims[0].text = "  ".to_string();

        let result = validate_analysis(&analysis);
        assert!(result.is_valid);
        assert!(result.warnings[0].contains("empty text"));
    }

    #[test]
    fn test_empty_claims_array_is_valid() {
        let mut analysis = analysis_with(50, 50);
        analysis.claims.clear();

        let result = validate_analysis(&analysis);
        assert!(result.is_valid);
    }
}
