//! Interpretation of the raw analysis reply
//!
//! Upstream models frequently wrap JSON in markdown fences despite
//! instructions not to. The reply is cleaned, strictly parsed, then
//! range-checked; anything that falls short degrades to the sentinel
//! analysis instead of failing the request.

use crate::model::{Analysis, AnalysisOutcome};
use crate::service::detection::validation::validate_analysis;

/// Strip markdown code-fence markers and surrounding whitespace
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse the raw upstream reply into an [`AnalysisOutcome`]
///
/// Never returns an error: a reply that fails strict parsing or range
/// validation produces [`AnalysisOutcome::Degraded`].
pub fn parse_analysis(raw: &str) -> AnalysisOutcome {
    let cleaned = strip_code_fences(raw);

    let analysis: Analysis = match serde_json::from_str(&cleaned) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(
                error = %e,
                raw = %cleaned,
                "Failed to parse analysis JSON, returning degraded analysis"
            );
            return AnalysisOutcome::Degraded(Analysis::degraded(&cleaned));
        }
    };

    let validation = validate_analysis(&analysis);
    if !validation.is_valid {
        tracing::warn!(
            errors = ?validation.errors,
            raw = %cleaned,
            "Parsed analysis failed validation, returning degraded analysis"
        );
        return AnalysisOutcome::Degraded(Analysis::degraded(&cleaned));
    }

    for warning in &validation.warnings {
        tracing::debug!(warning = %warning, "Analysis quality warning");
    }

    AnalysisOutcome::Parsed(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;

    const VALID_ANALYSIS: &str = r#"{
        "overallScore": 80,
        "riskLevel": "high",
        "claims": [
            {
                "text": "Edison invented the telephone in 1879.",
                "status": "hallucinated",
                "confidence": 95,
                "reason": "The telephone was invented by Alexander Graham Bell in 1876."
            }
        ],
        "summary": "The response misattributes the invention of the telephone.",
        "strategies_used": ["knowledge-grounding", "self-consistency"]
    }"#;

    #[test]
    fn test_strip_json_fence() {
        let fenced = format!("```json\n{VALID_ANALYSIS}\n```");
        assert_eq!(strip_code_fences(&fenced), VALID_ANALYSIS.trim());
    }

    #[test]
    fn test_strip_bare_fence() {
        let fenced = format!("```\n{VALID_ANALYSIS}\n```");
        assert_eq!(strip_code_fences(&fenced), VALID_ANALYSIS.trim());
    }

    #[test]
    fn test_strip_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_valid_json_parses_unchanged() {
        let outcome = parse_analysis(VALID_ANALYSIS);

        let analysis = match outcome {
            AnalysisOutcome::Parsed(analysis) => analysis,
            AnalysisOutcome::Degraded(_) => panic!("expected parsed outcome"),
        };
        assert_eq!(analysis.overall_score, 80);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.claims.len(), 1);
        assert_eq!(analysis.claims[0].confidence, 95);
    }

    #[test]
    fn test_fenced_json_parses() {
        let fenced = format!("```json\n{VALID_ANALYSIS}\n```");
        let outcome = parse_analysis(&fenced);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.into_analysis().overall_score, 80);
    }

    #[test]
    fn test_refusal_text_degrades() {
        let outcome = parse_analysis("Sorry, I cannot comply.");

        assert!(outcome.is_degraded());
        let analysis = outcome.into_analysis();
        assert_eq!(analysis.overall_score, 50);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert!(
            analysis
                .summary
                .starts_with("Analysis completed but parsing failed. Raw: Sorry, I cannot comply.")
        );
    }

    #[test]
    fn test_degraded_summary_uses_cleaned_text() {
        let outcome = parse_analysis("```json\nnot json at all\n```");
        assert!(
            outcome
                .into_analysis()
                .summary
                .contains("Raw: not json at all")
        );
    }

    #[test]
    fn test_out_of_range_score_degrades() {
        let raw = r#"{"overallScore":150,"riskLevel":"low","claims":[],"summary":"s","strategies_used":[]}"#;
        assert!(parse_analysis(raw).is_degraded());
    }

    #[test]
    fn test_unknown_risk_level_degrades() {
        let raw = r#"{"overallScore":10,"riskLevel":"severe","claims":[],"summary":"s","strategies_used":[]}"#;
        assert!(parse_analysis(raw).is_degraded());
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_analysis(VALID_ANALYSIS), parse_analysis(VALID_ANALYSIS));
        assert_eq!(
            parse_analysis("not json"),
            parse_analysis("not json")
        );
    }
}
