use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk grading reported by the upstream detector for a whole response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Verdict assigned to a single extracted claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Verified,
    Uncertain,
    LikelyHallucinated,
    Hallucinated,
}

/// One factual assertion extracted from the generated answer by the
/// upstream model, with its status/confidence labeling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claim {
    pub text: String,
    pub status: ClaimStatus,
    pub confidence: u8,
    pub reason: String,
}

/// Structured risk assessment of a generated answer
///
/// Wire field names follow the upstream contract: `overallScore` and
/// `riskLevel` are camelCase, `strategies_used` is snake_case.
/// `overall_score` and `risk_level` are produced independently by the
/// upstream model and are not reconciled against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Analysis {
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub claims: Vec<Claim>,
    pub summary: String,
    pub strategies_used: Vec<String>,
}

/// Maximum characters of raw model output echoed into a degraded summary
pub const DEGRADED_SUMMARY_RAW_LIMIT: usize = 500;

impl Analysis {
    /// Sentinel assessment used when the upstream reply cannot be parsed
    /// or fails validation
    ///
    /// Signals "assessment unavailable" rather than a genuine score: fixed
    /// midpoint score, medium risk, no claims, and the summary carries a
    /// truncated copy of the unparsable reply for diagnosis.
    pub fn degraded(raw: &str) -> Self {
        let excerpt: String = raw.chars().take(DEGRADED_SUMMARY_RAW_LIMIT).collect();
        Self {
            overall_score: 50,
            risk_level: RiskLevel::Medium,
            claims: Vec::new(),
            summary: format!("Analysis completed but parsing failed. Raw: {excerpt}"),
            strategies_used: vec!["self-consistency".to_string()],
        }
    }
}

/// Outcome of interpreting the upstream analysis reply
///
/// The degraded path is a first-class branch, not a caught exception, so
/// callers can distinguish a genuine assessment from the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Reply parsed and validated against the expected shape; unchanged
    Parsed(Analysis),
    /// Reply could not be parsed or failed validation; sentinel analysis
    Degraded(Analysis),
}

impl AnalysisOutcome {
    /// Unwrap to the analysis carried by either branch
    pub fn into_analysis(self) -> Analysis {
        match self {
            Self::Parsed(analysis) | Self::Degraded(analysis) => analysis,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}
