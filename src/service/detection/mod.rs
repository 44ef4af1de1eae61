//! Mode orchestration for generation and hallucination analysis
//!
//! Interprets the caller's request mode, builds mode-specific prompts,
//! invokes the completion gateway, and for analyze requests interprets the
//! reply into a structured assessment with a degraded fallback.

use std::sync::Arc;

use crate::model::AnalysisOutcome;
use crate::service::detection::prompts::{
    ANALYSIS_SYSTEM_PROMPT, GENERATE_SYSTEM_PROMPT, build_analysis_prompt,
};
use crate::service::gateway::{ChatMessage, CompletionGateway, GatewayError};

pub mod parser;
pub mod prompts;
pub mod validation;

/// Error type for detection requests
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DetectionError {
    #[error("Invalid mode. Use 'generate' or 'analyze'.")]
    InvalidMode(String),

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("llmResponse is required for analyze mode")]
    MissingAnalysisTarget,

    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingCredential,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Caller request for the detection pipeline
#[derive(Debug, Clone)]
pub struct DetectionRequest {
    /// The user prompt (generate) or the prompt the answer responded to (analyze)
    pub prompt: String,
    /// Either "generate" or "analyze"
    pub mode: String,
    /// The answer to assess; required for analyze mode, ignored otherwise
    pub llm_response: Option<String>,
}

/// Result of a detection request
#[derive(Debug)]
pub enum DetectionOutput {
    /// Raw completion for generate mode, returned verbatim
    Generated(String),
    /// Parsed or degraded assessment for analyze mode
    Analyzed(AnalysisOutcome),
}

/// Orchestrates generate/analyze requests against the completion gateway
///
/// Stateless per request; the only held state is the injected credential
/// and the gateway handle.
pub struct DetectionService {
    gateway: Arc<dyn CompletionGateway>,
    api_key: Option<String>,
}

impl DetectionService {
    /// Create a new detection service
    ///
    /// The credential is injected at construction so the missing-credential
    /// path is testable without environment manipulation.
    pub fn new(gateway: Arc<dyn CompletionGateway>, api_key: Option<String>) -> Self {
        Self { gateway, api_key }
    }

    /// Whether the gateway credential is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Handle one detection request
    ///
    /// The credential is checked before any upstream call. A malformed
    /// analysis reply degrades to a sentinel assessment rather than
    /// failing the request.
    pub async fn handle(
        &self,
        request: DetectionRequest,
    ) -> Result<DetectionOutput, DetectionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DetectionError::MissingCredential)?;

        if request.prompt.trim().is_empty() {
            return Err(DetectionError::EmptyPrompt);
        }

        match request.mode.as_str() {
            "generate" => {
                let messages = [
                    ChatMessage::system(GENERATE_SYSTEM_PROMPT),
                    ChatMessage::user(request.prompt),
                ];

                let text = self.gateway.complete(api_key, &messages).await?;

                tracing::debug!(response_length = text.len(), "Generation completed");
                Ok(DetectionOutput::Generated(text))
            }
            "analyze" => {
                let llm_response = request
                    .llm_response
                    .as_deref()
                    .ok_or(DetectionError::MissingAnalysisTarget)?;

                let analysis_prompt = build_analysis_prompt(&request.prompt, llm_response);
                let messages = [
                    ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
                    ChatMessage::user(analysis_prompt),
                ];

                let raw = self.gateway.complete(api_key, &messages).await?;
                let outcome = parser::parse_analysis(&raw);

                tracing::info!(
                    degraded = outcome.is_degraded(),
                    reply_length = raw.len(),
                    "Analysis completed"
                );
                Ok(DetectionOutput::Analyzed(outcome))
            }
            other => {
                tracing::debug!(mode = %other, "Rejected request with invalid mode");
                Err(DetectionError::InvalidMode(other.to_string()))
            }
        }
    }
}
