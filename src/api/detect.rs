//! REST API endpoint for the detection pipeline

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::{Analysis, Claim, ClaimStatus, RiskLevel};
use crate::service::{DetectionOutput, DetectionRequest, DetectionService};

/// Request body for the detect endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectBody {
    /// The user prompt (generate) or the prompt the answer responded to (analyze)
    pub prompt: String,
    /// Either "generate" or "analyze"
    pub mode: String,
    /// The answer to assess; required for analyze mode
    #[serde(rename = "llmResponse")]
    pub llm_response: Option<String>,
}

/// Response body for the detect endpoint
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DetectResponse {
    /// Generate mode: the provider's completion, verbatim
    Generated { response: String },
    /// Analyze mode: a structured (possibly degraded) assessment
    Analyzed { analysis: Analysis },
}

/// Run the detection pipeline in the requested mode
#[utoipa::path(
    post,
    path = "/v1/detect",
    request_body = DetectBody,
    responses(
        (status = 200, description = "Generation or analysis completed", body = DetectResponse),
        (status = 400, description = "Invalid mode or missing fields"),
        (status = 402, description = "Usage limit reached"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Configuration or internal error")
    ),
    tag = "detect"
)]
#[post("/v1/detect")]
pub async fn detect(
    service: web::Data<DetectionService>,
    body: web::Json<DetectBody>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let output = service
        .handle(DetectionRequest {
            prompt: body.prompt,
            mode: body.mode,
            llm_response: body.llm_response,
        })
        .await?;

    let response = match output {
        DetectionOutput::Generated(text) => DetectResponse::Generated { response: text },
        DetectionOutput::Analyzed(outcome) => DetectResponse::Analyzed {
            analysis: outcome.into_analysis(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// OpenAPI documentation for the detection API
#[derive(OpenApi)]
#[openapi(
    paths(detect, crate::api::health::liveness, crate::api::health::readiness),
    components(schemas(DetectBody, DetectResponse, Analysis, Claim, ClaimStatus, RiskLevel)),
    tags(
        (name = "detect", description = "Hallucination detection pipeline"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Configure detect routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(detect);
}
