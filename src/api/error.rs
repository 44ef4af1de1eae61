//! Unified API error handling
//!
//! This module provides a consistent error response format across all API
//! endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

use crate::service::{DetectionError, GatewayError};

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent
/// error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid service configuration (500)
    #[error("{0}")]
    Configuration(String),

    /// Upstream rate limit (429)
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream quota exhausted (402)
    #[error("Usage limit reached. Please add credits.")]
    QuotaExceeded,

    /// Any other upstream failure; the original status is preserved and
    /// the message kept generic
    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    /// Transport failure reaching the gateway (502)
    #[error("AI gateway is unreachable")]
    GatewayUnreachable,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            ApiError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::GatewayUnreachable => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        tracing::error!(
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => ApiError::RateLimited,
            GatewayError::QuotaExceeded => ApiError::QuotaExceeded,
            GatewayError::Upstream { status } => ApiError::Upstream { status },
            GatewayError::Http(e) => {
                tracing::error!(error = %e, "Transport failure calling AI gateway");
                ApiError::GatewayUnreachable
            }
        }
    }
}

impl From<DetectionError> for ApiError {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::InvalidMode(_)
            | DetectionError::EmptyPrompt
            | DetectionError::MissingAnalysisTarget => ApiError::BadRequest(err.to_string()),
            DetectionError::MissingCredential => ApiError::Configuration(err.to_string()),
            DetectionError::Gateway(e) => e.into(),
        }
    }
}
