//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{DetectionService, GatewayClient};

/// Application state containing all services
pub struct AppState {
    /// Detection pipeline orchestration service
    pub detection_service: Arc<DetectionService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// A missing gateway credential does not fail startup; the detection
    /// service surfaces it as a configuration error on each request.
    pub fn new(config: Config) -> Self {
        if config.gateway.api_key.is_none() {
            tracing::warn!(
                "AI_GATEWAY_API_KEY is not set, detection requests will fail until it is configured"
            );
        }

        let gateway = GatewayClient::new(&config.gateway.base_url, &config.gateway.model);
        let detection_service = Arc::new(DetectionService::new(
            Arc::new(gateway),
            config.gateway.api_key,
        ));

        Self { detection_service }
    }
}
