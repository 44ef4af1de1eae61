pub mod detection;
pub mod gateway;

pub use detection::{DetectionError, DetectionOutput, DetectionRequest, DetectionService};
pub use gateway::{ChatMessage, CompletionGateway, GatewayClient, GatewayError};
