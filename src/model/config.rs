use std::env;

const ENV_GATEWAY_BASE_URL: &str = "AI_GATEWAY_BASE_URL";
const ENV_GATEWAY_API_KEY: &str = "AI_GATEWAY_API_KEY";
const ENV_DETECTION_MODEL: &str = "DETECTION_MODEL";

const DEFAULT_GATEWAY_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Upstream gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the chat-completion provider
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
    /// Bearer credential; absence is surfaced per request, not at startup
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let base_url = env::var(ENV_GATEWAY_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string());

        let model = env::var(ENV_DETECTION_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_key = env::var(ENV_GATEWAY_API_KEY).ok().filter(|k| !k.is_empty());

        Self {
            gateway: GatewayConfig {
                base_url,
                model,
                api_key,
            },
            port,
            host,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
