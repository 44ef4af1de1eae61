//! Chat-completion gateway client
//!
//! Sends one-shot completion requests to the upstream provider and maps
//! transport/quota statuses to typed errors. Transport reliability is fully
//! delegated to the HTTP stack: no retries, no local timeout, no pooling
//! beyond reqwest's defaults.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Usage limit reached. Please add credits.")]
    QuotaExceeded,

    /// Any other non-success status; the raw body is logged, never exposed
    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One turn of the conversation sent to the gateway
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Seam over the upstream provider so the orchestrator can be tested
/// against a scripted fake
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one chat-completion call and return the first choice's content
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, GatewayError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the upstream chat-completion endpoint
pub struct GatewayClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GatewayClient {
    /// Create a new gateway client for the given base URL and model
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("hallucination-intel/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionGateway for GatewayClient {
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!(
            url = %url,
            model = %self.model,
            message_count = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited);
        }

        if status == StatusCode::PAYMENT_REQUIRED {
            return Err(GatewayError::QuotaExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "AI gateway returned an error"
            );
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
            });
        }

        let completion: CompletionResponse = response.json().await?;
        Ok(extract_content(completion))
    }
}

/// First choice's message content; a structurally absent content means
/// "no content produced", not an error
fn extract_content(completion: CompletionResponse) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default()
}

#[cfg(test)]
pub mod testing {
    //! Scripted gateway fake for orchestrator and handler tests

    use std::sync::Mutex;

    use super::{ChatMessage, CompletionGateway, GatewayError};
    use async_trait::async_trait;

    /// Fake gateway that replays pre-seeded results and records calls
    pub struct FakeGateway {
        replies: Mutex<Vec<Result<String, GatewayError>>>,
        calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl FakeGateway {
        pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_reply(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }

        pub fn with_error(error: GatewayError) -> Self {
            Self::new(vec![Err(error)])
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Messages sent on the nth call
        pub fn sent_messages(&self, call: usize) -> Vec<ChatMessage> {
            self.calls.lock().unwrap()[call].clone()
        }
    }

    #[async_trait]
    impl CompletionGateway for FakeGateway {
        async fn complete(
            &self,
            _api_key: &str,
            messages: &[ChatMessage],
        ) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.replies.lock().unwrap().remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content_from_first_choice() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"Bell invented the telephone."}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(completion), "Bell invented the telephone.");
    }

    #[test]
    fn test_extract_content_prefers_first_of_many() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(completion), "first");
    }

    #[test]
    fn test_absent_content_yields_empty_string() {
        for raw in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            let completion: CompletionResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(extract_content(completion), "", "raw: {raw}");
        }
    }

    #[test]
    fn test_chat_message_serializes_role_and_content() {
        let message = ChatMessage::system("be factual");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be factual");
    }

    #[tokio::test]
    #[ignore] // Requires network access and a configured credential
    async fn test_live_completion() {
        let api_key = std::env::var("AI_GATEWAY_API_KEY").expect("AI_GATEWAY_API_KEY not set");
        let client = GatewayClient::new(
            "https://ai.gateway.lovable.dev",
            "google/gemini-3-flash-preview",
        );
        let reply = client
            .complete(&api_key, &[ChatMessage::user("Say hello".to_string())])
            .await
            .unwrap();
        assert!(!reply.is_empty());
    }
}
