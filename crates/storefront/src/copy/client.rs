//! HTTP client for the Anthropic Messages API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use axis_core::GeneratedCopy;

use crate::config::CopyConfig;

use super::error::{ApiErrorResponse, CopyError};
use super::types::{ChatRequest, ChatResponse, Message};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Client for generating marketing copy through the Messages API.
#[derive(Clone)]
pub struct CopyClient {
    inner: Arc<CopyClientInner>,
}

struct CopyClientInner {
    client: reqwest::Client,
    model: String,
}

impl CopyClient {
    /// Create a new copy client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters. Config
    /// validation rejects such keys before this runs.
    #[must_use]
    pub fn new(config: &CopyConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(CopyClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Send a prompt and parse the reply as a headline/body pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, returns an error response,
    /// or replies with something that is not the expected JSON shape.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedCopy, CopyError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message::user(prompt)],
        };

        let response = self
            .inner
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        let chat = self.handle_response(response).await?;
        tracing::debug!(response_id = %chat.id, model = %chat.model, "Copy response received");

        let text = chat
            .first_text()
            .ok_or_else(|| CopyError::Parse("response contained no text".to_string()))?;

        serde_json::from_str(strip_code_fence(text))
            .map_err(|e| CopyError::Parse(format!("Failed to parse copy JSON: {e}")))
    }

    /// Handle a successful response.
    async fn handle_response(&self, response: reqwest::Response) -> Result<ChatResponse, CopyError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| CopyError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> CopyError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return CopyError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return CopyError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse API error response
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    CopyError::Api {
                        error_type: api_error.error.error_type,
                        message: api_error.error.message,
                    }
                } else {
                    CopyError::Api {
                        error_type: "unknown".to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => CopyError::Http(e),
        }
    }
}

/// Strip a Markdown code fence if the model wrapped its JSON in one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_bare_json() {
        let text = r#"{"headline":"X","body":"Y"}"#;
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn test_strip_code_fence_fenced() {
        let text = "```json\n{\"headline\":\"X\"}\n```";
        assert_eq!(strip_code_fence(text), "{\"headline\":\"X\"}");
    }

    #[test]
    fn test_strip_code_fence_unlabeled() {
        let text = "```\n{\"headline\":\"X\"}\n```";
        assert_eq!(strip_code_fence(text), "{\"headline\":\"X\"}");
    }

    #[test]
    fn test_strip_code_fence_whitespace() {
        let text = "  {\"headline\":\"X\"}  ";
        assert_eq!(strip_code_fence(text), "{\"headline\":\"X\"}");
    }

    #[test]
    fn test_copy_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<CopyClient>();
    }

    #[test]
    fn test_copy_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CopyClient>();
    }
}
