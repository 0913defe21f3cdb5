//! AnthropicProvider -- concrete [`LlmProvider`] implementation for
//! Anthropic Claude.
//!
//! Sends requests to the Anthropic Messages API (`/v1/messages`) with
//! proper authentication headers. Non-streaming only: the simulator is
//! strictly sequential and every call blocks until the full response or
//! an error arrives.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use venture_core::llm::provider::LlmProvider;
use venture_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use super::types::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};

/// Anthropic Claude LLM provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing HTTP request headers. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    capabilities: ProviderCapabilities,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "claude-sonnet-4-20250514")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        let capabilities = Self::capabilities_for_model(&model);

        Self {
            client,
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
            model,
            capabilities,
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Determine capabilities based on model name.
    fn capabilities_for_model(model: &str) -> ProviderCapabilities {
        if model.contains("opus") {
            ProviderCapabilities {
                max_context_tokens: 200_000,
                max_output_tokens: 32_000,
            }
        } else if model.contains("sonnet") || model.contains("haiku") {
            ProviderCapabilities {
                max_context_tokens: 200_000,
                max_output_tokens: 8_192,
            }
        } else {
            // Conservative defaults for unknown models
            ProviderCapabilities {
                max_context_tokens: 200_000,
                max_output_tokens: 4_096,
            }
        }
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`AnthropicRequest`].
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            messages,
            system: request.system.clone(),
            temperature: request.temperature,
            stop_sequences: request.stop_sequences.clone(),
        }
    }

    /// Map an unsuccessful HTTP status onto the error taxonomy.
    fn error_for_status(status: StatusCode, body: String) -> LlmError {
        match status.as_u16() {
            400 => LlmError::InvalidRequest(body),
            401 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            529 => LlmError::Overloaded(body),
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {body}"),
            },
        }
    }
}

/// Map the wire-format stop reason; absent or unrecognized values
/// count as a normal end of turn.
fn stop_reason_from_wire(raw: Option<&str>) -> StopReason {
    raw.and_then(|s| s.parse().ok())
        .unwrap_or(StopReason::EndTurn)
}

// AnthropicProvider intentionally does NOT derive Debug to prevent
// accidental exposure of internal state.

impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_anthropic_request(request);
        let url = self.url("/v1/messages");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, error_body));
        }

        let anthropic_resp: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        // Concatenate the text content blocks
        let content = anthropic_resp
            .content
            .iter()
            .map(|block| match block {
                AnthropicContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("");

        let stop_reason = stop_reason_from_wire(anthropic_resp.stop_reason.as_deref());

        Ok(CompletionResponse {
            id: anthropic_resp.id,
            content,
            model: anthropic_resp.model,
            stop_reason,
            usage: Usage {
                input_tokens: anthropic_resp.usage.input_tokens,
                output_tokens: anthropic_resp.usage.output_tokens,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venture_types::llm::Message;

    fn make_provider() -> AnthropicProvider {
        AnthropicProvider::new(
            SecretString::from("test-key-not-real"),
            "claude-sonnet-4-20250514".to_string(),
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "anthropic");
    }

    #[test]
    fn test_sonnet_capabilities() {
        let provider = make_provider();
        assert_eq!(provider.capabilities().max_output_tokens, 8_192);
        assert_eq!(provider.capabilities().max_context_tokens, 200_000);
    }

    #[test]
    fn test_unknown_model_gets_conservative_capabilities() {
        let provider = AnthropicProvider::new(
            SecretString::from("test-key-not-real"),
            "mystery-model".to_string(),
        );
        assert_eq!(provider.capabilities().max_output_tokens, 4_096);
    }

    #[test]
    fn test_with_base_url_overrides_default() {
        let provider = make_provider().with_base_url("http://localhost:9999".to_string());
        assert_eq!(provider.url("/v1/messages"), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn test_request_conversion_preserves_fields() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            messages: vec![Message::user("hi")],
            system: Some("stay brief".to_string()),
            max_tokens: 42,
            temperature: Some(0.3),
            stop_sequences: None,
        };
        let wire = provider.to_anthropic_request(&request);
        assert_eq!(wire.max_tokens, 42);
        assert_eq!(wire.system.as_deref(), Some("stay brief"));
        assert_eq!(wire.messages[0].role, "user");
    }

    #[test]
    fn test_stop_reason_wire_mapping() {
        assert_eq!(
            stop_reason_from_wire(Some("max_tokens")),
            StopReason::MaxTokens
        );
        assert_eq!(
            stop_reason_from_wire(Some("stop_sequence")),
            StopReason::StopSequence
        );
        assert_eq!(stop_reason_from_wire(Some("refusal")), StopReason::EndTurn);
        assert_eq!(stop_reason_from_wire(None), StopReason::EndTurn);
    }

    #[test]
    fn test_error_status_mapping() {
        assert!(matches!(
            AnthropicProvider::error_for_status(StatusCode::UNAUTHORIZED, String::new()),
            LlmError::AuthenticationFailed
        ));
        assert!(matches!(
            AnthropicProvider::error_for_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            LlmError::RateLimited { .. }
        ));
        assert!(matches!(
            AnthropicProvider::error_for_status(
                StatusCode::from_u16(529).unwrap(),
                "overloaded".to_string()
            ),
            LlmError::Overloaded(_)
        ));
        assert!(matches!(
            AnthropicProvider::error_for_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            LlmError::Provider { .. }
        ));
    }
}
