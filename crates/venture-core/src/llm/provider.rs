//! LlmProvider trait definition.
//!
//! This is the single external collaborator of the simulator: one
//! blocking-per-call completion operation. The core depends only on this
//! signature, never on a particular provider's wire format.

use venture_types::llm::{CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities};

/// Trait for completion-service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in venture-infra (e.g., `AnthropicProvider`).
///
/// Calls are issued strictly sequentially by the simulator; no two
/// completions are ever in flight at once, and implementations need no
/// retry or rate-limit logic.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// What this provider supports (context and output limits).
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
