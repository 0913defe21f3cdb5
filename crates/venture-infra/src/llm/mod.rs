//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](venture_core::llm::LlmProvider)
//! implementation for the Anthropic Messages API, plus a small factory
//! that wires the resolved credential into a type-erased provider.

pub mod anthropic;

use venture_core::llm::BoxLlmProvider;
use venture_types::config::GlobalConfig;
use venture_types::error::ConfigError;

use self::anthropic::AnthropicProvider;
use crate::credentials::resolve_api_key;

/// Build the single shared provider handle from config and environment.
///
/// Fails with a [`ConfigError`] before any network call when the
/// credential is absent.
pub fn build_provider(config: &GlobalConfig) -> Result<BoxLlmProvider, ConfigError> {
    let api_key = resolve_api_key()?;
    let provider = AnthropicProvider::new(api_key, config.model.clone());
    Ok(BoxLlmProvider::new(provider))
}
