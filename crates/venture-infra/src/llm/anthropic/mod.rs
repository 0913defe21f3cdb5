//! Anthropic Claude LLM provider implementation.
//!
//! Provides [`AnthropicProvider`], which implements the
//! [`LlmProvider`](venture_core::llm::LlmProvider) trait against the
//! Anthropic Messages API.

pub mod client;
pub mod types;

pub use client::AnthropicProvider;
