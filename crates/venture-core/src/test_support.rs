//! Shared mock providers for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use venture_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

use crate::llm::{BoxLlmProvider, LlmProvider};

fn test_capabilities() -> ProviderCapabilities {
    ProviderCapabilities {
        max_context_tokens: 200_000,
        max_output_tokens: 8_192,
    }
}

fn canned_response(content: String) -> CompletionResponse {
    CompletionResponse {
        id: "msg_test".to_string(),
        content,
        model: "test-model".to_string(),
        stop_reason: StopReason::EndTurn,
        usage: Usage::default(),
    }
}

/// Returns `"R{i}"` for the i-th call (0-based), counting calls.
pub(crate) struct ScriptedProvider {
    calls: Arc<AtomicUsize>,
    capabilities: ProviderCapabilities,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            capabilities: test_capabilities(),
        }
    }

    pub(crate) fn boxed() -> BoxLlmProvider {
        BoxLlmProvider::new(Self::new())
    }

    /// Shared call counter, for asserting call ordering across agents.
    pub(crate) fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(canned_response(format!("R{i}")))
    }
}

/// Fails every call, or succeeds `succeed_first` times then fails.
pub(crate) struct FailingProvider {
    calls: AtomicUsize,
    succeed_first: usize,
    capabilities: ProviderCapabilities,
}

impl FailingProvider {
    pub(crate) fn boxed() -> BoxLlmProvider {
        Self::boxed_after(0)
    }

    /// Succeed for `succeed_first` calls, then fail on every later call.
    pub(crate) fn boxed_after(succeed_first: usize) -> BoxLlmProvider {
        BoxLlmProvider::new(Self {
            calls: AtomicUsize::new(0),
            succeed_first,
            capabilities: test_capabilities(),
        })
    }
}

impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        if i < self.succeed_first {
            Ok(canned_response(format!("R{i}")))
        } else {
            Err(LlmError::Provider {
                message: "simulated outage".to_string(),
            })
        }
    }
}
