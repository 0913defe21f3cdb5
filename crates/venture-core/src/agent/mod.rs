//! Role-bound agents over a shared completion provider.
//!
//! An [`Agent`] wraps one persona around the injected provider handle.
//! Each call issues exactly one completion request and blocks until it
//! resolves; failures propagate to the caller with no retry or backoff.

pub mod prompt;

use std::sync::Arc;

use tracing::{Instrument, info_span};

use venture_types::agent::{AgentProfile, AgentRole, MemoryEntry};
use venture_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::BoxLlmProvider;

/// A named, role-bound wrapper around the completion capability.
///
/// Holds an append-only `{context, response}` memory log for inspection;
/// memory is never read back into subsequent prompts.
pub struct Agent {
    role: AgentRole,
    profile: AgentProfile,
    provider: Arc<BoxLlmProvider>,
    model: String,
    max_tokens: u32,
    memory: Vec<MemoryEntry>,
}

impl Agent {
    /// Create an agent for a role, injecting the shared provider handle.
    pub fn new(
        role: AgentRole,
        provider: Arc<BoxLlmProvider>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            role,
            profile: AgentProfile::from(role),
            provider,
            model: model.into(),
            max_tokens,
            memory: Vec::new(),
        }
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// The append-only memory log, in call order.
    pub fn memory(&self) -> &[MemoryEntry] {
        &self.memory
    }

    /// Process a task through the role's instruction template.
    ///
    /// This is the persona-flavored entry point used by milestone
    /// handlers: the task text is wrapped in the fixed role template
    /// before the shared [`respond`](Self::respond) mechanism runs.
    pub async fn think(&mut self, task: &str) -> Result<String, LlmError> {
        let prompt = prompt::role_prompt(self.role, task);
        self.respond(&prompt).await
    }

    /// Issue one completion call for an already-built prompt.
    ///
    /// Appends `{context, response}` to memory on success. Errors
    /// propagate uncaught; the enclosing milestone or dialogue aborts.
    pub async fn respond(&mut self, context: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::user(context)],
            system: None,
            max_tokens: self.max_tokens,
            temperature: None,
            stop_sequences: None,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            agent.role = %self.role,
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        self.memory.push(MemoryEntry {
            context: context.to_string(),
            response: response.content.clone(),
        });

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingProvider, ScriptedProvider};

    fn agent_with(provider: Arc<BoxLlmProvider>, role: AgentRole) -> Agent {
        Agent::new(role, provider, "test-model", 1000)
    }

    #[tokio::test]
    async fn test_respond_returns_provider_text_and_logs_memory() {
        let provider = Arc::new(ScriptedProvider::boxed());
        let mut agent = agent_with(provider, AgentRole::Marketer);

        let first = agent.respond("estimate market size").await.unwrap();
        let second = agent.respond("identify competitors").await.unwrap();

        assert_eq!(first, "R0");
        assert_eq!(second, "R1");
        assert_eq!(agent.memory().len(), 2);
        assert_eq!(agent.memory()[0].context, "estimate market size");
        assert_eq!(agent.memory()[1].response, "R1");
    }

    #[tokio::test]
    async fn test_think_wraps_task_in_role_template() {
        let provider = Arc::new(ScriptedProvider::boxed());
        let mut agent = agent_with(provider, AgentRole::Ceo);

        agent.think("Development approach").await.unwrap();

        let logged = &agent.memory()[0].context;
        assert!(logged.contains("You are the CEO"));
        assert!(logged.contains("Development approach"));
    }

    #[tokio::test]
    async fn test_respond_failure_propagates_and_skips_memory() {
        let provider = Arc::new(FailingProvider::boxed());
        let mut agent = agent_with(provider, AgentRole::Developer);

        let err = agent.respond("anything").await.unwrap_err();
        assert!(matches!(err, LlmError::Provider { .. }));
        assert!(agent.memory().is_empty());
    }
}
