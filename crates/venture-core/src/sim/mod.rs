//! Milestone-driven simulation driver.
//!
//! Iterates the fixed four-milestone schedule, dispatching on the closed
//! [`MilestoneKind`] enum. Handlers invoke scripted agent operations
//! (some of which run the dialogue protocol) and append hand-authored
//! literal metric values; the simulation does not derive metrics from
//! agent output. Narration is emitted as structured [`SimEvent`]s rather
//! than printed inline, so the driver is testable without capturing
//! output streams.

mod milestones;

use std::sync::Arc;

use tracing::info;

use venture_types::agent::AgentRole;
use venture_types::config::GlobalConfig;
use venture_types::error::SimError;
use venture_types::llm::LlmError;
use venture_types::sim::{MetricBook, Milestone, MilestoneKind, SimEvent, milestone_schedule};

use crate::agent::Agent;
use crate::dialogue::run_dialogue;

/// Result of a completed simulation run.
///
/// Artifacts are rendered from this by the caller; a failed run never
/// reaches rendering, so no artifacts are produced on failure.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub product: String,
    pub metrics: MetricBook,
    pub events: Vec<SimEvent>,
}

/// The scripted startup simulation.
///
/// Owns the three agents; all of them share one injected provider
/// handle. Single-threaded and fully sequential: every completion call
/// is awaited before the next is issued.
pub struct Simulation {
    ceo: Agent,
    developer: Agent,
    marketer: Agent,
    product: String,
    dialogue_turns: usize,
    metrics: MetricBook,
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Wire up the three personas around a shared provider.
    pub fn new(
        provider: Arc<crate::llm::BoxLlmProvider>,
        config: &GlobalConfig,
        product: impl Into<String>,
    ) -> Self {
        let agent = |role| {
            Agent::new(
                role,
                Arc::clone(&provider),
                config.model.clone(),
                config.max_tokens,
            )
        };
        Self {
            ceo: agent(AgentRole::Ceo),
            developer: agent(AgentRole::Developer),
            marketer: agent(AgentRole::Marketer),
            product: product.into(),
            dialogue_turns: config.dialogue_turns,
            metrics: MetricBook::new(),
            events: Vec::new(),
        }
    }

    /// Run the full scripted simulation.
    ///
    /// Any agent-call failure aborts the run; no partial results survive.
    pub async fn run(mut self) -> Result<SimOutcome, SimError> {
        for milestone in milestone_schedule() {
            info!(period = %milestone.period, task = %milestone.description, "milestone");
            self.emit(SimEvent::MilestoneStarted {
                period: milestone.period.clone(),
                description: milestone.description.clone(),
            });
            self.run_milestone(&milestone).await?;
        }

        Ok(SimOutcome {
            product: self.product,
            metrics: self.metrics,
            events: self.events,
        })
    }

    async fn run_milestone(&mut self, milestone: &Milestone) -> Result<(), SimError> {
        let day = milestone.day_label();
        match milestone.kind {
            MilestoneKind::MarketResearch => self.market_research(&day).await?,
            MilestoneKind::MvpDevelopment => self.mvp_development(&day).await?,
            MilestoneKind::UserTesting => self.user_testing(&day).await?,
            MilestoneKind::Launch => self.launch(&day).await?,
        }
        Ok(())
    }

    fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    fn narrate(&mut self, text: impl Into<String>) {
        self.emit(SimEvent::Narration { text: text.into() });
    }

    fn report(&mut self, role: AgentRole, label: impl Into<String>, text: impl Into<String>) {
        self.emit(SimEvent::AgentReport {
            speaker: role.name().to_string(),
            label: label.into(),
            text: text.into(),
        });
    }

    fn record(&mut self, series: &str, day: &str, value: f64) {
        self.metrics.record(series, day, value);
        self.emit(SimEvent::MetricRecorded {
            series: series.to_string(),
            label: day.to_string(),
            value,
        });
    }

    /// Run a dialogue between two of the team's agents and fold its
    /// transcript into the event stream.
    async fn team_dialogue(
        initiator: &mut Agent,
        responder: &mut Agent,
        events: &mut Vec<SimEvent>,
        topic: &str,
        turns: usize,
    ) -> Result<(), LlmError> {
        events.push(SimEvent::DialogueStarted {
            initiator: initiator.name().to_string(),
            responder: responder.name().to_string(),
            topic: topic.to_string(),
        });
        let transcript = run_dialogue(initiator, responder, topic, turns).await?;
        for turn in transcript {
            events.push(SimEvent::DialogueLine {
                speaker: turn.speaker,
                message: turn.message,
            });
        }
        Ok(())
    }
}
