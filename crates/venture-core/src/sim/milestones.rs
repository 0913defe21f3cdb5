//! Scripted milestone handlers.
//!
//! Each handler runs a fixed sequence of agent operations and appends
//! hand-authored literal metric values for its period. The constants are
//! scripted by design and intentionally unrelated to agent output.

use venture_types::agent::AgentRole;
use venture_types::error::SimError;

use super::Simulation;

const USER_SIGNUPS: &str = "User Signups";
const CONVERSION_RATE: &str = "Conversion Rate";
const DEV_VELOCITY: &str = "Development Velocity";
const SATISFACTION: &str = "Customer Satisfaction";

impl Simulation {
    /// Day 1-5: market analysis, tech evaluation, CEO strategy, and the
    /// CEO/Developer dialogue on technical approach.
    pub(super) async fn market_research(&mut self, day: &str) -> Result<(), SimError> {
        self.narrate("🔍 Conducting market research...");

        let task = format!("Estimate market size for {}", self.product);
        let market_size = self.marketer.think(&task).await?;
        self.report(AgentRole::Marketer, "Market size", market_size.clone());

        let task = format!("Identify main competitors for {}", self.product);
        let competitors = self.marketer.think(&task).await?;
        self.report(AgentRole::Marketer, "Competitors", competitors);

        let task = format!("Suggest positioning for {}", self.product);
        let positioning = self.marketer.think(&task).await?;
        self.report(AgentRole::Marketer, "Positioning", positioning);

        self.narrate("💻 Evaluating technology options...");
        let task = format!(
            "Evaluate tech stack for requirements: product: {}, market size: {}, \
             time constraint: 4 weeks",
            self.product, market_size
        );
        let tech_stack = self.developer.think(&task).await?;
        self.report(AgentRole::Developer, "Recommended tech stack", tech_stack);

        self.narrate("🧠 CEO making strategic decisions...");
        let strategy = self
            .strategic_decision(
                "Development approach",
                &[
                    "Focus on quick MVP",
                    "Build robust architecture",
                    "Outsource development",
                ],
            )
            .await?;
        self.report(AgentRole::Ceo, "Strategic plan", strategy);

        self.narrate("🗣️ CEO and Developer discussing tech approach...");
        let topic = format!("technical approach for {}", self.product);
        Self::team_dialogue(
            &mut self.ceo,
            &mut self.developer,
            &mut self.events,
            &topic,
            self.dialogue_turns,
        )
        .await?;

        self.record(USER_SIGNUPS, day, 0.0);
        self.record(CONVERSION_RATE, day, 0.0);
        self.record(DEV_VELOCITY, day, 7.0);
        self.record(SATISFACTION, day, 0.0);
        Ok(())
    }

    /// Day 6-15: per-feature effort estimates and the scripted build log.
    pub(super) async fn mvp_development(&mut self, day: &str) -> Result<(), SimError> {
        self.narrate("📋 Planning MVP features...");
        let features = [
            format!("Core {} functionality", self.product),
            "User authentication".to_string(),
            "Basic analytics".to_string(),
            "Payment processing".to_string(),
        ];

        self.narrate("⏱️ Estimating development effort...");
        for feature in &features {
            let task = format!("Estimate time for {feature}");
            let time = self.developer.think(&task).await?;
            let task = format!("Evaluate complexity of {feature}");
            let complexity = self.developer.think(&task).await?;
            self.report(
                AgentRole::Developer,
                feature.clone(),
                format!("{time} (complexity: {complexity})"),
            );
        }

        self.narrate("🔨 Beginning development...");
        self.narrate("Day 7: Setting up development environment");
        self.narrate("Day 9: Basic application structure complete");
        self.narrate("Day 12: Key features implemented");
        self.narrate("Day 15: MVP ready for testing");

        self.record(USER_SIGNUPS, day, 5.0);
        self.record(DEV_VELOCITY, day, 9.0);
        Ok(())
    }

    /// Day 16-25: scripted feedback round, fixes, marketing prep, and the
    /// CEO/Marketer dialogue on launch strategy.
    pub(super) async fn user_testing(&mut self, day: &str) -> Result<(), SimError> {
        self.narrate("👥 Recruiting test users...");
        self.narrate("📝 Collecting user feedback...");

        let feedback = [
            "Interface is confusing",
            "Love the core functionality",
            "Missing important feature X",
            "Performance issues on mobile",
        ];
        for (i, item) in feedback.iter().enumerate() {
            self.narrate(format!("Feedback #{}: {item}", i + 1));
        }

        self.narrate("🛠️ Developer addressing critical issues...");
        for issue in &feedback[..2] {
            self.narrate(format!("Fixing: {issue}"));
        }

        self.narrate("📣 Marketer preparing launch campaign...");
        self.narrate("Creating landing page");
        self.narrate("Preparing email templates");
        self.narrate("Setting up analytics");

        self.narrate("🗣️ CEO and Marketer planning launch strategy...");
        let topic = format!("marketing strategy for {}", self.product);
        Self::team_dialogue(
            &mut self.ceo,
            &mut self.marketer,
            &mut self.events,
            &topic,
            self.dialogue_turns,
        )
        .await?;

        self.record(USER_SIGNUPS, day, 25.0);
        self.record(CONVERSION_RATE, day, 0.2);
        self.record(DEV_VELOCITY, day, 6.0);
        self.record(SATISFACTION, day, 0.7);
        Ok(())
    }

    /// Day 26-30: launch-day narration and the CEO's post-launch call.
    pub(super) async fn launch(&mut self, day: &str) -> Result<(), SimError> {
        self.narrate("🚀 Product launch day!");
        self.narrate("📊 Initial metrics:");
        self.narrate("150 website visitors");
        self.narrate("45 signups");
        self.narrate("12 paying customers");

        self.narrate("📈 Marketer analyzing conversion rates...");
        self.narrate("30% visitor-to-signup conversion");
        self.narrate("26.7% signup-to-customer conversion");

        self.narrate("👨\u{200d}💼 CEO evaluating launch success...");
        let decision = self
            .strategic_decision(
                "Post-launch strategy",
                &[
                    "Continue with current strategy",
                    "Pivot to different market",
                    "Seek additional funding",
                ],
            )
            .await?;
        self.report(AgentRole::Ceo, "Future direction", decision);

        self.record(USER_SIGNUPS, day, 45.0);
        self.record(CONVERSION_RATE, day, 0.27);
        self.record(DEV_VELOCITY, day, 5.0);
        self.record(SATISFACTION, day, 0.8);
        Ok(())
    }

    /// Ask the CEO for a decision on an issue given a closed option list.
    async fn strategic_decision(
        &mut self,
        issue: &str,
        options: &[&str],
    ) -> Result<String, SimError> {
        let task = format!(
            "Strategic decision needed on {issue}. Options: {}",
            options.join(", ")
        );
        Ok(self.ceo.think(&task).await?)
    }
}
