//! Application state wiring the simulator together.
//!
//! AppState holds the shared provider handle and configuration used by
//! both the CLI and the web server. Construction fails before any
//! network call when the API credential is absent.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use venture_core::llm::BoxLlmProvider;
use venture_core::sim::{SimOutcome, Simulation};
use venture_infra::render::{ArtifactPaths, render_artifacts};
use venture_types::agent::team_directory;
use venture_types::config::GlobalConfig;

/// Shared application state for CLI commands and web handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<BoxLlmProvider>,
    pub config: GlobalConfig,
    pub output_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, resolve the
    /// credential, build the provider.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = venture_infra::config::resolve_data_dir();
        let config = venture_infra::config::load_global_config(&data_dir).await;

        let provider = venture_infra::llm::build_provider(&config)
            .context("failed to construct completion provider")?;

        let output_dir = PathBuf::from(&config.output_dir);
        tracing::info!(
            provider = provider.name(),
            model = %config.model,
            "application state initialized"
        );

        Ok(Self {
            provider: Arc::new(provider),
            config,
            output_dir,
        })
    }

    /// Run the full simulation and render both artifacts.
    ///
    /// Rendering happens only after the run succeeds; a failed run
    /// produces no artifacts.
    pub async fn run_simulation(
        &self,
        product: &str,
    ) -> anyhow::Result<(SimOutcome, ArtifactPaths)> {
        let simulation = Simulation::new(Arc::clone(&self.provider), &self.config, product);
        let outcome = simulation.run().await.context("simulation run failed")?;

        // Plotters drawing and the dot subprocess are blocking; keep
        // them off the async workers.
        let metrics = outcome.metrics.clone();
        let output_dir = self.output_dir.clone();
        let paths = tokio::task::spawn_blocking(move || {
            render_artifacts(&metrics, &team_directory(), &output_dir)
        })
        .await
        .context("artifact rendering task failed")?
        .context("artifact rendering failed")?;

        Ok((outcome, paths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use venture_core::llm::{BoxLlmProvider, LlmProvider};
    use venture_infra::render::{METRICS_CHART_FILE, RELATIONSHIP_CHART_FILE};
    use venture_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities,
    };

    struct OutageProvider {
        capabilities: ProviderCapabilities,
    }

    impl OutageProvider {
        fn boxed() -> BoxLlmProvider {
            BoxLlmProvider::new(Self {
                capabilities: ProviderCapabilities {
                    max_context_tokens: 200_000,
                    max_output_tokens: 8_192,
                },
            })
        }
    }

    impl LlmProvider for OutageProvider {
        fn name(&self) -> &str {
            "outage"
        }

        fn capabilities(&self) -> &ProviderCapabilities {
            &self.capabilities
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Provider {
                message: "simulated outage".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failed_run_renders_no_artifacts() {
        let tmp = TempDir::new().unwrap();
        let state = AppState {
            provider: Arc::new(OutageProvider::boxed()),
            config: GlobalConfig::default(),
            output_dir: tmp.path().to_path_buf(),
        };

        let err = state.run_simulation("doomed product").await.unwrap_err();
        assert!(err.to_string().contains("simulation run failed"));

        assert!(!tmp.path().join(METRICS_CHART_FILE).exists());
        assert!(!tmp.path().join(RELATIONSHIP_CHART_FILE).exists());
    }
}
