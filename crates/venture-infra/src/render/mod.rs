//! Chart and diagram artifact rendering.
//!
//! Pure data-to-artifact transforms: the metric book becomes a
//! multi-panel SVG line chart and the team directory becomes a
//! relationship diagram. Rendering only runs after a successful
//! simulation, so a failed run produces no artifacts.

pub mod metrics;
pub mod relationships;

use std::path::{Path, PathBuf};

use venture_types::agent::Relation;
use venture_types::error::RenderError;
use venture_types::sim::MetricBook;

/// File name of the metrics chart artifact.
pub const METRICS_CHART_FILE: &str = "startup_metrics.svg";

/// File name of the relationship diagram artifact.
pub const RELATIONSHIP_CHART_FILE: &str = "agent_relationships.svg";

/// Paths of the two rendered artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub metrics_chart: PathBuf,
    pub relationship_chart: PathBuf,
}

/// Render both artifacts into `output_dir`, creating it if needed.
pub fn render_artifacts(
    metrics: &MetricBook,
    relations: &[Relation],
    output_dir: &Path,
) -> Result<ArtifactPaths, RenderError> {
    std::fs::create_dir_all(output_dir)?;

    let metrics_chart = output_dir.join(METRICS_CHART_FILE);
    metrics::render_metrics(metrics, &metrics_chart)?;

    let relationship_chart = output_dir.join(RELATIONSHIP_CHART_FILE);
    relationships::render_relationships(relations, &relationship_chart)?;

    Ok(ArtifactPaths {
        metrics_chart,
        relationship_chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use venture_types::agent::team_directory;

    #[test]
    fn test_render_artifacts_writes_both_files() {
        let tmp = TempDir::new().unwrap();
        let mut book = MetricBook::new();
        book.record("User Signups", "Day 5", 0.0);
        book.record("User Signups", "Day 15", 5.0);

        let paths = render_artifacts(&book, &team_directory(), tmp.path()).unwrap();
        assert!(paths.metrics_chart.exists());
        assert!(paths.relationship_chart.exists());
        assert_eq!(
            paths.metrics_chart.file_name().unwrap(),
            METRICS_CHART_FILE
        );
    }
}
