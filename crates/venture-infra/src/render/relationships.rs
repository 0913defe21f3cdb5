//! Team relationship diagram rendering.
//!
//! Primary path writes Graphviz DOT and pipes it through the `dot`
//! binary. When graphviz is unavailable the diagram degrades to a plain
//! text-summary image; this is the only recovered failure in the
//! simulator.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use plotters::prelude::*;
use tracing::warn;

use venture_types::agent::{AgentRole, Relation};
use venture_types::error::RenderError;

fn node_id(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Ceo => "ceo",
        AgentRole::Developer => "dev",
        AgentRole::Marketer => "mkt",
    }
}

/// Build the DOT source for the team org chart.
pub fn relationship_dot(relations: &[Relation]) -> String {
    let mut dot = String::from("digraph team {\n  rankdir=LR;\n");
    for role in AgentRole::all() {
        dot.push_str(&format!(
            "  {} [label=\"{}\\n{}\"];\n",
            node_id(role),
            role.name(),
            role.title()
        ));
    }
    for relation in relations {
        dot.push_str(&format!(
            "  {} -> {} [label=\"{}\"];\n",
            node_id(relation.from),
            node_id(relation.to),
            relation.kind
        ));
    }
    dot.push_str("}\n");
    dot
}

/// Render the relationship diagram to `output_path`.
///
/// Tries graphviz first; on any failure logs a warning and falls back
/// to the text-summary image.
pub fn render_relationships(relations: &[Relation], output_path: &Path) -> Result<(), RenderError> {
    let dot = relationship_dot(relations);
    match render_with_graphviz(&dot, output_path) {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!("graphviz rendering unavailable ({err}), falling back to text summary");
            render_text_summary(relations, output_path)
        }
    }
}

fn graphviz_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Graphviz(e.to_string())
}

fn render_with_graphviz(dot: &str, output_path: &Path) -> Result<(), RenderError> {
    let mut child = Command::new("dot")
        .arg("-Tsvg")
        .arg("-o")
        .arg(output_path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(graphviz_err)?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| RenderError::Graphviz("stdin unavailable".to_string()))?;
    stdin.write_all(dot.as_bytes()).map_err(graphviz_err)?;
    drop(stdin);

    let output = child.wait_with_output().map_err(graphviz_err)?;
    if !output.status.success() {
        return Err(RenderError::Graphviz(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    Ok(())
}

/// Fallback image: the org chart as styled text.
fn render_text_summary(relations: &[Relation], output_path: &Path) -> Result<(), RenderError> {
    let chart_err = |e: String| RenderError::Chart(e);

    let root = SVGBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(e.to_string()))?;

    root.draw(&Text::new(
        "Startup Team Dynamics".to_string(),
        (40, 40),
        ("sans-serif", 28),
    ))
    .map_err(|e| chart_err(e.to_string()))?;

    let mut y = 110;
    for role in AgentRole::all() {
        root.draw(&Text::new(
            format!("• {} ({})", role.name(), role.title()),
            (60, y),
            ("sans-serif", 18),
        ))
        .map_err(|e| chart_err(e.to_string()))?;
        y += 30;

        for relation in relations.iter().filter(|r| r.from == role) {
            root.draw(&Text::new(
                format!("→ {} {}", relation.kind, relation.to.name()),
                (90, y),
                ("sans-serif", 15),
            ))
            .map_err(|e| chart_err(e.to_string()))?;
            y += 26;
        }
        y += 12;
    }

    root.present().map_err(|e| chart_err(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use venture_types::agent::team_directory;

    #[test]
    fn test_dot_source_names_all_nodes_and_edges() {
        let dot = relationship_dot(&team_directory());
        assert!(dot.starts_with("digraph team {"));
        assert!(dot.contains("ceo [label=\"CEO\\nChief Executive Officer\"]"));
        assert!(dot.contains("ceo -> dev [label=\"directs\"]"));
        assert!(dot.contains("mkt -> ceo [label=\"reports to\"]"));
    }

    #[test]
    fn test_render_relationships_always_produces_a_file() {
        // Succeeds through graphviz when installed, through the text
        // fallback otherwise.
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("team.svg");
        render_relationships(&team_directory(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_text_summary_fallback_writes_svg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fallback.svg");
        render_text_summary(&team_directory(), &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Startup Team Dynamics"));
    }
}
