//! `venture simulate` -- run the scripted startup and narrate it.

use console::style;

use venture_types::sim::SimEvent;

use crate::state::AppState;

/// Run the simulation and print milestone narration to stdout.
pub async fn simulate(
    state: &AppState,
    product: &str,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let (outcome, paths) = state.run_simulation(product).await?;

    if json {
        let report = serde_json::json!({
            "product": outcome.product,
            "metrics": outcome.metrics,
            "events": outcome.events,
            "artifacts": {
                "metrics_chart": paths.metrics_chart,
                "relationship_chart": paths.relationship_chart,
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !quiet {
        for event in &outcome.events {
            print_event(event);
        }
        println!();
        println!(
            "📊 Simulation metrics saved to {}",
            style(paths.metrics_chart.display()).cyan()
        );
        println!(
            "👥 Team dynamics graph saved to {}",
            style(paths.relationship_chart.display()).cyan()
        );
    }

    Ok(())
}

fn print_event(event: &SimEvent) {
    match event {
        SimEvent::MilestoneStarted {
            period,
            description,
        } => {
            println!();
            println!(
                "{}",
                style(format!("=== {period}: {description} ===")).bold()
            );
        }
        SimEvent::Narration { text } => {
            println!("  {text}");
        }
        SimEvent::AgentReport { label, text, .. } => {
            println!("  {} {}", style(format!("{label}:")).green(), text);
        }
        SimEvent::DialogueLine { speaker, message } => {
            println!(
                "    {} {}",
                style(format!("{speaker}:")).yellow(),
                excerpt(message, 100)
            );
        }
        // Scripted constants; shown only via --json.
        SimEvent::DialogueStarted { .. } | SimEvent::MetricRecorded { .. } => {}
    }
}

/// First `limit` characters with an ellipsis, safe on char boundaries.
fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("hello", 100), "hello");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let text = "é".repeat(150);
        let cut = excerpt(&text, 100);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 103);
    }
}
