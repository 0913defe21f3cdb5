//! HTTP request handlers for the simulator's web form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use base64::Engine;
use serde::Deserialize;

use crate::http::error::{escape_html, AppError};
use crate::state::AppState;

/// Form body for `POST /simulate`.
#[derive(Debug, Deserialize)]
pub struct SimulateForm {
    pub product: String,
}

/// GET / - Product idea entry form.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// POST /simulate - Run the full simulation and render the results page.
///
/// The generated SVG charts are read back from disk and embedded as
/// base64 data URIs so the page is self-contained.
pub async fn simulate(
    State(state): State<AppState>,
    Form(form): Form<SimulateForm>,
) -> Result<Html<String>, AppError> {
    let product = form.product.trim();
    if product.is_empty() {
        return Err(AppError::Validation(
            "product description must not be empty".to_string(),
        ));
    }

    let (_outcome, paths) = state.run_simulation(product).await?;

    let metrics_svg = tokio::fs::read(&paths.metrics_chart)
        .await
        .map_err(|e| AppError::Internal(format!("read metrics chart: {e}")))?;
    let graph_svg = tokio::fs::read(&paths.relationship_chart)
        .await
        .map_err(|e| AppError::Internal(format!("read relationship chart: {e}")))?;

    let engine = base64::engine::general_purpose::STANDARD;
    let page = results_page(
        product,
        &engine.encode(metrics_svg),
        &engine.encode(graph_svg),
    );
    Ok(Html(page))
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>AI Startup Simulator</title>
<style>
body { font-family: sans-serif; max-width: 640px; margin: 40px auto; }
input[type=text] { width: 100%; padding: 8px; }
button { margin-top: 12px; padding: 8px 16px; }
</style>
</head>
<body>
<h1>AI Startup Simulator</h1>
<p>Describe a product idea and a simulated founding team will take it
from market research to launch over a 30-day script.</p>
<form action="/simulate" method="post">
<input type="text" name="product" placeholder="e.g. a meal-planning app for busy parents" required>
<button type="submit">Run simulation</button>
</form>
</body>
</html>
"#;

fn results_page(product: &str, metrics_b64: &str, graph_b64: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>AI Startup Simulator - Results</title>
<style>
body {{ font-family: sans-serif; max-width: 1024px; margin: 40px auto; }}
img {{ max-width: 100%; border: 1px solid #ddd; }}
</style>
</head>
<body>
<h1>Simulation results: {product}</h1>
<h2>Startup Metrics</h2>
<img src="data:image/svg+xml;base64,{metrics_b64}" alt="Startup metrics over time">
<h2>Team Dynamics</h2>
<img src="data:image/svg+xml;base64,{graph_b64}" alt="Agent relationship graph">
<p><a href="/">Run another simulation</a></p>
</body>
</html>
"#,
        product = escape_html(product),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_page_escapes_product() {
        let page = results_page("<script>x</script>", "AAAA", "BBBB");
        assert!(!page.contains("<script>x"));
        assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(page.contains("data:image/svg+xml;base64,AAAA"));
    }

    #[test]
    fn test_home_page_posts_to_simulate() {
        assert!(HOME_PAGE.contains(r#"action="/simulate" method="post""#));
        assert!(HOME_PAGE.contains(r#"name="product""#));
    }
}
