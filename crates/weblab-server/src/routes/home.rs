//! Home page: visit counting plus a small HTML status page.

use axum::extract::State;
use axum::response::Html;

use weblab_core::{TelemetryEvent, TelemetryMetric};

use crate::app_state::AppState;
use crate::routes::now_iso;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let visits = state.record_visit();

    state
        .telemetry()
        .emit_event(TelemetryEvent::new("page_view").with_property("page", "home"));
    state
        .telemetry()
        .emit_metric(TelemetryMetric::new("home_visits", visits as f64));

    Html(render_home(&state.cfg().version, &now_iso(), visits))
}

/// Render the home page from explicit inputs, no ambient state.
pub fn render_home(version: &str, timestamp: &str, visits: u64) -> String {
    format!(
        r#"<html>
  <head><title>Azure App Service Lab</title></head>
  <body style="font-family: Arial; text-align: center; padding: 50px; background: #f0f8ff;">
    <h1>&#x1F680; Azure App Service + GitHub Lab</h1>
    <p>Version: {version} - automatic update!</p>
    <p>Deployed automatically from GitHub!</p>
    <p>Timestamp: {timestamp}</p>
    <p>Visits: {visits}</p>
    <p style="color: green;">&#x2705; CI/CD pipeline is working!</p>
    <hr>
    <h2>Available endpoints:</h2>
    <ul style="list-style: none;">
      <li><a href="/health">&#x1F4CA; /health</a></li>
      <li><a href="/api/info">&#x2139;&#xFE0F; /api/info</a></li>
      <li><a href="/load-test">&#x1F525; /load-test</a></li>
    </ul>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_shows_version_timestamp_and_visits() {
        let page = render_home("3.1", "2026-08-25T12:00:00.000Z", 7);
        assert!(page.contains("Version: 3.1"));
        assert!(page.contains("Timestamp: 2026-08-25T12:00:00.000Z"));
        assert!(page.contains("Visits: 7"));
        assert!(page.contains(r#"<a href="/health">"#));
        assert!(page.contains(r#"<a href="/api/info">"#));
        assert!(page.contains(r#"<a href="/load-test">"#));
    }
}
