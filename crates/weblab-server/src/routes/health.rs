//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use weblab_core::TelemetryEvent;

use crate::app_state::AppState;
use crate::routes::now_iso;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Wall-clock seconds since process start.
    pub uptime: f64,
    pub version: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    state
        .telemetry()
        .emit_event(TelemetryEvent::new("page_view").with_property("page", "health"));

    Json(HealthResponse {
        status: "OK",
        timestamp: now_iso(),
        uptime: state.uptime_secs(),
        version: state.cfg().version.clone(),
    })
}
