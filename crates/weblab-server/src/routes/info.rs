//! Deployment/runtime info endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use weblab_core::TelemetryEvent;

use crate::app_state::AppState;

/// Runtime identifier baked in at compile time (from the crate's
/// `rust-version` field).
const RUNTIME_VERSION: &str = concat!("rust ", env!("CARGO_PKG_RUST_VERSION"));

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: String,
    pub platform: &'static str,
    pub runtime_version: &'static str,
    pub environment: String,
    pub custom_message: String,
    pub azure_region: String,
    pub instance_id: String,
}

impl InfoResponse {
    fn from_state(state: &AppState) -> Self {
        let cfg = state.cfg();
        Self {
            app: "webapp-lab",
            version: cfg.version.clone(),
            platform: std::env::consts::OS,
            runtime_version: RUNTIME_VERSION,
            environment: cfg.environment.clone(),
            custom_message: cfg.custom_message.clone(),
            azure_region: cfg.region.clone(),
            instance_id: cfg.instance_id.clone(),
        }
    }
}

pub async fn api_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let resp = InfoResponse::from_state(&state);

    let telemetry = state.telemetry();
    telemetry.emit_event(TelemetryEvent::new("page_view").with_property("page", "api/info"));
    // Second event carries the full payload; a payload that fails to
    // serialize degrades to an empty property set rather than an error.
    let payload = serde_json::to_value(&resp).unwrap_or_default();
    telemetry.emit_event(TelemetryEvent::new("api_info").with_payload("payload", payload));

    Json(resp)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn info_serializes_camel_case_fields() {
        let resp = InfoResponse {
            app: "webapp-lab",
            version: "2.0".into(),
            platform: std::env::consts::OS,
            runtime_version: RUNTIME_VERSION,
            environment: "development".into(),
            custom_message: "No custom message".into(),
            azure_region: "unknown".into(),
            instance_id: "local-dev".into(),
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["app"], "webapp-lab");
        assert!(v.get("runtimeVersion").is_some());
        assert!(v.get("customMessage").is_some());
        assert!(v.get("azureRegion").is_some());
        assert!(v.get("instanceId").is_some());
        assert!(v.get("custom_message").is_none());
    }
}
