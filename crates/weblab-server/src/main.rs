//! weblab demo server
//!
//! Minimal HTTP server used to validate the deployment pipeline:
//! - GET /          : HTML status page + visit counter
//! - GET /health    : liveness JSON
//! - GET /api/info  : deployment/runtime info JSON
//! - GET /load-test : synchronous CPU probe
//!
//! Telemetry is optional; a missing or broken collector configuration
//! downgrades to a no-op sink and never blocks startup.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use weblab_core::{NoopTelemetry, TelemetrySink};
use weblab_server::{app_state, config, router, telemetry};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env().expect("config load failed");

    let sink: Arc<dyn TelemetrySink> = match telemetry::connect(cfg.telemetry_connection.as_deref()) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::warn!(error = %e, "telemetry init failed, continuing with no-op sink");
            Arc::new(NoopTelemetry)
        }
    };

    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let state = app_state::AppState::new(cfg, sink);
    let app = router::build_router(state);

    // Bind failure (port in use, privilege) is fatal by design: no retry.
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");
    let bound = listener.local_addr().expect("no local addr");
    tracing::info!(port = bound.port(), "weblab-server listening");

    axum::serve(listener, app).await.expect("server failed");
}
