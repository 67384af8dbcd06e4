//! Shared application state for the weblab server.
//!
//! Cheap-to-clone handle over an `Arc` inner, handed to every route handler
//! through axum's `State` extractor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use weblab_core::TelemetrySink;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    started: Instant,
    // Home-page visit counter. Atomic so the multi-threaded runtime preserves
    // exactly one increment per request.
    visits: AtomicU64,
    telemetry: Arc<dyn TelemetrySink>,
}

impl AppState {
    pub fn new(cfg: ServerConfig, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started: Instant::now(),
                visits: AtomicU64::new(0),
                telemetry,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    /// Increment the visit counter and return the new total.
    pub fn record_visit(&self) -> u64 {
        self.inner.visits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current visit total without incrementing.
    pub fn visits(&self) -> u64 {
        self.inner.visits.load(Ordering::Relaxed)
    }

    /// Wall-clock seconds since the state was built (process start).
    pub fn uptime_secs(&self) -> f64 {
        self.inner.started.elapsed().as_secs_f64()
    }

    pub fn telemetry(&self) -> &dyn TelemetrySink {
        self.inner.telemetry.as_ref()
    }
}
