//! Telemetry client selection.
//!
//! `connect` picks the sink implementation exactly once at startup:
//! no connection string means the no-op sink (not an error), a malformed
//! connection string is an `Err` the caller logs before falling back to the
//! no-op sink. Handlers only ever see `Arc<dyn TelemetrySink>` and never
//! branch on which implementation is behind it.

pub mod channel;

use std::sync::Arc;

use weblab_core::error::Result;
use weblab_core::{NoopTelemetry, TelemetrySink};

pub use channel::ChannelTelemetry;

/// Select the telemetry sink for this process.
///
/// Must be called from within a tokio runtime; the real client spawns its
/// exporter task on the current runtime.
pub fn connect(connection_string: Option<&str>) -> Result<Arc<dyn TelemetrySink>> {
    match connection_string {
        None => Ok(Arc::new(NoopTelemetry)),
        Some(conn) => {
            let client = ChannelTelemetry::connect(conn)?;
            Ok(Arc::new(client))
        }
    }
}
