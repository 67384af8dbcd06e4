//! Telemetry record shapes and the sink capability trait.
//!
//! The wire contract is deliberately small: an event is `{name, properties}`,
//! a metric is `{name, value}`. Transport is the sink implementation's
//! concern; handlers only ever see the trait.

use serde::Serialize;
use serde_json::{Map, Value};

/// A named record with arbitrary key/value properties.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl TelemetryEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
        }
    }

    /// Attach a property. Accepts anything serde_json can coerce to a value.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attach a whole JSON object as properties (e.g. a response payload).
    /// Non-object values are nested under the given key instead.
    pub fn with_payload(mut self, key: impl Into<String>, payload: Value) -> Self {
        match payload {
            Value::Object(map) => self.properties.extend(map),
            other => {
                self.properties.insert(key.into(), other);
            }
        }
        self
    }
}

/// A named numeric observation.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryMetric {
    pub name: String,
    pub value: f64,
}

impl TelemetryMetric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Capability seam between route handlers and the collector.
///
/// Emission is fire-and-forget: implementations must never block the caller
/// and must never surface a failure. Handlers hold an `Arc<dyn TelemetrySink>`
/// and do not branch on which implementation is behind it.
pub trait TelemetrySink: Send + Sync {
    fn emit_event(&self, event: TelemetryEvent);
    fn emit_metric(&self, metric: TelemetryMetric);
}

/// Stand-in sink selected when no collector is configured or the real client
/// fails to initialize. Discards everything.
#[derive(Debug, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn emit_event(&self, _event: TelemetryEvent) {}
    fn emit_metric(&self, _metric: TelemetryMetric) {}
}
