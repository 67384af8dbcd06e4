//! Channel-backed telemetry client.
//!
//! Records are pushed over a bounded mpsc channel to a background exporter
//! task, so emission never blocks a handler and never fails past it: a full
//! or closed channel drops the record. Delivery to the collector itself is
//! delegated to the export side and is out of scope here; the exporter
//! serializes each record and hands it off as a structured tracing line
//! tagged with the ingestion endpoint.

use tokio::sync::mpsc;

use weblab_core::error::{Result, WeblabError};
use weblab_core::{TelemetryEvent, TelemetryMetric, TelemetrySink};

const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug)]
enum Record {
    Event(TelemetryEvent),
    Metric(TelemetryMetric),
}

/// Parsed collector connection string (`Key=Value` pairs joined by `;`).
#[derive(Debug, Clone)]
pub struct ConnectionString {
    pub instrumentation_key: String,
    pub ingestion_endpoint: Option<String>,
}

impl ConnectionString {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut key = None;
        let mut endpoint = None;

        for part in raw.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (k, v) = part.split_once('=').ok_or_else(|| {
                WeblabError::Telemetry(format!("malformed connection string segment: {part:?}"))
            })?;
            match k.trim() {
                "InstrumentationKey" => key = Some(v.trim().to_string()),
                "IngestionEndpoint" => endpoint = Some(v.trim().to_string()),
                // Unknown segments are tolerated for forward compatibility.
                _ => {}
            }
        }

        match key {
            Some(k) if !k.is_empty() => Ok(Self {
                instrumentation_key: k,
                ingestion_endpoint: endpoint,
            }),
            _ => Err(WeblabError::Telemetry(
                "connection string is missing InstrumentationKey".into(),
            )),
        }
    }
}

/// Real telemetry sink: forwards records to the exporter task.
pub struct ChannelTelemetry {
    tx: mpsc::Sender<Record>,
}

impl ChannelTelemetry {
    /// Parse the connection string and spawn the exporter task.
    ///
    /// Requires a running tokio runtime.
    pub fn connect(connection_string: &str) -> Result<Self> {
        let conn = ConnectionString::parse(connection_string)?;
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(export_loop(conn, rx));
        Ok(Self { tx })
    }

    fn push(&self, record: Record) {
        // Fire-and-forget: dropping on a full or closed channel is the
        // contract, a handler response must never wait on telemetry.
        if let Err(e) = self.tx.try_send(record) {
            tracing::debug!(error = %e, "telemetry record dropped");
        }
    }
}

impl TelemetrySink for ChannelTelemetry {
    fn emit_event(&self, event: TelemetryEvent) {
        self.push(Record::Event(event));
    }

    fn emit_metric(&self, metric: TelemetryMetric) {
        self.push(Record::Metric(metric));
    }
}

async fn export_loop(conn: ConnectionString, mut rx: mpsc::Receiver<Record>) {
    let endpoint = conn.ingestion_endpoint.as_deref().unwrap_or("-").to_string();
    tracing::debug!(
        ikey = %conn.instrumentation_key,
        endpoint = %endpoint,
        "telemetry exporter started"
    );

    while let Some(record) = rx.recv().await {
        let (kind, body) = match &record {
            Record::Event(ev) => ("event", serde_json::to_string(ev)),
            Record::Metric(m) => ("metric", serde_json::to_string(m)),
        };
        match body {
            Ok(body) => {
                tracing::info!(target: "weblab::telemetry", kind, endpoint = %endpoint, %body)
            }
            Err(e) => tracing::debug!(error = %e, "telemetry record not serializable"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_full_connection_string() {
        let conn = ConnectionString::parse(
            "InstrumentationKey=abc-123;IngestionEndpoint=https://collector.example/",
        )
        .unwrap();
        assert_eq!(conn.instrumentation_key, "abc-123");
        assert_eq!(
            conn.ingestion_endpoint.as_deref(),
            Some("https://collector.example/")
        );
    }

    #[test]
    fn tolerates_unknown_segments() {
        let conn =
            ConnectionString::parse("InstrumentationKey=k;LiveEndpoint=https://x/;").unwrap();
        assert_eq!(conn.instrumentation_key, "k");
    }

    #[test]
    fn rejects_missing_key() {
        assert!(ConnectionString::parse("IngestionEndpoint=https://x/").is_err());
        assert!(ConnectionString::parse("").is_err());
        assert!(ConnectionString::parse("InstrumentationKey=").is_err());
    }

    #[test]
    fn rejects_segment_without_equals() {
        assert!(ConnectionString::parse("garbage").is_err());
    }
}
