//! weblab core: error surface and telemetry contracts shared by the server.
//!
//! This crate defines the telemetry record shapes and the sink capability
//! trait. It intentionally carries no transport or runtime dependencies so a
//! collector client, a test recorder, and the no-op stand-in can all implement
//! the same seam.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `WeblabError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod telemetry;

/// Shared result type.
pub use error::{Result, WeblabError};
pub use telemetry::{NoopTelemetry, TelemetryEvent, TelemetryMetric, TelemetrySink};
