//! Route handlers for the demo server.
//!
//! Every route always answers 200; telemetry emission is fire-and-forget and
//! can never affect a response.

pub mod health;
pub mod home;
pub mod info;

pub use health::health;
pub use home::home;
pub use info::api_info;
pub use load_test::load_test;

use chrono::{SecondsFormat, Utc};

/// Current UTC time in ISO-8601 (millisecond precision, `Z` suffix).
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
