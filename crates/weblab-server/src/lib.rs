//! weblab server library entry.
//!
//! This crate wires the config loader, shared state, telemetry client, and
//! route handlers into the demo server. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod routes;
pub mod telemetry;
