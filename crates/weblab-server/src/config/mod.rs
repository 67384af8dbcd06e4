//! Server config loader (env-style source, strict parsing).

pub mod schema;

use std::env;

pub use schema::ServerConfig;

use weblab_core::error::Result;

/// Load configuration from process environment variables.
pub fn load_from_env() -> Result<ServerConfig> {
    load_with(|key| env::var(key).ok())
}

/// Load configuration through an injectable lookup, so tests can supply a map
/// instead of mutating the process environment.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig> {
    ServerConfig::from_lookup(lookup)
}
