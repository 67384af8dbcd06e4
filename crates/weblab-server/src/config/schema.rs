use weblab_core::error::{Result, WeblabError};

/// Runtime configuration, resolved once at startup.
///
/// Every field has a default so the server boots with no environment at all;
/// a variable that is present but unparseable is a hard error rather than a
/// silent fallback.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub version: String,
    pub environment: String,
    pub custom_message: String,
    pub region: String,
    pub instance_id: String,
    /// Collector connection string; `None` disables telemetry.
    pub telemetry_connection: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            version: default_version(),
            environment: default_environment(),
            custom_message: default_custom_message(),
            region: default_region(),
            instance_id: default_instance_id(),
            telemetry_connection: None,
        }
    }
}

impl ServerConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                WeblabError::Config(format!("PORT must be a valid port number: {e}"))
            })?,
            None => default_port(),
        };

        Ok(Self {
            port,
            version: lookup("APP_VERSION").unwrap_or_else(default_version),
            environment: lookup("APP_ENV").unwrap_or_else(default_environment),
            custom_message: lookup("CUSTOM_MESSAGE").unwrap_or_else(default_custom_message),
            region: lookup("REGION_NAME").unwrap_or_else(default_region),
            instance_id: lookup("WEBSITE_INSTANCE_ID").unwrap_or_else(default_instance_id),
            telemetry_connection: lookup("TELEMETRY_CONNECTION_STRING"),
        })
    }
}

fn default_port() -> u16 {
    3000
}
fn default_version() -> String {
    "2.0".into()
}
fn default_environment() -> String {
    "development".into()
}
fn default_custom_message() -> String {
    "No custom message".into()
}
fn default_region() -> String {
    "unknown".into()
}
fn default_instance_id() -> String {
    "local-dev".into()
}
