#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use weblab_core::WeblabError;
use weblab_server::config;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_yields_defaults() {
    let cfg = config::load_with(lookup(&[])).expect("must load");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.version, "2.0");
    assert_eq!(cfg.environment, "development");
    assert_eq!(cfg.custom_message, "No custom message");
    assert_eq!(cfg.region, "unknown");
    assert_eq!(cfg.instance_id, "local-dev");
    assert!(cfg.telemetry_connection.is_none());
}

#[test]
fn variables_override_defaults() {
    let cfg = config::load_with(lookup(&[
        ("PORT", "4000"),
        ("APP_VERSION", "3.1"),
        ("APP_ENV", "production"),
        ("CUSTOM_MESSAGE", "hello"),
        ("REGION_NAME", "westeurope"),
        ("WEBSITE_INSTANCE_ID", "inst-7"),
        ("TELEMETRY_CONNECTION_STRING", "InstrumentationKey=k"),
    ]))
    .expect("must load");

    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.version, "3.1");
    assert_eq!(cfg.environment, "production");
    assert_eq!(cfg.custom_message, "hello");
    assert_eq!(cfg.region, "westeurope");
    assert_eq!(cfg.instance_id, "inst-7");
    assert_eq!(
        cfg.telemetry_connection.as_deref(),
        Some("InstrumentationKey=k")
    );
}

#[test]
fn unparseable_port_is_a_config_error() {
    let err = config::load_with(lookup(&[("PORT", "not-a-port")])).expect_err("must fail");
    assert!(matches!(err, WeblabError::Config(_)));

    let err = config::load_with(lookup(&[("PORT", "70000")])).expect_err("must fail");
    assert!(matches!(err, WeblabError::Config(_)));
}

#[test]
fn port_tolerates_surrounding_whitespace() {
    let cfg = config::load_with(lookup(&[("PORT", " 8080 ")])).expect("must load");
    assert_eq!(cfg.port, 8080);
}
