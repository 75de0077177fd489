use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.service_name, "JijiFresh Agent API");
    assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
}

#[test]
fn overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("SERVICE_NAME", "Staging Agent"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.service_name, "Staging Agent");
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn blank_service_name_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SERVICE_NAME", " ")])).unwrap();
    assert_eq!(cfg.service_name, DEFAULT_SERVICE_NAME);
}
