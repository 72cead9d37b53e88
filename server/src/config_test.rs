use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_absent_keeps_site_addr() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, None);
    let site: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(config.listen_addr(site), site);
}

#[test]
fn port_blank_is_ignored() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
    assert_eq!(config.port, None);
}

#[test]
fn port_overrides_site_addr_port_only() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, Some(8080));
    let site: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    assert_eq!(config.listen_addr(site), "0.0.0.0:8080".parse().unwrap());
}

#[test]
fn port_invalid_is_an_error() {
    for raw in ["http", "-1", "70000"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "value {raw:?}");
    }
}

// =============================================================================
// COMPRESS
// =============================================================================

#[test]
fn compress_defaults_on() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert!(config.compress);
}

#[test]
fn compress_can_be_disabled() {
    let config = ServerConfig::from_lookup(lookup_from(&[("COMPRESS", "off")])).unwrap();
    assert!(!config.compress);
}

#[test]
fn compress_unrecognized_value_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("COMPRESS", "maybe")])).unwrap();
    assert!(config.compress);
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw:?}");
    }
    for raw in ["0", "false", "No", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw:?}");
    }
    assert_eq!(parse_bool(""), None);
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::InvalidPort("abc".into()).to_string(), "invalid PORT value: \"abc\"");
    assert_eq!(ConfigError::Leptos("missing".into()).to_string(), "leptos configuration: missing");
}
