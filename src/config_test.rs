use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_url, "http://127.0.0.1:8000");
    assert_eq!(config.proxy_timeout_secs, 30);
}

// =============================================================
// PORT
// =============================================================

#[test]
fn port_is_parsed() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn port_out_of_range_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn port_garbage_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

// =============================================================
// FOODGRAM_API_URL
// =============================================================

#[test]
fn api_url_trailing_slashes_trimmed() {
    let config = ServerConfig::from_lookup(lookup_from(&[("FOODGRAM_API_URL", "https://foodgram.example//")])).unwrap();
    assert_eq!(config.api_url, "https://foodgram.example");
}

#[test]
fn api_url_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("FOODGRAM_API_URL", "backend:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("backend:8000".to_owned()));
}

// =============================================================
// PROXY_TIMEOUT_SECS
// =============================================================

#[test]
fn proxy_timeout_is_parsed() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PROXY_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(config.proxy_timeout_secs, 5);
}

#[test]
fn proxy_timeout_garbage_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PROXY_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}
