use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn minimal_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([("GEMFIND_FEED_URL", "https://example.com/feed.csv")])
}

#[test]
fn minimal_env_uses_defaults() {
    let map = minimal_env();
    let config = build_app_config(lookup_from_map(&map)).expect("config should build");

    assert_eq!(config.feed_url, "https://example.com/feed.csv");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.result_cap, 6);
    assert!((config.score_threshold - 0.40).abs() < f64::EPSILON);
    assert_eq!(config.url_debounce_ms, 150);
    assert_eq!(config.store_path.to_str(), Some("./gemfind-store.json"));
}

#[test]
fn missing_feed_url_is_an_error() {
    let map = HashMap::new();
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    match err {
        ConfigError::MissingEnvVar(var) => assert_eq!(var, "GEMFIND_FEED_URL"),
        other => panic!("expected MissingEnvVar, got {other:?}"),
    }
}

#[test]
fn overrides_are_applied() {
    let mut map = minimal_env();
    map.insert("GEMFIND_RESULT_CAP", "12");
    map.insert("GEMFIND_SCORE_THRESHOLD", "0.5");
    map.insert("GEMFIND_URL_DEBOUNCE_MS", "200");

    let config = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(config.result_cap, 12);
    assert!((config.score_threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.url_debounce_ms, 200);
}

#[test]
fn non_numeric_timeout_is_an_error() {
    let mut map = minimal_env();
    map.insert("GEMFIND_REQUEST_TIMEOUT_SECS", "soon");

    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    match err {
        ConfigError::InvalidEnvVar { var, .. } => {
            assert_eq!(var, "GEMFIND_REQUEST_TIMEOUT_SECS");
        }
        other => panic!("expected InvalidEnvVar, got {other:?}"),
    }
}

#[test]
fn zero_result_cap_is_rejected() {
    let mut map = minimal_env();
    map.insert("GEMFIND_RESULT_CAP", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let mut map = minimal_env();
    map.insert("GEMFIND_SCORE_THRESHOLD", "1.5");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn debug_redacts_feed_url() {
    let map = minimal_env();
    let config = build_app_config(lookup_from_map(&map)).expect("config should build");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("example.com"));
    assert!(rendered.contains("[redacted]"));
}
