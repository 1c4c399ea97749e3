use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_budget_is_twenty_attempts_at_150ms() {
    let cfg = GateConfig::default();
    assert_eq!(cfg.max_attempts, 20);
    assert_eq!(cfg.retry_delay, Duration::from_millis(150));
}

#[test]
fn default_paths_and_prefixes() {
    let cfg = GateConfig::default();
    assert_eq!(cfg.status_endpoint, "/api/profile-status");
    assert_eq!(cfg.profile_path, "/profile");
    assert_eq!(cfg.excluded_prefixes, vec!["/auth/", "/login", "/profile"]);
    assert_eq!(cfg.log_level, log::Level::Warn);
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = GateConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, GateConfig::default());
}

#[test]
fn blank_values_count_as_absent() {
    let cfg = GateConfig::from_lookup(lookup_from(&[("attempts", "  "), ("status-endpoint", "")])).unwrap();
    assert_eq!(cfg, GateConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn parses_all_overrides() {
    let cfg = GateConfig::from_lookup(lookup_from(&[
        ("attempts", "5"),
        ("delay-ms", " 10 "),
        ("status-endpoint", "/v2/status"),
        ("profile-path", "/onboarding"),
        ("skip-prefixes", "/auth/, /onboarding ,,"),
        ("log-level", "DEBUG"),
    ]))
    .unwrap();

    assert_eq!(cfg.max_attempts, 5);
    assert_eq!(cfg.retry_delay, Duration::from_millis(10));
    assert_eq!(cfg.status_endpoint, "/v2/status");
    assert_eq!(cfg.profile_path, "/onboarding");
    assert_eq!(cfg.excluded_prefixes, vec!["/auth/", "/onboarding"]);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn zero_delay_is_allowed() {
    let cfg = GateConfig::from_lookup(lookup_from(&[("delay-ms", "0")])).unwrap();
    assert_eq!(cfg.retry_delay, Duration::ZERO);
}

#[test]
fn guard_reflects_configured_prefixes() {
    let cfg = GateConfig::from_lookup(lookup_from(&[("skip-prefixes", "/setup")])).unwrap();
    let guard = cfg.guard();
    assert!(guard.is_excluded("/setup/1"));
    assert!(!guard.is_excluded("/login"));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn zero_attempts_rejected() {
    let err = GateConfig::from_lookup(lookup_from(&[("attempts", "0")])).unwrap_err();
    assert!(matches!(err, GateError::ConfigParse(ref msg) if msg.contains("at least 1")));
}

#[test]
fn non_numeric_attempts_rejected() {
    let err = GateConfig::from_lookup(lookup_from(&[("attempts", "many")])).unwrap_err();
    assert!(matches!(err, GateError::ConfigParse(ref msg) if msg.contains("many")));
}

#[test]
fn negative_delay_rejected() {
    let err = GateConfig::from_lookup(lookup_from(&[("delay-ms", "-5")])).unwrap_err();
    assert!(matches!(err, GateError::ConfigParse(ref msg) if msg.contains("delay-ms")));
}

#[test]
fn unknown_log_level_rejected() {
    let err = GateConfig::from_lookup(lookup_from(&[("log-level", "loud")])).unwrap_err();
    assert_eq!(err, GateError::ConfigParse("unknown log-level 'loud'".into()));
}

#[test]
fn meta_selector_targets_prefixed_name() {
    assert_eq!(meta_selector("delay-ms"), r#"meta[name="profile-gate:delay-ms"]"#);
}
