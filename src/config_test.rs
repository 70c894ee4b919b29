use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// AppConfig::from_lookup
// =============================================================================

#[test]
fn from_lookup_defaults_when_empty() {
    let cfg = AppConfig::from_lookup(lookup_from(&[]));
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.generate, GenerateConfig { len: 10, min: 10, max: 100 });
    assert_eq!(cfg.playback_tick, Duration::from_millis(DEFAULT_PLAYBACK_TICK_MS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("GENERATE_LEN", "25"),
        ("GENERATE_MIN", "-5"),
        ("GENERATE_MAX", "5"),
        ("PLAYBACK_TICK_MS", "40"),
    ]));
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.generate, GenerateConfig { len: 25, min: -5, max: 5 });
    assert_eq!(cfg.playback_tick, Duration::from_millis(40));
}

#[test]
fn from_lookup_invalid_values_fall_back() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port"), ("GENERATE_LEN", "-3")]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.generate.len, DEFAULT_GENERATE_LEN);
}

#[test]
fn from_lookup_trims_whitespace() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "  4000 ")]));
    assert_eq!(cfg.port, 4000);
}

#[test]
fn from_lookup_clamps_zero_tick() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PLAYBACK_TICK_MS", "0")]));
    assert_eq!(cfg.playback_tick, Duration::from_millis(1));
}

// =============================================================================
// GenerateConfig
// =============================================================================

#[test]
fn generate_config_swaps_inverted_bounds() {
    assert_eq!(GenerateConfig::new(3, 50, 20), GenerateConfig { len: 3, min: 20, max: 50 });
}

#[test]
fn generate_config_from_lookup_swaps_inverted_bounds() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("GENERATE_MIN", "90"), ("GENERATE_MAX", "30")]));
    assert_eq!(cfg.generate.min, 30);
    assert_eq!(cfg.generate.max, 90);
}
