use crate::config::TriviaConfig;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_apply() {
    let config = TriviaConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite://trivia.db")]))
        .expect("Should build config");

    assert_eq!(config.database_url, "sqlite://trivia.db");
    assert_eq!(config.max_connections, 15);
    assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
}

#[test]
fn test_overrides_apply() {
    let config = TriviaConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("MAX_CONNECTIONS", "4"),
        ("BIND_ADDRESS", "127.0.0.1:5000"),
    ]))
    .unwrap();

    assert_eq!(config.max_connections, 4);
    assert_eq!(config.bind_address.port(), 5000);
}

#[test]
fn test_unusable_pool_size_falls_back() {
    let config = TriviaConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("MAX_CONNECTIONS", "0"),
    ]))
    .unwrap();

    assert_eq!(config.max_connections, 15);
}

#[test]
fn test_missing_database_url_is_an_error() {
    assert!(TriviaConfig::from_lookup(lookup_from(&[])).is_err());
}

#[test]
fn test_bad_bind_address_is_an_error() {
    let result = TriviaConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("BIND_ADDRESS", "localhost"),
    ]));

    assert!(result.is_err());
}
