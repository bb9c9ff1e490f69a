use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("ASSET_DIR", "/srv/mvs"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.asset_dir, PathBuf::from("/srv/mvs"));
}

#[test]
fn blank_values_count_as_unset() {
    let config = SiteConfig::from_lookup(lookup(&[("PORT", "   "), ("ASSET_DIR", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.asset_dir, PathBuf::from(DEFAULT_ASSET_DIR));
}

#[test]
fn values_are_trimmed() {
    let config = SiteConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    for bad in ["0", "70000", "http", "-1"] {
        assert_eq!(
            SiteConfig::from_lookup(lookup(&[("PORT", bad)])),
            Err(ConfigError::InvalidPort { value: bad.to_owned() }),
            "{bad}"
        );
    }
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr { value: "localhost".to_owned() });
    assert!(err.to_string().contains("BIND_ADDR"));
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let config = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "3100")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3100");
}
