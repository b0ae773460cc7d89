use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_lookup_uses_defaults() {
    assert_eq!(ClientConfig::from_lookup(lookup(&[])), ClientConfig::default());
}

#[test]
fn overrides_are_trimmed() {
    let cfg = ClientConfig::from_lookup(lookup(&[
        ("LEDGERDESK_API_URL", " https://api.ledgerdesk.test/v1/ "),
        ("LEDGERDESK_SOCKET_URL", "wss://rt.ledgerdesk.test"),
        ("LEDGERDESK_STATUS_POLL_MS", "1500"),
    ]));
    assert_eq!(cfg.api_base_url, "https://api.ledgerdesk.test/v1");
    assert_eq!(cfg.socket_url, "wss://rt.ledgerdesk.test");
    assert_eq!(cfg.status_poll_ms, 1500);
}

#[test]
fn poll_interval_has_a_floor_and_ignores_garbage() {
    let cfg = ClientConfig::from_lookup(lookup(&[("LEDGERDESK_STATUS_POLL_MS", "10")]));
    assert_eq!(cfg.status_poll_ms, 250);

    let cfg = ClientConfig::from_lookup(lookup(&[("LEDGERDESK_STATUS_POLL_MS", "soon")]));
    assert_eq!(cfg.status_poll_ms, DEFAULT_STATUS_POLL_MS);
}

#[test]
fn compiled_auth_config_targets_mounted_routes() {
    let cfg = startup_auth_config().expect("build must carry a valid auth config");
    assert!(crate::app::ROUTED_PATHS.contains(&cfg.sign_in_path().unwrap()));
    assert!(crate::app::ROUTED_PATHS.contains(&cfg.settings_path.as_str()));
}

#[test]
fn every_auth_method_default_sign_in_is_routed() {
    for method in ["jwt", "supabase"] {
        let cfg = AuthConfig::from_lookup(lookup(&[("LEDGERDESK_AUTH_METHOD", method)])).unwrap();
        assert!(routed(cfg).is_ok(), "{method} sign-in should be mounted");
    }
}

#[test]
fn unmounted_redirect_targets_fail_at_startup() {
    let cfg = AuthConfig::from_lookup(lookup(&[
        ("LEDGERDESK_AUTH_METHOD", "supabase"),
        ("LEDGERDESK_SETTINGS_PATH", "/account"),
    ]))
    .unwrap();
    assert_eq!(
        routed(cfg),
        Err(ConfigError::UnroutedPath { key: "LEDGERDESK_SETTINGS_PATH", path: "/account".to_owned() })
    );

    let cfg = AuthConfig::from_lookup(lookup(&[("LEDGERDESK_SIGN_IN_PATH", "/login")])).unwrap();
    assert_eq!(
        routed(cfg),
        Err(ConfigError::UnroutedPath { key: "LEDGERDESK_SIGN_IN_PATH", path: "/login".to_owned() })
    );
}

#[test]
fn socket_path_is_resolved_against_page_origin() {
    assert_eq!(
        resolve_socket_url("/socket", "https://app.ledgerdesk.test/dashboard", "app.ledgerdesk.test"),
        "wss://app.ledgerdesk.test/socket"
    );
    assert_eq!(resolve_socket_url("/socket", "http://localhost:3000/", "localhost:3000"), "ws://localhost:3000/socket");
    assert_eq!(resolve_socket_url("wss://rt.example/ws", "http://x/", "x"), "wss://rt.example/ws");
}
