use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(ServerConfig::from_lookup(|_| None), Ok(ServerConfig { port: DEFAULT_PORT }));
    assert_eq!(ServerConfig::from_lookup(|_| Some("  ".to_owned())), Ok(ServerConfig { port: DEFAULT_PORT }));
}

#[test]
fn port_is_parsed_and_trimmed() {
    let cfg = ServerConfig::from_lookup(|key: &str| (key == "PORT").then(|| " 8080 ".to_owned()));
    assert_eq!(cfg, Ok(ServerConfig { port: 8080 }));
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(|_| Some("http".to_owned())),
        Err(ServerConfigError::InvalidPort("http".to_owned()))
    );
    assert!(ServerConfig::from_lookup(|_| Some("70000".to_owned())).is_err());
}
