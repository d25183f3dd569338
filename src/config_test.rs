use super::*;

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(cfg.site_root, None);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some(""), Some(" ")).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(cfg.site_root, None);
}

#[test]
fn explicit_host_port_and_site_root() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 "), Some("dist/site")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist/site")));
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("3000"), None).unwrap();
    assert_eq!(cfg.addr, "[::1]:3000".parse().unwrap());
}

#[test]
fn hostname_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("localhost"), None, None),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

#[test]
fn non_numeric_port_is_rejected() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".to_owned() }));
}

#[test]
fn out_of_range_ports_are_rejected() {
    for value in ["0", "65536", "-1"] {
        assert_eq!(
            parse_port(Some(value)),
            Err(ConfigError::InvalidPort { value: value.to_owned() }),
            "expected {value:?} to be rejected"
        );
    }
}

#[test]
fn error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort { value: "x".to_owned() }.to_string().starts_with("invalid PORT"));
    assert!(ConfigError::InvalidHost { value: "x".to_owned() }.to_string().starts_with("invalid HOST"));
}
