#[cfg(test)]
pub mod config_tests {
    use std::net::SocketAddr;

    use inmobiliaria_mendoza::common::*;
    use inmobiliaria_mendoza::config::*;

    fn default_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 3000))
    }

    #[test]
    fn test_resolve_bind_addr_uses_default_when_unset() {
        assert_eq!(resolve_bind_addr(None, default_addr()).ok(), Some(default_addr()));
    }

    #[test]
    fn test_resolve_bind_addr_uses_default_when_blank() {
        let resolved = resolve_bind_addr(Some("   ".to_string()), default_addr());

        assert_eq!(resolved.ok(), Some(default_addr()));
    }

    #[test]
    fn test_resolve_bind_addr_success() {
        let resolved = resolve_bind_addr(Some(" 0.0.0.0:8080 ".to_string()), default_addr());

        assert_eq!(resolved.ok(), Some(SocketAddr::from(([0, 0, 0, 0], 8080))));
    }

    #[test]
    fn test_resolve_bind_addr_fails_on_garbage() {
        let resolved = resolve_bind_addr(Some("localhost".to_string()), default_addr());

        match resolved {
            Err(ConfigError::InvalidBindAddr { value, .. }) => assert_eq!(value, "localhost"),
            other => panic!("expected InvalidBindAddr, got {:?}", other),
        }
    }
}
