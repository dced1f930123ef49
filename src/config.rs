use std::net::SocketAddr;

use crate::common::ConfigError;

/// Environment variable overriding the Leptos `site-addr`
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Pick the listen address: `BIND_ADDR` when set and non-blank, otherwise
/// the address from the Leptos metadata.
pub fn resolve_bind_addr(
    env_value: Option<String>,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    let Some(value) = env_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };

    match value.parse::<SocketAddr>() {
        Ok(addr) => Ok(addr),
        Err(source) => Err(ConfigError::InvalidBindAddr { value, source }),
    }
}

#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub leptos_options: leptos::config::LeptosOptions,
    pub bind_addr: SocketAddr,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    /// Reads `[package.metadata.leptos]` (or the `LEPTOS_*` variables
    /// cargo-leptos exports) and applies the `BIND_ADDR` override.
    pub fn load() -> Result<Self, ConfigError> {
        let conf = leptos::config::get_configuration(None)
            .map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;

        let bind_addr =
            resolve_bind_addr(std::env::var(BIND_ADDR_VAR).ok(), leptos_options.site_addr)?;

        Ok(Self {
            leptos_options,
            bind_addr,
        })
    }
}
