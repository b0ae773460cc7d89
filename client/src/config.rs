//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so settings are captured from
//! `LEDGERDESK_*` variables when the crate is compiled. SSR and hydrate builds
//! of the same release therefore agree on every value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::{AuthConfig, ConfigError};

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_SOCKET_PATH: &str = "/socket";
pub const DEFAULT_STATUS_POLL_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for REST calls, without trailing slash.
    pub api_base_url: String,
    /// Absolute `ws(s)://` URL, or a path resolved against the page origin.
    pub socket_url: String,
    /// Interval at which the connection indicator polls status.
    pub status_poll_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            socket_url: DEFAULT_SOCKET_PATH.to_owned(),
            status_poll_ms: DEFAULT_STATUS_POLL_MS,
        }
    }
}

impl ClientConfig {
    /// Optional:
    /// - `LEDGERDESK_API_URL`: default `/api`
    /// - `LEDGERDESK_SOCKET_URL`: default `/socket`
    /// - `LEDGERDESK_STATUS_POLL_MS`: default 3000, minimum 250
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base_url = lookup("LEDGERDESK_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);
        let socket_url = lookup("LEDGERDESK_SOCKET_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.socket_url);
        let status_poll_ms = lookup("LEDGERDESK_STATUS_POLL_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map_or(defaults.status_poll_ms, |ms| ms.max(250));

        Self { api_base_url, socket_url, status_poll_ms }
    }

    /// Config captured at compile time.
    pub fn compiled() -> Self {
        Self::from_lookup(compile_time_lookup)
    }
}

/// Auth routing config captured at compile time.
///
/// # Errors
///
/// Propagates [`ConfigError`]; callers treat it as fatal.
pub fn auth_config() -> Result<AuthConfig, ConfigError> {
    AuthConfig::from_lookup(compile_time_lookup)
}

/// Auth config checked the way both entry points need it at startup: the
/// method parses and every redirect target has a route in the app shell.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found.
pub fn startup_auth_config() -> Result<AuthConfig, ConfigError> {
    routed(auth_config()?)
}

fn routed(config: AuthConfig) -> Result<AuthConfig, ConfigError> {
    config.ensure_routed(crate::app::ROUTED_PATHS)?;
    Ok(config)
}

/// Resolve the socket URL against the page origin when it is a bare path.
pub fn resolve_socket_url(socket_url: &str, page_href: &str, page_host: &str) -> String {
    if socket_url.starts_with("ws://") || socket_url.starts_with("wss://") {
        return socket_url.to_owned();
    }
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{page_host}{socket_url}")
}

fn compile_time_lookup(key: &str) -> Option<String> {
    let value = match key {
        "LEDGERDESK_API_URL" => option_env!("LEDGERDESK_API_URL"),
        "LEDGERDESK_SOCKET_URL" => option_env!("LEDGERDESK_SOCKET_URL"),
        "LEDGERDESK_STATUS_POLL_MS" => option_env!("LEDGERDESK_STATUS_POLL_MS"),
        "LEDGERDESK_AUTH_METHOD" => option_env!("LEDGERDESK_AUTH_METHOD"),
        "LEDGERDESK_SIGN_IN_PATH" => option_env!("LEDGERDESK_SIGN_IN_PATH"),
        "LEDGERDESK_SETTINGS_PATH" => option_env!("LEDGERDESK_SETTINGS_PATH"),
        "LEDGERDESK_TOKEN_COOKIE" => option_env!("LEDGERDESK_TOKEN_COOKIE"),
        _ => None,
    };
    value.map(ToOwned::to_owned)
}
