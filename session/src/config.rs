//! Authentication routing configuration.
//!
//! The active auth method decides which sign-in route the access guard sends
//! signed-out visitors to. A method without a sign-in path is a deployment
//! mistake, so it is rejected when the guard is built rather than on the
//! first redirect.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

pub const DEFAULT_TOKEN_COOKIE: &str = "accessToken";
pub const DEFAULT_SETTINGS_PATH: &str = "/dashboard/settings";

/// Errors produced while resolving auth configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `LEDGERDESK_AUTH_METHOD` named a method this build does not know.
    #[error("unknown auth method: {0}")]
    UnknownAuthMethod(String),

    /// The active auth method has no sign-in route.
    #[error("no sign-in path configured for auth method {0}")]
    MissingSignInPath(AuthMethod),

    /// A configured path does not start with `/`.
    #[error("invalid path for {key}: {value}")]
    InvalidPath { key: &'static str, value: String },

    /// A configured path has no route in the app shell.
    #[error("{key} points at {path}, which is not a mounted route")]
    UnroutedPath { key: &'static str, path: String },
}

/// Identity provider backing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthMethod {
    Jwt,
    Amplify,
    Firebase,
    Auth0,
    Supabase,
}

impl AuthMethod {
    /// Parse the config key form (`jwt`, `amplify`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAuthMethod`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "jwt" => Ok(Self::Jwt),
            "amplify" => Ok(Self::Amplify),
            "firebase" => Ok(Self::Firebase),
            "auth0" => Ok(Self::Auth0),
            "supabase" => Ok(Self::Supabase),
            _ => Err(ConfigError::UnknownAuthMethod(raw.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jwt => "jwt",
            Self::Amplify => "amplify",
            Self::Firebase => "firebase",
            Self::Auth0 => "auth0",
            Self::Supabase => "supabase",
        }
    }
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes and cookie names the access layer depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub sign_in_paths: BTreeMap<AuthMethod, String>,
    /// Where authenticated users without a tenant are sent.
    pub settings_path: String,
    /// Cookie holding the bearer token used for realtime connections.
    pub token_cookie: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let mut sign_in_paths = BTreeMap::new();
        sign_in_paths.insert(AuthMethod::Jwt, "/auth/sign-in".to_owned());
        sign_in_paths.insert(AuthMethod::Supabase, "/auth/supabase/sign-in".to_owned());
        Self {
            method: AuthMethod::Jwt,
            sign_in_paths,
            settings_path: DEFAULT_SETTINGS_PATH.to_owned(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Build config from a key lookup (environment, compile-time env, ...).
    ///
    /// Optional:
    /// - `LEDGERDESK_AUTH_METHOD`: `jwt` (default), `amplify`, `firebase`, `auth0`, `supabase`
    /// - `LEDGERDESK_SIGN_IN_PATH`: sign-in route for the active method
    /// - `LEDGERDESK_SETTINGS_PATH`: default `/dashboard/settings`
    /// - `LEDGERDESK_TOKEN_COOKIE`: default `accessToken`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown methods, malformed paths, or when
    /// the active method ends up without a sign-in path.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup("LEDGERDESK_AUTH_METHOD")) {
            config.method = AuthMethod::parse(&raw)?;
        }
        if let Some(path) = non_empty(lookup("LEDGERDESK_SIGN_IN_PATH")) {
            config.sign_in_paths.insert(config.method, require_path("LEDGERDESK_SIGN_IN_PATH", path)?);
        }
        if let Some(path) = non_empty(lookup("LEDGERDESK_SETTINGS_PATH")) {
            config.settings_path = require_path("LEDGERDESK_SETTINGS_PATH", path)?;
        }
        if let Some(cookie) = non_empty(lookup("LEDGERDESK_TOKEN_COOKIE")) {
            config.token_cookie = cookie;
        }

        config.sign_in_path()?;
        Ok(config)
    }

    /// Build config from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`AuthConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Sign-in route for the active auth method.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSignInPath`] when none is configured.
    pub fn sign_in_path(&self) -> Result<&str, ConfigError> {
        self.sign_in_paths
            .get(&self.method)
            .map(String::as_str)
            .ok_or(ConfigError::MissingSignInPath(self.method))
    }

    /// Check that the guard's redirect targets are among `mounted` routes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnroutedPath`] for the first target with no
    /// matching route, or [`ConfigError::MissingSignInPath`].
    pub fn ensure_routed(&self, mounted: &[&str]) -> Result<(), ConfigError> {
        let targets = [
            ("LEDGERDESK_SIGN_IN_PATH", self.sign_in_path()?),
            ("LEDGERDESK_SETTINGS_PATH", self.settings_path.as_str()),
        ];
        for (key, path) in targets {
            if !mounted.contains(&path) {
                return Err(ConfigError::UnroutedPath { key, path: path.to_owned() });
            }
        }
        Ok(())
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn require_path(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with('/') {
        Ok(value)
    } else {
        Err(ConfigError::InvalidPath { key, value })
    }
}
