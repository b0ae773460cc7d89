//! Named credential lookup.
//!
//! The realtime controller reads its bearer token through [`TokenStore`] so
//! the browser build can read cookies while tests and SSR use a map.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Synchronous read access to named credentials.
pub trait TokenStore {
    /// Current value of credential `name`, or `None` when absent.
    fn get_token(&self, name: &str) -> Option<String>;
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.tokens.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    pub fn remove(&self, name: &str) {
        self.tokens.borrow_mut().remove(name);
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self, name: &str) -> Option<String> {
        self.tokens.borrow().get(name).cloned()
    }
}

/// Whether `token` is worth presenting to the realtime server.
///
/// Tokens must be non-empty and free of whitespace. JWT-shaped tokens
/// (two dots) additionally need all three segments present.
#[must_use]
pub fn is_usable_token(token: &str) -> bool {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return false;
    }
    let segments: Vec<&str> = token.split('.').collect();
    match segments.len() {
        1 => true,
        3 => segments.iter().all(|s| !s.is_empty()),
        _ => false,
    }
}

/// Extract cookie `name` from a `document.cookie` style header.
///
/// The first matching pair wins; values are percent-decoded and empty values
/// are treated as absent.
#[must_use]
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            urlencoding::decode(value).map_or_else(|_| value.to_owned(), std::borrow::Cow::into_owned)
        })
        .filter(|value| !value.is_empty())
}
