//! REST API helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since the session cookie only exists in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so session
//! failures degrade to a signed-out state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// A resolved session never reports `loading`, whatever the payload says.
#[cfg(any(test, feature = "hydrate"))]
fn resolved(mut state: SessionState) -> SessionState {
    state.loading = false;
    if !state.authenticated {
        return SessionState::signed_out();
    }
    if state.selected_company.is_none() {
        state.selected_company.clone_from(&state.company);
    }
    state
}

/// Fetch the current session from `GET {api}/auth/me`.
///
/// A 401 resolves to a signed-out session rather than an error.
///
/// # Errors
///
/// Returns an error string for transport failures or unexpected statuses.
pub async fn fetch_session(api_base: &str) -> Result<SessionState, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base, "auth/me"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(SessionState::signed_out());
        }
        if !resp.ok() {
            return Err(request_failed_message("session check", resp.status()));
        }
        let state = resp.json::<SessionState>().await.map_err(|e| e.to_string())?;
        Ok(resolved(state))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Err("not available on server".to_owned())
    }
}

/// Sign in with email and password via `POST {api}/auth/sign-in`.
///
/// The backend answers with the new session and sets the token cookie.
///
/// # Errors
///
/// Returns an error string when credentials are rejected or the call fails.
pub async fn sign_in(api_base: &str, request: &SignInRequest) -> Result<SessionState, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(api_base, "auth/sign-in"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("Invalid email or password.".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("sign in", resp.status()));
        }
        let state = resp.json::<SessionState>().await.map_err(|e| e.to_string())?;
        Ok(resolved(state))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, request);
        Err("not available on server".to_owned())
    }
}

/// End the session via `POST {api}/auth/sign-out`. Best effort.
pub async fn sign_out(api_base: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&endpoint(api_base, "auth/sign-out"))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
    }
}
