use super::*;
use session::{Company, User};

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/api", "auth/me"), "/api/auth/me");
    assert_eq!(endpoint("https://api.test/v1/", "/auth/sign-in"), "https://api.test/v1/auth/sign-in");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("session check", 503), "session check failed: 503");
}

#[test]
fn resolved_clears_loading_and_defaults_selected_company() {
    let company = Company { id: "A".to_owned(), name: "Acme".to_owned() };
    let state = SessionState {
        authenticated: true,
        loading: true,
        user: Some(User { id: "1".to_owned(), ..User::default() }),
        company: Some(company.clone()),
        ..SessionState::default()
    };
    let state = resolved(state);
    assert!(!state.loading);
    assert_eq!(state.selected_company, Some(company));
}

#[test]
fn resolved_unauthenticated_payload_drops_identity() {
    let state = SessionState {
        authenticated: false,
        user: Some(User { id: "stale".to_owned(), ..User::default() }),
        ..SessionState::default()
    };
    assert_eq!(resolved(state), SessionState::signed_out());
}

#[test]
fn sign_in_request_serializes_credentials() {
    let req = SignInRequest { email: "ada@example.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "ada@example.com", "password": "pw" })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_calls_are_unavailable_on_server() {
    let result = futures_lite_block_on(fetch_session("/api"));
    assert!(result.is_err());
}

/// Minimal executor for the non-hydrate stubs, which never await anything.
#[cfg(not(feature = "hydrate"))]
fn futures_lite_block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
