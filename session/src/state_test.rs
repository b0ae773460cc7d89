use super::*;

fn acme() -> Company {
    Company { id: "A".to_owned(), name: "Acme Ltd".to_owned() }
}

fn user() -> User {
    User { id: "1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned(), role: "owner".to_owned() }
}

#[test]
fn initial_state_is_loading_and_unauthenticated() {
    let state = SessionState::initial();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_selects_the_given_company() {
    let state = SessionState::signed_in(user(), Some(acme()));
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.company, Some(acme()));
    assert_eq!(state.selected_company, Some(acme()));
    assert_eq!(state.companies, vec![acme()]);
}

#[test]
fn select_company_switches_active_and_selected_tenant() {
    let mut state = SessionState::signed_in(user(), Some(acme()));
    let beta = Company { id: "B".to_owned(), name: "Beta".to_owned() };
    state.companies.push(beta.clone());

    assert!(state.select_company("B"));
    assert_eq!(state.company, Some(beta.clone()));
    assert_eq!(state.selected_company, Some(beta));
}

#[test]
fn select_company_rejects_unknown_tenant() {
    let mut state = SessionState::signed_in(user(), Some(acme()));
    assert!(!state.select_company("Z"));
    assert_eq!(state.company, Some(acme()));
}

#[test]
fn deserializes_whoami_payload_with_missing_fields() {
    let raw = serde_json::json!({
        "authenticated": true,
        "user": {"id": "1", "role": "accountant"},
        "company": {"id": "A"},
        "selectedCompany": {"id": "A", "name": "Acme Ltd"}
    });
    let state: SessionState = serde_json::from_value(raw).expect("session payload");
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.role(), Some("accountant"));
    assert_eq!(state.company.map(|c| c.id), Some("A".to_owned()));
    assert_eq!(state.selected_company.map(|c| c.name), Some("Acme Ltd".to_owned()));
    assert!(state.companies.is_empty());
}
