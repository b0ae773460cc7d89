use super::*;
use session::User;

fn company(id: &str, name: &str) -> Company {
    Company { id: id.to_owned(), name: name.to_owned() }
}

#[test]
fn company_options_prefers_membership_list() {
    let mut session = SessionState::signed_in(User::default(), Some(company("A", "Acme")));
    session.companies = vec![company("A", "Acme"), company("B", "Beta")];
    let ids: Vec<_> = company_options(&session).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["A", "B"]);
}

#[test]
fn company_options_falls_back_to_active_company() {
    let session = SessionState::signed_in(User::default(), Some(company("A", "Acme")));
    assert_eq!(company_options(&session), vec![company("A", "Acme")]);
    assert!(company_options(&SessionState::signed_out()).is_empty());
}
