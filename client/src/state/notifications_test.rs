use super::*;
use crate::net::types::NotificationKind;

fn note(id: &str, company: Option<&str>) -> Notification {
    Notification {
        id: id.to_owned(),
        kind: NotificationKind::General,
        message: format!("message {id}"),
        company_id: company.map(ToOwned::to_owned),
        read: false,
    }
}

#[test]
fn push_keeps_newest_first() {
    let mut state = NotificationState::default();
    state.push(note("1", None));
    state.push(note("2", None));
    assert_eq!(state.items[0].id, "2");
    assert_eq!(state.items[1].id, "1");
}

#[test]
fn push_ignores_duplicate_ids() {
    let mut state = NotificationState::default();
    state.push(note("1", None));
    state.push(note("1", None));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_caps_retained_items() {
    let mut state = NotificationState::default();
    for i in 0..(MAX_NOTIFICATIONS + 5) {
        state.push(note(&i.to_string(), None));
    }
    assert_eq!(state.items.len(), MAX_NOTIFICATIONS);
    assert_eq!(state.items[0].id, (MAX_NOTIFICATIONS + 4).to_string());
}

#[test]
fn unread_counts_until_marked_read() {
    let mut state = NotificationState::default();
    state.push(note("1", None));
    state.push(note("2", None));
    assert_eq!(state.unread(), 2);
    state.mark_all_read();
    assert_eq!(state.unread(), 0);
}

#[test]
fn retain_company_drops_other_tenants_only() {
    let mut state = NotificationState::default();
    state.push(note("a", Some("A")));
    state.push(note("b", Some("B")));
    state.push(note("any", None));

    state.retain_company("B");
    let ids: Vec<&str> = state.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["any", "b"]);
}
