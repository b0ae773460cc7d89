use super::*;

fn labels(role: &str) -> Vec<&'static str> {
    visible_areas(role).into_iter().map(|a| a.label).collect()
}

#[test]
fn owner_sees_every_area() {
    assert_eq!(labels("owner"), vec!["Documents", "Upload", "Reconciliation", "Reports", "Team", "Billing"]);
}

#[test]
fn viewer_sees_read_only_areas() {
    assert_eq!(labels("viewer"), vec!["Documents", "Reports"]);
}

#[test]
fn unknown_role_sees_nothing() {
    assert!(labels("guest").is_empty());
    assert!(labels("").is_empty());
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(display_name("Ada Lovelace", "ada@example.com"), "Ada Lovelace");
    assert_eq!(display_name("  ", "ada@example.com"), "ada@example.com");
}
