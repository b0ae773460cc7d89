use super::*;

fn note(kind: NotificationKind, read: bool) -> Notification {
    Notification { id: "n".to_owned(), kind, message: String::new(), company_id: None, read }
}

#[test]
fn unread_label_caps_at_nine() {
    assert_eq!(unread_label(0), "");
    assert_eq!(unread_label(3), "3");
    assert_eq!(unread_label(10), "9+");
}

#[test]
fn notification_class_reflects_kind_and_read_state() {
    assert_eq!(
        notification_class(&note(NotificationKind::DocumentFailed, false)),
        "notification notification--error notification--unread"
    );
    assert_eq!(
        notification_class(&note(NotificationKind::DocumentProcessed, true)),
        "notification notification--success"
    );
}
