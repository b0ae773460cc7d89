use super::*;

fn alert(direction: Direction) -> PriceAlert {
    PriceAlert { id: "a1".to_owned(), symbol: "AAPL".to_owned(), target: 200.0, direction, triggered: true }
}

#[test]
fn parse_target_accepts_thousands_separators() {
    assert_eq!(parse_target(" 1,250.5 "), Ok(1250.5));
    assert!(parse_target("abc").is_err());
    assert!(parse_target("").is_err());
}

#[test]
fn parse_direction_defaults_to_above() {
    assert_eq!(parse_direction("below"), Direction::Below);
    assert_eq!(parse_direction("BELOW"), Direction::Below);
    assert_eq!(parse_direction("above"), Direction::Above);
    assert_eq!(parse_direction("sideways"), Direction::Above);
}

#[test]
fn alert_label_reads_naturally() {
    assert_eq!(alert_label(&alert(Direction::Above)), "AAPL above 200");
    assert_eq!(alert_label(&alert(Direction::Below)), "AAPL below 200");
}

#[test]
fn alert_notification_is_unique_per_firing() {
    let note = alert_notification(&alert(Direction::Above), 201.5);
    let again = alert_notification(&alert(Direction::Above), 201.5);
    assert!(note.id.starts_with("price-alert:a1:"));
    assert_ne!(note.id, again.id);
    assert_eq!(note.kind, NotificationKind::General);
    assert_eq!(note.message, "AAPL is at 201.5 (AAPL above 200)");
    assert!(!note.read);
}
