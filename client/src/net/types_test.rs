use super::*;

fn frame(event: &str, data: serde_json::Value) -> RealtimeFrame {
    RealtimeFrame { event: event.to_owned(), data }
}

#[test]
fn company_switch_frame_carries_company_id() {
    let frame = RealtimeFrame::company_switch("B");
    assert_eq!(frame.event, COMPANY_SWITCH_EVENT);
    assert_eq!(frame.data, serde_json::json!({ "companyId": "B" }));
    assert_eq!(
        serde_json::to_string(&frame).unwrap(),
        r#"{"event":"company:switch","data":{"companyId":"B"}}"#
    );
}

#[test]
fn frame_without_data_deserializes_to_null() {
    let frame: RealtimeFrame = serde_json::from_str(r#"{"event":"ping"}"#).unwrap();
    assert_eq!(frame.event, "ping");
    assert!(frame.data.is_null());
}

#[test]
fn document_processed_uses_server_message() {
    let n = parse_notification(&frame(
        "document:processed",
        serde_json::json!({ "id": "n-1", "message": "Invoice INV-7 parsed", "companyId": "A" }),
    ))
    .unwrap();
    assert_eq!(n.id, "n-1");
    assert_eq!(n.kind, NotificationKind::DocumentProcessed);
    assert_eq!(n.message, "Invoice INV-7 parsed");
    assert_eq!(n.company_id.as_deref(), Some("A"));
    assert!(!n.read);
}

#[test]
fn missing_message_falls_back_to_kind_default() {
    let n = parse_notification(&frame("document:failed", serde_json::json!({ "message": "  " }))).unwrap();
    assert_eq!(n.message, "A document could not be processed.");
    assert!(!n.id.is_empty());
}

#[test]
fn unknown_events_become_general_notifications() {
    let n = parse_notification(&frame("bill:due", serde_json::Value::Null)).unwrap();
    assert_eq!(n.kind, NotificationKind::General);
    assert_eq!(n.company_id, None);
}

#[test]
fn control_frames_are_not_notifications() {
    for event in ["ping", "pong", "connected", "company:switched", "price:update"] {
        assert_eq!(parse_notification(&frame(event, serde_json::json!({}))), None);
    }
}

#[test]
fn price_update_frames_yield_quotes() {
    let quote = parse_price_quote(&frame(PRICE_UPDATE_EVENT, serde_json::json!({ "symbol": "EUR/USD", "price": 1.0842 })));
    assert_eq!(quote, Some(PriceQuote { symbol: "EUR/USD".to_owned(), price: 1.0842 }));
}

#[test]
fn malformed_or_foreign_frames_yield_no_quote() {
    assert_eq!(parse_price_quote(&frame(PRICE_UPDATE_EVENT, serde_json::json!({ "symbol": "AAPL" }))), None);
    assert_eq!(parse_price_quote(&frame(PRICE_UPDATE_EVENT, serde_json::json!({ "symbol": " ", "price": 3.0 }))), None);
    assert_eq!(parse_price_quote(&frame("document:processed", serde_json::json!({ "symbol": "AAPL", "price": 3.0 }))), None);
}
