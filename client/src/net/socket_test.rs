use super::*;
use crate::net::types::NotificationKind;

#[test]
fn backoff_doubles_up_to_cap() {
    let mut backoff = INITIAL_BACKOFF_MS;
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(backoff);
        backoff = next_backoff_ms(backoff);
    }
    assert_eq!(seen, vec![1000, 2000, 4000, 8000, 10_000, 10_000]);
}

#[test]
fn connect_url_appends_encoded_credentials() {
    assert_eq!(
        connect_url("wss://rt.example.com/socket", "a.b+c", "co 1"),
        "wss://rt.example.com/socket?token=a.b%2Bc&companyId=co%201"
    );
    assert_eq!(
        connect_url("ws://localhost:3000/socket?v=2", "t", "A"),
        "ws://localhost:3000/socket?v=2&token=t&companyId=A"
    );
}

#[test]
fn decode_inbound_reads_notification_frames() {
    let Some(Inbound::Notification(note)) = decode_inbound(
        r#"{"event":"document:processed","data":{"id":"n1","message":"Invoice 42 parsed","companyId":"A"}}"#,
    ) else {
        panic!("expected a notification");
    };
    assert_eq!(note.id, "n1");
    assert_eq!(note.kind, NotificationKind::DocumentProcessed);
    assert_eq!(note.company_id.as_deref(), Some("A"));
}

#[test]
fn decode_inbound_routes_price_updates_to_quotes() {
    assert_eq!(
        decode_inbound(r#"{"event":"price:update","data":{"symbol":"AAPL","price":201.5}}"#),
        Some(Inbound::Quote(PriceQuote { symbol: "AAPL".to_owned(), price: 201.5 }))
    );
}

#[test]
fn decode_inbound_skips_control_and_garbage() {
    assert!(decode_inbound(r#"{"event":"ping"}"#).is_none());
    assert!(decode_inbound(r#"{"event":"company:switched","data":{"companyId":"B"}}"#).is_none());
    assert!(decode_inbound("not json").is_none());
}

#[test]
fn company_switch_frame_encodes_as_json_text() {
    let text = encode_frame(&RealtimeFrame::company_switch("B")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({ "event": "company:switch", "data": { "companyId": "B" } }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_transport_is_inert() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        let sinks = RealtimeSinks {
            notifications: RwSignal::new(NotificationState::default()),
            quotes: RwSignal::new(None),
        };
        let transport = SocketTransport::new("/socket", sinks);
        transport.connect("tok", "A");
        transport.switch_scope("B");
        transport.disconnect();
        assert!(!transport.is_connected());
    });
}
