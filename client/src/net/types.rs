//! Realtime wire DTOs for the push-notification channel.
//!
//! DESIGN
//! ======
//! Frames are `{ "event": "...", "data": {...} }` JSON text messages. The
//! payload stays a `serde_json::Value` so new server events degrade to a
//! generic notification instead of a parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sent by the client to re-scope an open connection.
pub const COMPANY_SWITCH_EVENT: &str = "company:switch";

/// Market quote pushed by the server for watched symbols.
pub const PRICE_UPDATE_EVENT: &str = "price:update";

/// A single message on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealtimeFrame {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl RealtimeFrame {
    #[must_use]
    pub fn company_switch(company_id: &str) -> Self {
        Self {
            event: COMPANY_SWITCH_EVENT.to_owned(),
            data: serde_json::json!({ "companyId": company_id }),
        }
    }
}

/// Notification kind derived from the frame event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    DocumentProcessed,
    DocumentFailed,
    ReconciliationUpdated,
    General,
}

impl NotificationKind {
    fn from_event(event: &str) -> Self {
        match event {
            "document:processed" => Self::DocumentProcessed,
            "document:failed" => Self::DocumentFailed,
            "reconciliation:updated" => Self::ReconciliationUpdated,
            _ => Self::General,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::DocumentProcessed => "A document finished processing.",
            Self::DocumentFailed => "A document could not be processed.",
            Self::ReconciliationUpdated => "Reconciliation was updated.",
            Self::General => "New notification.",
        }
    }
}

/// A user-facing notification received over the realtime channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Tenant the event belongs to, when the server says so.
    pub company_id: Option<String>,
    pub read: bool,
}

/// Turn an inbound frame into a notification.
///
/// Returns `None` for control frames (`ping`, `company:switched`, ...).
#[must_use]
pub fn parse_notification(frame: &RealtimeFrame) -> Option<Notification> {
    if matches!(
        frame.event.as_str(),
        "ping" | "pong" | "connected" | "company:switched" | PRICE_UPDATE_EVENT
    ) {
        return None;
    }
    let kind = NotificationKind::from_event(&frame.event);
    let message = frame
        .data
        .get("message")
        .and_then(|v| v.as_str())
        .filter(|m| !m.trim().is_empty())
        .map_or_else(|| kind.default_message().to_owned(), ToOwned::to_owned);
    let id = frame
        .data
        .get("id")
        .and_then(|v| v.as_str())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), ToOwned::to_owned);
    let company_id = frame
        .data
        .get("companyId")
        .and_then(|v| v.as_str())
        .map(ToOwned::to_owned);

    Some(Notification { id, kind, message, company_id, read: false })
}

/// Latest price for one symbol.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: f64,
}

/// Extract a quote from a `price:update` frame.
#[must_use]
pub fn parse_price_quote(frame: &RealtimeFrame) -> Option<PriceQuote> {
    if frame.event != PRICE_UPDATE_EVENT {
        return None;
    }
    let quote = serde_json::from_value::<PriceQuote>(frame.data.clone()).ok()?;
    (!quote.symbol.trim().is_empty() && quote.price.is_finite()).then_some(quote)
}
