//! WebSocket transport for the realtime notification channel.
//!
//! `SocketTransport` implements the session crate's `Transport` seam. The
//! connection controller decides *when* to connect, re-scope and tear down;
//! this module owns *how*: the socket lifecycle, reconnection with
//! exponential backoff and routing inbound frames into client state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. Server builds get an inert transport.
//!
//! DESIGN
//! ======
//! Every `connect` bumps a generation counter and spawns a fresh loop. A loop
//! exits as soon as its generation is stale, so a `disconnect` followed by a
//! quick `connect` never leaves two sockets alive. Dropping the outbound
//! sender ends the send half, which closes the socket.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use leptos::prelude::RwSignal;
use session::Transport;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Notification, RealtimeFrame, parse_notification, parse_price_quote};
use crate::net::types::PriceQuote;
use crate::state::notifications::NotificationState;

#[cfg(any(test, feature = "hydrate"))]
const INITIAL_BACKOFF_MS: u32 = 1000;
#[cfg(any(test, feature = "hydrate"))]
const MAX_BACKOFF_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn next_backoff_ms(current: u32) -> u32 {
    current.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Append the token and tenant scope to the socket endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn connect_url(base: &str, token: &str, company_id: &str) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{sep}token={}&companyId={}",
        urlencoding::encode(token),
        urlencoding::encode(company_id)
    )
}

/// Inbound frame routed to client state.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq)]
enum Inbound {
    Notification(Notification),
    Quote(PriceQuote),
}

/// Decode a text message, skipping control frames and garbage.
#[cfg(any(test, feature = "hydrate"))]
fn decode_inbound(text: &str) -> Option<Inbound> {
    let frame = serde_json::from_str::<RealtimeFrame>(text).ok()?;
    if let Some(quote) = parse_price_quote(&frame) {
        return Some(Inbound::Quote(quote));
    }
    parse_notification(&frame).map(Inbound::Notification)
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_frame(frame: &RealtimeFrame) -> Option<String> {
    serde_json::to_string(frame).ok()
}

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct SocketShared {
    wanted: bool,
    open: bool,
    generation: u64,
    token: String,
    scope_id: String,
    outbound: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

#[cfg(feature = "hydrate")]
impl SocketShared {
    fn is_current(&self, generation: u64) -> bool {
        self.wanted && self.generation == generation
    }

    fn send(&self, frame: &RealtimeFrame) -> bool {
        match (&self.outbound, encode_frame(frame)) {
            (Some(tx), Some(text)) => tx.unbounded_send(text).is_ok(),
            _ => false,
        }
    }
}

/// Signals the socket writes inbound frames into.
#[derive(Clone, Copy)]
pub struct RealtimeSinks {
    pub notifications: RwSignal<NotificationState>,
    pub quotes: RwSignal<Option<PriceQuote>>,
}

/// Browser WebSocket transport feeding notification and quote state.
pub struct SocketTransport {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    socket_url: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    sinks: RealtimeSinks,
    #[cfg(feature = "hydrate")]
    shared: std::rc::Rc<std::cell::RefCell<SocketShared>>,
}

impl SocketTransport {
    /// `socket_url` may be absolute (`wss://...`) or a path resolved against
    /// the page host at connect time.
    #[must_use]
    pub fn new(socket_url: &str, sinks: RealtimeSinks) -> Self {
        Self {
            socket_url: socket_url.to_owned(),
            sinks,
            #[cfg(feature = "hydrate")]
            shared: std::rc::Rc::default(),
        }
    }

    #[cfg(feature = "hydrate")]
    fn page_socket_url(&self) -> String {
        let location = web_sys::window().map(|w| w.location());
        let href = location.as_ref().and_then(|l| l.href().ok()).unwrap_or_default();
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        crate::config::resolve_socket_url(&self.socket_url, &href, &host)
    }
}

impl Transport for SocketTransport {
    fn connect(&self, token: &str, scope_id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let generation = {
                let mut shared = self.shared.borrow_mut();
                shared.wanted = true;
                shared.generation += 1;
                shared.token = token.to_owned();
                shared.scope_id = scope_id.to_owned();
                shared.outbound = None;
                shared.open = false;
                shared.generation
            };
            log::info!("realtime: connecting for company {scope_id}");
            leptos::task::spawn_local(socket_loop(
                self.page_socket_url(),
                self.shared.clone(),
                self.sinks,
                generation,
            ));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, scope_id);
        }
    }

    fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mut shared = self.shared.borrow_mut();
            shared.wanted = false;
            shared.generation += 1;
            shared.open = false;
            shared.outbound = None;
            log::info!("realtime: disconnected");
        }
    }

    fn switch_scope(&self, scope_id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let mut shared = self.shared.borrow_mut();
            shared.scope_id = scope_id.to_owned();
            // A socket that is still connecting picks up the new scope from
            // the connect URL on its next attempt.
            if !shared.send(&RealtimeFrame::company_switch(scope_id)) {
                log::debug!("realtime: queued company switch to {scope_id}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scope_id;
        }
    }

    fn is_connected(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.shared.borrow().open
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Reconnect loop for one connect generation.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    base_url: String,
    shared: std::rc::Rc<std::cell::RefCell<SocketShared>>,
    sinks: RealtimeSinks,
    generation: u64,
) {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        let url = {
            let state = shared.borrow();
            if !state.is_current(generation) {
                return;
            }
            connect_url(&base_url, &state.token, &state.scope_id)
        };

        match run_connection(&url, &shared, sinks, generation).await {
            Ok(()) => {
                leptos::logging::log!("realtime socket closed");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Err(e) => {
                leptos::logging::warn!("realtime socket error: {e}");
            }
        }

        {
            let mut state = shared.borrow_mut();
            if state.generation == generation {
                state.open = false;
                state.outbound = None;
            }
            if !state.is_current(generation) {
                return;
            }
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
}

/// Open one socket and pump messages until either side finishes.
#[cfg(feature = "hydrate")]
async fn run_connection(
    url: &str,
    shared: &std::rc::Rc<std::cell::RefCell<SocketShared>>,
    sinks: RealtimeSinks,
    generation: u64,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::{Set, Update};

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();

    {
        let mut state = shared.borrow_mut();
        if state.generation != generation {
            return Ok(());
        }
        state.open = true;
        state.outbound = Some(tx);
    }

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match decode_inbound(&text) {
                    Some(Inbound::Notification(note)) => sinks.notifications.update(|n| n.push(note)),
                    Some(Inbound::Quote(quote)) => sinks.quotes.set(Some(quote)),
                    None => {}
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("realtime recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
