//! Lifecycle controller for the push-notification connection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard keeps one realtime channel open per signed-in user, scoped
//! to the selected company. This controller decides when that channel is
//! opened, re-scoped and closed; the [`Transport`] owns the socket itself,
//! including any reconnect policy.
//!
//! DESIGN
//! ======
//! - Opening is idempotent: an existing handle or a connected transport
//!   short-circuits `on_identity_change`.
//! - Tenant switches re-scope the open connection in place through
//!   [`Transport::switch_scope`]; no disconnect/connect pair is issued.
//! - A missing or unusable token skips the open silently. The next identity
//!   or tenant event retries; there are no timers here.
//! - Clones share one handle. Dropping the last clone closes the connection.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::provider::{SessionProvider, Subscription};
use crate::state::{Company, SessionState, User};
use crate::token::{TokenStore, is_usable_token};

/// Socket operations the controller drives.
pub trait Transport {
    /// Open a connection authenticated by `token` and scoped to `scope_id`.
    fn connect(&self, token: &str, scope_id: &str);
    fn disconnect(&self);
    /// Re-bind an open connection to another tenant.
    fn switch_scope(&self, scope_id: &str);
    fn is_connected(&self) -> bool;
}

/// Connection status shown by the status indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

struct Inner {
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
    token_name: String,
    /// Tenant the open handle is scoped to; `None` when no handle exists.
    scope_id: RefCell<Option<String>>,
}

impl Inner {
    fn has_handle(&self) -> bool {
        self.scope_id.borrow().is_some() || self.transport.is_connected()
    }

    fn close(&self) {
        if self.has_handle() {
            self.transport.disconnect();
        }
        self.scope_id.borrow_mut().take();
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if self.has_handle() {
            log::debug!("realtime: last owner released, closing connection");
        }
        self.close();
    }
}

/// Owner of the single realtime connection.
#[derive(Clone)]
pub struct RealtimeConnectionController {
    inner: Rc<Inner>,
}

impl RealtimeConnectionController {
    /// `token_name` is the credential read from `tokens` when opening.
    #[must_use]
    pub fn new(transport: Rc<dyn Transport>, tokens: Rc<dyn TokenStore>, token_name: &str) -> Self {
        Self {
            inner: Rc::new(Inner {
                transport,
                tokens,
                token_name: token_name.to_owned(),
                scope_id: RefCell::new(None),
            }),
        }
    }

    /// React to the signed-in user or selected company changing.
    pub fn on_identity_change(&self, user: Option<&User>, selected_company: Option<&Company>) {
        let Some(user) = user else {
            if self.inner.has_handle() {
                log::info!("realtime: user signed out, closing connection");
            }
            self.inner.close();
            return;
        };
        let Some(company) = selected_company else {
            return;
        };
        if self.inner.has_handle() {
            return;
        }

        let Some(token) = self.inner.tokens.get_token(&self.inner.token_name) else {
            log::debug!("realtime: no {} token yet, deferring connect", self.inner.token_name);
            return;
        };
        if !is_usable_token(&token) {
            log::debug!("realtime: {} token unusable, deferring connect", self.inner.token_name);
            return;
        }

        log::info!("realtime: connecting user {} scoped to company {}", user.id, company.id);
        self.inner.transport.connect(&token, &company.id);
        *self.inner.scope_id.borrow_mut() = Some(company.id.clone());
    }

    /// Re-scope an open connection when the selected company changes.
    pub fn on_tenant_change(&self, selected_company: Option<&Company>) {
        let Some(company) = selected_company else {
            return;
        };
        if !self.inner.has_handle() {
            return;
        }
        if self.inner.scope_id.borrow().as_deref() == Some(company.id.as_str()) {
            return;
        }

        log::info!("realtime: switching scope to company {}", company.id);
        self.inner.transport.switch_scope(&company.id);
        *self.inner.scope_id.borrow_mut() = Some(company.id.clone());
    }

    /// Apply both identity and tenant handling for a session snapshot.
    pub fn sync(&self, session: &SessionState) {
        self.on_identity_change(session.user.as_ref(), session.selected_company.as_ref());
        self.on_tenant_change(session.selected_company.as_ref());
    }

    /// Close the connection now, regardless of session state.
    pub fn shutdown(&self) {
        self.inner.close();
    }

    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        if self.inner.transport.is_connected() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    #[must_use]
    pub fn scope_id(&self) -> Option<String> {
        self.inner.scope_id.borrow().clone()
    }

    /// Sync against the provider's current snapshot and every later publish.
    ///
    /// The subscription holds a clone of the controller, so the connection
    /// stays owned until the subscription is dropped as well.
    #[must_use = "dropping the subscription detaches the controller"]
    pub fn attach(&self, provider: &SessionProvider) -> Subscription {
        self.sync(&provider.snapshot());
        let controller = self.clone();
        provider.subscribe(move |session| controller.sync(session))
    }
}
