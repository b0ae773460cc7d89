//! Subscribable holder for the current [`SessionState`].
//!
//! DESIGN
//! ======
//! The provider is an explicit context object created once at the
//! composition root and shared by `Rc`. Subscribers run synchronously, in
//! subscription order, on every publish. Dropping the returned
//! [`Subscription`] detaches the callback, which is how unmounting
//! consumers release their interest.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::state::SessionState;

type Callback = Rc<dyn Fn(&SessionState)>;

#[derive(Default)]
struct Inner {
    state: RefCell<SessionState>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
    next_id: Cell<u64>,
}

/// Reactive session source shared by the guard and the realtime controller.
#[derive(Clone)]
pub struct SessionProvider {
    inner: Rc<Inner>,
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new(SessionState::initial())
    }
}

impl SessionProvider {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Replace the state and notify subscribers.
    pub fn set(&self, state: SessionState) {
        *self.inner.state.borrow_mut() = state;
        self.publish();
    }

    /// Mutate the state in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.inner.state.borrow_mut());
        self.publish();
    }

    /// Register `callback` for every future publish.
    ///
    /// The callback is not invoked with the current state; callers that need
    /// it read [`SessionProvider::snapshot`] first.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&SessionState) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription { id, provider: Rc::downgrade(&self.inner) }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn publish(&self) {
        // Snapshot both lists so callbacks may publish or unsubscribe re-entrantly.
        let state = self.snapshot();
        let subscribers: Vec<Callback> = self.inner.subscribers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in subscribers {
            callback(&state);
        }
    }
}

/// Handle for a registered session callback; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    provider: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.provider.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
