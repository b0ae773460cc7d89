//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard behavior. `LeptosRouter` adapts
//! `leptos_router` navigation to the session crate's `Router` seam, and
//! `install_access_guard` re-runs an `AccessGuard` whenever the session or the
//! current location changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::location::Location;
use session::guard::parse_query;
use session::{AccessGuard, GuardView, Router, SessionState};

/// Landing page for signed-in users when no safe `returnTo` is present.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// `session::Router` backed by the active `leptos_router` context.
pub struct LeptosRouter {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
    location: Location,
}

impl LeptosRouter {
    pub fn new<F>(navigate: F, location: Location) -> Self
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        Self { navigate: Rc::new(navigate), location }
    }
}

impl Router for LeptosRouter {
    fn replace(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }

    fn current_path(&self) -> String {
        self.location.pathname.get_untracked()
    }

    fn current_query(&self) -> BTreeMap<String, String> {
        parse_query(&self.location.search.get_untracked())
    }
}

/// Drive `guard` from the session signal and the router location.
///
/// Returns the render decision as a signal. Navigation happens inside the
/// guard; the signal only flips between placeholder and children.
pub fn install_access_guard(
    mut guard: AccessGuard,
    session: RwSignal<SessionState>,
    location: Location,
) -> RwSignal<GuardView> {
    let view_state = RwSignal::new(GuardView::Placeholder);
    Effect::new(move || {
        let snapshot = session.get();
        location.pathname.track();
        location.search.track();
        guard.evaluate(&snapshot);
        let view = guard.view();
        if view_state.get_untracked() != view {
            view_state.set(view);
        }
    });
    view_state
}

/// Accept only same-origin absolute paths as post-sign-in destinations.
#[must_use]
pub fn safe_return_to(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") && !path.contains("://")
}
