//! Route access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders through an [`AccessGuard`]. The guard turns
//! the latest session snapshot plus the current location into one of three
//! states and performs the matching navigation. The render layer only reads
//! [`AccessGuard::view`]; it never triggers transitions.
//!
//! DECISIONS
//! =========
//! - session still loading            -> `Checking`, no navigation
//! - not authenticated                 -> sign-in route with `returnTo`
//! - authenticated, no company         -> settings fallback, one warning
//! - authenticated with a company      -> `Allowed`
//!
//! Navigation is a replace and fires once per distinct target, so
//! re-evaluating an unchanged session is free.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::{AuthConfig, ConfigError};
use crate::provider::{SessionProvider, Subscription};
use crate::state::SessionState;

/// Query parameter carrying the page to return to after sign-in.
pub const RETURN_TO_PARAM: &str = "returnTo";

/// Navigation primitives the guard needs from the host router.
pub trait Router {
    /// Navigate to `path` without pushing a history entry.
    fn replace(&self, path: &str);
    fn current_path(&self) -> String;
    fn current_query(&self) -> BTreeMap<String, String>;
}

/// Per-route guard options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Send authenticated users without a tenant to the settings fallback.
    /// Disabled on the settings route itself.
    pub require_company: bool,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self { require_company: true }
    }
}

impl GuardPolicy {
    /// Policy for routes that must stay reachable before a company exists.
    #[must_use]
    pub fn company_optional() -> Self {
        Self { require_company: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Checking,
    Redirecting {
        target: String,
    },
    Allowed,
}

/// What the render layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Children,
}

/// Outcome of evaluating one session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Wait,
    SignIn { target: String },
    MissingCompany { target: String },
    Allow,
}

/// Access state machine for one mounted guard.
pub struct AccessGuard {
    router: Rc<dyn Router>,
    sign_in_path: String,
    settings_path: String,
    policy: GuardPolicy,
    state: GuardState,
    last_target: Option<String>,
}

impl AccessGuard {
    /// Build a guard for the configured auth method.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSignInPath`] when the active method has
    /// no sign-in route.
    pub fn new(config: &AuthConfig, router: Rc<dyn Router>, policy: GuardPolicy) -> Result<Self, ConfigError> {
        Ok(Self {
            router,
            sign_in_path: config.sign_in_path()?.to_owned(),
            settings_path: config.settings_path.clone(),
            policy,
            state: GuardState::Checking,
            last_target: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> GuardView {
        match self.state {
            GuardState::Allowed => GuardView::Children,
            GuardState::Checking | GuardState::Redirecting { .. } => GuardView::Placeholder,
        }
    }

    /// Re-evaluate against `session` and the router's current location.
    pub fn evaluate(&mut self, session: &SessionState) -> &GuardState {
        if let Some(target) = self.step(session) {
            self.router.replace(&target);
        }
        &self.state
    }

    /// Update state for `session`; returns the target to navigate to, if any.
    fn step(&mut self, session: &SessionState) -> Option<String> {
        let path = self.router.current_path();
        let query = self.router.current_query();

        match decide(session, &path, &query, &self.sign_in_path, &self.settings_path, self.policy) {
            Decision::Wait => {
                self.state = GuardState::Checking;
                None
            }
            Decision::Allow => {
                self.state = GuardState::Allowed;
                self.last_target = None;
                None
            }
            Decision::SignIn { target } => {
                let navigate = self.should_navigate(&target);
                if navigate {
                    log::debug!("guard: unauthenticated on {path}, redirecting to {target}");
                }
                self.state = GuardState::Redirecting { target: target.clone() };
                navigate.then_some(target)
            }
            Decision::MissingCompany { target } => {
                let navigate = self.should_navigate(&target);
                if navigate {
                    let user = session.user.as_ref().map_or("<unknown>", |u| u.id.as_str());
                    log::warn!("guard: no company found for authenticated user {user}, redirecting to {target}");
                }
                self.state = GuardState::Redirecting { target: target.clone() };
                navigate.then_some(target)
            }
        }
    }

    fn should_navigate(&mut self, target: &str) -> bool {
        if self.last_target.as_deref() == Some(target) {
            return false;
        }
        self.last_target = Some(target.to_owned());
        true
    }

    /// Evaluate the provider's current snapshot, then re-evaluate on every
    /// publish until the returned subscription is dropped.
    ///
    /// Navigation runs after the guard borrow is released, so a router may
    /// publish to `provider` from inside `replace`.
    #[must_use = "dropping the subscription detaches the guard"]
    pub fn attach(guard: &Rc<RefCell<Self>>, provider: &SessionProvider) -> Subscription {
        let subscription = {
            let guard = Rc::clone(guard);
            provider.subscribe(move |session| Self::apply(&guard, session))
        };
        Self::apply(guard, &provider.snapshot());
        subscription
    }

    fn apply(guard: &Rc<RefCell<Self>>, session: &SessionState) {
        let (router, target) = {
            let mut inner = guard.borrow_mut();
            let target = inner.step(session);
            (Rc::clone(&inner.router), target)
        };
        if let Some(target) = target {
            router.replace(&target);
        }
    }
}

/// Pure decision for a session snapshot at `path` with `query`.
#[must_use]
pub fn decide(
    session: &SessionState,
    path: &str,
    query: &BTreeMap<String, String>,
    sign_in_path: &str,
    settings_path: &str,
    policy: GuardPolicy,
) -> Decision {
    if session.loading {
        return Decision::Wait;
    }
    if !session.authenticated {
        return Decision::SignIn { target: sign_in_target(sign_in_path, path, query) };
    }
    if session.company.is_none() && policy.require_company {
        return Decision::MissingCompany { target: settings_path.to_owned() };
    }
    Decision::Allow
}

/// Sign-in URL carrying the current query plus `returnTo=<path>`.
///
/// Parameters are set last-write-wins, so an existing `returnTo` is replaced.
#[must_use]
pub fn sign_in_target(sign_in_path: &str, current_path: &str, query: &BTreeMap<String, String>) -> String {
    let mut params = query.clone();
    params.insert(RETURN_TO_PARAM.to_owned(), current_path.to_owned());

    let encoded = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{sign_in_path}?{encoded}")
}

/// Parse a `location.search` string (`?a=1&b=2`) into a query map.
///
/// `+` decodes to a space; later duplicates overwrite earlier ones.
#[must_use]
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), std::borrow::Cow::into_owned)
}
