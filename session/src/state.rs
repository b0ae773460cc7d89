//! Session snapshot published by the session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access guard and the realtime controller both read this model. It is
//! decoded from the backend's "who am I" response and replaced wholesale on
//! every change, so consumers never observe a half-updated session.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Role key used for permission lookups (e.g. `"owner"`, `"accountant"`).
    #[serde(default)]
    pub role: String,
}

/// A tenant: the business entity a session is scoped to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Authentication and tenant state for the current browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub authenticated: bool,
    /// True while the initial session check is still in flight.
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub user: Option<User>,
    /// Active tenant used for access decisions.
    #[serde(default)]
    pub company: Option<Company>,
    /// Tenant the realtime channel should be scoped to. Lags or leads
    /// `company` briefly while a tenant switch is in progress.
    #[serde(default)]
    pub selected_company: Option<Company>,
    /// Tenants the user may switch between.
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl SessionState {
    /// State before the first session check resolves.
    #[must_use]
    pub fn initial() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Resolved state with no signed-in user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Resolved state for a signed-in user scoped to `company`.
    #[must_use]
    pub fn signed_in(user: User, company: Option<Company>) -> Self {
        Self {
            authenticated: true,
            loading: false,
            user: Some(user),
            selected_company: company.clone(),
            companies: company.iter().cloned().collect(),
            company,
        }
    }

    /// Make `company_id` both the active and the realtime-selected tenant.
    ///
    /// Returns `false` when the id is not one of `companies`.
    pub fn select_company(&mut self, company_id: &str) -> bool {
        let Some(found) = self.companies.iter().find(|c| c.id == company_id).cloned() else {
            return false;
        };
        self.company = Some(found.clone());
        self.selected_company = Some(found);
        true
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}
