//! Tenant selector in the dashboard header.
//!
//! Switching company mutates the session context only; the realtime
//! controller observes the change and re-scopes the open connection.

#[cfg(test)]
#[path = "company_switcher_test.rs"]
mod company_switcher_test;

use leptos::prelude::*;
use session::{Company, SessionState};

use crate::state::notifications::NotificationState;

#[component]
pub fn CompanySwitcher() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let options = move || company_options(&session.get());
    let selected = move || session.get().selected_company.map(|c| c.id).unwrap_or_default();

    let on_change = move |ev| {
        let id = event_target_value(&ev);
        let mut switched = false;
        session.update(|s| switched = s.select_company(&id));
        if switched {
            notifications.update(|n| n.retain_company(&id));
        }
    };

    view! {
        <Show when=move || !options().is_empty()>
            <select class="company-switcher" prop:value=selected on:change=on_change>
                {move || {
                    options()
                        .into_iter()
                        .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </Show>
    }
}

/// Companies to offer, falling back to the active company alone.
fn company_options(session: &SessionState) -> Vec<Company> {
    if !session.companies.is_empty() {
        return session.companies.clone();
    }
    session
        .selected_company
        .clone()
        .or_else(|| session.company.clone())
        .into_iter()
        .collect()
}
