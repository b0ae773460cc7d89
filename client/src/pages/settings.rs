//! Account settings page.
//!
//! Reachable without an active company: the access guard sends signed-in
//! users here when they have no tenant yet.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::SessionState;

use crate::components::company_switcher::CompanySwitcher;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let has_company = move || session.get().company.is_some();
    let email = move || session.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || role_label(session.get().role().unwrap_or_default());

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-section">
                <h2>"Account"</h2>
                <dl>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd>{role}</dd>
                </dl>
            </section>
            <section class="settings-section">
                <h2>"Company"</h2>
                <Show
                    when=has_company
                    fallback=|| {
                        view! {
                            <p class="settings-notice">
                                "Your account is not linked to a company yet. Ask an administrator for an invite."
                            </p>
                        }
                    }
                >
                    <CompanySwitcher/>
                    <A href="/dashboard">"Back to dashboard"</A>
                </Show>
            </section>
        </div>
    }
}

fn role_label(role: &str) -> String {
    let role = role.trim();
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => "No role".to_owned(),
    }
}
