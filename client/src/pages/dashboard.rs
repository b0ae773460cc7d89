//! Dashboard page for a signed-in, company-scoped user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It renders behind `AuthGuard`, so
//! a user and an active company are present whenever it mounts. Realtime
//! notifications and price alerts are fed by the app-level connection.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::{AuthConfig, SessionState};
use session::permissions::{Permission, has_permission};

use crate::components::company_switcher::CompanySwitcher;
use crate::components::connection_indicator::ConnectionIndicator;
use crate::components::notification_panel::NotificationPanel;
use crate::components::price_alert_panel::PriceAlertPanel;
use crate::config::ClientConfig;
use crate::state::notifications::NotificationState;

/// A workspace area shown to users holding `permission`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Area {
    label: &'static str,
    permission: Permission,
}

const AREAS: [Area; 6] = [
    Area { label: "Documents", permission: Permission::DocumentsView },
    Area { label: "Upload", permission: Permission::DocumentsUpload },
    Area { label: "Reconciliation", permission: Permission::ReconciliationManage },
    Area { label: "Reports", permission: Permission::ReportsView },
    Area { label: "Team", permission: Permission::UsersManage },
    Area { label: "Billing", permission: Permission::AccountManage },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let config = expect_context::<ClientConfig>();
    let settings_path = expect_context::<AuthConfig>().settings_path;

    let user_name = move || session.get().user.map(|u| display_name(&u.name, &u.email)).unwrap_or_default();
    let company_name = move || session.get().company.map(|c| c.name).unwrap_or_default();
    let areas = move || visible_areas(session.get().role().unwrap_or_default());

    let on_sign_out = move |_| {
        notifications.update(NotificationState::clear);
        #[cfg(feature = "hydrate")]
        {
            let api_base = config.api_base_url.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out(&api_base).await;
                session.set(SessionState::signed_out());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
            session.set(SessionState::signed_out());
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="dashboard-header__company">
                    <h1>{company_name}</h1>
                    <CompanySwitcher/>
                </div>
                <div class="dashboard-header__user">
                    <ConnectionIndicator/>
                    <span class="dashboard-header__name">{user_name}</span>
                    <A href=settings_path>"Settings"</A>
                    <button class="btn" on:click=on_sign_out>"Sign out"</button>
                </div>
            </header>
            <main class="dashboard-main">
                <nav class="dashboard-areas">
                    <ul>
                        {move || {
                            areas()
                                .into_iter()
                                .map(|area| view! { <li class="dashboard-area">{area.label}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </nav>
                <NotificationPanel/>
                <PriceAlertPanel/>
            </main>
        </div>
    }
}

fn visible_areas(role: &str) -> Vec<Area> {
    AREAS.into_iter().filter(|a| has_permission(role, a.permission)).collect()
}

fn display_name(name: &str, email: &str) -> String {
    let name = name.trim();
    if name.is_empty() { email.trim().to_owned() } else { name.to_owned() }
}
