//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every piece of shared client state: the session snapshot, the
//! realtime connection controller and the signals it feeds. Pages and
//! components read them through `expect_context`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::{ConnectionStatus, RealtimeConnectionController, SessionState, Transport};

use crate::components::auth_guard::AuthGuard;
use crate::config::ClientConfig;
use crate::net::socket::{RealtimeSinks, SocketTransport};
use crate::net::types::PriceQuote;
use crate::pages::{dashboard::DashboardPage, settings::SettingsPage, sign_in::SignInPage};
use crate::state::notifications::NotificationState;
use crate::util::cookies::CookieTokenStore;

/// Every path mounted in the route table below. Redirect targets from
/// `AuthConfig` must be one of these.
pub const ROUTED_PATHS: &[&str] = &["/", "/auth/sign-in", "/auth/supabase/sign-in", "/dashboard", "/dashboard/settings"];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, starts the session check and keeps the
/// realtime connection in step with the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Both entry points refuse to start with an invalid auth config.
    let auth_config = crate::config::startup_auth_config().unwrap_or_default();
    let client_config = ClientConfig::compiled();

    let session = RwSignal::new(SessionState::initial());
    let notifications = RwSignal::new(NotificationState::default());
    let quotes = RwSignal::new(None::<PriceQuote>);
    let connection = RwSignal::new(ConnectionStatus::default());

    provide_context(session);
    provide_context(notifications);
    provide_context(quotes);
    provide_context(connection);
    provide_context(auth_config.clone());
    provide_context(client_config.clone());

    let transport: Rc<dyn Transport> =
        Rc::new(SocketTransport::new(&client_config.socket_url, RealtimeSinks { notifications, quotes }));
    let realtime = StoredValue::new_local(RealtimeConnectionController::new(
        transport,
        Rc::new(CookieTokenStore),
        &auth_config.token_cookie,
    ));

    Effect::new(move || {
        let snapshot = session.get();
        let Some(status) = realtime.try_with_value(|rt| {
            rt.sync(&snapshot);
            rt.status()
        }) else {
            return;
        };
        connection.set(status);
    });
    on_cleanup(move || {
        let _ = realtime.try_with_value(RealtimeConnectionController::shutdown);
    });

    #[cfg(feature = "hydrate")]
    {
        let api_base = client_config.api_base_url.clone();
        leptos::task::spawn_local(async move {
            let state = match crate::net::api::fetch_session(&api_base).await {
                Ok(state) => state,
                Err(e) => {
                    leptos::logging::warn!("session check failed: {e}");
                    SessionState::signed_out()
                }
            };
            session.set(state);
        });

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let poll_ms = client_config.status_poll_ms;
        leptos::task::spawn_local(async move {
            while poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(poll_ms))).await;
                let Some(status) = realtime.try_with_value(RealtimeConnectionController::status) else {
                    break;
                };
                if connection.get_untracked() != status {
                    connection.set(status);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/ledgerdesk.css"/>
        <Title text="LedgerDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("auth"), StaticSegment("sign-in")) view=SignInPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("supabase"), StaticSegment("sign-in"))
                    view=SignInPage
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("settings"))
                    view=|| view! { <AuthGuard company_optional=true><SettingsPage/></AuthGuard> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}
