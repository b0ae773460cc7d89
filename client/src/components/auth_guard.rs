//! Route wrapper that renders children only for permitted sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in `AuthGuard`. The decision logic lives
//! in `session::AccessGuard`; this component wires it to the router and the
//! session context and swaps the splash screen for the page once allowed.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::{AccessGuard, AuthConfig, GuardPolicy, GuardView, SessionState};

use crate::components::splash_screen::SplashScreen;
use crate::util::auth::{LeptosRouter, install_access_guard};

/// Guard a route.
///
/// `company_optional` keeps the route reachable for signed-in users who have
/// no company yet; the settings page uses it so the fallback never loops.
#[component]
pub fn AuthGuard(#[prop(optional)] company_optional: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth_config = expect_context::<AuthConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let policy = if company_optional { GuardPolicy::company_optional() } else { GuardPolicy::default() };
    let router = Rc::new(LeptosRouter::new(navigate, location.clone()));
    let view_state = match AccessGuard::new(&auth_config, router, policy) {
        Ok(guard) => install_access_guard(guard, session, location),
        Err(e) => {
            leptos::logging::error!("access guard unavailable: {e}");
            RwSignal::new(GuardView::Placeholder)
        }
    };

    view! {
        <Show when=move || view_state.get() == GuardView::Children fallback=|| view! { <SplashScreen/> }>
            {children()}
        </Show>
    }
}
