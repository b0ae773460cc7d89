//! Email and password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes send anonymous visitors here with a `returnTo` query
//! parameter. Once the session is authenticated the page forwards to that
//! path when it is local, otherwise to the dashboard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::SessionState;
use session::guard::{RETURN_TO_PARAM, parse_query};

use crate::config::ClientConfig;
use crate::util::auth::safe_return_to;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let state = session.get();
        if state.loading || !state.authenticated {
            return;
        }
        let query = parse_query(&location.search.get_untracked());
        let target = safe_return_to(query.get(RETURN_TO_PARAM).map(String::as_str));
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api_base = config.api_base_url.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::api::SignInRequest { email: email_value, password: password_value };
                match crate::net::api::sign_in(&api_base, &request).await {
                    Ok(state) => {
                        info.set(String::new());
                        session.set(state);
                    }
                    Err(e) => info.set(format!("Sign in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, email_value, password_value, session);
        }
    };

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1>"LedgerDesk"</h1>
                <p class="sign-in-card__subtitle">"Sign in to your workspace"</p>
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="sign-in-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="sign-in-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="sign-in-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
