//! Full-page placeholder shown while access is being decided.

use leptos::prelude::*;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="splash-screen" role="status" aria-live="polite">
            <div class="splash-screen__logo">"LedgerDesk"</div>
            <div class="splash-screen__spinner"></div>
        </div>
    }
}
