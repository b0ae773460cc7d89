//! Realtime connection badge for the dashboard header.

#[cfg(test)]
#[path = "connection_indicator_test.rs"]
mod connection_indicator_test;

use leptos::prelude::*;
use session::ConnectionStatus;

#[component]
pub fn ConnectionIndicator() -> impl IntoView {
    let status = expect_context::<RwSignal<ConnectionStatus>>();

    view! {
        <span class=move || connection_status_class(status.get()) title="Realtime updates">
            <span class="connection-indicator__dot"></span>
            {move || status.get().label()}
        </span>
    }
}

fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connection-indicator connection-indicator--connected",
        ConnectionStatus::Disconnected => "connection-indicator connection-indicator--disconnected",
    }
}
