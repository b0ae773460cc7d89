//! Realtime notification list for the dashboard.

#[cfg(test)]
#[path = "notification_panel_test.rs"]
mod notification_panel_test;

use leptos::prelude::*;

use crate::net::types::{Notification, NotificationKind};
use crate::state::notifications::NotificationState;

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let unread = move || notifications.get().unread();
    let on_mark_read = move |_| notifications.update(NotificationState::mark_all_read);
    let on_clear = move |_| notifications.update(NotificationState::clear);

    view! {
        <section class="notification-panel">
            <header class="notification-panel__header">
                <h2>"Notifications"</h2>
                <span class="notification-panel__badge">{move || unread_label(unread())}</span>
                <button class="btn btn--small" on:click=on_mark_read disabled=move || unread() == 0>
                    "Mark all read"
                </button>
                <button class="btn btn--small" on:click=on_clear>
                    "Clear"
                </button>
            </header>
            <Show
                when=move || !notifications.get().items.is_empty()
                fallback=|| view! { <p class="notification-panel__empty">"You're all caught up."</p> }
            >
                <ul class="notification-panel__list">
                    {move || {
                        notifications
                            .get()
                            .items
                            .into_iter()
                            .map(|n| view! { <li class=notification_class(&n)>{n.message.clone()}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}

fn unread_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1..=9 => count.to_string(),
        _ => "9+".to_owned(),
    }
}

fn notification_class(notification: &Notification) -> String {
    let kind = match notification.kind {
        NotificationKind::DocumentProcessed => "success",
        NotificationKind::DocumentFailed => "error",
        NotificationKind::ReconciliationUpdated => "info",
        NotificationKind::General => "general",
    };
    if notification.read {
        format!("notification notification--{kind}")
    } else {
        format!("notification notification--{kind} notification--unread")
    }
}
