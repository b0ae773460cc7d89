//! Price alert editor and live evaluation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Alerts are stored per browser (`PriceAlertBook`). Quotes arrive over the
//! realtime channel; every new quote is evaluated against the book and alerts
//! that fire are surfaced as notifications.

#[cfg(test)]
#[path = "price_alert_panel_test.rs"]
mod price_alert_panel_test;

use leptos::prelude::*;

use crate::net::types::{Notification, NotificationKind, PriceQuote};
use crate::state::notifications::NotificationState;
use crate::util::price_alerts::{Direction, PriceAlert, PriceAlertBook};

#[component]
pub fn PriceAlertPanel() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let quotes = expect_context::<RwSignal<Option<PriceQuote>>>();

    let book = RwSignal::new(PriceAlertBook::default());
    let symbol = RwSignal::new(String::new());
    let target = RwSignal::new(String::new());
    let direction = RwSignal::new(Direction::Above);
    let error = RwSignal::new(None::<String>);

    // localStorage is only readable after hydration.
    Effect::new(move || book.set(PriceAlertBook::load()));

    Effect::new(move || {
        let Some(quote) = quotes.get() else {
            return;
        };
        let mut fired = Vec::new();
        book.update(|b| fired = b.evaluate(&quote.symbol, quote.price));
        if fired.is_empty() {
            return;
        }
        book.with_untracked(PriceAlertBook::save);
        notifications.update(|n| {
            for alert in &fired {
                n.push(alert_notification(alert, quote.price));
            }
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let parsed = match parse_target(&target.get()) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let mut result = Ok(String::new());
        book.update(|b| result = b.add(&symbol.get(), parsed, direction.get()));
        match result {
            Ok(_) => {
                book.with_untracked(PriceAlertBook::save);
                symbol.set(String::new());
                target.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let remove = move |id: String| {
        book.update(|b| {
            b.remove(&id);
        });
        book.with_untracked(PriceAlertBook::save);
    };
    let rearm = move |id: String| {
        book.update(|b| {
            b.reset(&id);
        });
        book.with_untracked(PriceAlertBook::save);
    };

    view! {
        <section class="price-alerts">
            <h2>"Price alerts"</h2>
            <form class="price-alerts__form" on:submit=on_add>
                <input
                    class="price-alerts__symbol"
                    type="text"
                    placeholder="EUR/USD"
                    prop:value=move || symbol.get()
                    on:input=move |ev| symbol.set(event_target_value(&ev))
                />
                <select
                    class="price-alerts__direction"
                    on:change=move |ev| direction.set(parse_direction(&event_target_value(&ev)))
                >
                    <option value="above" selected=move || direction.get() == Direction::Above>"Above"</option>
                    <option value="below" selected=move || direction.get() == Direction::Below>"Below"</option>
                </select>
                <input
                    class="price-alerts__target"
                    type="text"
                    inputmode="decimal"
                    placeholder="1.10"
                    prop:value=move || target.get()
                    on:input=move |ev| target.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Add"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="price-alerts__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="price-alerts__list">
                {move || {
                    book.get()
                        .alerts()
                        .iter()
                        .cloned()
                        .map(|alert| {
                            let remove_id = alert.id.clone();
                            let rearm_id = alert.id.clone();
                            let class = if alert.triggered { "price-alert price-alert--triggered" } else { "price-alert" };
                            view! {
                                <li class=class>
                                    <span>{alert_label(&alert)}</span>
                                    {alert.triggered.then(|| view! {
                                        <button class="btn btn--small" on:click=move |_| rearm(rearm_id.clone())>
                                            "Re-arm"
                                        </button>
                                    })}
                                    <button class="btn btn--small" on:click=move |_| remove(remove_id.clone())>
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}

fn parse_target(raw: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| format!("\"{}\" is not a price", raw.trim()))
}

fn parse_direction(raw: &str) -> Direction {
    if raw.eq_ignore_ascii_case("below") { Direction::Below } else { Direction::Above }
}

fn alert_label(alert: &PriceAlert) -> String {
    let dir = match alert.direction {
        Direction::Above => "above",
        Direction::Below => "below",
    };
    format!("{} {dir} {}", alert.symbol, alert.target)
}

fn alert_notification(alert: &PriceAlert, price: f64) -> Notification {
    Notification {
        id: format!("price-alert:{}:{}", alert.id, uuid::Uuid::new_v4()),
        kind: NotificationKind::General,
        message: format!("{} is at {price} ({})", alert.symbol, alert_label(alert)),
        company_id: None,
        read: false,
    }
}
