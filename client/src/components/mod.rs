//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell (guard placeholder, tenant
//! switcher, connection badge, notification and alert panels) while reading
//! and writing shared state from Leptos context providers.

pub mod auth_guard;
pub mod company_switcher;
pub mod connection_indicator;
pub mod notification_panel;
pub mod price_alert_panel;
pub mod splash_screen;
