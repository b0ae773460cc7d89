//! Recent realtime notifications shown in the dashboard header.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// Upper bound on retained notifications; older entries are dropped.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    /// Newest first.
    pub items: Vec<Notification>,
}

impl NotificationState {
    pub fn push(&mut self, notification: Notification) {
        if self.items.iter().any(|n| n.id == notification.id) {
            return;
        }
        self.items.insert(0, notification);
        self.items.truncate(MAX_NOTIFICATIONS);
    }

    #[must_use]
    pub fn unread(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Drop notifications that belong to a tenant other than `company_id`.
    pub fn retain_company(&mut self, company_id: &str) {
        self.items
            .retain(|n| n.company_id.as_deref().map_or(true, |id| id == company_id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
