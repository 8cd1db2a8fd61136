//! Persisted, capped notification list.
//!
//! The [`AlertStore`] is the single funnel every trigger source and the
//! reminder scheduler write through. It owns identity assignment, the
//! retention cap and the optional platform-push side effect.

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::{
    notifications::{NewNotification, Notification, Priority, PushDelivery},
    storage::Storage,
};

/// Storage key holding the serialized notification list.
const STORAGE_KEY: &str = "notifications";

/// Maximum number of stored notifications; oldest entries are evicted first.
const MAX_STORED: usize = 50;

/// Persisted notification list, most recent first.
///
/// Load failures and corrupted persisted content recover to an empty list,
/// the store never raises to its caller.
pub struct AlertStore {
    storage: Storage,
    /// Most recent first.
    notifications: Vec<Notification>,
    push: Box<dyn PushDelivery>,
}

impl AlertStore {
    /// Creates the store, loading any persisted notifications.
    pub async fn new(storage: Storage, push: Box<dyn PushDelivery>) -> Self {
        let notifications = storage.get(STORAGE_KEY).await.unwrap_or_default();

        AlertStore {
            storage,
            notifications,
            push,
        }
    }

    /// Assigns id and timestamp, stores the notification and returns it.
    ///
    /// The list is capped at [`MAX_STORED`]; the oldest entries fall off.
    /// When the notification is high priority or explicitly marked for
    /// push, it is also handed to the platform facility; that delivery is
    /// fire-and-forget and cannot fail this call.
    pub async fn add(&mut self, new: NewNotification) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            category: new.category,
            title: new.title,
            body: new.body,
            created_at: Utc::now(),
            read: false,
            action_target: new.action_target,
            payload: new.payload,
        };

        self.notifications.insert(0, notification.clone());
        self.notifications.truncate(MAX_STORED);
        self.persist().await;

        info!(
            "stored {:?} notification: {}",
            notification.category, notification.title
        );

        if new.push || new.priority == Priority::High {
            self.push.deliver(&notification);
        }

        notification
    }

    /// All stored notifications, most recent first.
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Marks one notification read. Unknown ids are ignored.
    pub async fn mark_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
            self.persist().await;
        }
    }

    /// Marks every stored notification read.
    pub async fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.persist().await;
    }

    /// Removes all stored notifications.
    pub async fn clear(&mut self) {
        self.notifications.clear();
        self.storage.remove(STORAGE_KEY).await;
        info!("cleared all notifications");
    }

    async fn persist(&self) {
        self.storage.set(STORAGE_KEY, &self.notifications).await;
    }
}
