//! Platform push delivery seam.
//!
//! The engine stores every notification in-app; push delivery to the
//! platform's notification facility is an optional, fire-and-forget side
//! effect behind the [`PushDelivery`] trait. A failed or unavailable
//! delivery never surfaces to the code that produced the notification.

use log::{debug, info};
use mockall::automock;

use crate::notifications::Notification;

/// Trait for delivering a notification to the platform facility.
///
/// Implementations must be infallible from the caller's point of view:
/// denied permission, missing platform support or delivery errors are
/// handled (or logged) internally.
#[automock]
pub trait PushDelivery: Send + Sync {
    /// Best-effort delivery of a system-level alert.
    fn deliver(&self, notification: &Notification);
}

/// Push delivery gated on user permission.
///
/// Permission is requested once by the embedding application and the
/// outcome is handed to the engine as the `enabled` flag; when the
/// permission was denied or the platform has no notification facility the
/// delivery silently degrades to a no-op.
pub struct SystemPush {
    enabled: bool,
}

impl SystemPush {
    pub fn new(enabled: bool) -> Self {
        SystemPush { enabled }
    }
}

impl PushDelivery for SystemPush {
    fn deliver(&self, notification: &Notification) {
        if !self.enabled {
            debug!("push disabled, keeping notification {} in-app only", notification.id);
            return;
        }

        info!("push: {} - {}", notification.title, notification.body);
    }
}
