//! Notification model, persisted store and push delivery.
//!
//! Every trigger source and the reminder scheduler funnel their alerts
//! through this module: a [`NewNotification`] goes into the [`AlertStore`],
//! which assigns identity, persists the capped list and fire-and-forgets
//! platform push delivery through [`PushDelivery`].

mod notification;
mod push;
mod store;

pub use crate::notifications::notification::{Category, NewNotification, Notification, Priority};
#[cfg(test)]
pub use crate::notifications::push::MockPushDelivery;
pub use crate::notifications::push::{PushDelivery, SystemPush};
pub use crate::notifications::store::AlertStore;
