//! # Notification Delivery Interface
//!
//! Interface to the platform service that owns the scheduled-notification
//! store. The scheduler treats that store as authoritative: the id returned
//! by [`NotificationDelivery::schedule`] is the only persisted handle, and
//! enumeration goes straight back to the service with no local filtering.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::reminders::{NotificationContent, TriggerSpec};

/// Opaque handle issued by the delivery service for one scheduled
/// notification. Callers keep it to cancel the notification later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        NotificationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled entry as reported by the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub id: NotificationId,
    pub content: NotificationContent,
    pub trigger: TriggerSpec,
}

/// Failures reported by the platform permission or delivery service.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The service has no scheduled notification with this id.
    #[error("no scheduled notification with id {0}")]
    NotFound(NotificationId),

    /// Anything else the platform backend reports.
    #[error("notification backend failure")]
    Backend(#[from] anyhow::Error),
}

/// Platform service that schedules, cancels, and enumerates notifications.
#[async_trait]
pub trait NotificationDelivery: Send + Sync {
    /// Hand a notification to the platform scheduler, returning its handle.
    async fn schedule(
        &self,
        content: NotificationContent,
        trigger: TriggerSpec,
    ) -> Result<NotificationId, DeliveryError>;

    /// Remove one scheduled notification.
    async fn cancel(&self, id: &NotificationId) -> Result<(), DeliveryError>;

    /// Remove every scheduled notification.
    async fn cancel_all(&self) -> Result<(), DeliveryError>;

    /// Enumerate the scheduled store, unfiltered.
    async fn list_all(&self) -> Result<Vec<ScheduledNotification>, DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn NotificationDelivery) {}

    #[test]
    fn test_notification_id_display() {
        let id = NotificationId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }
}
