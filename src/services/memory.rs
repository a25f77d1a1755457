//! # In-Memory Delivery Backend
//!
//! DashMap-backed implementation of [`NotificationDelivery`]. Stands in for
//! the OS notification scheduler in tests and in host shells without a
//! platform notification surface. Entries never fire on their own; the
//! store only records what would have been delivered.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use uuid::Uuid;

use super::delivery::{
    DeliveryError, NotificationDelivery, NotificationId, ScheduledNotification,
};
use crate::features::reminders::{NotificationContent, TriggerSpec};

#[derive(Default)]
pub struct InMemoryDelivery {
    scheduled: DashMap<NotificationId, ScheduledNotification>,
}

impl InMemoryDelivery {
    pub fn new() -> Self {
        InMemoryDelivery {
            scheduled: DashMap::new(),
        }
    }

    /// Number of notifications currently scheduled.
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}

#[async_trait]
impl NotificationDelivery for InMemoryDelivery {
    async fn schedule(
        &self,
        content: NotificationContent,
        trigger: TriggerSpec,
    ) -> Result<NotificationId, DeliveryError> {
        let id = NotificationId::new(Uuid::new_v4().to_string());
        debug!("In-memory store scheduled {id}: {trigger}");
        self.scheduled.insert(
            id.clone(),
            ScheduledNotification {
                id: id.clone(),
                content,
                trigger,
            },
        );
        Ok(id)
    }

    async fn cancel(&self, id: &NotificationId) -> Result<(), DeliveryError> {
        match self.scheduled.remove(id) {
            Some(_) => Ok(()),
            None => Err(DeliveryError::NotFound(id.clone())),
        }
    }

    async fn cancel_all(&self) -> Result<(), DeliveryError> {
        self.scheduled.clear();
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ScheduledNotification>, DeliveryError> {
        Ok(self
            .scheduled
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
