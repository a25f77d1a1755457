//! # Error Types
//!
//! Failure taxonomy for reminder scheduling. Every failure is surfaced to
//! the immediate caller; the scheduler performs no retries and no local
//! recovery, since the platform notification store is the sole source of
//! truth.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::services::{DeliveryError, NotificationId};

/// Failures returned by [`ReminderScheduler`](crate::ReminderScheduler) operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The platform permission gate refused notification delivery.
    #[error("notification permission was not granted")]
    PermissionDenied,

    /// A cadence string from the UI layer did not name a known recurrence.
    #[error("unrecognized recurrence \"{0}\" (expected once, daily, weekly, or monthly)")]
    InvalidRecurrence(String),

    /// The requested instant is not in the future after any auto-advance.
    ///
    /// User-correctable input, not a system fault: the caller should prompt
    /// for a different time.
    #[error("requested reminder time {requested} has already passed")]
    PastSchedule { requested: DateTime<Utc> },

    /// The delivery service has no scheduled notification with this id.
    #[error("no scheduled notification with id {0}")]
    NotFound(NotificationId),

    /// Any other failure reported by the platform permission or delivery
    /// service, propagated unchanged.
    #[error("notification service failure")]
    Delivery(#[source] DeliveryError),
}

impl From<DeliveryError> for ScheduleError {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::NotFound(id) => ScheduleError::NotFound(id),
            other => ScheduleError::Delivery(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_masked_as_delivery_failure() {
        let err: ScheduleError =
            DeliveryError::NotFound(NotificationId::new("missing")).into();

        assert!(matches!(err, ScheduleError::NotFound(_)));
    }

    #[test]
    fn test_backend_failure_wraps_as_delivery() {
        let err: ScheduleError =
            DeliveryError::Backend(anyhow::anyhow!("platform store unavailable")).into();

        assert!(matches!(err, ScheduleError::Delivery(_)));
    }
}
