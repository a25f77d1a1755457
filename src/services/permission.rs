//! Platform permission gate for notification delivery.

use async_trait::async_trait;

use super::delivery::DeliveryError;

/// Asks the platform for permission to deliver notifications.
///
/// The scheduler queries the gate before every scheduling attempt and aborts
/// with [`ScheduleError::PermissionDenied`](crate::ScheduleError::PermissionDenied)
/// when the answer is no. Implementations are expected to return the
/// already-granted status without prompting the user again where the
/// platform allows it.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Ask for (or confirm) permission. `Ok(false)` means the user refused.
    async fn request_permission(&self) -> Result<bool, DeliveryError>;
}

/// Gate that always grants, for hosts without a notification consent model.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysGranted;

#[async_trait]
impl PermissionGate for AlwaysGranted {
    async fn request_permission(&self) -> Result<bool, DeliveryError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn PermissionGate) {}

    #[tokio::test]
    async fn test_always_granted() {
        let gate = AlwaysGranted;
        assert!(gate.request_permission().await.unwrap());
    }
}
