// Core layer - shared configuration and error types
pub mod core;

// Features layer - all feature modules
pub mod features;

// Services layer - interfaces over the platform notification surface
pub mod services;

// Re-export commonly used core items
pub use crate::core::{NotificationConfig, ScheduleError};

// Re-export feature items
pub use crate::features::reminders::{
    // Requests
    Recurrence, ReminderKind, ReminderRequest, TimeOfDay,
    // Scheduling
    NotificationContent, Priority, ReminderScheduler, TriggerSpec,
};

// Re-export service items
pub use crate::services::{
    AlwaysGranted, Clock, DeliveryError, FixedClock, InMemoryDelivery, NotificationDelivery,
    NotificationId, PermissionGate, ScheduledNotification, SystemClock,
};
