//! # Reminders Feature
//!
//! Medication, appointment, and custom reminder scheduling against the
//! platform notification service.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.2.0: Calendar-month day clamping for short months
//! - 1.1.0: Appointment reminders with configurable lead time
//! - 1.0.0: Initial release with medication and custom reminders

pub mod content;
pub mod request;
pub mod scheduler;
pub mod trigger;

pub use content::{NotificationContent, Priority};
pub use request::{Recurrence, ReminderKind, ReminderRequest, TimeOfDay};
pub use scheduler::ReminderScheduler;
pub use trigger::TriggerSpec;
