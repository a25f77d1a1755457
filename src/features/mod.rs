//! # Features Module
//!
//! Feature modules for the companion core. Reminder scheduling is the only
//! feature with logic of its own; everything else the application does is a
//! direct pass-through to platform services.

pub mod reminders;

pub use reminders::ReminderScheduler;
