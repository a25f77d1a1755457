//! # Core Module
//!
//! Configuration and error handling for the companion scheduling core.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Closed error taxonomy for scheduling failures
//! - 1.0.0: Initial creation with notification config

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::NotificationConfig;
pub use error::ScheduleError;
