//! # Notification Configuration
//!
//! Process-wide notification behavior. Initialized once at application start
//! and passed into the scheduler at construction; it lives for the process
//! lifetime. The foreground presentation flags are consumed by the host
//! shell's notification handler, the scheduling defaults by the scheduler
//! itself.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use serde::{Deserialize, Serialize};

/// Fallback lead time for appointment reminders, in minutes.
pub const DEFAULT_LEAD_MINUTES: u32 = 30;

/// Notification behavior for the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Show an alert banner while the app is foregrounded.
    pub alert_in_foreground: bool,
    /// Play the notification sound while the app is foregrounded.
    pub sound_in_foreground: bool,
    /// Update the app badge count while the app is foregrounded.
    pub badge_in_foreground: bool,
    /// Lead time applied to appointment reminders that don't specify one.
    pub default_lead_minutes: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            alert_in_foreground: true,
            sound_in_foreground: true,
            badge_in_foreground: true,
            default_lead_minutes: DEFAULT_LEAD_MINUTES,
        }
    }
}

impl NotificationConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Reads a `.env` file if one is present. Recognized keys:
    /// `COMPANION_ALERT_IN_FOREGROUND`, `COMPANION_SOUND_IN_FOREGROUND`,
    /// `COMPANION_BADGE_IN_FOREGROUND`, `COMPANION_DEFAULT_LEAD_MINUTES`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = NotificationConfig::default();
        NotificationConfig {
            alert_in_foreground: env_flag(
                "COMPANION_ALERT_IN_FOREGROUND",
                defaults.alert_in_foreground,
            ),
            sound_in_foreground: env_flag(
                "COMPANION_SOUND_IN_FOREGROUND",
                defaults.sound_in_foreground,
            ),
            badge_in_foreground: env_flag(
                "COMPANION_BADGE_IN_FOREGROUND",
                defaults.badge_in_foreground,
            ),
            default_lead_minutes: std::env::var("COMPANION_DEFAULT_LEAD_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_lead_minutes),
        }
    }
}

/// Parse a boolean environment flag, accepting 1/true/yes/on.
fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
