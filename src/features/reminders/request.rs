//! Reminder request types handed to the scheduler by the UI layer.
//!
//! A request is ephemeral: built per user action, consumed once by the
//! scheduler. The notification id returned by the delivery service is the
//! only persisted handle.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ScheduleError;

/// Repeat cadence of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Once => "once",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = ScheduleError;

    /// Parse the cadence strings used by the UI frequency picker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "once" => Ok(Recurrence::Once),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            _ => Err(ScheduleError::InvalidRecurrence(s.trim().to_string())),
        }
    }
}

/// Wall-clock time of day for medication reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Returns `None` when hour or minute is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(TimeOfDay { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// What kind of reminder a request describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Medication,
    Appointment,
    Custom,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Medication => "medication",
            ReminderKind::Appointment => "appointment",
            ReminderKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-initiated reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReminderRequest {
    /// Medication reminder at a wall-clock time of day.
    Medication {
        name: String,
        time: TimeOfDay,
        recurrence: Recurrence,
    },
    /// One-shot reminder ahead of an appointment. `lead_minutes: None`
    /// falls back to the configured default.
    Appointment {
        title: String,
        at: DateTime<Utc>,
        lead_minutes: Option<u32>,
    },
    /// Free-form reminder at a full datetime.
    Custom {
        title: String,
        body: Option<String>,
        target: DateTime<Utc>,
        recurrence: Recurrence,
    },
}

impl ReminderRequest {
    pub fn kind(&self) -> ReminderKind {
        match self {
            ReminderRequest::Medication { .. } => ReminderKind::Medication,
            ReminderRequest::Appointment { .. } => ReminderKind::Appointment,
            ReminderRequest::Custom { .. } => ReminderKind::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_parsing() {
        assert_eq!("once".parse::<Recurrence>().unwrap(), Recurrence::Once);
        assert_eq!("daily".parse::<Recurrence>().unwrap(), Recurrence::Daily);
        assert_eq!("Weekly".parse::<Recurrence>().unwrap(), Recurrence::Weekly);
        assert_eq!(
            " monthly ".parse::<Recurrence>().unwrap(),
            Recurrence::Monthly
        );
    }

    #[test]
    fn test_unknown_recurrence_is_rejected() {
        let err = "fortnightly".parse::<Recurrence>().unwrap_err();
        match err {
            ScheduleError::InvalidRecurrence(value) => assert_eq!(value, "fortnightly"),
            other => panic!("expected InvalidRecurrence, got {other:?}"),
        }
    }

    #[test]
    fn test_time_of_day_range_check() {
        assert!(TimeOfDay::new(23, 59).is_some());
        assert!(TimeOfDay::new(0, 0).is_some());
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(8, 60).is_none());

        let time = TimeOfDay::new(8, 5).unwrap();
        assert_eq!(time.to_string(), "08:05");
    }

    #[test]
    fn test_request_kind() {
        let request = ReminderRequest::Medication {
            name: "sertraline".to_string(),
            time: TimeOfDay::new(8, 0).unwrap(),
            recurrence: Recurrence::Daily,
        };
        assert_eq!(request.kind(), ReminderKind::Medication);
        assert_eq!(request.kind().to_string(), "medication");
    }
}
