//! Notification payload construction per reminder kind.

use serde::{Deserialize, Serialize};

use super::request::ReminderRequest;

/// Delivery priority hint for the platform notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Default,
    High,
}

/// What the platform displays when a trigger fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: bool,
    pub priority: Priority,
}

impl NotificationContent {
    /// Build the payload for a reminder request.
    ///
    /// Medication and appointment reminders derive their text; custom
    /// reminders carry the user's title and body verbatim. `lead_minutes`
    /// is the resolved lead time, embedded in appointment bodies.
    pub fn for_request(request: &ReminderRequest, lead_minutes: u32) -> Self {
        match request {
            ReminderRequest::Medication { name, .. } => NotificationContent {
                title: "💊 Medication Reminder".to_string(),
                body: format!("Time to take your {name}"),
                sound: true,
                priority: Priority::High,
            },
            ReminderRequest::Appointment { title, .. } => NotificationContent {
                title: "📅 Appointment Reminder".to_string(),
                body: format!("{title} in {lead_minutes} minutes"),
                sound: true,
                priority: Priority::High,
            },
            ReminderRequest::Custom { title, body, .. } => NotificationContent {
                title: title.clone(),
                body: body.clone().unwrap_or_default(),
                sound: true,
                priority: Priority::High,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reminders::request::{Recurrence, TimeOfDay};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_medication_content_derives_body() {
        let request = ReminderRequest::Medication {
            name: "sertraline".to_string(),
            time: TimeOfDay::new(8, 0).unwrap(),
            recurrence: Recurrence::Daily,
        };

        let content = NotificationContent::for_request(&request, 30);
        assert_eq!(content.title, "💊 Medication Reminder");
        assert_eq!(content.body, "Time to take your sertraline");
        assert!(content.sound);
        assert_eq!(content.priority, Priority::High);
    }

    #[test]
    fn test_appointment_content_embeds_lead_time() {
        let request = ReminderRequest::Appointment {
            title: "Therapy session".to_string(),
            at: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
            lead_minutes: Some(45),
        };

        let content = NotificationContent::for_request(&request, 45);
        assert_eq!(content.title, "📅 Appointment Reminder");
        assert_eq!(content.body, "Therapy session in 45 minutes");
    }

    #[test]
    fn test_custom_content_passes_through() {
        let request = ReminderRequest::Custom {
            title: "Journal".to_string(),
            body: Some("Evening check-in".to_string()),
            target: Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap(),
            recurrence: Recurrence::Once,
        };

        let content = NotificationContent::for_request(&request, 30);
        assert_eq!(content.title, "Journal");
        assert_eq!(content.body, "Evening check-in");
    }
}
