//! # Reminder Scheduler
//!
//! Computes delivery-ready triggers from reminder requests and hands them to
//! the platform notification service. Stateless between calls: each
//! scheduling operation is a pure function of its inputs and the injected
//! clock, and the platform store is the single source of truth for what is
//! scheduled.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.2.0: Past calendar targets advance in whole periods
//! - 1.1.0: Appointment lead-time reminders
//! - 1.0.0: Initial release with medication and custom reminders

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use log::{debug, info, warn};

use super::content::NotificationContent;
use super::request::{Recurrence, ReminderRequest, TimeOfDay};
use super::trigger::{advance_by_days, advance_by_months, weekday_number, TriggerSpec};
use crate::core::{NotificationConfig, ScheduleError};
use crate::services::{
    Clock, NotificationDelivery, NotificationId, PermissionGate, ScheduledNotification,
    SystemClock,
};

/// Schedules reminders against the platform notification service.
#[derive(Clone)]
pub struct ReminderScheduler {
    config: NotificationConfig,
    permission: Arc<dyn PermissionGate>,
    delivery: Arc<dyn NotificationDelivery>,
    clock: Arc<dyn Clock>,
}

impl ReminderScheduler {
    /// Create a scheduler using the wall clock.
    pub fn new(
        config: NotificationConfig,
        permission: Arc<dyn PermissionGate>,
        delivery: Arc<dyn NotificationDelivery>,
    ) -> Self {
        Self::with_clock(config, permission, delivery, Arc::new(SystemClock))
    }

    /// Create a scheduler with an injected clock.
    pub fn with_clock(
        config: NotificationConfig,
        permission: Arc<dyn PermissionGate>,
        delivery: Arc<dyn NotificationDelivery>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        ReminderScheduler {
            config,
            permission,
            delivery,
            clock,
        }
    }

    /// Schedule any reminder request, returning the delivery-service handle.
    pub async fn schedule(
        &self,
        request: &ReminderRequest,
    ) -> Result<NotificationId, ScheduleError> {
        self.ensure_permission().await?;

        let now = self.clock.now();
        let lead_minutes = match request {
            ReminderRequest::Appointment { lead_minutes, .. } => {
                lead_minutes.unwrap_or(self.config.default_lead_minutes)
            }
            _ => self.config.default_lead_minutes,
        };

        let trigger = match request {
            ReminderRequest::Medication {
                time, recurrence, ..
            } => Self::compute_medication_trigger(*time, *recurrence, now),
            ReminderRequest::Appointment { at, .. } => {
                Self::compute_appointment_trigger(*at, lead_minutes, now)?
            }
            ReminderRequest::Custom {
                target, recurrence, ..
            } => Self::compute_custom_trigger(*target, *recurrence, now)?,
        };

        let content = NotificationContent::for_request(request, lead_minutes);
        let id = self.delivery.schedule(content, trigger).await?;

        info!(
            "Scheduled {} reminder {} ({})",
            request.kind(),
            id,
            trigger
        );

        Ok(id)
    }

    /// Schedule a medication reminder at a wall-clock time of day.
    pub async fn schedule_medication(
        &self,
        name: &str,
        time: TimeOfDay,
        recurrence: Recurrence,
    ) -> Result<NotificationId, ScheduleError> {
        self.schedule(&ReminderRequest::Medication {
            name: name.to_string(),
            time,
            recurrence,
        })
        .await
    }

    /// Schedule a one-shot appointment reminder; `lead_minutes: None` uses
    /// the configured default.
    pub async fn schedule_appointment(
        &self,
        title: &str,
        at: DateTime<Utc>,
        lead_minutes: Option<u32>,
    ) -> Result<NotificationId, ScheduleError> {
        self.schedule(&ReminderRequest::Appointment {
            title: title.to_string(),
            at,
            lead_minutes,
        })
        .await
    }

    /// Schedule a custom reminder at a full datetime.
    pub async fn schedule_custom(
        &self,
        title: &str,
        body: Option<String>,
        target: DateTime<Utc>,
        recurrence: Recurrence,
    ) -> Result<NotificationId, ScheduleError> {
        self.schedule(&ReminderRequest::Custom {
            title: title.to_string(),
            body,
            target,
            recurrence,
        })
        .await
    }

    /// Cancel one scheduled reminder. Fails with
    /// [`ScheduleError::NotFound`] when the service no longer knows the id.
    pub async fn cancel(&self, id: &NotificationId) -> Result<(), ScheduleError> {
        self.delivery.cancel(id).await?;
        info!("Cancelled reminder {id}");
        Ok(())
    }

    /// Cancel every scheduled reminder.
    pub async fn cancel_all(&self) -> Result<(), ScheduleError> {
        self.delivery.cancel_all().await?;
        info!("Cancelled all scheduled reminders");
        Ok(())
    }

    /// Enumerate the delivery service's scheduled store, unfiltered.
    pub async fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>, ScheduleError> {
        let scheduled = self.delivery.list_all().await?;
        debug!("Delivery service reports {} scheduled reminders", scheduled.len());
        Ok(scheduled)
    }

    async fn ensure_permission(&self) -> Result<(), ScheduleError> {
        let granted = self
            .permission
            .request_permission()
            .await
            .map_err(ScheduleError::from)?;

        if granted {
            Ok(())
        } else {
            warn!("Notification permission denied; nothing scheduled");
            Err(ScheduleError::PermissionDenied)
        }
    }

    // ========================================================================
    // Trigger computation (pure functions of the inputs and `now`)
    // ========================================================================

    /// Trigger for a medication reminder at a wall-clock time of day.
    ///
    /// The candidate is today at the given time, seconds zeroed; if that has
    /// already passed it moves to tomorrow. The one-day advance restores
    /// futurity on its own, so weekly reads the weekday and monthly the
    /// day-of-month straight off the advanced candidate.
    pub fn compute_medication_trigger(
        time: TimeOfDay,
        recurrence: Recurrence,
        now: DateTime<Utc>,
    ) -> TriggerSpec {
        let mut candidate = now
            .date_naive()
            .and_hms_opt(time.hour(), time.minute(), 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now); // unreachable: TimeOfDay is range-checked

        if candidate <= now {
            candidate = candidate + Duration::days(1);
        }

        match recurrence {
            Recurrence::Once => TriggerSpec::AbsoluteDate {
                date: candidate,
                repeats: false,
            },
            Recurrence::Daily => TriggerSpec::AbsoluteDate {
                date: candidate,
                repeats: true,
            },
            Recurrence::Weekly => TriggerSpec::CalendarWeekly {
                weekday: weekday_number(candidate.weekday()),
                hour: time.hour(),
                minute: time.minute(),
            },
            Recurrence::Monthly => TriggerSpec::CalendarMonthly {
                day: candidate.day(),
                hour: time.hour(),
                minute: time.minute(),
            },
        }
    }

    /// Trigger for a one-shot appointment reminder, firing `lead_minutes`
    /// before the appointment.
    pub fn compute_appointment_trigger(
        appointment_at: DateTime<Utc>,
        lead_minutes: u32,
        now: DateTime<Utc>,
    ) -> Result<TriggerSpec, ScheduleError> {
        let reminder_at = appointment_at - Duration::minutes(i64::from(lead_minutes));

        if reminder_at <= now {
            return Err(ScheduleError::PastSchedule {
                requested: reminder_at,
            });
        }

        Ok(TriggerSpec::AbsoluteDate {
            date: reminder_at,
            repeats: false,
        })
    }

    /// Trigger for a custom reminder at a full datetime.
    ///
    /// One-shots in the past are rejected. Repeating targets in the past
    /// advance in whole periods (days, weeks, calendar months) until the
    /// first occurrence is strictly in the future.
    pub fn compute_custom_trigger(
        target: DateTime<Utc>,
        recurrence: Recurrence,
        now: DateTime<Utc>,
    ) -> Result<TriggerSpec, ScheduleError> {
        match recurrence {
            Recurrence::Once => {
                if target <= now {
                    Err(ScheduleError::PastSchedule { requested: target })
                } else {
                    Ok(TriggerSpec::AbsoluteDate {
                        date: target,
                        repeats: false,
                    })
                }
            }
            Recurrence::Daily => Ok(TriggerSpec::AbsoluteDate {
                date: advance_by_days(target, now, 1),
                repeats: true,
            }),
            Recurrence::Weekly => {
                let anchor = advance_by_days(target, now, 7);
                Ok(TriggerSpec::CalendarWeekly {
                    weekday: weekday_number(anchor.weekday()),
                    hour: anchor.hour(),
                    minute: anchor.minute(),
                })
            }
            Recurrence::Monthly => {
                let anchor = advance_by_months(target, now);
                Ok(TriggerSpec::CalendarMonthly {
                    day: anchor.day(),
                    hour: anchor.hour(),
                    minute: anchor.minute(),
                })
            }
        }
    }
}
