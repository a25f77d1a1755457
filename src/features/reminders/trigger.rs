//! # Trigger Specifications
//!
//! Delivery-native descriptions of when a notification fires, plus the
//! calendar arithmetic shared by the scheduler and the in-memory backend.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Next-occurrence computation for listings
//! - 1.0.0: Initial release with the four platform trigger shapes

use std::fmt;

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// When the platform delivers a notification.
///
/// Closed set of the four trigger shapes the delivery service accepts.
/// Weekdays are 1-indexed with Sunday = 1 and Saturday = 7, matching the
/// platform encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TriggerSpec {
    /// Fire at one absolute instant; with `repeats` the platform re-arms it
    /// every 24 hours after the first fire.
    AbsoluteDate {
        date: DateTime<Utc>,
        repeats: bool,
    },
    /// Fire every day at the given wall-clock time.
    CalendarDaily { hour: u32, minute: u32 },
    /// Fire every week on `weekday` at the given time.
    CalendarWeekly { weekday: u32, hour: u32, minute: u32 },
    /// Fire every month on `day`, clamped to the last day of short months.
    CalendarMonthly { day: u32, hour: u32, minute: u32 },
}

impl TriggerSpec {
    /// Whether the trigger re-arms after firing.
    pub fn repeats(&self) -> bool {
        !matches!(
            self,
            TriggerSpec::AbsoluteDate { repeats: false, .. }
        )
    }

    /// The next instant this trigger would fire strictly after `now`.
    ///
    /// The platform owns actual delivery; this is used for reminder listings
    /// and for asserting that first occurrences lie in the future. Returns
    /// `None` for a spent one-shot or a malformed calendar field.
    pub fn next_occurrence(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match *self {
            TriggerSpec::AbsoluteDate { date, repeats } => {
                if date > now {
                    Some(date)
                } else if repeats {
                    Some(advance_by_days(date, now, 1))
                } else {
                    None
                }
            }
            TriggerSpec::CalendarDaily { hour, minute } => {
                let candidate = now.date_naive().and_hms_opt(hour, minute, 0)?.and_utc();
                Some(if candidate > now {
                    candidate
                } else {
                    candidate + Duration::days(1)
                })
            }
            TriggerSpec::CalendarWeekly {
                weekday,
                hour,
                minute,
            } => (0..=7).find_map(|offset| {
                let date = now.date_naive().checked_add_days(Days::new(offset))?;
                let candidate = date.and_hms_opt(hour, minute, 0)?.and_utc();
                (weekday_number(date.weekday()) == weekday && candidate > now)
                    .then_some(candidate)
            }),
            TriggerSpec::CalendarMonthly { day, hour, minute } => {
                let first = now.date_naive().with_day(1)?;
                // The first or second month from now always holds a
                // strictly-future occurrence once the day is clamped.
                (0..=2).find_map(|n| {
                    let month = first.checked_add_months(Months::new(n))?;
                    let clamped = day.min(days_in_month(month));
                    let candidate = month
                        .with_day(clamped)?
                        .and_hms_opt(hour, minute, 0)?
                        .and_utc();
                    (candidate > now).then_some(candidate)
                })
            }
        }
    }
}

impl fmt::Display for TriggerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TriggerSpec::AbsoluteDate { date, repeats: false } => {
                write!(f, "once at {}", date.format("%Y-%m-%d %H:%M"))
            }
            TriggerSpec::AbsoluteDate { date, repeats: true } => {
                write!(
                    f,
                    "daily at {} from {}",
                    date.format("%H:%M"),
                    date.format("%Y-%m-%d")
                )
            }
            TriggerSpec::CalendarDaily { hour, minute } => {
                write!(f, "daily at {hour:02}:{minute:02}")
            }
            TriggerSpec::CalendarWeekly {
                weekday,
                hour,
                minute,
            } => {
                write!(
                    f,
                    "weekly on {} at {hour:02}:{minute:02}",
                    weekday_name(weekday)
                )
            }
            TriggerSpec::CalendarMonthly { day, hour, minute } => {
                write!(f, "monthly on day {day} at {hour:02}:{minute:02}")
            }
        }
    }
}

/// 1-indexed weekday with Sunday = 1, the platform trigger encoding.
pub(crate) fn weekday_number(weekday: chrono::Weekday) -> u32 {
    weekday.num_days_from_sunday() + 1
}

fn weekday_name(weekday: u32) -> &'static str {
    match weekday {
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        7 => "Saturday",
        _ => "?",
    }
}

/// Advance `target` in whole `step`-day periods until strictly after `now`.
pub(crate) fn advance_by_days(
    target: DateTime<Utc>,
    now: DateTime<Utc>,
    step: i64,
) -> DateTime<Utc> {
    if target > now {
        return target;
    }
    let periods = (now - target).num_days() / step + 1;
    let mut candidate = target + Duration::days(periods * step);
    if candidate <= now {
        candidate = candidate + Duration::days(step);
    }
    candidate
}

/// Advance `target` in whole calendar months until strictly after `now`.
///
/// The day-of-month is taken from the original target on every step, so a
/// day-31 target clamps in short months (Jan 31 -> Feb 28/29) without
/// drifting down permanently.
pub(crate) fn advance_by_months(target: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if target > now {
        return target;
    }
    let mut months = 1u32;
    loop {
        let candidate = target
            .checked_add_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        if candidate > now {
            return candidate;
        }
        months += 1;
    }
}

fn days_in_month(first_of_month: NaiveDate) -> u32 {
    first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_mode_discriminant_serialization() {
        let weekly = TriggerSpec::CalendarWeekly {
            weekday: 6,
            hour: 10,
            minute: 0,
        };
        let json = serde_json::to_string(&weekly).unwrap();
        assert!(json.contains("\"mode\":\"calendar-weekly\""));

        let once = TriggerSpec::AbsoluteDate {
            date: utc(2024, 3, 2, 8, 0),
            repeats: false,
        };
        let json = serde_json::to_string(&once).unwrap();
        assert!(json.contains("\"mode\":\"absolute-date\""));
    }

    #[test]
    fn test_repeats_flag() {
        assert!(!TriggerSpec::AbsoluteDate {
            date: utc(2024, 3, 2, 8, 0),
            repeats: false,
        }
        .repeats());
        assert!(TriggerSpec::CalendarDaily { hour: 8, minute: 0 }.repeats());
        assert!(TriggerSpec::CalendarMonthly {
            day: 15,
            hour: 9,
            minute: 30,
        }
        .repeats());
    }

    #[test]
    fn test_daily_next_occurrence() {
        let now = utc(2024, 3, 1, 9, 0);
        let trigger = TriggerSpec::CalendarDaily { hour: 8, minute: 0 };
        assert_eq!(trigger.next_occurrence(now), Some(utc(2024, 3, 2, 8, 0)));

        let later = TriggerSpec::CalendarDaily { hour: 21, minute: 15 };
        assert_eq!(later.next_occurrence(now), Some(utc(2024, 3, 1, 21, 15)));
    }

    #[test]
    fn test_weekly_next_occurrence_lands_on_weekday() {
        // 2024-03-01 is a Friday (weekday 6).
        let now = utc(2024, 3, 1, 9, 0);
        let trigger = TriggerSpec::CalendarWeekly {
            weekday: 2,
            hour: 10,
            minute: 0,
        };

        let next = trigger.next_occurrence(now).unwrap();
        assert_eq!(next, utc(2024, 3, 4, 10, 0)); // following Monday
        assert_eq!(weekday_number(next.weekday()), 2);
    }

    #[test]
    fn test_weekly_same_day_already_passed_waits_a_week() {
        let now = utc(2024, 3, 1, 11, 0);
        let trigger = TriggerSpec::CalendarWeekly {
            weekday: 6,
            hour: 10,
            minute: 0,
        };
        assert_eq!(trigger.next_occurrence(now), Some(utc(2024, 3, 8, 10, 0)));
    }

    #[test]
    fn test_monthly_next_occurrence_clamps_short_months() {
        let now = utc(2024, 4, 1, 0, 0);
        let trigger = TriggerSpec::CalendarMonthly {
            day: 31,
            hour: 10,
            minute: 0,
        };
        // April has 30 days.
        assert_eq!(trigger.next_occurrence(now), Some(utc(2024, 4, 30, 10, 0)));
    }

    #[test]
    fn test_repeating_absolute_date_advances_in_whole_days() {
        let first = utc(2024, 3, 2, 8, 0);
        let trigger = TriggerSpec::AbsoluteDate {
            date: first,
            repeats: true,
        };

        let now = utc(2024, 3, 10, 9, 30);
        assert_eq!(trigger.next_occurrence(now), Some(utc(2024, 3, 11, 8, 0)));
    }

    #[test]
    fn test_spent_one_shot_has_no_next_occurrence() {
        let trigger = TriggerSpec::AbsoluteDate {
            date: utc(2024, 3, 2, 8, 0),
            repeats: false,
        };
        assert_eq!(trigger.next_occurrence(utc(2024, 3, 5, 0, 0)), None);
    }

    #[test]
    fn test_display() {
        let weekly = TriggerSpec::CalendarWeekly {
            weekday: 6,
            hour: 10,
            minute: 0,
        };
        assert_eq!(weekly.to_string(), "weekly on Friday at 10:00");

        let monthly = TriggerSpec::CalendarMonthly {
            day: 15,
            hour: 9,
            minute: 30,
        };
        assert_eq!(monthly.to_string(), "monthly on day 15 at 09:30");

        let daily = TriggerSpec::AbsoluteDate {
            date: utc(2024, 3, 2, 8, 0),
            repeats: true,
        };
        assert_eq!(daily.to_string(), "daily at 08:00 from 2024-03-02");
    }

    #[test]
    fn test_advance_by_days_whole_periods() {
        // Four whole weeks land on the same weekday later the same morning.
        let target = utc(2024, 2, 2, 10, 0);
        let now = utc(2024, 3, 1, 9, 0);

        let advanced = advance_by_days(target, now, 7);
        assert_eq!(advanced, utc(2024, 3, 1, 10, 0));
        assert_eq!(
            weekday_number(advanced.weekday()),
            weekday_number(target.weekday())
        );
    }

    #[test]
    fn test_advance_by_months_preserves_target_day() {
        // Jan 31 advanced past mid-March lands on Mar 31, not on a
        // drifted-down Feb day.
        let target = utc(2024, 1, 31, 10, 0);
        let now = utc(2024, 3, 15, 0, 0);
        assert_eq!(advance_by_months(target, now), utc(2024, 3, 31, 10, 0));
    }

    #[test]
    fn test_advance_by_months_clamps_february() {
        let target = utc(2023, 1, 31, 10, 0);
        let now = utc(2023, 2, 10, 0, 0);
        assert_eq!(advance_by_months(target, now), utc(2023, 2, 28, 10, 0));
    }
}
