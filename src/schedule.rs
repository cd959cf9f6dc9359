//! Decisions a notifier makes from a day's [`PrayerTimes`].
//!
//! Nothing here reads the system clock; the current instant is always passed in.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::types::{Prayer, PrayerTimes};

pub const MAX_REMINDER_MINUTES: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    pub prayer: Prayer,
    pub at: DateTime<FixedOffset>,
}

/// First obligatory prayer strictly after `now`, if any remains today.
pub fn next_prayer(
    times: &PrayerTimes,
    now: DateTime<FixedOffset>,
) -> Option<(Prayer, DateTime<FixedOffset>)> {
    times
        .iter()
        .filter(|(p, _)| p.is_obligatory())
        .find(|(_, t)| *t > now)
}

/// Reminder instants for the obligatory prayers, `reminder_minutes` ahead of each.
///
/// The lead time is clamped to 0..=60 minutes. Reminders at or before `now`, and for
/// events whose hour angle was clamped, are left out.
pub fn reminder_schedule(
    times: &PrayerTimes,
    reminder_minutes: i64,
    now: DateTime<FixedOffset>,
) -> Vec<Reminder> {
    let lead = Duration::minutes(reminder_minutes.clamp(0, MAX_REMINDER_MINUTES));
    let mut reminders = Vec::with_capacity(5);

    for (prayer, time) in times.iter().filter(|(p, _)| p.is_obligatory()) {
        if !times.is_reliable(prayer) {
            debug!("skipping {prayer} reminder: time is not reliable");
            continue;
        }
        let at = time - lead;
        if at > now {
            reminders.push(Reminder { prayer, at });
        }
    }
    debug!("scheduled {} prayer reminders", reminders.len());
    reminders
}

/// When to recompute: five seconds past the next local midnight.
pub fn next_recompute_at(today: NaiveDate) -> Option<NaiveDateTime> {
    let tomorrow = today.succ_opt()?;
    Some(tomorrow.and_time(NaiveTime::MIN) + Duration::seconds(5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompute_after_midnight() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let at = next_recompute_at(today).unwrap();
        assert_eq!(
            at,
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 5)
                .unwrap()
        );
    }

    #[test]
    fn recompute_at_end_of_range() {
        assert!(next_recompute_at(NaiveDate::MAX).is_none());
    }
}
