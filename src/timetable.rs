use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use log::debug;

use crate::calculator::compute_with_asr;
use crate::error::{Error, Result};
use crate::types::{AsrJuristic, GeoCoordinate, Method, Prayer, PrayerTimes};

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Local wall-clock `HH:MM`, seconds truncated.
pub fn format_hhmm(time: &DateTime<FixedOffset>) -> String {
    let (hour, minute) = minutes_to_time(time.hour() * 60 + time.minute());
    format!("{hour:02}:{minute:02}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimetableConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub tz_offset_minutes: i32,
    pub method: Method,
    pub asr: AsrJuristic,
    pub start: NaiveDate,
    pub days: u32,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            latitude: 21.4225,
            longitude: 39.8262,
            tz_offset_minutes: -180,
            method: Method::MuslimWorldLeague,
            asr: AsrJuristic::Standard,
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            days: 30,
        }
    }
}

/// Config covering every day of a calendar month.
///
/// # Errors
/// Returns `InvalidDate` if `month` is not 1..=12.
pub fn month_config(
    coords: GeoCoordinate,
    tz_offset_minutes: i32,
    method: Method,
    year: i32,
    month: u32,
) -> Result<TimetableConfig> {
    let invalid = || Error::InvalidDate {
        year,
        month,
        day: 1,
    };
    let days = days_in_month(year, month).ok_or_else(invalid)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    Ok(TimetableConfig {
        latitude: coords.latitude(),
        longitude: coords.longitude(),
        tz_offset_minutes,
        method,
        asr: AsrJuristic::Standard,
        start,
        days,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub times: PrayerTimes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableMetadata {
    pub total_days: usize,
    /// Days with at least one clamped event.
    pub unreliable_days: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    pub config: TimetableConfig,
    pub days: Vec<DayEntry>,
    pub metadata: TimetableMetadata,
}

impl Timetable {
    pub fn lookup(&self, date: NaiveDate) -> Option<&PrayerTimes> {
        let offset = (date - self.config.start).num_days();
        let idx = usize::try_from(offset).ok()?;
        self.days.get(idx).map(|entry| &entry.times)
    }
}

/// Computes prayer times for each day of the configured range.
///
/// # Errors
/// Returns the coordinate, timezone or method validation error of the config.
pub fn generate_timetable(config: &TimetableConfig) -> Result<Timetable> {
    let coords = GeoCoordinate::new(config.latitude, config.longitude)?;
    let days = config
        .start
        .iter_days()
        .take(config.days as usize)
        .map(|date| -> Result<DayEntry> {
            let times = compute_with_asr(
                date,
                coords,
                config.tz_offset_minutes,
                config.method,
                config.asr,
            )?;
            Ok(DayEntry { date, times })
        })
        .collect::<Result<Vec<_>>>()?;

    let unreliable_days = days.iter().filter(|d| !d.times.all_reliable()).count();
    debug!(
        "generated {} day timetable from {} ({} unreliable)",
        days.len(),
        config.start,
        unreliable_days
    );

    Ok(Timetable {
        config: *config,
        metadata: TimetableMetadata {
            total_days: days.len(),
            unreliable_days,
        },
        days,
    })
}

/// One `HH:MM` row per day, columns in [`Prayer::ALL`] order.
pub fn timetable_to_compact(table: &Timetable) -> Vec<[String; 6]> {
    table
        .days
        .iter()
        .map(|day| Prayer::ALL.map(|p| format_hhmm(&day.times.get(p))))
        .collect()
}
