//! # Prayer Times
//!
//! Daily Islamic prayer times (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha) from a low-precision
//! solar model: sun declination and equation of time from the Julian Day, then one hour-angle
//! solve per event.
//!
//! Everything is a pure function of its inputs. No function reads the system clock, so repeated
//! calls with the same date, location, offset and method give identical results.
//!
//! ```
//! use chrono::NaiveDate;
//! use prayer_times::{compute, GeoCoordinate, Method, Prayer};
//!
//! let mecca = GeoCoordinate::new(21.4225, 39.8262).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
//! // UTC+3: the local clock is 180 minutes ahead of UTC.
//! let times = compute(date, mecca, -180, Method::MuslimWorldLeague).unwrap();
//!
//! for (prayer, time) in times.iter() {
//!     println!("{prayer}: {}", time.format("%H:%M"));
//! }
//! assert!(times.is_reliable(Prayer::Isha));
//! ```
//!
//! At high latitudes the sun may never reach the depression a method asks for. The hour angle
//! is then clamped rather than rejected; check [`PrayerTimes::is_reliable`] before presenting
//! such times.

pub mod angles;
pub mod calculator;
pub mod error;
pub mod schedule;
pub mod settings;
pub mod timetable;
pub mod types;

pub use angles::{
    asr_hour_angle, deg_to_rad, hour_angle, julian_day, normalize_angle, normalize_hour,
    rad_to_deg, solve_hour_angle, sun_position, DEGREES_PER_HOUR, J2000, SUNRISE_DEPRESSION,
};

pub use calculator::{compute, compute_with_asr, day_hours, DayHours};

pub use error::{Error, Result};

pub use schedule::{next_prayer, next_recompute_at, reminder_schedule, Reminder};

pub use settings::{LocationMode, PrayerSettings};

pub use timetable::{
    days_in_month, format_hhmm, generate_timetable, leap_year, minutes_to_time, month_config,
    timetable_to_compact, DayEntry, Timetable, TimetableConfig, TimetableMetadata,
};

pub use types::{
    AsrJuristic, CalculationMethod, GeoCoordinate, HourAngle, IshaRule, Method, Prayer,
    PrayerTimes, SolarPosition,
};
