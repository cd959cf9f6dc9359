//! Prayer time calculation for a civil date.
//!
//! All times are first derived as fractional hours in the method's solar frame
//! ([`day_hours`]) and then shifted to the caller's civil clock in one step:
//! `local = hours + tz - longitude / 15`, where `tz = -tz_offset_minutes / 60`.
//!
//! `tz_offset_minutes` follows the host platform convention: minutes the local clock is
//! *behind* UTC. UTC+3 is `-180`, UTC-5 is `300`.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use log::{debug, warn};

use crate::angles::{
    asr_hour_angle, julian_day, normalize_hour, solve_hour_angle, sun_position, DEGREES_PER_HOUR,
    SUNRISE_DEPRESSION,
};
use crate::error::{check_tz_offset, Error, Result};
use crate::types::{AsrJuristic, CalculationMethod, GeoCoordinate, IshaRule, Prayer, PrayerTimes};

/// Event times in fractional hours of the solar frame, before the longitude and
/// timezone correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayHours {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
    /// Indexed by `Prayer as usize`.
    pub reliable: [bool; 6],
}

impl DayHours {
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

pub fn day_hours(
    date: NaiveDate,
    coords: GeoCoordinate,
    method: &CalculationMethod,
    asr: AsrJuristic,
) -> DayHours {
    let (lat, lon) = (coords.latitude(), coords.longitude());
    let jd = julian_day(date.year(), date.month(), date.day());

    let sun = sun_position(jd - lon / 360.0);
    let decl = sun.declination;
    let noon = normalize_hour(12.0 - sun.equation_of_time);

    let horizon = solve_hour_angle(90.0 + SUNRISE_DEPRESSION, lat, decl);
    let sunrise = noon - horizon.hours;
    let sunset = noon + horizon.hours;

    let fajr = solve_hour_angle(90.0 + method.fajr_angle, lat, decl);
    let asr_ha = asr_hour_angle(lat, decl, asr.shadow_factor());

    let (isha, isha_reliable) = match method.isha {
        IshaRule::Angle(angle) => {
            let ha = solve_hour_angle(90.0 + angle, lat, decl);
            (noon + ha.hours, ha.is_reliable())
        }
        IshaRule::MinutesAfterMaghrib(minutes) => (sunset + minutes / 60.0, horizon.is_reliable()),
    };

    DayHours {
        fajr: noon - fajr.hours,
        sunrise,
        dhuhr: noon,
        asr: noon + asr_ha.hours,
        maghrib: sunset,
        isha,
        reliable: [
            fajr.is_reliable(),
            horizon.is_reliable(),
            true,
            asr_ha.is_reliable(),
            horizon.is_reliable(),
            isha_reliable,
        ],
    }
}

/// Computes the six daily times with the standard (shadow factor 1) Asr rule.
///
/// # Errors
/// Returns `InvalidTimezoneOffset` when `|tz_offset_minutes| >= 1440`, or
/// `InvalidMethod` for custom parameters that fail [`CalculationMethod::validate`].
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use prayer_times::{compute, GeoCoordinate, Method};
///
/// let mecca = GeoCoordinate::new(21.4225, 39.8262).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
/// let times = compute(date, mecca, -180, Method::MuslimWorldLeague).unwrap();
/// assert!(times.is_ordered());
/// ```
pub fn compute(
    date: NaiveDate,
    coords: GeoCoordinate,
    tz_offset_minutes: i32,
    method: impl Into<CalculationMethod>,
) -> Result<PrayerTimes> {
    compute_with_asr(date, coords, tz_offset_minutes, method, AsrJuristic::Standard)
}

/// Computes the six daily times with an explicit Asr juristic rule.
///
/// # Errors
/// Returns `InvalidTimezoneOffset` when `|tz_offset_minutes| >= 1440`,
/// `InvalidMethod` for out-of-range method parameters, or
/// `TimestampOutOfRange` at the edges of the supported date range.
pub fn compute_with_asr(
    date: NaiveDate,
    coords: GeoCoordinate,
    tz_offset_minutes: i32,
    method: impl Into<CalculationMethod>,
    asr: AsrJuristic,
) -> Result<PrayerTimes> {
    check_tz_offset(tz_offset_minutes)?;
    let method = method.into();
    method.validate()?;
    debug!(
        "computing prayer times for {date} at ({}, {}), tz offset {tz_offset_minutes} min, {method:?}, {asr:?}",
        coords.latitude(),
        coords.longitude()
    );

    let hours = day_hours(date, coords, &method, asr);
    let offset = FixedOffset::east_opt(-tz_offset_minutes * 60).ok_or(
        Error::InvalidTimezoneOffset {
            minutes: tz_offset_minutes,
        },
    )?;
    let tz = -f64::from(tz_offset_minutes) / 60.0;
    let lon = coords.longitude();

    let to_local = |h: f64| local_timestamp(date, h + tz - lon / DEGREES_PER_HOUR, offset);
    let times = PrayerTimes {
        fajr: to_local(hours.fajr)?,
        sunrise: to_local(hours.sunrise)?,
        dhuhr: to_local(hours.dhuhr)?,
        asr: to_local(hours.asr)?,
        maghrib: to_local(hours.maghrib)?,
        isha: to_local(hours.isha)?,
        reliable: hours.reliable,
    };

    if !times.all_reliable() {
        let clamped: Vec<&str> = Prayer::ALL
            .iter()
            .filter(|p| !times.is_reliable(**p))
            .map(Prayer::name)
            .collect();
        warn!(
            "sun does not reach the required angle on {date} at latitude {}: {} clamped",
            coords.latitude(),
            clamped.join(", ")
        );
    }
    Ok(times)
}

/// Local midnight of `date` plus `hours`, rounded half-up to the millisecond.
fn local_timestamp(date: NaiveDate, hours: f64, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let ms = (hours * 3_600_000.0 + 0.5).floor() as i64;
    let naive = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::milliseconds(ms))
        .ok_or(Error::TimestampOutOfRange)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or(Error::TimestampOutOfRange)
}
