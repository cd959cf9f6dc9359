use core::f64::consts::PI;

use crate::types::{HourAngle, SolarPosition};

pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;
pub const SUNRISE_DEPRESSION: f64 = 0.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Reduces an angle to [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    angle - 360.0 * (angle / 360.0).floor()
}

/// Reduces a time of day to [0, 24).
pub fn normalize_hour(hour: f64) -> f64 {
    hour - 24.0 * (hour / 24.0).floor()
}

/// Julian Day at 0h UT of a proleptic Gregorian date.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b - 1524.5
}

/// Low-precision solar coordinates for a Julian Day.
///
/// Pass `jd - longitude / 360` to evaluate at local solar noon rather than 0h UT.
pub fn sun_position(jd: f64) -> SolarPosition {
    let d = jd - J2000;
    let g = normalize_angle(357.529 + 0.98560028 * d);
    let q = normalize_angle(280.459 + 0.98564736 * d);
    let l = normalize_angle(
        q + 1.915 * deg_to_rad(g).sin() + 0.020 * deg_to_rad(2.0 * g).sin(),
    );
    let e = 23.439 - 0.00000036 * d;

    let (e_rad, l_rad) = (deg_to_rad(e), deg_to_rad(l));
    let ra = rad_to_deg((e_rad.cos() * l_rad.sin()).atan2(l_rad.cos())) / DEGREES_PER_HOUR;

    SolarPosition {
        declination: rad_to_deg((e_rad.sin() * l_rad.sin()).asin()),
        equation_of_time: q / DEGREES_PER_HOUR - normalize_hour(ra),
    }
}

/// Hour angle, in hours from solar noon, at which the sun's zenith distance equals `angle`.
/// The cosine is clamped into [-1, 1]; [`HourAngle::cos_value`] keeps the raw value.
pub fn solve_hour_angle(angle: f64, latitude: f64, declination: f64) -> HourAngle {
    let (lat, decl) = (deg_to_rad(latitude), deg_to_rad(declination));
    let cos_value = (deg_to_rad(angle).cos() - lat.sin() * decl.sin()) / (lat.cos() * decl.cos());
    let clamped = cos_value.clamp(-1.0, 1.0);
    HourAngle {
        hours: rad_to_deg(clamped.acos()) / DEGREES_PER_HOUR,
        cos_value,
    }
}

pub fn hour_angle(angle: f64, latitude: f64, declination: f64) -> f64 {
    solve_hour_angle(angle, latitude, declination).hours
}

pub fn asr_hour_angle(latitude: f64, declination: f64, shadow_factor: f64) -> HourAngle {
    let noon_shadow = deg_to_rad((latitude - declination).abs()).tan();
    let altitude = rad_to_deg((1.0 / (shadow_factor + noon_shadow)).atan());
    solve_hour_angle(90.0 - altitude, latitude, declination)
}
