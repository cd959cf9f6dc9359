//! Error types for the prayer time library.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised for invalid caller input.
///
/// Degenerate solar geometry is not an error; see [`crate::HourAngle::is_reliable`].
#[derive(Debug, Error)]
pub enum Error {
    /// Latitude not finite or outside -90..=90 degrees.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Longitude not finite or outside -180..=180 degrees.
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    /// Timezone offset that cannot be expressed as a civil UTC offset.
    #[error("invalid timezone offset {minutes} min (must be strictly within ±1440)")]
    InvalidTimezoneOffset { minutes: i32 },

    /// Calendar date that does not exist.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Calculation method parameter out of range.
    #[error("invalid calculation method: {field} = {value}")]
    InvalidMethod { field: &'static str, value: f64 },

    /// Method name that matches no preset.
    #[error("unknown calculation method {0:?}")]
    UnknownMethod(String),

    /// Settings carry no usable location.
    #[error("no location configured")]
    MissingLocation,

    /// A computed timestamp falls outside the representable date range.
    #[error("computed timestamp is out of range")]
    TimestampOutOfRange,

    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }
}

pub(crate) fn check_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

pub(crate) fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

pub(crate) fn check_tz_offset(minutes: i32) -> Result<()> {
    if minutes.unsigned_abs() >= 1440 {
        return Err(Error::InvalidTimezoneOffset { minutes });
    }
    Ok(())
}
