//! User settings as stored by the host, in JSON with camelCase keys.
//!
//! ```
//! use prayer_times::settings::PrayerSettings;
//!
//! let settings = PrayerSettings::from_json(
//!     r#"{"locationMode":"manual","manualLat":21.4225,"manualLon":39.8262,"method":"MWL"}"#,
//! ).unwrap();
//! assert_eq!(settings.coordinates().unwrap().latitude(), 21.4225);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{check_latitude, check_longitude, Error, Result};
use crate::schedule::MAX_REMINDER_MINUTES;
use crate::types::{AsrJuristic, CalculationMethod, GeoCoordinate, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Position comes from the host's geolocation service.
    #[default]
    Auto,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrayerSettings {
    pub enable_prayer_notifications: bool,
    #[serde(deserialize_with = "reminder_minutes_or_zero")]
    pub prayer_reminder_minutes: i64,
    pub location_mode: LocationMode,
    pub manual_lat: Option<f64>,
    pub manual_lon: Option<f64>,
    pub method: Method,
    pub asr_juristic: AsrJuristic,
}

/// A cleared options field is stored as `null`; treat it, and any non-finite
/// value, as no lead time. Fractional minutes are truncated.
fn reminder_minutes_or_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<f64>::deserialize(deserializer)? {
        Some(minutes) if minutes.is_finite() => minutes.trunc() as i64,
        _ => 0,
    })
}

impl Default for PrayerSettings {
    fn default() -> Self {
        Self {
            enable_prayer_notifications: false,
            prayer_reminder_minutes: 5,
            location_mode: LocationMode::Auto,
            manual_lat: None,
            manual_lon: None,
            method: Method::MuslimWorldLeague,
            asr_juristic: AsrJuristic::Standard,
        }
    }
}

impl PrayerSettings {
    /// Parses and validates stored settings. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `Settings` for malformed JSON, or the validation error from
    /// [`PrayerSettings::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks the method parameters and any manual coordinates that are set.
    ///
    /// # Errors
    /// Returns `InvalidMethod`, `InvalidLatitude` or `InvalidLongitude`.
    pub fn validate(&self) -> Result<()> {
        self.method.params().validate()?;
        if let Some(lat) = self.manual_lat {
            check_latitude(lat)?;
        }
        if let Some(lon) = self.manual_lon {
            check_longitude(lon)?;
        }
        Ok(())
    }

    /// Manual location, when manual mode is selected and both values are present.
    ///
    /// # Errors
    /// Returns `MissingLocation` otherwise; the caller falls back to geolocation.
    pub fn coordinates(&self) -> Result<GeoCoordinate> {
        match (self.location_mode, self.manual_lat, self.manual_lon) {
            (LocationMode::Manual, Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon),
            _ => Err(Error::MissingLocation),
        }
    }

    pub fn calculation_method(&self) -> CalculationMethod {
        self.method.params()
    }

    /// Reminder lead time clamped to 0..=60 minutes.
    pub fn reminder_minutes(&self) -> i64 {
        self.prayer_reminder_minutes.clamp(0, MAX_REMINDER_MINUTES)
    }
}
