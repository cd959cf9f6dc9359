use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{check_latitude, check_longitude, Error, Result};

/// Observer location in decimal degrees (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinateRepr", into = "CoordinateRepr")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a coordinate without validation. Use with trusted literals only.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Serialize, Deserialize)]
struct CoordinateRepr {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<CoordinateRepr> for GeoCoordinate {
    type Error = Error;

    fn try_from(repr: CoordinateRepr) -> Result<Self> {
        Self::new(repr.latitude, repr.longitude)
    }
}

impl From<GeoCoordinate> for CoordinateRepr {
    fn from(coords: GeoCoordinate) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }
}

/// How the Isha time is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IshaRule {
    /// Sun this many degrees below the horizon after sunset.
    Angle(f64),
    /// Fixed interval after Maghrib.
    MinutesAfterMaghrib(f64),
}

/// Twilight parameters of a calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationMethod {
    /// Degrees below the horizon at Fajr (positive).
    pub fajr_angle: f64,
    pub isha: IshaRule,
}

impl CalculationMethod {
    pub const MUSLIM_WORLD_LEAGUE: Self = Self {
        fajr_angle: 18.0,
        isha: IshaRule::Angle(17.0),
    };
    pub const EGYPTIAN: Self = Self {
        fajr_angle: 19.5,
        isha: IshaRule::Angle(17.5),
    };
    pub const KARACHI: Self = Self {
        fajr_angle: 18.0,
        isha: IshaRule::Angle(18.0),
    };
    pub const UMM_AL_QURA: Self = Self {
        fajr_angle: 18.5,
        isha: IshaRule::MinutesAfterMaghrib(90.0),
    };
    pub const ISNA: Self = Self {
        fajr_angle: 15.0,
        isha: IshaRule::Angle(15.0),
    };

    /// Creates a custom method.
    ///
    /// # Errors
    /// Returns `InvalidMethod` when an angle is outside (0, 90) or the Isha interval is
    /// negative or non-finite.
    pub fn new(fajr_angle: f64, isha: IshaRule) -> Result<Self> {
        let method = Self { fajr_angle, isha };
        method.validate()?;
        Ok(method)
    }

    /// Checks the parameters of an already constructed method.
    ///
    /// # Errors
    /// See [`CalculationMethod::new`].
    pub fn validate(&self) -> Result<()> {
        check_twilight_angle("fajr_angle", self.fajr_angle)?;
        match self.isha {
            IshaRule::Angle(angle) => check_twilight_angle("isha_angle", angle),
            IshaRule::MinutesAfterMaghrib(minutes) => {
                if minutes.is_finite() && minutes >= 0.0 {
                    Ok(())
                } else {
                    Err(Error::InvalidMethod {
                        field: "isha_minutes",
                        value: minutes,
                    })
                }
            }
        }
    }
}

fn check_twilight_angle(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < 90.0 {
        Ok(())
    } else {
        Err(Error::InvalidMethod { field, value })
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::MUSLIM_WORLD_LEAGUE
    }
}

/// Named calculation method presets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Method {
    #[default]
    #[serde(alias = "MWL")]
    MuslimWorldLeague,
    Egyptian,
    Karachi,
    UmmAlQura,
    #[serde(rename = "ISNA")]
    Isna,
    Custom(CalculationMethod),
}

impl Method {
    pub const PRESETS: [Method; 5] = [
        Method::MuslimWorldLeague,
        Method::Egyptian,
        Method::Karachi,
        Method::UmmAlQura,
        Method::Isna,
    ];

    #[must_use]
    pub const fn params(&self) -> CalculationMethod {
        match self {
            Self::MuslimWorldLeague => CalculationMethod::MUSLIM_WORLD_LEAGUE,
            Self::Egyptian => CalculationMethod::EGYPTIAN,
            Self::Karachi => CalculationMethod::KARACHI,
            Self::UmmAlQura => CalculationMethod::UMM_AL_QURA,
            Self::Isna => CalculationMethod::ISNA,
            Self::Custom(params) => *params,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MuslimWorldLeague => "MuslimWorldLeague",
            Self::Egyptian => "Egyptian",
            Self::Karachi => "Karachi",
            Self::UmmAlQura => "UmmAlQura",
            Self::Isna => "ISNA",
            Self::Custom(_) => "Custom",
        }
    }
}

impl From<Method> for CalculationMethod {
    fn from(method: Method) -> Self {
        method.params()
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a preset name, case-insensitively. `MWL` is accepted as an alias.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "muslimworldleague" | "mwl" => Ok(Self::MuslimWorldLeague),
            "egyptian" => Ok(Self::Egyptian),
            "karachi" => Ok(Self::Karachi),
            "ummalqura" => Ok(Self::UmmAlQura),
            "isna" => Ok(Self::Isna),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Juristic rule for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AsrJuristic {
    /// Shafi'i, Maliki, Hanbali: shadow equals object height.
    #[default]
    Standard,
    /// Shadow twice the object height.
    Hanafi,
}

impl AsrJuristic {
    #[must_use]
    pub const fn shadow_factor(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Hours, as `mean longitude / 15 - right ascension`; not reduced to ±12.
    pub equation_of_time: f64,
}

/// Result of solving for the hour angle at a given solar depression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngle {
    /// Offset from solar noon in hours, always in [0, 12].
    pub hours: f64,
    /// Cosine of the hour angle before clamping.
    pub cos_value: f64,
}

impl HourAngle {
    /// False when the sun never reaches the requested angle on this day and
    /// `hours` is the clamped value.
    #[must_use]
    pub fn is_reliable(&self) -> bool {
        (-1.0..=1.0).contains(&self.cos_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr = 0,
    Sunrise = 1,
    Dhuhr = 2,
    Asr = 3,
    Maghrib = 4,
    Isha = 5,
}

impl Prayer {
    /// All events in chronological order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Sunrise marks the end of Fajr and is not itself a prayer.
    #[must_use]
    pub const fn is_obligatory(&self) -> bool {
        !matches!(self, Self::Sunrise)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prayer times for one civil date.
///
/// Every timestamp carries the caller's civil UTC offset, so `naive_local()` gives the
/// local wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub dhuhr: DateTime<FixedOffset>,
    pub asr: DateTime<FixedOffset>,
    pub maghrib: DateTime<FixedOffset>,
    pub isha: DateTime<FixedOffset>,
    pub(crate) reliable: [bool; 6],
}

impl PrayerTimes {
    #[must_use]
    pub fn get(&self, prayer: Prayer) -> DateTime<FixedOffset> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Events in chronological order of definition.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<FixedOffset>)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// False when the event's hour angle was clamped and the time is not astronomically
    /// meaningful.
    #[must_use]
    pub const fn is_reliable(&self, prayer: Prayer) -> bool {
        self.reliable[prayer as usize]
    }

    #[must_use]
    pub fn all_reliable(&self) -> bool {
        self.reliable.iter().all(|&r| r)
    }

    /// Whether Fajr < Sunrise < Dhuhr < Asr < Maghrib < Isha holds strictly.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let times: Vec<_> = self.iter().map(|(_, t)| t).collect();
        times.windows(2).all(|w| w[0] < w[1])
    }
}
