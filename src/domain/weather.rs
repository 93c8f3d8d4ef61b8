//! Weather report domain model.
//!
//! A [`WeatherReport`] is the display-ready subset of a weather service answer:
//! the interaction core stores it opaquely and Presentation reads it. Fetches are
//! tagged with a [`RequestId`] so that a completion can be matched against the
//! selection that issued it.

use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Measurement system used for temperatures and wind speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    /// Degrees Celsius and kilometres per hour.
    #[default]
    Metric,
    /// Degrees Fahrenheit and miles per hour.
    Imperial,
}

impl Units {
    /// Parses a configuration value, case-insensitively.
    ///
    /// Returns `None` for anything other than `metric` or `imperial`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }

    /// Temperature suffix, e.g. `°C`.
    #[must_use]
    pub const fn temperature_unit(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed suffix, e.g. `km/h`.
    #[must_use]
    pub const fn speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }
}

/// Coarse weather condition used to pick an icon.
///
/// Derived from the WWO condition codes reported by wttr.in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    /// Clear sky.
    Sunny,
    /// Sun with some cloud.
    PartlyCloudy,
    /// Cloudy or overcast.
    Cloudy,
    /// Mist, fog or freezing fog.
    Fog,
    /// Drizzle and light to moderate rain or showers.
    Rain,
    /// Heavy rain or torrential showers.
    HeavyRain,
    /// Sleet, freezing rain and ice pellets.
    Sleet,
    /// Light to moderate snow.
    Snow,
    /// Heavy snow and blizzards.
    HeavySnow,
    /// Any condition with thunder.
    Thunder,
    /// Codes with no known mapping.
    Unknown,
}

impl WeatherCategory {
    /// Maps a WWO weather code to its category.
    ///
    /// Unrecognised codes map to [`WeatherCategory::Unknown`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use weather_tui::domain::WeatherCategory;
    ///
    /// assert_eq!(WeatherCategory::from_code(113), WeatherCategory::Sunny);
    /// assert_eq!(WeatherCategory::from_code(389), WeatherCategory::Thunder);
    /// assert_eq!(WeatherCategory::from_code(7), WeatherCategory::Unknown);
    /// ```
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            113 => Self::Sunny,
            116 => Self::PartlyCloudy,
            119 | 122 => Self::Cloudy,
            143 | 248 | 260 => Self::Fog,
            176 | 263 | 266 | 293 | 296 | 353 => Self::Rain,
            299 | 302 | 305 | 308 | 356 | 359 => Self::HeavyRain,
            179 | 182 | 185 | 281 | 284 | 311 | 314 | 317 | 350 | 362 | 365 | 374 | 377 => {
                Self::Sleet
            }
            227 | 320 | 323 | 326 | 368 => Self::Snow,
            230 | 329 | 332 | 335 | 338 | 371 | 395 => Self::HeavySnow,
            200 | 386 | 389 | 392 => Self::Thunder,
            _ => Self::Unknown,
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy rain",
            Self::Sleet => "Sleet",
            Self::Snow => "Snow",
            Self::HeavySnow => "Heavy snow",
            Self::Thunder => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

/// Current conditions for one city, already converted to the configured units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    /// Air temperature.
    pub temperature: i32,
    /// Apparent ("feels like") temperature.
    pub feels_like: i32,
    /// Wind speed.
    pub wind_speed: u32,
    /// UV index.
    pub uv_index: u32,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Condition category for icon lookup.
    pub category: WeatherCategory,
    /// Service-provided description, e.g. "Light rain shower".
    pub description: String,
    /// Units the numbers above are expressed in.
    pub units: Units,
    /// Unix timestamp at which the report was received.
    pub fetched_at: i64,
}

impl WeatherReport {
    /// Temperature with its unit, e.g. `12°C`.
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}{}", self.temperature, self.units.temperature_unit())
    }

    /// Feels-like temperature with its unit.
    #[must_use]
    pub fn feels_like_label(&self) -> String {
        format!("{}{}", self.feels_like, self.units.temperature_unit())
    }

    /// Wind speed with its unit, e.g. `14 km/h`.
    #[must_use]
    pub fn wind_label(&self) -> String {
        format!("{} {}", self.wind_speed, self.units.speed_unit())
    }

    /// Describes how long ago the report was received, relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn age_label(&self, now: i64) -> String {
        let diff = now - self.fetched_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// Token identifying one weather fetch.
///
/// Tokens increase monotonically per plugin instance; a completion is only
/// applied when its token matches the selection currently being viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Returns the token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of the fetch for the selected city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherStatus {
    /// Request in flight.
    Pending,
    /// Report received.
    Ready(WeatherReport),
    /// The fetch failed; holds a human-readable description.
    Failed(String),
}
