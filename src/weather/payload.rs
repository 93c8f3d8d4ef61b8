//! Decoding of wttr.in `format=j1` payloads.
//!
//! wttr.in reports every number as a JSON string. Only `current_condition[0]`
//! is read; forecast and astronomy sections are ignored.

use crate::domain::error::{Result, WeatherTuiError};
use crate::domain::{Units, WeatherCategory, WeatherReport};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "temp_F")]
    temp_f: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    #[serde(rename = "FeelsLikeF")]
    feels_like_f: String,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
    #[serde(rename = "windspeedMiles")]
    windspeed_miles: String,
    #[serde(rename = "uvIndex")]
    uv_index: String,
    #[serde(default)]
    humidity: Option<String>,
    #[serde(rename = "weatherCode")]
    weather_code: String,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: String,
}

/// Parses one string-encoded numeric field.
fn number<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| WeatherTuiError::Decode(format!("field {field} is not a number: {raw:?}")))
}

/// Decodes a wttr.in JSON body into a report expressed in `units`.
///
/// # Errors
///
/// Returns [`WeatherTuiError::Decode`] if the body is not valid JSON, has no
/// current conditions, or carries a non-numeric value in a numeric field.
pub fn decode(body: &[u8], units: Units, fetched_at: i64) -> Result<WeatherReport> {
    let payload: Payload = serde_json::from_slice(body)?;
    let current = payload
        .current_condition
        .into_iter()
        .next()
        .ok_or_else(|| WeatherTuiError::Decode("payload has no current conditions".to_string()))?;

    let (temperature, feels_like, wind_speed) = match units {
        Units::Metric => (
            number("temp_C", &current.temp_c)?,
            number("FeelsLikeC", &current.feels_like_c)?,
            number("windspeedKmph", &current.windspeed_kmph)?,
        ),
        Units::Imperial => (
            number("temp_F", &current.temp_f)?,
            number("FeelsLikeF", &current.feels_like_f)?,
            number("windspeedMiles", &current.windspeed_miles)?,
        ),
    };

    let code: u16 = number("weatherCode", &current.weather_code)?;
    let category = WeatherCategory::from_code(code);

    let description = current
        .weather_desc
        .into_iter()
        .next()
        .map(|d| d.value.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| category.label().to_string());

    let humidity = match current.humidity.as_deref() {
        Some(raw) => number("humidity", raw)?,
        None => 0,
    };

    Ok(WeatherReport {
        temperature,
        feels_like,
        wind_speed,
        uv_index: number("uvIndex", &current.uv_index)?,
        humidity,
        category,
        description,
        units,
        fetched_at,
    })
}

/// Interprets a completed HTTP exchange.
///
/// # Errors
///
/// Returns [`WeatherTuiError::Request`] for non-2xx statuses and the errors of
/// [`decode`] otherwise.
pub fn interpret_response(
    status: u16,
    body: &[u8],
    units: Units,
    fetched_at: i64,
) -> Result<WeatherReport> {
    if !(200..300).contains(&status) {
        return Err(WeatherTuiError::Request(format!(
            "weather service returned HTTP {status}"
        )));
    }
    decode(body, units, fetched_at)
}
