//! Error types for the weather plugin.
//!
//! This module defines the centralized error type [`WeatherTuiError`] and a type alias
//! [`Result`] used wherever an operation can actually fail: loading themes, building
//! request URLs and decoding weather payloads. The search and interaction core never
//! fails and does not use these types.

use thiserror::Error;

/// The main error type for plugin operations.
///
/// # Examples
///
/// ```
/// use weather_tui::domain::WeatherTuiError;
///
/// fn check_units(raw: &str) -> Result<(), WeatherTuiError> {
///     if raw == "kelvin" {
///         return Err(WeatherTuiError::Config(format!("unsupported units: {raw}")));
///     }
///     Ok(())
/// }
///
/// assert!(check_units("kelvin").is_err());
/// ```
#[derive(Debug, Error)]
pub enum WeatherTuiError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The weather service answered with a payload we could not interpret.
    ///
    /// Covers malformed JSON, missing `current_condition` entries and numeric
    /// fields that are not numbers.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A weather request could not be built or was rejected by the service.
    #[error("Request error: {0}")]
    Request(String),
}

impl From<serde_json::Error> for WeatherTuiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, WeatherTuiError>;
