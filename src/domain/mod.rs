//! Domain layer for the weather plugin.
//!
//! Core types independent of Zellij APIs and of the weather service wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`weather`]: Weather report model, units, categories and request tokens

pub mod error;
pub mod weather;

pub use error::{Result, WeatherTuiError};
pub use weather::{RequestId, Units, WeatherCategory, WeatherReport, WeatherStatus};

/// Cities offered when the configuration does not name any.
pub const DEFAULT_CITIES: [&str; 6] = [
    "Moscow",
    "Saint's Petersburg",
    "New York",
    "Cape Town",
    "Paris",
    "Batumi",
];
