//! Weather service collaborator (wttr.in).
//!
//! The interaction core never talks to the network. It emits
//! `Action::FetchWeather`, the plugin shim turns that into a Zellij web request
//! built here, and the raw result comes back through [`interpret_response`]
//! and [`parse_context`] as an `Event::WeatherFetched`.
//!
//! - `request`: URL construction and request context encoding
//! - `payload`: JSON payload decoding into [`crate::domain::WeatherReport`]

pub mod payload;
pub mod request;

pub use payload::{decode, interpret_response};
pub use request::{parse_context, WeatherRequest};

/// Default base URL of the weather service.
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";
