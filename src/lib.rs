//! weather-tui: a Zellij plugin for browsing a city list and checking the
//! weather.
//!
//! The plugin shows a fixed list of cities, narrows it with a typo-tolerant
//! fuzzy filter, and shows current conditions from wttr.in for the selected
//! city.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key bindings, HTTP
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Weather       │
//! │ (ui/)         │   │ (search/)     │   │ (weather/)    │
//! │ - Rendering   │   │ - Distance    │   │ - Requests    │
//! │ - Theming     │   │ - Pruning     │   │ - Decoding    │
//! │ - Components  │   │ - Ranking     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Weather model (domain/weather)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/weather-tui.wasm" {
//!         cities "Tbilisi, Batumi, Kutaisi"
//!         units "imperial"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use weather_tui::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::from_zellij(&BTreeMap::new());
//! let mut state = initialize(&config);
//!
//! for event in [Event::StartFilter, Event::AppendChar('p'), Event::AppendChar('a')] {
//!     handle_event(&mut state, &event);
//! }
//! let (_, actions) = handle_event(&mut state, &Event::ConfirmSelection);
//! assert!(matches!(&actions[..], [Action::FetchWeather { city, .. }] if city == "Paris"));
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod ui;
pub mod weather;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Mode, SearchFocus};
pub use domain::{Result, Units, WeatherTuiError, DEFAULT_CITIES};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cities offered for selection, in display order. Fixed after load.
    pub cities: Vec<String>,

    /// Units for temperatures and wind speed.
    pub units: Units,

    /// Base URL of the wttr.in-compatible weather service.
    pub weather_url: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file (`~` allowed).
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(ToString::to_string).collect(),
            units: Units::default(),
            weather_url: weather::DEFAULT_WEATHER_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration, falling back to defaults for missing
    /// or unusable values.
    ///
    /// - `cities`: comma-separated, trimmed, empties dropped; an empty result
    ///   means the default list
    /// - `units`: `metric` or `imperial`, anything else is metric
    /// - `weather_url`, `theme`, `theme_file`, `trace_level`: taken as given
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use weather_tui::{Config, Units};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("cities".to_string(), "Oslo, Bergen,,".to_string());
    /// map.insert("units".to_string(), "imperial".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.cities, vec!["Oslo", "Bergen"]);
    /// assert_eq!(config.units, Units::Imperial);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let cities = config
            .get("cities")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.cities);

        let units = config.get("units").map_or(defaults.units, |raw| {
            Units::parse(raw).unwrap_or_else(|| {
                tracing::warn!(units = %raw, "unknown units, using metric");
                Units::Metric
            })
        });

        let weather_url = config
            .get("weather_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.weather_url);

        Self {
            cities,
            units,
            weather_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the configured theme: file first, then built-in name, then
    /// the default. Failures are logged and fall through.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, falling back"),
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the initial application state from the configuration.
///
/// The theme is not part of the state; load it with [`Config::load_theme`]
/// and hand it to the renderer.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        cities = config.cities.len(),
        units = ?config.units,
        "initializing weather plugin"
    );

    AppState::new(config.cities.clone(), config.units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_cities_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[("cities", " , ,")]));
        assert_eq!(config.cities.len(), DEFAULT_CITIES.len());
    }

    #[test]
    fn unknown_units_fall_back_to_metric() {
        let config = Config::from_zellij(&map(&[("units", "kelvin")]));
        assert_eq!(config.units, Units::Metric);
    }

    #[test]
    fn weather_url_is_trimmed() {
        let config = Config::from_zellij(&map(&[("weather_url", " http://localhost:8080 ")]));
        assert_eq!(config.weather_url, "http://localhost:8080");
    }

    #[test]
    fn theme_by_name() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-frappe")]));
        assert_eq!(config.load_theme().name, "catppuccin-frappe");
    }

    #[test]
    fn unknown_theme_name_uses_default() {
        let config = Config::from_zellij(&map(&[("theme", "nord")]));
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        file.write_all(toml::to_string(&latte).unwrap().as_bytes()).unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-frappe"), ("theme_file", &path)]));
        assert_eq!(config.load_theme(), latte);
    }

    #[test]
    fn broken_theme_file_falls_back_to_name() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-macchiato"),
            ("theme_file", "/nonexistent/theme.toml"),
        ]));
        assert_eq!(config.load_theme().name, "catppuccin-macchiato");
    }

    #[test]
    fn initialize_starts_browsing_configured_cities() {
        let config = Config::from_zellij(&map(&[("cities", "Oslo,Bergen"), ("units", "imperial")]));
        let state = initialize(&config);

        assert_eq!(state.cities(), ["Oslo".to_string(), "Bergen".to_string()]);
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.units, Units::Imperial);
    }
}
