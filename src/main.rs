//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the weather-tui library
//! and the Zellij plugin system. It maps keys to library events, runs the
//! actions the library emits, and feeds HTTP results back in.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Update**: Translate events, delegate to `handle_event`, run actions
//! 4. **Render**: Call library render function
//!
//! # Weather Requests
//!
//! ```text
//! Action::FetchWeather ──► web_request(url, context = {request_id, city})
//!                                     │
//! Event::WeatherFetched ◄── WebRequestResult(status, _, body, context)
//! ```
//!
//! Fetches issued before web access is granted wait in a queue; once access is
//! denied every fetch fails immediately with a readable message.
//!
//! # Keybindings
//!
//! Decided by `weather_tui::app::keymap`; chords with Ctrl or Alt other than
//! the two below never type into the query.
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `/`: Start filtering
//! - `Enter`/`Space`: Show weather for the highlighted city
//! - `q`: Close plugin
//!
//! Filtering (typing):
//! - Any character: Extend the query
//! - `Backspace`: Shorten the query
//! - `Enter`: Stop typing and navigate the matches
//! - `Esc`: Drop the filter
//!
//! Filtering (navigating):
//! - `j`/`k`/arrows: Move
//! - `Enter`/`Space`: Show weather
//! - `/`: Resume typing
//! - `Esc`: Drop the filter
//! - `q`: Close plugin
//!
//! Viewing:
//! - `r`: Refresh
//! - `c`/`Esc`/`Backspace`: Back to the list
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use weather_tui::app::{map_key, Gated, Key, KeyPress, PermissionGate};
use weather_tui::domain::RequestId;
use weather_tui::weather::{interpret_response, parse_context, WeatherRequest};
use weather_tui::{handle_event, Action, Config, Event, Theme};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the loaded
/// theme, the service URL and the web access gate.
struct State {
    /// Core application state from library layer.
    app: weather_tui::AppState,

    /// Color scheme handed to the renderer.
    theme: Theme,

    /// Base URL of the weather service.
    weather_url: String,

    /// Holds fetches until web access is answered.
    gate: PermissionGate,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: weather_tui::initialize(&default_config),
            theme: Theme::default(),
            weather_url: default_config.weather_url,
            gate: PermissionGate::default(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` for weather lookups.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        weather_tui::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(cities = ?config.cities, units = ?config.units, "parsed configuration");
        self.app = weather_tui::initialize(&config);
        self.theme = config.load_theme();
        self.weather_url.clone_from(&config.weather_url);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(theme = %self.theme.name, "plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                match map_key(&self.app, Self::key_press(key)) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match self.map_web_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                let released = self.gate.resolve(granted, self.app.awaited_request());
                return self.run_gated(released);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        weather_tui::ui::render(&self.app, &self.theme, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.app, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        let mut gated = Vec::new();
        for action in actions {
            match action {
                Action::Quit => {
                    tracing::debug!("closing plugin");
                    close_self();
                }
                Action::FetchWeather { city, request } => {
                    gated.extend(self.gate.submit(city, request));
                }
            }
        }
        self.run_gated(gated) || should_render
    }

    /// Sends released fetches and feeds failures back. Returns whether any
    /// of it changed the screen.
    fn run_gated(&mut self, gated: Vec<Gated>) -> bool {
        let mut should_render = false;
        for outcome in gated {
            should_render |= match outcome {
                Gated::Send { city, request } => self.fetch(&city, request),
                Gated::Fail(event) => self.dispatch(&event),
            };
        }
        should_render
    }

    /// Sends the HTTP request for `city`. A URL that cannot be built fails the
    /// fetch right away.
    fn fetch(&mut self, city: &str, request: RequestId) -> bool {
        match WeatherRequest::build(&self.weather_url, city, request) {
            Ok(built) => {
                tracing::debug!(city = %city, request_id = %request, "sending weather request");
                let headers = BTreeMap::from([(
                    "Accept".to_string(),
                    "application/json".to_string(),
                )]);
                web_request(&built.url, HttpVerb::Get, headers, Vec::new(), built.context());
                false
            }
            Err(e) => {
                tracing::warn!(city = %city, error = %e, "could not build weather request");
                self.dispatch(&Event::WeatherFetched {
                    request,
                    outcome: Err(e.to_string()),
                })
            }
        }
    }

    /// Maps a finished web request to a completion event.
    fn map_web_result(
        &self,
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some((request, city)) = parse_context(context) else {
            tracing::warn!(?context, "web request result without a weather context");
            return None;
        };

        let fetched_at = chrono::Utc::now().timestamp();
        let outcome = interpret_response(status, body, self.app.units, fetched_at).map_err(|e| {
            tracing::warn!(city = %city, status, error = %e, "weather request failed");
            e.to_string()
        });
        tracing::debug!(city = %city, request_id = %request, ok = outcome.is_ok(), "weather response received");

        Some(Event::WeatherFetched { request, outcome })
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Converts a Zellij key into the library's key press. Shift is already
    /// reflected in the character; Super counts as Alt.
    fn key_press(key: &KeyWithModifier) -> KeyPress {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        KeyPress {
            key: match key.bare_key {
                BareKey::Char(c) => Key::Char(c),
                BareKey::Up => Key::Up,
                BareKey::Down => Key::Down,
                BareKey::Enter => Key::Enter,
                BareKey::Esc => Key::Esc,
                BareKey::Backspace => Key::Backspace,
                _ => Key::Other,
            },
            ctrl: key.has_modifiers(&[KeyModifier::Ctrl]),
            alt: key.has_modifiers(&[KeyModifier::Alt]) || key.has_modifiers(&[KeyModifier::Super]),
        }
    }
}
