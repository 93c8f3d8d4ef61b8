//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (key bindings, HTTP completions)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Events are processed one at a time to completion; ranking runs inline, so
//! the visible list always reflects the latest query.
//!
//! # Example
//!
//! ```rust
//! use weather_tui::app::{handle_event, Action, AppState, Event};
//! use weather_tui::domain::{RequestId, Units};
//!
//! let mut state = AppState::new(vec!["Paris".to_string()], Units::Metric);
//! let (render, actions) = handle_event(&mut state, &Event::ConfirmSelection);
//! assert!(render);
//! assert_eq!(
//!     actions,
//!     vec![Action::FetchWeather { city: "Paris".to_string(), request: RequestId(1) }]
//! );
//! ```

use crate::app::{Action, AppState};
use crate::domain::{RequestId, WeatherReport};

/// Logical input events consumed by the state machine.
///
/// Physical key bindings are decided by the plugin shim; the core only sees
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Closes the plugin.
    Quit,
    /// Moves the cursor up one row (stops at the top).
    MoveUp,
    /// Moves the cursor down one row (stops at the bottom).
    MoveDown,
    /// Opens the query input, or resumes typing on the current query.
    StartFilter,
    /// Appends a character to the query.
    AppendChar(char),
    /// Removes the last character from the query.
    Backspace,
    /// Closes the query input; the filtered list stays displayed.
    StopFilterInput,
    /// Drops the filter and returns to the full list.
    CancelFilter,
    /// Selects the city under the cursor and requests its weather.
    ConfirmSelection,
    /// Leaves the weather view.
    Deselect,
    /// Re-requests the weather for the city being viewed.
    Refresh,

    /// A weather fetch finished.
    WeatherFetched {
        /// Token the fetch was issued with.
        request: RequestId,
        /// Report, or a human-readable failure description.
        outcome: Result<WeatherReport, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, plus the side effects to perform
/// in order. Conditions such as moving past the list bounds or confirming on
/// an empty list are silent no-ops that request no render.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = state.mode().name()).entered();

    match event {
        Event::Quit => (false, vec![Action::Quit]),
        Event::MoveUp => (state.move_up(), vec![]),
        Event::MoveDown => (state.move_down(), vec![]),
        Event::StartFilter => (state.start_filter(), vec![]),
        Event::AppendChar(c) => (state.append_char(*c), vec![]),
        Event::Backspace => (state.backspace(), vec![]),
        Event::StopFilterInput => (state.stop_filter_input(), vec![]),
        Event::CancelFilter => (state.cancel_filter(), vec![]),
        Event::ConfirmSelection => state.confirm_selection().map_or_else(
            || {
                tracing::debug!("nothing to select");
                (false, vec![])
            },
            |action| (true, vec![action]),
        ),
        Event::Deselect => (state.deselect(), vec![]),
        Event::Refresh => state
            .refresh()
            .map_or((false, vec![]), |action| (true, vec![action])),
        Event::WeatherFetched { request, outcome } => (state.complete_fetch(*request, outcome), vec![]),
    }
}
