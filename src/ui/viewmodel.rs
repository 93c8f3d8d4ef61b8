//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! behavior, only display-ready data: windowed rows, highlight ranges, chrome
//! text and the weather panel for the selected city.
//!
//! # Example
//!
//! ```rust
//! use weather_tui::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "Paris".to_string(),
//!         ordinal: 1,
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 2)],
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Weather ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//!     weather: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

use crate::domain::WeatherCategory;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Windowed slice of the visible city list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub selected_index: usize,

    /// Title bar.
    pub header: HeaderInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message shown instead of the list when it is empty.
    pub empty_state: Option<EmptyState>,

    /// Query box, present while filtering.
    pub search_bar: Option<SearchBarInfo>,

    /// Weather panel, present while viewing a city.
    pub weather: Option<WeatherPanel>,
}

/// One row of the city list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// City name, possibly truncated to fit.
    pub name: String,

    /// 1-based position in the visible list (not in the window).
    pub ordinal: usize,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Character ranges to highlight for the active query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Title bar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown when the visible list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching cities").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

/// Weather panel for the selected city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherPanel {
    /// City name exactly as listed.
    pub city: String,

    /// Panel content for the current fetch status.
    pub body: PanelBody,
}

/// Content of the weather panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// The fetch has not completed yet.
    Loading,

    /// Display-ready report values.
    Report {
        /// Category used to pick the ASCII art.
        category: WeatherCategory,
        /// Service-provided description.
        description: String,
        /// e.g. `12°C`.
        temperature: String,
        /// e.g. `10°C`.
        feels_like: String,
        /// e.g. `14 km/h`.
        wind: String,
        /// UV index.
        uv_index: String,
        /// e.g. `71%`.
        humidity: String,
        /// e.g. `updated 3m ago`.
        updated: String,
    },

    /// The fetch failed.
    Error(String),
}
