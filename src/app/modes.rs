//! Interaction modes of the application.
//!
//! Exactly one [`Mode`] is active at a time, and each variant carries only the
//! data that is meaningful in it: a query exists only while filtering, a
//! selected city and its weather only while viewing.
//!
//! # State Machine
//!
//! ```text
//! Browsing ──startFilter──▶ Filtering
//!   │  ▲ ◀──cancelFilter───────┘ │
//!   │  │                         │ confirmSelection
//!   │  │ deselect                ▼
//!   │  └──────────────────── Viewing
//!   └─────confirmSelection──────▲
//! ```

use crate::domain::{RequestId, WeatherStatus};

/// Focus state within filtering.
///
/// Determines whether keystrokes edit the query or navigate the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// Query input is closed; the filtered list stays displayed for navigation.
    Navigating,
}

/// Active filter: the query and the cities it currently selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Query text as typed (case preserved for display).
    pub query: String,
    /// Whether the query is being edited.
    pub focus: SearchFocus,
    /// Ranked cities for `query`; the full list when `query` is empty.
    pub matches: Vec<String>,
}

/// The city being viewed and the fetch that serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// City name exactly as listed in the city list.
    pub city: String,
    /// Token of the fetch whose result this selection accepts.
    pub request: RequestId,
    /// Progress of that fetch.
    pub status: WeatherStatus,
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Full city list, cursor over it.
    Browsing,

    /// Query active; cursor over the filtered list.
    Filtering(Filter),

    /// A city is selected; its weather is pending, ready or failed.
    Viewing(Selection),
}

impl Mode {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::Filtering(_) => "filtering",
            Self::Viewing(_) => "viewing",
        }
    }
}
