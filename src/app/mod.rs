//! Application layer: the interaction state machine.
//!
//! Sits between the plugin shim (main.rs) and the search/domain layers.
//!
//! ```text
//! Key/HTTP → Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                  ↓
//!                          └──────── WeatherFetched ◀─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition dispatch
//! - [`keymap`]: Key binding policy per mode
//! - [`modes`]: Tagged mode union and filter focus
//! - [`permission`]: Web access gate for weather fetches
//! - [`state`]: Application state, transitions and view model computation

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod permission;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::{map_key, Key, KeyPress};
pub use modes::{Filter, Mode, SearchFocus, Selection};
pub use permission::{Gated, Permission, PermissionGate};
pub use state::AppState;
