//! User interface rendering layer (Presentation).
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → layout → ANSI frame
//! ```
//!
//! Presentation only reads state; it never mutates it. All styling is done by
//! pure functions over a [`Theme`], so the core stays style-agnostic.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Frame assembly and output
//! - [`components`]: Header, footer, search bar, city list, empty state and weather panel
//! - [`helpers`]: Width, centering, highlighting and escape utilities
//! - [`theme`]: Color schemes and the `Style`/`paint` primitives

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{frame, frame_viewmodel, render};
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PanelBody, SearchBarInfo, UIViewModel,
    WeatherPanel,
};
