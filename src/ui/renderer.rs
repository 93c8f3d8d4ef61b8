//! Top-level rendering coordinator.
//!
//! Rendering is split in two pure steps followed by one write:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Layout**: `UIViewModel` → positioned, styled frame text
//! 3. **Output**: the frame is printed to the plugin pane
//!
//! # Example
//!
//! ```rust
//! use weather_tui::app::AppState;
//! use weather_tui::domain::Units;
//! use weather_tui::ui::{frame, helpers::strip_ansi, Theme};
//!
//! let state = AppState::new(vec!["Paris".to_string()], Units::Metric);
//! assert!(strip_ansi(&frame(&state, &Theme::default(), 12, 40)).contains("Paris"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::cursor_to;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, theme: &Theme, rows: usize, cols: usize) {
    print!("{}", frame(state, theme, rows, cols));
}

/// Builds the full frame for `state` in `theme` without printing it.
#[must_use]
pub fn frame(state: &AppState, theme: &Theme, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    frame_viewmodel(&viewmodel, theme, rows, cols)
}

/// Builds the frame for a precomputed view model.
///
/// Every line is prefixed with an absolute cursor position so the output does
/// not depend on what the pane showed before.
#[must_use]
pub fn frame_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    components::layout(vm, theme, rows, cols)
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}{line}", cursor_to(i + 1, 1)))
        .collect()
}
