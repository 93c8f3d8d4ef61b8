//! Composable UI components.
//!
//! Each component turns one part of the view model into styled lines; none of
//! them print. [`layout`] stacks them into exactly `rows` lines:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]      (filtering only)
//! [Column Header]             (list views only)
//! [List rows | Empty state | Weather panel]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;
mod weather;

use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::UIViewModel;

use empty::empty_state;
use footer::footer;
use header::header;
use list::{column_header, rows as list_rows};
use search::search_bar;
use weather::panel;

/// A horizontal separator across `cols`.
fn border(color: &str, cols: usize) -> String {
    paint(&"─".repeat(cols), &Style::fg(color))
}

/// Lays the view model out as exactly `rows` lines for a `cols`-wide pane.
///
/// The body is cut when the pane is too short; header and footer always keep
/// their places when there are at least five rows.
#[must_use]
pub fn layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> Vec<String> {
    let mut top = vec![
        String::new(),
        header(&vm.header, theme, cols),
        border(&theme.colors.border, cols),
    ];
    if let Some(search) = &vm.search_bar {
        top.extend(search_bar(search, theme, cols));
    }

    let body = if let Some(weather) = &vm.weather {
        panel(weather, theme, cols)
    } else if let Some(empty) = &vm.empty_state {
        empty_state(empty, theme, cols)
    } else {
        let mut body = vec![column_header(theme, cols)];
        body.extend(list_rows(&vm.display_items, theme, cols));
        body
    };

    let bottom = [
        border(&theme.colors.border, cols),
        footer(&vm.footer, theme, cols),
    ];

    let body_rows = rows.saturating_sub(top.len() + bottom.len());
    let mut lines = top;
    lines.extend(body.into_iter().take(body_rows));
    lines.resize(rows.saturating_sub(bottom.len()), String::new());
    lines.extend(bottom);
    lines.truncate(rows);
    lines
}
