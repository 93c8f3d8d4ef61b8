//! Empty state component renderer.

use crate::ui::helpers::center;
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line message shown in place of an empty list,
/// preceded by two blank lines.
#[must_use]
pub fn empty_state(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        paint(&center(&empty.message, cols), &Style::fg(&theme.colors.empty_state_fg)),
        paint(&center(&empty.subtitle, cols), &Style::fg(&theme.colors.text_dim).dim()),
    ]
}
