//! Footer component: keybinding hints.

use crate::ui::helpers::center;
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::FooterInfo;

/// Renders the hints centered and dimmed. Text wider than `cols` is clipped
/// so the layout never wraps.
#[must_use]
pub fn footer(info: &FooterInfo, theme: &Theme, cols: usize) -> String {
    paint(&center(&info.keybindings, cols), &Style::fg(&theme.colors.text_dim))
}
