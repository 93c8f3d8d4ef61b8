//! Header component: the centered title bar.

use crate::ui::helpers::center;
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title centered across `cols`, bold, on the optional header
/// background.
#[must_use]
pub fn header(info: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let style = Style {
        fg: Some(theme.colors.header_fg.as_str()),
        bg: theme.colors.header_bg.as_deref(),
        bold: true,
        dim: false,
    };
    paint(&center(&info.title, cols), &style)
}
