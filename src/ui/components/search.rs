//! Search bar component renderer.

use crate::ui::helpers::{clip, pad_right};
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box.
///
/// ```text
/// [margin] ┌─────────────┐
/// [margin] │ Filter: par▏│
/// [margin] └─────────────┘
/// ```
///
/// A caret follows the query while typing; it disappears once the input is
/// closed and the list is being navigated.
#[must_use]
pub fn search_bar(search: &SearchBarInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2).max(2);
    let inner_width = box_width - 2;
    let margin = " ".repeat(SEARCH_BOX_MARGIN.min(cols / 2));
    let border = Style::fg(&theme.colors.search_bar_border);

    let caret = if search.is_typing { "▏" } else { "" };
    let text = clip(&format!(" Filter: {}{caret}", search.query), inner_width);
    let text_style = if search.is_typing {
        Style::fg(&theme.colors.text_normal)
    } else {
        Style::fg(&theme.colors.text_dim)
    };

    vec![
        format!("{margin}{}", paint(&format!("┌{}┐", "─".repeat(inner_width)), &border)),
        format!(
            "{margin}{}{}{}",
            paint("│", &border),
            paint(&pad_right(&text, inner_width), &text_style),
            paint("│", &border),
        ),
        format!("{margin}{}", paint(&format!("└{}┘", "─".repeat(inner_width)), &border)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::{strip_ansi, width};

    #[test]
    fn box_spans_width_minus_margins() {
        let info = SearchBarInfo {
            query: "par".to_string(),
            is_typing: true,
        };
        let lines: Vec<String> = search_bar(&info, &Theme::default(), 40)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| width(l) == 35));
        assert!(lines[1].starts_with("     │ Filter: par▏"));
    }

    #[test]
    fn caret_only_while_typing() {
        let info = SearchBarInfo {
            query: "par".to_string(),
            is_typing: false,
        };
        let middle = strip_ansi(&search_bar(&info, &Theme::default(), 40)[1]);
        assert!(!middle.contains('▏'));
    }
}
