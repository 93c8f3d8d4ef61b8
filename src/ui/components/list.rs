//! City list component renderer.
//!
//! One row per visible city: a right-aligned ordinal and the name. The
//! cursor row is painted with the selection colors across the full width;
//! other rows show the fuzzy match highlights for the active query.

use crate::ui::helpers::{clip, highlight, pad_right, width};
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::DisplayItem;

/// Renders the bold column header row.
#[must_use]
pub fn column_header(theme: &Theme, cols: usize) -> String {
    paint(
        &pad_right(&clip("  #  CITY", cols), cols),
        &Style::fg(&theme.colors.header_fg).bold(),
    )
}

/// Renders all rows in order.
#[must_use]
pub fn rows(items: &[DisplayItem], theme: &Theme, cols: usize) -> Vec<String> {
    items.iter().map(|item| row(item, theme, cols)).collect()
}

/// Styling precedence: selection colors, then match highlights, then normal
/// text. Highlights are dropped on the selected row so they do not fight the
/// selection background.
fn row(item: &DisplayItem, theme: &Theme, cols: usize) -> String {
    let prefix = format!(" {:>2}  ", item.ordinal);
    let line = pad_right(&clip(&format!("{prefix}{}", item.name), cols), cols);

    if item.is_selected {
        let style = Style::on(&theme.colors.selection_fg, &theme.colors.selection_bg).bold();
        return paint(&line, &style);
    }

    let offset = width(&prefix);
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .map(|&(start, end)| (start + offset, end + offset))
        .collect();

    highlight(
        &line,
        &ranges,
        &Style::fg(&theme.colors.text_normal),
        &Style::on(&theme.colors.match_highlight_fg, &theme.colors.match_highlight_bg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn item(name: &str, is_selected: bool) -> DisplayItem {
        DisplayItem {
            name: name.to_string(),
            ordinal: 3,
            is_selected,
            highlight_ranges: vec![(0, 2)],
        }
    }

    #[test]
    fn rows_fill_the_width() {
        let theme = Theme::default();
        for line in rows(&[item("Paris", true), item("Batumi", false)], &theme, 20) {
            assert_eq!(width(&strip_ansi(&line)), 20);
        }
        assert_eq!(strip_ansi(&column_header(&theme, 20)), "  #  CITY           ");
    }

    #[test]
    fn unselected_row_highlights_name_not_ordinal() {
        let theme = Theme::default();
        let line = row(&item("Paris", false), &theme, 20);
        let mark = Theme::bg(&theme.colors.match_highlight_bg);

        assert!(line.contains(&format!("{mark}Pa")));
        assert_eq!(strip_ansi(&line), "  3  Paris          ");
    }

    #[test]
    fn selected_row_has_no_match_highlight() {
        let theme = Theme::default();
        let line = row(&item("Paris", true), &theme, 20);

        assert!(line.contains(&Theme::bg(&theme.colors.selection_bg)));
        assert!(!line.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }
}
