//! Shared text utilities for components.
//!
//! All functions are pure and return the styled text instead of printing it.
//! Widths are counted in characters, which is accurate for the city names and
//! symbols this plugin displays.

use crate::ui::theme::{paint, Style, Theme};

/// Escape sequence moving the cursor to `row`, `col` (both 1-indexed).
#[must_use]
pub fn cursor_to(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Display width of `text`, in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Pads `text` with spaces up to `cols` characters.
#[must_use]
pub fn pad_right(text: &str, cols: usize) -> String {
    format!("{text}{}", " ".repeat(cols.saturating_sub(width(text))))
}

/// Cuts `text` to at most `cols` characters.
#[must_use]
pub fn clip(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}

/// Centers `text` in `cols` columns, clipping it when it does not fit.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let text = clip(text, cols);
    let left = cols.saturating_sub(width(&text)) / 2;
    pad_right(&format!("{}{text}", " ".repeat(left)), cols)
}

/// Styles `text` with `base`, marking the character ranges with `mark`.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Out-of-range ends are clamped. The base style is restored
/// after each marked run so surrounding text keeps its colors.
///
/// ```rust
/// use weather_tui::ui::helpers::{highlight, strip_ansi};
/// use weather_tui::ui::theme::Style;
///
/// let out = highlight("Paris", &[(0, 2)], &Style::default(), &Style::fg("#f9e2af"));
/// assert_eq!(strip_ansi(&out), "Paris");
/// ```
#[must_use]
pub fn highlight(text: &str, ranges: &[(usize, usize)], base: &Style<'_>, mark: &Style<'_>) -> String {
    let base_prefix = base.prefix();
    let chars: Vec<char> = text.chars().collect();
    let mut out = base_prefix.clone();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        let marked: String = chars[start..end].iter().collect();
        out.push_str(&paint(&marked, mark));
        out.push_str(&base_prefix);
        pos = end;
    }

    out.extend(&chars[pos..]);
    out.push_str(Theme::reset());
    out
}

/// Removes ANSI CSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if chars.next() != Some('[') {
            continue;
        }
        // Parameters run until the final byte in 0x40..=0x7e.
        for c in chars.by_ref() {
            if ('\u{40}'..='\u{7e}').contains(&c) {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARK: Style<'static> = Style::fg("#ff0000");

    #[test]
    fn center_splits_padding() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 4), "tool");
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(width("-3°C"), 4);
        assert_eq!(pad_right("°", 3), "°  ");
    }

    #[test]
    fn highlight_marks_ranges_and_restores_base() {
        let base = Style::fg("#00ff00");
        let out = highlight("Paris", &[(1, 3)], &base, &MARK);

        let green = Theme::fg("#00ff00");
        let red = Theme::fg("#ff0000");
        let reset = Theme::reset();
        assert_eq!(out, format!("{green}P{red}ar{reset}{green}is{reset}"));
    }

    #[test]
    fn highlight_clamps_and_skips_bad_ranges() {
        let out = highlight("Oslo", &[(2, 9), (1, 2)], &Style::default(), &MARK);
        assert_eq!(strip_ansi(&out), "Oslo");
        assert_eq!(out.matches(&Theme::fg("#ff0000")).count(), 1);
    }

    #[test]
    fn highlight_uses_character_indices() {
        let out = highlight("Zürich", &[(1, 2)], &Style::default(), &MARK);
        assert!(out.contains(&format!("{}ü", Theme::fg("#ff0000"))));
    }

    #[test]
    fn strip_ansi_removes_escapes() {
        let styled = format!("{}{}x{}", cursor_to(3, 1), Theme::fg("#123456"), Theme::reset());
        assert_eq!(strip_ansi(&styled), "x");
    }
}
