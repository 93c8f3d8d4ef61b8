//! Weather panel component: ASCII art plus the report values.

use crate::domain::WeatherCategory;
use crate::ui::helpers::{clip, pad_right};
use crate::ui::theme::{paint, Style, Theme};
use crate::ui::viewmodel::{PanelBody, WeatherPanel};

/// Width of every art line.
const ART_WIDTH: usize = 13;

/// Five-line ASCII art for a weather category.
#[must_use]
pub const fn art(category: WeatherCategory) -> [&'static str; 5] {
    match category {
        WeatherCategory::Sunny => [
            "    \\   /    ",
            "     .-.     ",
            "  - (   ) -  ",
            "     `-'     ",
            "    /   \\    ",
        ],
        WeatherCategory::PartlyCloudy => [
            "   \\  /      ",
            " _ /\"\".-.    ",
            "   \\_(   ).  ",
            "   /(___(__) ",
            "             ",
        ],
        WeatherCategory::Cloudy => [
            "             ",
            "     .--.    ",
            "  .-(    ).  ",
            " (___.__)__) ",
            "             ",
        ],
        WeatherCategory::Fog => [
            "             ",
            " _ - _ - _ - ",
            "  _ - _ - _  ",
            " _ - _ - _ - ",
            "             ",
        ],
        WeatherCategory::Rain => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "    ' ' ' '  ",
            "   ' ' ' '   ",
        ],
        WeatherCategory::HeavyRain => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "  ,','.','   ",
            "  ,','.','   ",
        ],
        WeatherCategory::Sleet => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "    ' * ' *  ",
            "   * ' * '   ",
        ],
        WeatherCategory::Snow => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "    *  *  *  ",
            "   *  *  *   ",
        ],
        WeatherCategory::HeavySnow => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "   * * * *   ",
            "  * * * *    ",
        ],
        WeatherCategory::Thunder => [
            "     .-.     ",
            "    (   ).   ",
            "   (___(__)  ",
            "    /_ /_    ",
            "     /  /    ",
        ],
        WeatherCategory::Unknown => [
            "    .-.      ",
            "     __)     ",
            "    (        ",
            "     `-'     ",
            "      *      ",
        ],
    }
}

/// Renders the panel body lines for the selected city.
#[must_use]
pub fn panel(panel: &WeatherPanel, theme: &Theme, cols: usize) -> Vec<String> {
    let normal = Style::fg(&theme.colors.text_normal);
    let dim = Style::fg(&theme.colors.text_dim);
    let line = |text: &str, style: &Style<'_>| paint(&pad_right(&clip(text, cols), cols), style);

    match &panel.body {
        PanelBody::Loading => vec![
            String::new(),
            line(&format!("  Fetching weather for {}...", panel.city), &dim),
        ],
        PanelBody::Error(message) => vec![
            String::new(),
            line(
                &format!("  Could not load weather for {}", panel.city),
                &Style::fg(&theme.colors.error_fg).bold(),
            ),
            line(&format!("  {message}"), &Style::fg(&theme.colors.error_fg)),
            String::new(),
            line("  Press r to try again", &dim),
        ],
        PanelBody::Report {
            category,
            description,
            temperature,
            feels_like,
            wind,
            uv_index,
            humidity,
            updated,
        } => {
            let details = [
                description.clone(),
                format!("Temperature  {temperature} (feels like {feels_like})"),
                format!("Wind         {wind}"),
                format!("UV index     {uv_index}"),
                format!("Humidity     {humidity}"),
            ];
            let art_style = Style::fg(&theme.colors.accent_fg).bold();
            let text_cols = cols.saturating_sub(ART_WIDTH + 4);

            let mut lines = vec![String::new()];
            for (i, (art_line, detail)) in art(*category).iter().zip(details.iter()).enumerate() {
                let style = if i == 0 { normal.bold() } else { normal };
                lines.push(format!(
                    "  {}  {}",
                    paint(art_line, &art_style),
                    paint(&pad_right(&clip(detail, text_cols), text_cols), &style),
                ));
            }
            lines.push(String::new());
            lines.push(line(&format!("  {updated}"), &dim));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::{strip_ansi, width};

    const CATEGORIES: [WeatherCategory; 11] = [
        WeatherCategory::Sunny,
        WeatherCategory::PartlyCloudy,
        WeatherCategory::Cloudy,
        WeatherCategory::Fog,
        WeatherCategory::Rain,
        WeatherCategory::HeavyRain,
        WeatherCategory::Sleet,
        WeatherCategory::Snow,
        WeatherCategory::HeavySnow,
        WeatherCategory::Thunder,
        WeatherCategory::Unknown,
    ];

    #[test]
    fn art_lines_share_one_width() {
        for category in CATEGORIES {
            for line in art(category) {
                assert_eq!(width(line), ART_WIDTH, "{category:?}: {line:?}");
            }
        }
    }

    #[test]
    fn report_lines_sit_beside_art() {
        let panel_vm = WeatherPanel {
            city: "Batumi".to_string(),
            body: PanelBody::Report {
                category: WeatherCategory::Sunny,
                description: "Clear".to_string(),
                temperature: "24°C".to_string(),
                feels_like: "26°C".to_string(),
                wind: "7 km/h".to_string(),
                uv_index: "6".to_string(),
                humidity: "55%".to_string(),
                updated: "updated just now".to_string(),
            },
        };
        let lines: Vec<String> = panel(&panel_vm, &Theme::default(), 60)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[2].starts_with("       .-.       Temperature  24°C (feels like 26°C)"));
        assert!(lines[7].contains("updated just now"));
    }

    #[test]
    fn error_body_shows_message() {
        let panel_vm = WeatherPanel {
            city: "Paris".to_string(),
            body: PanelBody::Error("weather service returned HTTP 503".to_string()),
        };
        let text = panel(&panel_vm, &Theme::default(), 60)
            .iter()
            .map(|l| strip_ansi(l))
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Could not load weather for Paris"));
        assert!(text.contains("HTTP 503"));
    }
}
