//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the interaction state
//! machine: the fixed city list, the active [`Mode`], the cursor and the
//! request token counter. Every transition is a method here; the event handler
//! only dispatches to them.
//!
//! # Invariants
//!
//! - Exactly one mode is active; data that only makes sense in one mode lives
//!   inside that mode's variant.
//! - `cursor < visible().len()` whenever the visible list is non-empty, and
//!   `cursor == 0` when it is empty.
//! - A fetch completion is applied only while viewing the selection that
//!   issued it.
//!
//! # Example
//!
//! ```rust
//! use weather_tui::app::AppState;
//! use weather_tui::domain::Units;
//!
//! let cities = vec!["Paris".to_string(), "Moscow".to_string()];
//! let mut state = AppState::new(cities, Units::Metric);
//! state.move_down();
//! assert_eq!(state.cursor(), 1);
//! ```

use super::actions::Action;
use super::modes::{Filter, Mode, SearchFocus, Selection};
use crate::domain::{RequestId, Units, WeatherReport, WeatherStatus};
use crate::search;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PanelBody, SearchBarInfo, UIViewModel,
    WeatherPanel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Widest city name shown before truncation.
const NAME_COLUMN_WIDTH: usize = 35;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    cities: Vec<String>,
    mode: Mode,
    cursor: usize,
    last_request: RequestId,

    /// Units requested from the weather service.
    pub units: Units,
}

impl AppState {
    /// Creates the initial state: browsing the full list with the cursor on
    /// the first city.
    #[must_use]
    pub fn new(cities: Vec<String>, units: Units) -> Self {
        Self {
            cities,
            mode: Mode::Browsing,
            cursor: 0,
            last_request: RequestId::default(),
            units,
        }
    }

    /// The fixed city list, in configured order.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The active mode.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Cursor index into [`visible`](Self::visible).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The list the cursor currently indexes.
    ///
    /// The full list while browsing, the ranked matches while filtering, and
    /// nothing while viewing a city.
    #[must_use]
    pub fn visible(&self) -> &[String] {
        match &self.mode {
            Mode::Browsing => &self.cities,
            Mode::Filtering(filter) => &filter.matches,
            Mode::Viewing(_) => &[],
        }
    }

    /// Current query, if filtering.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match &self.mode {
            Mode::Filtering(filter) => Some(&filter.query),
            _ => None,
        }
    }

    /// Whether keystrokes currently edit the query.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        matches!(
            self.mode,
            Mode::Filtering(Filter {
                focus: SearchFocus::Typing,
                ..
            })
        )
    }

    /// City being viewed, if any.
    #[must_use]
    pub fn selected_city(&self) -> Option<&str> {
        match &self.mode {
            Mode::Viewing(selection) => Some(&selection.city),
            _ => None,
        }
    }

    /// Weather status of the city being viewed, if any.
    #[must_use]
    pub const fn weather(&self) -> Option<&WeatherStatus> {
        match &self.mode {
            Mode::Viewing(selection) => Some(&selection.status),
            _ => None,
        }
    }

    /// Token of the fetch the viewed city is waiting on, if any.
    #[must_use]
    pub const fn awaited_request(&self) -> Option<RequestId> {
        match &self.mode {
            Mode::Viewing(Selection {
                request,
                status: WeatherStatus::Pending,
                ..
            }) => Some(*request),
            _ => None,
        }
    }

    /// Moves the cursor up one row, stopping at the top.
    ///
    /// Returns whether the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor down one row, stopping at the last row.
    ///
    /// Returns whether the cursor moved. No-op on an empty list.
    pub fn move_down(&mut self) -> bool {
        let len = self.visible().len();
        if len == 0 || self.cursor + 1 >= len {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Opens the query input.
    ///
    /// From browsing this starts a fresh, empty filter with the cursor reset.
    /// While navigating filtered results it resumes typing on the existing
    /// query and keeps the cursor.
    pub fn start_filter(&mut self) -> bool {
        match &mut self.mode {
            Mode::Browsing => {
                self.mode = Mode::Filtering(Filter {
                    query: String::new(),
                    focus: SearchFocus::Typing,
                    matches: self.cities.clone(),
                });
                self.cursor = 0;
                true
            }
            Mode::Filtering(filter) if filter.focus == SearchFocus::Navigating => {
                filter.focus = SearchFocus::Typing;
                true
            }
            _ => false,
        }
    }

    /// Appends a character to the query and re-ranks.
    pub fn append_char(&mut self, c: char) -> bool {
        let Mode::Filtering(filter) = &mut self.mode else {
            return false;
        };

        filter.query.push(c);
        filter.focus = SearchFocus::Typing;
        filter.matches = ranked(&self.cities, &filter.query);
        self.cursor = 0;

        tracing::trace!(query = %filter.query, matches = filter.matches.len(), "query extended");
        true
    }

    /// Removes the last query character and re-ranks.
    ///
    /// No-op when the query is already empty.
    pub fn backspace(&mut self) -> bool {
        let Mode::Filtering(filter) = &mut self.mode else {
            return false;
        };

        if filter.query.pop().is_none() {
            return false;
        }
        filter.matches = ranked(&self.cities, &filter.query);
        self.cursor = 0;

        tracing::trace!(query = %filter.query, matches = filter.matches.len(), "query shortened");
        true
    }

    /// Closes the query input, keeping the cursor where it is.
    ///
    /// With a non-empty query the filtered list stays on screen for
    /// navigation. With an empty query the visible list already equals the
    /// full list, so this returns to browsing.
    pub fn stop_filter_input(&mut self) -> bool {
        let Mode::Filtering(filter) = &mut self.mode else {
            return false;
        };

        if filter.query.is_empty() {
            self.mode = Mode::Browsing;
            return true;
        }
        if filter.focus == SearchFocus::Navigating {
            return false;
        }
        filter.focus = SearchFocus::Navigating;
        true
    }

    /// Abandons the filter and returns to browsing with the cursor reset.
    pub fn cancel_filter(&mut self) -> bool {
        if !matches!(self.mode, Mode::Filtering(_)) {
            return false;
        }
        self.mode = Mode::Browsing;
        self.cursor = 0;
        true
    }

    /// Selects the city under the cursor and requests its weather.
    ///
    /// Returns the fetch to perform, or `None` when nothing can be selected
    /// (empty visible list, or already viewing).
    pub fn confirm_selection(&mut self) -> Option<Action> {
        if matches!(self.mode, Mode::Viewing(_)) {
            return None;
        }
        let city = self.visible().get(self.cursor)?.clone();
        let request = self.issue_request();

        tracing::debug!(city = %city, request_id = %request, "city selected");

        self.mode = Mode::Viewing(Selection {
            city: city.clone(),
            request,
            status: WeatherStatus::Pending,
        });
        self.cursor = 0;

        Some(Action::FetchWeather { city, request })
    }

    /// Leaves the weather view for the full list.
    pub fn deselect(&mut self) -> bool {
        if !matches!(self.mode, Mode::Viewing(_)) {
            return false;
        }
        self.mode = Mode::Browsing;
        self.cursor = 0;
        true
    }

    /// Re-requests the weather for the city being viewed under a new token.
    pub fn refresh(&mut self) -> Option<Action> {
        if !matches!(self.mode, Mode::Viewing(_)) {
            return None;
        }
        let request = self.issue_request();
        let Mode::Viewing(selection) = &mut self.mode else {
            return None;
        };

        selection.request = request;
        selection.status = WeatherStatus::Pending;

        tracing::debug!(city = %selection.city, request_id = %request, "weather refresh requested");

        Some(Action::FetchWeather {
            city: selection.city.clone(),
            request,
        })
    }

    /// Applies a fetch completion.
    ///
    /// The outcome is stored only if the city that issued `request` is still
    /// being viewed under that same token; anything else is stale and
    /// discarded. Returns whether the state changed.
    pub fn complete_fetch(&mut self, request: RequestId, outcome: &Result<WeatherReport, String>) -> bool {
        match &mut self.mode {
            Mode::Viewing(selection) if selection.request == request => {
                selection.status = match outcome {
                    Ok(report) => WeatherStatus::Ready(report.clone()),
                    Err(message) => {
                        tracing::warn!(city = %selection.city, error = %message, "weather fetch failed");
                        WeatherStatus::Failed(message.clone())
                    }
                };
                true
            }
            mode => {
                tracing::debug!(
                    request_id = %request,
                    mode = mode.name(),
                    "discarding stale weather result"
                );
                false
            }
        }
    }

    fn issue_request(&mut self) -> RequestId {
        self.last_request = self.last_request.next();
        self.last_request
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, chrono::Utc::now().timestamp())
    }

    /// Computes the view model with `now` as the current Unix time.
    ///
    /// # Windowing
    ///
    /// The list is cut to the rows left after chrome, centered on the cursor
    /// and shifted back when near the end so the window stays full.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let mut vm = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            weather: None,
        };

        if let Mode::Viewing(selection) = &self.mode {
            vm.weather = Some(compute_weather_panel(selection, now));
            return vm;
        }

        let visible = self.visible();
        if visible.is_empty() {
            vm.empty_state = Some(self.compute_empty_state());
            return vm;
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = self
            .query()
            .filter(|q| !q.is_empty())
            .map(|q| (SkimMatcherV2::default().ignore_case(), q));

        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(8)).max(4);

        vm.display_items = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, city)| {
                let absolute_idx = visible_start + relative_idx;
                let highlight_ranges = matcher.as_ref().map_or_else(Vec::new, |(m, q)| {
                    clamp_ranges(compute_highlight_ranges(m, city, q), shown_chars(city, name_width))
                });
                DisplayItem {
                    name: truncate(city, name_width),
                    ordinal: absolute_idx + 1,
                    is_selected: absolute_idx == self.cursor,
                    highlight_ranges,
                }
            })
            .collect();
        vm.selected_index = self.cursor.saturating_sub(visible_start);

        vm
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.cities.len();
        let title = match &self.mode {
            Mode::Browsing => format!(" Weather ({total} cities) "),
            Mode::Filtering(filter) => format!(" Weather ({} of {total} cities) ", filter.matches.len()),
            Mode::Viewing(selection) => format!(" Weather: {} ", selection.city),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.mode {
            Mode::Browsing => "j/k or Ctrl+n/p: navigate  /: filter  Enter: show weather  q: quit",
            Mode::Filtering(Filter {
                focus: SearchFocus::Typing,
                ..
            }) => "ESC: cancel  Enter: done  Ctrl+n/p: navigate  Type to filter",
            Mode::Filtering(Filter {
                focus: SearchFocus::Navigating,
                ..
            }) => "ESC: cancel  /: edit query  j/k or Ctrl+n/p: navigate  Enter: show weather",
            Mode::Viewing(_) => "r: refresh  ESC or c: back  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match &self.mode {
            Mode::Filtering(filter) => Some(SearchBarInfo {
                query: filter.query.clone(),
                is_typing: filter.focus == SearchFocus::Typing,
            }),
            _ => None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match self.query() {
            Some(query) if !query.is_empty() => EmptyState {
                message: "No matching cities".to_string(),
                subtitle: format!("No city shares a letter with \"{query}\""),
            },
            _ => EmptyState {
                message: "No cities configured".to_string(),
                subtitle: "Set `cities` in the plugin configuration".to_string(),
            },
        }
    }

    /// Rows left for the list after header, borders, column header, footer
    /// and (while filtering) the 3-line search box.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = match self.mode {
            Mode::Filtering(_) => 9,
            _ => 6,
        };
        total_rows.saturating_sub(chrome).max(1)
    }
}

fn ranked(cities: &[String], query: &str) -> Vec<String> {
    search::rank(cities, query)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let kept: String = name.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

/// Number of characters of `name` that survive [`truncate`], ellipsis excluded.
fn shown_chars(name: &str, width: usize) -> usize {
    let count = name.chars().count();
    if count > width {
        width.saturating_sub(3)
    } else {
        count
    }
}

/// Cuts runs at `limit` and drops those starting past it.
fn clamp_ranges(ranges: Vec<(usize, usize)>, limit: usize) -> Vec<(usize, usize)> {
    ranges
        .into_iter()
        .filter(|&(start, _)| start < limit)
        .map(|(start, end)| (start, end.min(limit)))
        .collect()
}

/// Coalesces the matcher's character indices into `(start, end)` runs.
fn compute_highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn compute_weather_panel(selection: &Selection, now: i64) -> WeatherPanel {
    let body = match &selection.status {
        WeatherStatus::Pending => PanelBody::Loading,
        WeatherStatus::Ready(report) => PanelBody::Report {
            category: report.category,
            description: report.description.clone(),
            temperature: report.temperature_label(),
            feels_like: report.feels_like_label(),
            wind: report.wind_label(),
            uv_index: report.uv_index.to_string(),
            humidity: format!("{}%", report.humidity),
            updated: format!("updated {}", report.age_label(now)),
        },
        WeatherStatus::Failed(message) => PanelBody::Error(message.clone()),
    };

    WeatherPanel {
        city: selection.city.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{WeatherCategory, DEFAULT_CITIES};

    fn state() -> AppState {
        let cities = DEFAULT_CITIES.iter().map(ToString::to_string).collect();
        AppState::new(cities, Units::Metric)
    }

    /// "parks" ranks to the tie `[Parus, Paris]` here.
    fn tied() -> AppState {
        let cities = ["Parus", "Moscow", "Paris"].iter().map(ToString::to_string).collect();
        AppState::new(cities, Units::Metric)
    }

    fn state_with(count: usize) -> AppState {
        let cities = (0..count).map(|i| format!("City {i:02}")).collect();
        AppState::new(cities, Units::Metric)
    }

    fn report() -> WeatherReport {
        WeatherReport {
            temperature: 21,
            feels_like: 20,
            wind_speed: 9,
            uv_index: 5,
            humidity: 40,
            category: WeatherCategory::Sunny,
            description: "Sunny".to_string(),
            units: Units::Metric,
            fetched_at: 1_000,
        }
    }

    fn type_query(state: &mut AppState, query: &str) {
        state.start_filter();
        for c in query.chars() {
            state.append_char(c);
        }
    }

    #[test]
    fn starts_browsing_at_top() {
        let state = state();
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.visible().len(), 6);
        assert_eq!(state.query(), None);
    }

    #[test]
    fn cursor_stops_at_both_ends() {
        let mut state = state();
        assert!(!state.move_up());
        assert_eq!(state.cursor(), 0);

        for _ in 0..10 {
            state.move_down();
        }
        assert_eq!(state.cursor(), 5);
        assert!(!state.move_down());
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn start_filter_resets_query_and_cursor() {
        let mut state = state();
        state.move_down();
        state.move_down();

        assert!(state.start_filter());
        assert_eq!(state.query(), Some(""));
        assert_eq!(state.cursor(), 0);
        assert!(state.is_typing());
        assert_eq!(state.visible(), state.cities());
    }

    #[test]
    fn typing_ranks_and_resets_cursor() {
        let mut state = state();
        state.start_filter();
        state.move_down();
        state.move_down();

        state.append_char('m');
        assert_eq!(state.cursor(), 0);
        state.append_char('o');
        assert_eq!(state.visible(), ["Moscow".to_string()]);
    }

    #[test]
    fn backspace_on_empty_query_is_noop() {
        let mut state = state();
        state.start_filter();
        state.move_down();
        assert!(!state.backspace());
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn backspace_widens_results() {
        let mut state = state();
        type_query(&mut state, "xq");
        assert!(state.visible().is_empty());

        state.backspace();
        state.backspace();
        assert_eq!(state.query(), Some(""));
        assert_eq!(state.visible().len(), 6);
    }

    #[test]
    fn stop_filter_input_keeps_results_and_cursor() {
        let mut state = tied();
        type_query(&mut state, "parks");
        state.move_down();

        assert!(state.stop_filter_input());
        assert!(!state.is_typing());
        assert_eq!(state.query(), Some("parks"));
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn stop_filter_input_with_empty_query_returns_to_browsing() {
        let mut state = state();
        state.start_filter();
        state.move_down();
        state.move_down();

        assert!(state.stop_filter_input());
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn start_filter_while_navigating_resumes_typing() {
        let mut state = tied();
        type_query(&mut state, "parks");
        state.stop_filter_input();
        state.move_down();

        assert!(state.start_filter());
        assert!(state.is_typing());
        assert_eq!(state.query(), Some("parks"));
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn cancel_filter_returns_to_browsing_at_top() {
        let mut state = tied();
        type_query(&mut state, "parks");
        state.move_down();

        assert!(state.cancel_filter());
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.cursor(), 0);
        assert!(!state.cancel_filter());
    }

    #[test]
    fn confirm_selection_reads_visible_list() {
        let mut state = tied();
        type_query(&mut state, "parks");
        state.move_down();

        let action = state.confirm_selection();
        assert_eq!(
            action,
            Some(Action::FetchWeather {
                city: "Paris".to_string(),
                request: RequestId(1),
            })
        );
        assert_eq!(state.selected_city(), Some("Paris"));
        assert_eq!(state.weather(), Some(&WeatherStatus::Pending));
        assert_eq!(state.cursor(), 0);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn confirm_selection_on_empty_list_is_noop() {
        let mut state = state();
        type_query(&mut state, "xq");
        assert_eq!(state.confirm_selection(), None);
        assert!(matches!(state.mode(), Mode::Filtering(_)));
    }

    #[test]
    fn confirm_selection_while_viewing_is_noop() {
        let mut state = state();
        state.confirm_selection();
        assert_eq!(state.confirm_selection(), None);
        assert_eq!(state.selected_city(), Some("Moscow"));
    }

    #[test]
    fn deselect_clears_selection() {
        let mut state = state();
        state.move_down();
        state.confirm_selection();

        assert!(state.deselect());
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.selected_city(), None);
        assert_eq!(state.weather(), None);
        assert_eq!(state.cursor(), 0);
        assert!(!state.deselect());
    }

    #[test]
    fn completion_fills_matching_selection() {
        let mut state = state();
        state.confirm_selection();

        assert!(state.complete_fetch(RequestId(1), &Ok(report())));
        assert_eq!(state.weather(), Some(&WeatherStatus::Ready(report())));
    }

    #[test]
    fn failure_is_stored_for_display() {
        let mut state = state();
        state.confirm_selection();

        assert!(state.complete_fetch(RequestId(1), &Err("timed out".to_string())));
        assert_eq!(
            state.weather(),
            Some(&WeatherStatus::Failed("timed out".to_string()))
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = state();
        state.confirm_selection();
        state.deselect();
        state.move_down();
        state.confirm_selection();

        assert!(!state.complete_fetch(RequestId(1), &Ok(report())));
        assert_eq!(state.selected_city(), Some("Saint's Petersburg"));
        assert_eq!(state.weather(), Some(&WeatherStatus::Pending));
    }

    #[test]
    fn completion_after_deselect_is_discarded() {
        let mut state = state();
        state.confirm_selection();
        state.deselect();

        assert!(!state.complete_fetch(RequestId(1), &Ok(report())));
        assert_eq!(state.mode(), &Mode::Browsing);
    }

    #[test]
    fn refresh_issues_new_token() {
        let mut state = state();
        state.confirm_selection();
        state.complete_fetch(RequestId(1), &Ok(report()));

        let action = state.refresh();
        assert_eq!(
            action,
            Some(Action::FetchWeather {
                city: "Moscow".to_string(),
                request: RequestId(2),
            })
        );
        assert_eq!(state.weather(), Some(&WeatherStatus::Pending));
        assert!(!state.complete_fetch(RequestId(1), &Ok(report())));
        assert!(state.complete_fetch(RequestId(2), &Ok(report())));
    }

    #[test]
    fn awaited_request_tracks_pending_fetch() {
        let mut state = state();
        assert_eq!(state.awaited_request(), None);

        state.confirm_selection();
        assert_eq!(state.awaited_request(), Some(RequestId(1)));

        state.refresh();
        assert_eq!(state.awaited_request(), Some(RequestId(2)));

        state.complete_fetch(RequestId(2), &Ok(report()));
        assert_eq!(state.awaited_request(), None);
    }

    #[test]
    fn refresh_outside_viewing_is_noop() {
        let mut state = state();
        assert_eq!(state.refresh(), None);
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let mut state = state_with(30);
        for _ in 0..15 {
            state.move_down();
        }

        let vm = state.compute_viewmodel_at(16, 80, 0);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items[0].ordinal, 11);
        assert_eq!(vm.selected_index, 5);
        assert!(vm.display_items[5].is_selected);
        assert_eq!(vm.display_items[5].name, "City 15");
    }

    #[test]
    fn viewmodel_window_stays_full_at_end() {
        let mut state = state_with(30);
        for _ in 0..29 {
            state.move_down();
        }

        let vm = state.compute_viewmodel_at(16, 80, 0);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items[0].ordinal, 21);
        assert_eq!(vm.selected_index, 9);
    }

    #[test]
    fn viewmodel_highlights_query_characters() {
        let mut state = state();
        type_query(&mut state, "PAR");

        let vm = state.compute_viewmodel_at(24, 80, 0);
        let paris = vm
            .display_items
            .iter()
            .find(|item| item.name == "Paris")
            .unwrap();
        assert_eq!(paris.highlight_ranges, vec![(0, 3)]);
        assert_eq!(
            vm.search_bar,
            Some(SearchBarInfo {
                query: "PAR".to_string(),
                is_typing: true,
            })
        );
    }

    #[test]
    fn viewmodel_empty_results_show_message() {
        let mut state = state();
        type_query(&mut state, "xq");

        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No matching cities");
    }

    #[test]
    fn viewmodel_truncates_long_names() {
        let cities = vec!["Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch".to_string()];
        let state = AppState::new(cities, Units::Metric);

        let vm = state.compute_viewmodel_at(24, 80, 0);
        assert_eq!(vm.display_items[0].name.chars().count(), NAME_COLUMN_WIDTH);
        assert!(vm.display_items[0].name.ends_with("..."));
    }

    #[test]
    fn viewmodel_highlights_stay_inside_truncated_names() {
        let cities = vec!["Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch".to_string()];
        let mut state = AppState::new(cities, Units::Metric);
        state.start_filter();
        for c in "goch".chars() {
            state.append_char(c);
        }

        let vm = state.compute_viewmodel_at(24, 80, 0);
        let item = &vm.display_items[0];
        let shown = NAME_COLUMN_WIDTH - 3;
        assert!(item.highlight_ranges.iter().all(|&(start, end)| start < end && end <= shown));
    }

    #[test]
    fn clamp_ranges_cuts_and_drops() {
        assert_eq!(clamp_ranges(vec![(0, 2), (4, 9), (12, 14)], 6), vec![(0, 2), (4, 6)]);
        assert_eq!(shown_chars("Paris", 35), 5);
        assert_eq!(shown_chars("Paris", 4), 1);
    }

    #[test]
    fn viewmodel_weather_panel_follows_status() {
        let mut state = state();
        state.confirm_selection();

        let vm = state.compute_viewmodel_at(24, 80, 1_000);
        assert_eq!(vm.header.title, " Weather: Moscow ");
        assert_eq!(vm.weather.as_ref().unwrap().body, PanelBody::Loading);

        state.complete_fetch(RequestId(1), &Ok(report()));
        let vm = state.compute_viewmodel_at(24, 80, 1_000 + 180);
        let Some(WeatherPanel {
            body: PanelBody::Report {
                temperature,
                humidity,
                updated,
                ..
            },
            ..
        }) = vm.weather
        else {
            panic!("expected report panel");
        };
        assert_eq!(temperature, "21°C");
        assert_eq!(humidity, "40%");
        assert_eq!(updated, "updated 3m ago");
    }
}
