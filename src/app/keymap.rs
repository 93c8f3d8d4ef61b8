//! Key binding policy.
//!
//! The shim converts host key events into [`KeyPress`] and asks [`map_key`]
//! which [`Event`] they mean in the current mode.
//!
//! Global (all modes): `Ctrl+n` down, `Ctrl+p` up. Any other chord with
//! `Ctrl` or `Alt` is ignored, so it never types into the query.

use crate::app::{AppState, Event, Mode};

/// Keys the plugin reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    /// Anything else.
    Other,
}

/// A key with the modifiers that change its meaning. Shift is folded into
/// the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Alt, or any other non-Shift modifier.
    pub alt: bool,
}

impl KeyPress {
    /// A key pressed without modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
        }
    }

    /// A key pressed with `Ctrl`.
    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            alt: false,
        }
    }
}

/// Maps a key press to an event for the state's current mode.
///
/// Returns `None` for keys that mean nothing in that mode.
#[must_use]
pub fn map_key(state: &AppState, press: KeyPress) -> Option<Event> {
    if press.ctrl && !press.alt {
        return match press.key {
            Key::Char('n') => Some(Event::MoveDown),
            Key::Char('p') => Some(Event::MoveUp),
            _ => None,
        };
    }
    if press.ctrl || press.alt {
        return None;
    }

    Some(match state.mode() {
        Mode::Browsing => match press.key {
            Key::Down | Key::Char('j') => Event::MoveDown,
            Key::Up | Key::Char('k') => Event::MoveUp,
            Key::Char('/') => Event::StartFilter,
            Key::Enter | Key::Char(' ') => Event::ConfirmSelection,
            Key::Char('q') => Event::Quit,
            _ => return None,
        },
        Mode::Filtering(_) if state.is_typing() => match press.key {
            Key::Down => Event::MoveDown,
            Key::Up => Event::MoveUp,
            Key::Enter => Event::StopFilterInput,
            Key::Esc => Event::CancelFilter,
            Key::Backspace => Event::Backspace,
            Key::Char(c) => Event::AppendChar(c),
            Key::Other => return None,
        },
        // Navigating: unbound characters resume typing.
        Mode::Filtering(_) => match press.key {
            Key::Down | Key::Char('j') => Event::MoveDown,
            Key::Up | Key::Char('k') => Event::MoveUp,
            Key::Enter | Key::Char(' ') => Event::ConfirmSelection,
            Key::Char('/') => Event::StartFilter,
            Key::Esc => Event::CancelFilter,
            Key::Backspace => Event::Backspace,
            Key::Char('q') => Event::Quit,
            Key::Char(c) => Event::AppendChar(c),
            Key::Other => return None,
        },
        Mode::Viewing(_) => match press.key {
            Key::Char('r') => Event::Refresh,
            Key::Char('c') | Key::Esc | Key::Backspace => Event::Deselect,
            Key::Char('q') => Event::Quit,
            _ => return None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handle_event;
    use crate::domain::Units;

    fn state() -> AppState {
        AppState::new(vec!["Paris".to_string(), "Batumi".to_string()], Units::Metric)
    }

    fn typing() -> AppState {
        let mut state = state();
        handle_event(&mut state, &Event::StartFilter);
        state
    }

    #[test]
    fn browsing_bindings() {
        let state = state();
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('j'))), Some(Event::MoveDown));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Up)), Some(Event::MoveUp));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('/'))), Some(Event::StartFilter));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char(' '))), Some(Event::ConfirmSelection));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('q'))), Some(Event::Quit));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('x'))), None);
    }

    #[test]
    fn ctrl_n_and_p_move_in_every_mode() {
        for state in [state(), typing()] {
            assert_eq!(map_key(&state, KeyPress::ctrl(Key::Char('n'))), Some(Event::MoveDown));
            assert_eq!(map_key(&state, KeyPress::ctrl(Key::Char('p'))), Some(Event::MoveUp));
        }
    }

    #[test]
    fn typing_takes_letters_literally() {
        let state = typing();
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('j'))), Some(Event::AppendChar('j')));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('Q'))), Some(Event::AppendChar('Q')));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Enter)), Some(Event::StopFilterInput));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Esc)), Some(Event::CancelFilter));
    }

    #[test]
    fn modified_chords_never_type() {
        let state = typing();
        assert_eq!(map_key(&state, KeyPress::ctrl(Key::Char('c'))), None);
        let alt_x = KeyPress { key: Key::Char('x'), ctrl: false, alt: true };
        assert_eq!(map_key(&state, alt_x), None);
        let ctrl_alt_n = KeyPress { key: Key::Char('n'), ctrl: true, alt: true };
        assert_eq!(map_key(&state, ctrl_alt_n), None);
    }

    #[test]
    fn navigating_resumes_typing_on_unbound_characters() {
        let mut state = typing();
        handle_event(&mut state, &Event::AppendChar('p'));
        handle_event(&mut state, &Event::StopFilterInput);

        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('k'))), Some(Event::MoveUp));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('a'))), Some(Event::AppendChar('a')));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('/'))), Some(Event::StartFilter));
    }

    #[test]
    fn viewing_bindings() {
        let mut state = state();
        handle_event(&mut state, &Event::ConfirmSelection);

        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('r'))), Some(Event::Refresh));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Esc)), Some(Event::Deselect));
        assert_eq!(map_key(&state, KeyPress::plain(Key::Char('j'))), None);
    }
}
