//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Table cursor
    CursorUp,
    CursorDown,

    // Selection
    ToggleRow,
    TogglePage,

    // Pager
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// Position of a numbered page link in the pager (0-based)
    PageLink(usize),

    // Count form
    FocusCountInput,
    CountChar(char),
    CountBackspace,
    SubmitCount,
    LeaveCountInput,

    // Popups
    ToggleHelp,
    CloseHelp,
    DismissAlert,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    show_help: bool,
    show_alert: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // The alert blocks everything until dismissed
    if show_alert {
        return Some(UiEvent::DismissAlert);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
            KeyCode::Char(' ') => Some(UiEvent::ToggleRow),
            KeyCode::Char('a') => Some(UiEvent::TogglePage),
            KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextPage),
            KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::FirstPage),
            KeyCode::End | KeyCode::Char('G') => Some(UiEvent::LastPage),
            KeyCode::Char(c @ '1'..='5') => Some(UiEvent::PageLink(c as usize - '1' as usize)),
            KeyCode::Char('n') | KeyCode::Tab => Some(UiEvent::FocusCountInput),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(UiEvent::LeaveCountInput),
            KeyCode::Enter => Some(UiEvent::SubmitCount),
            KeyCode::Backspace => Some(UiEvent::CountBackspace),
            KeyCode::Char(c) => Some(UiEvent::CountChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let map = |code| key_to_ui_event(press(code), InputMode::Normal, false, false);
        assert_eq!(map(KeyCode::Right), Some(UiEvent::NextPage));
        assert_eq!(map(KeyCode::Char(' ')), Some(UiEvent::ToggleRow));
        assert_eq!(map(KeyCode::Char('3')), Some(UiEvent::PageLink(2)));
        assert_eq!(map(KeyCode::Char('6')), None);
        assert_eq!(map(KeyCode::Char('n')), Some(UiEvent::FocusCountInput));
    }

    #[test]
    fn test_editing_mode_passes_chars_through() {
        let ev = key_to_ui_event(press(KeyCode::Char('q')), InputMode::Editing, false, false);
        assert_eq!(ev, Some(UiEvent::CountChar('q')));
        let ev = key_to_ui_event(press(KeyCode::Enter), InputMode::Editing, false, false);
        assert_eq!(ev, Some(UiEvent::SubmitCount));
    }

    #[test]
    fn test_alert_swallows_keys() {
        let ev = key_to_ui_event(press(KeyCode::Char('q')), InputMode::Normal, false, true);
        assert_eq!(ev, Some(UiEvent::DismissAlert));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(ctrl_c, InputMode::Normal, false, true),
            Some(UiEvent::Quit)
        );
    }
}
