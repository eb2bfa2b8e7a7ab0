//! Pure reducer function for UI state transitions
//!
//! The reducer is a pure function: `(UiState, UiAction) -> UiState`.
//! It has NO side effects. Provider calls are described by `effects.rs`
//! and executed by `update()`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::UiAction;
use super::state::{HomeTab, InputMode, UiState};
use crate::router::Route;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No network requests
/// - No provider calls
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: UiState, action: UiAction) -> UiState {
    match action {
        // === UI Events ===
        UiAction::Key(key) => match keymap(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        UiAction::Tick => UiState {
            tick: state.tick.wrapping_add(1),
            ..state
        },
        UiAction::Resize(_, _) => state,

        // === Navigation ===
        UiAction::Navigate(route) => {
            let mut history = state.history;
            if route != state.route {
                history.push(state.route);
            }
            UiState {
                route,
                history,
                selected: 0,
                mode: InputMode::Normal,
                goto_input: String::new(),
                ..state
            }
        }

        UiAction::Back => {
            let mut history = state.history;
            let route = history.pop().unwrap_or(Route::Home);
            UiState {
                route,
                history,
                selected: 0,
                ..state
            }
        }

        UiAction::SelectTab(tab) => UiState {
            tab,
            selected: 0,
            ..state
        },

        UiAction::SelectNext => UiState {
            selected: state.selected.saturating_add(1),
            ..state
        },

        UiAction::SelectPrev => UiState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        UiAction::Select(selected) => UiState { selected, ..state },

        // Needs the fetched lists, resolved in update()
        UiAction::OpenSelected => state,

        UiAction::Quit => UiState {
            should_quit: true,
            ..state
        },

        UiAction::ShowHelp => UiState {
            help_visible: true,
            ..state
        },

        UiAction::HideHelp => UiState {
            help_visible: false,
            ..state
        },

        // === Search ===
        UiAction::EnterSearchMode => UiState {
            mode: InputMode::Search,
            ..state
        },

        UiAction::SearchInputChanged(_) => state,

        UiAction::SubmitSearch => UiState {
            mode: InputMode::Normal,
            tab: HomeTab::Popular,
            selected: 0,
            ..state
        },

        // === Goto prompt ===
        UiAction::EnterGotoMode => UiState {
            mode: InputMode::Goto,
            goto_input: String::new(),
            ..state
        },

        UiAction::GotoInputChanged(goto_input) => UiState { goto_input, ..state },

        UiAction::SubmitGoto | UiAction::ExitInputMode => UiState {
            mode: InputMode::Normal,
            goto_input: String::new(),
            ..state
        },

        // === Warnings ===
        UiAction::ShowWarning(warning) => UiState {
            warning: Some(warning),
            mode: InputMode::Normal,
            goto_input: String::new(),
            ..state
        },

        UiAction::DismissWarning => UiState {
            warning: None,
            ..state
        },
    }
}

/// Map a key press to an action
///
/// This is where keybindings are defined. Returns `None` for keys that do
/// nothing in the current mode. In search mode only Enter and Esc reach
/// here; other keys are fed to the search box.
pub fn keymap(state: &UiState, key: KeyEvent) -> Option<UiAction> {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Some(UiAction::Quit);
    }

    // Overlays swallow everything except their own keys
    if state.warning.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiAction::DismissWarning),
            _ => None,
        };
    }
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => Some(UiAction::HideHelp),
            KeyCode::Char('q') => Some(UiAction::Quit),
            _ => None,
        };
    }

    match state.mode {
        InputMode::Search => match key.code {
            KeyCode::Enter => Some(UiAction::SubmitSearch),
            KeyCode::Esc => Some(UiAction::ExitInputMode),
            _ => None,
        },
        InputMode::Goto => goto_key(state, key),
        InputMode::Normal => normal_key(state, key),
    }
}

fn goto_key(state: &UiState, key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Enter => Some(UiAction::SubmitGoto),
        KeyCode::Esc => Some(UiAction::ExitInputMode),
        KeyCode::Backspace => {
            let mut input = state.goto_input.clone();
            input.pop();
            Some(UiAction::GotoInputChanged(input))
        }
        KeyCode::Char(c) => Some(UiAction::GotoInputChanged(format!("{}{}", state.goto_input, c))),
        _ => None,
    }
}

fn normal_key(state: &UiState, key: KeyEvent) -> Option<UiAction> {
    // Global keybindings
    match key.code {
        KeyCode::Char('q') => return Some(UiAction::Quit),
        KeyCode::F(1) | KeyCode::Char('?') => return Some(UiAction::ShowHelp),
        KeyCode::Char('g') => return Some(UiAction::EnterGotoMode),
        KeyCode::Down | KeyCode::Char('j') => return Some(UiAction::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => return Some(UiAction::SelectPrev),
        _ => {}
    }

    // Page-specific keybindings
    match state.route {
        Route::Home => match key.code {
            KeyCode::Char('1') => Some(UiAction::SelectTab(HomeTab::Popular)),
            KeyCode::Char('2') => Some(UiAction::SelectTab(HomeTab::Airing)),
            KeyCode::Char('3') => Some(UiAction::SelectTab(HomeTab::Upcoming)),
            KeyCode::Tab => Some(UiAction::SelectTab(state.tab.next())),
            // Re-selecting the tab fetches its list again
            KeyCode::Char('r') => Some(UiAction::SelectTab(state.tab)),
            KeyCode::Char('/') => Some(UiAction::EnterSearchMode),
            KeyCode::Enter => Some(UiAction::OpenSelected),
            _ => None,
        },
        Route::Anime(_) | Route::Character(_) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(UiAction::Back),
            KeyCode::Char('r') => Some(UiAction::Navigate(state.route)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = UiState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), UiAction::ShowWarning("Test".to_string()));

        // Original state unchanged
        assert!(state_clone.warning.is_none());

        // New state has the change
        assert_eq!(new_state.warning, Some("Test".to_string()));
    }

    #[test]
    fn test_navigate_and_back() {
        let mut state = UiState::new();
        state = reduce(state, UiAction::Navigate(Route::Anime(20)));
        state = reduce(state, UiAction::Navigate(Route::Character(17)));
        assert_eq!(state.route, Route::Character(17));
        assert_eq!(state.history, vec![Route::Home, Route::Anime(20)]);

        state = reduce(state, UiAction::Back);
        assert_eq!(state.route, Route::Anime(20));
        state = reduce(state, UiAction::Back);
        assert_eq!(state.route, Route::Home);
        state = reduce(state, UiAction::Back);
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn test_navigate_to_same_route_keeps_history() {
        let state = reduce(UiState::new(), UiAction::Navigate(Route::Home));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_submit_search_switches_to_popular_tab() {
        let state = UiState {
            tab: HomeTab::Upcoming,
            mode: InputMode::Search,
            selected: 4,
            ..UiState::new()
        };

        let state = reduce(state, UiAction::SubmitSearch);
        assert_eq!(state.tab, HomeTab::Popular);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_warning_leaves_input_mode() {
        let state = UiState {
            mode: InputMode::Goto,
            goto_input: "/nowhere".to_string(),
            ..UiState::new()
        };

        let state = reduce(state, UiAction::ShowWarning("No page".to_string()));
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.goto_input.is_empty());
    }
}
