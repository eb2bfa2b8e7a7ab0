//! Actions for the reducer pattern
//!
//! All UI state transitions are triggered by actions. Some of them also
//! trigger provider calls, see `effects.rs`.

use crossterm::event::KeyEvent;

use super::state::HomeTab;
use crate::router::Route;

/// Actions that trigger UI state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick for the loading spinner
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Open a page, remembering the current one
    Navigate(Route),

    /// Return to the previous page
    Back,

    /// Switch the home page tab
    SelectTab(HomeTab),

    /// Move the cursor down one row
    SelectNext,

    /// Move the cursor up one row
    SelectPrev,

    /// Put the cursor on a row
    Select(usize),

    /// Open the anime under the cursor
    OpenSelected,

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Search ===
    /// Focus the search box
    EnterSearchMode,

    /// Search box content changed
    SearchInputChanged(String),

    /// Run the search with the current search text
    SubmitSearch,

    // === Goto prompt ===
    /// Open the route prompt
    EnterGotoMode,

    /// Route prompt content changed
    GotoInputChanged(String),

    /// Navigate to the route typed in the prompt
    SubmitGoto,

    /// Leave search or goto input without submitting
    ExitInputMode,

    // === Warnings ===
    /// Show warning overlay
    ShowWarning(String),

    /// Dismiss warning overlay
    DismissWarning,
}
