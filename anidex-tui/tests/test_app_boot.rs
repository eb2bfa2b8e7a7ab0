//! Test application initialization
//!
//! Verifies that the UI starts on the home page with sensible defaults
//! based on config and environment variables.

use anidex_tui::app::{HomeTab, InputMode, UiState};
use anidex_tui::Route;
use serial_test::serial;

#[test]
fn test_app_initializes_to_home_page() {
    let state = UiState::new();

    assert_eq!(state.route, Route::Home);
    assert_eq!(state.tab, HomeTab::Popular);
    assert!(state.history.is_empty());
    assert!(!state.should_quit);
}

#[test]
fn test_no_overlay_on_boot() {
    let state = UiState::new();

    assert!(!state.help_visible);
    assert!(state.warning.is_none());
    assert!(!state.has_overlay());
    assert_eq!(state.mode, InputMode::Normal);
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = UiState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_config() {
    std::env::remove_var("ANIDEX_TUI_TICK_MS");
    let mut config = libanidex::Config::default();
    config.ui.tick_rate_ms = 250;

    let state = UiState::from_config(&config);
    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_env_overrides_config() {
    std::env::set_var("ANIDEX_TUI_TICK_MS", "40");
    let state = UiState::from_config(&libanidex::Config::default());
    std::env::remove_var("ANIDEX_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 40);
}

#[test]
#[serial]
fn test_invalid_tick_rate_env_is_ignored() {
    std::env::set_var("ANIDEX_TUI_TICK_MS", "fast");
    let state = UiState::new();
    std::env::remove_var("ANIDEX_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 100);
}
