//! UI state
//!
//! Immutable state structure. All transitions happen through the reducer
//! (see `reducer.rs`). Fetched anime data is not stored here; pages read it
//! from the provider's snapshot at render time.

use libanidex::{Anime, AppState};

use crate::router::Route;

/// Root UI state
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Page on screen
    pub route: Route,

    /// Previously visited pages, most recent last
    pub history: Vec<Route>,

    /// Home page tab
    pub tab: HomeTab,

    /// Cursor row in the visible list
    pub selected: usize,

    /// Which input has focus
    pub mode: InputMode,

    /// Content of the goto prompt
    pub goto_input: String,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Warning overlay text
    pub warning: Option<String>,

    /// Ticks elapsed, drives the loading spinner
    pub tick: u64,

    /// UI configuration
    pub config: UiConfig,
}

/// Home page tab buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeTab {
    Popular,
    Airing,
    Upcoming,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [HomeTab::Popular, HomeTab::Airing, HomeTab::Upcoming];

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::Popular => "Popular",
            HomeTab::Airing => "Airing",
            HomeTab::Upcoming => "Upcoming",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HomeTab::Popular => 0,
            HomeTab::Airing => 1,
            HomeTab::Upcoming => 2,
        }
    }

    pub fn next(&self) -> HomeTab {
        HomeTab::ALL[(self.index() + 1) % HomeTab::ALL.len()]
    }
}

/// Input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are shortcuts
    Normal,
    /// Keys go to the search box
    Search,
    /// Keys go to the route prompt
    Goto,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            history: Vec::new(),
            tab: HomeTab::Popular,
            selected: 0,
            mode: InputMode::Normal,
            goto_input: String::new(),
            help_visible: false,
            warning: None,
            tick: 0,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::with_tick_rate(100)
    }
}

impl UiConfig {
    /// Build from a configured tick rate, letting the environment override it
    pub fn with_tick_rate(configured_ms: u64) -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("ANIDEX_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("ANIDEX_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(configured_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl UiState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &libanidex::Config) -> Self {
        Self {
            config: UiConfig::with_tick_rate(config.ui.tick_rate_ms),
            ..Self::default()
        }
    }

    /// Whether an overlay is covering the page
    pub fn has_overlay(&self) -> bool {
        self.help_visible || self.warning.is_some()
    }
}

/// The list shown on the home page for the current tab
///
/// Once a search has been committed the Popular tab shows search results
/// instead of the popular list.
pub fn visible_anime<'a>(ui: &UiState, app: &'a AppState) -> &'a [Anime] {
    match ui.tab {
        HomeTab::Popular if app.is_search => &app.search_results,
        HomeTab::Popular => &app.popular_anime,
        HomeTab::Airing => &app.airing_anime,
        HomeTab::Upcoming => &app.upcoming_anime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anime(mal_id: u64, title: &str) -> Anime {
        serde_json::from_value(serde_json::json!({"mal_id": mal_id, "title": title})).unwrap()
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(HomeTab::Popular.next(), HomeTab::Airing);
        assert_eq!(HomeTab::Airing.next(), HomeTab::Upcoming);
        assert_eq!(HomeTab::Upcoming.next(), HomeTab::Popular);
    }

    #[test]
    fn test_popular_tab_shows_search_results_after_search() {
        let ui = UiState::new();
        let mut app = AppState::new();
        app.popular_anime = vec![anime(1, "Popular")];
        app.search_results = vec![anime(2, "Found")];

        assert_eq!(visible_anime(&ui, &app)[0].mal_id, 1);

        app.is_search = true;
        assert_eq!(visible_anime(&ui, &app)[0].mal_id, 2);

        let airing = UiState {
            tab: HomeTab::Airing,
            ..UiState::new()
        };
        assert!(visible_anime(&airing, &app).is_empty());
    }
}
