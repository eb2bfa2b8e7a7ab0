//! Application state
//!
//! A single record replaced wholesale on every transition (see `reducer.rs`).

use serde::Serialize;

use crate::types::{Anime, Picture, SearchResult};

/// Root application state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub popular_anime: Vec<Anime>,

    pub upcoming_anime: Vec<Anime>,

    pub airing_anime: Vec<Anime>,

    /// Gallery of the most recently requested character
    pub pictures: Vec<Picture>,

    /// Set once any search has completed; never cleared
    pub is_search: bool,

    pub search_results: Vec<SearchResult>,

    /// A fetch is in flight
    pub loading: bool,
}

impl AppState {
    /// Create empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Look an anime up by id across every loaded list
    pub fn find_anime(&self, mal_id: u64) -> Option<&Anime> {
        self.popular_anime
            .iter()
            .chain(&self.airing_anime)
            .chain(&self.upcoming_anime)
            .chain(&self.search_results)
            .find(|anime| anime.mal_id == mal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn anime(id: u64, title: &str) -> Anime {
        serde_json::from_value(json!({"mal_id": id, "title": title})).unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = AppState::new();
        assert!(state.popular_anime.is_empty());
        assert!(state.upcoming_anime.is_empty());
        assert!(state.airing_anime.is_empty());
        assert!(state.pictures.is_empty());
        assert!(state.search_results.is_empty());
        assert!(!state.is_search);
        assert!(!state.loading);
    }

    #[test]
    fn test_find_anime_searches_all_lists() {
        let state = AppState {
            airing_anime: vec![anime(1, "Airing")],
            search_results: vec![anime(2, "Found")],
            ..AppState::default()
        };
        assert_eq!(state.find_anime(2).unwrap().title, "Found");
        assert_eq!(state.find_anime(1).unwrap().title, "Airing");
        assert!(state.find_anime(3).is_none());
    }
}
