//! Pure reducer function for state transitions
//!
//! `(&State, Action) -> State` with no I/O. Result actions overwrite exactly
//! one list and clear `loading`; `Loading` only sets the flag.

use std::sync::Arc;

use super::actions::Action;
use super::state::AppState;

/// Pure reducer function
///
/// Returns a new `Arc` for every recognised action and the identical `Arc`
/// for [`Action::Unknown`], so callers can detect no-ops with `Arc::ptr_eq`.
pub fn reduce(state: &Arc<AppState>, action: Action) -> Arc<AppState> {
    let next = match action {
        Action::Loading => AppState {
            loading: true,
            ..AppState::clone(state)
        },

        Action::GetPopularAnime(popular_anime) => AppState {
            popular_anime,
            loading: false,
            ..AppState::clone(state)
        },

        Action::Search(search_results) => AppState {
            search_results,
            is_search: true,
            loading: false,
            ..AppState::clone(state)
        },

        Action::GetUpcomingAnime(upcoming_anime) => AppState {
            upcoming_anime,
            loading: false,
            ..AppState::clone(state)
        },

        Action::GetAiringAnime(airing_anime) => AppState {
            airing_anime,
            loading: false,
            ..AppState::clone(state)
        },

        Action::GetPictures(pictures) => AppState {
            pictures,
            loading: false,
            ..AppState::clone(state)
        },

        Action::Unknown => return Arc::clone(state),
    };

    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Anime, Picture};
    use serde_json::json;

    fn anime(id: u64, title: &str) -> Anime {
        serde_json::from_value(json!({"mal_id": id, "title": title})).unwrap()
    }

    fn picture(url: &str) -> Picture {
        serde_json::from_value(json!({"jpg": {"image_url": url}})).unwrap()
    }

    fn loaded() -> Arc<AppState> {
        Arc::new(AppState {
            popular_anime: vec![anime(1, "One Piece")],
            upcoming_anime: vec![anime(2, "Upcoming")],
            airing_anime: vec![anime(3, "Airing")],
            pictures: vec![picture("a.jpg")],
            is_search: false,
            search_results: Vec::new(),
            loading: false,
        })
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = loaded();
        let action = Action::GetAiringAnime(vec![anime(9, "Frieren")]);

        let first = reduce(&state, action.clone());
        let second = reduce(&state, action);

        assert_eq!(first, second);
        // Input untouched
        assert_eq!(state.airing_anime[0].mal_id, 3);
    }

    #[test]
    fn test_loading_only_sets_flag() {
        let state = loaded();
        let next = reduce(&state, Action::Loading);
        assert!(next.loading);
        assert_eq!(
            AppState {
                loading: false,
                ..AppState::clone(&next)
            },
            *state
        );
    }

    #[test]
    fn test_unknown_returns_same_state() {
        let state = loaded();
        let next = reduce(&state, Action::Unknown);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_popular_overwrites_only_its_field() {
        let state = reduce(&loaded(), Action::Loading);
        let next = reduce(&state, Action::GetPopularAnime(vec![anime(7, "Bleach")]));

        assert!(!next.loading);
        assert_eq!(next.popular_anime, vec![anime(7, "Bleach")]);
        assert_eq!(next.upcoming_anime, state.upcoming_anime);
        assert_eq!(next.airing_anime, state.airing_anime);
        assert_eq!(next.pictures, state.pictures);
        assert!(!next.is_search);
    }

    #[test]
    fn test_upcoming_and_pictures() {
        let state = reduce(&loaded(), Action::Loading);

        let next = reduce(&state, Action::GetUpcomingAnime(Vec::new()));
        assert!(next.upcoming_anime.is_empty());
        assert!(!next.loading);

        let next = reduce(&next, Action::GetPictures(vec![picture("b.jpg")]));
        assert_eq!(next.pictures[0].url(), Some("b.jpg"));
        assert_eq!(next.popular_anime, state.popular_anime);
    }

    #[test]
    fn test_search_sets_flag_and_results() {
        let state = reduce(&loaded(), Action::Loading);
        let next = reduce(&state, Action::Search(vec![anime(20, "Naruto")]));

        assert!(next.is_search);
        assert!(!next.loading);
        assert_eq!(next.search_results[0].title, "Naruto");
        assert_eq!(next.popular_anime, state.popular_anime);
    }

    #[test]
    fn test_is_search_survives_later_actions() {
        let state = reduce(&loaded(), Action::Search(Vec::new()));
        let next = reduce(&state, Action::GetPopularAnime(Vec::new()));
        assert!(next.is_search);
    }
}
