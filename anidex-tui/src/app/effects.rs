//! Side effects triggered by UI actions
//!
//! `effect_for` is pure and decides which provider call an action needs.
//! `run_effect` performs it. Provider calls return immediately; results
//! show up in the next snapshot the render loop reads.
//!
//! Arriving on a character page by Back is detected in `update`, which
//! compares routes around the reducer.

use libanidex::{AnidexError, Provider};

use super::actions::UiAction;
use super::state::HomeTab;
use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the list behind a home page tab
    Fetch(HomeTab),

    /// Load a character's pictures
    LoadPictures(u64),

    /// Update the provider's search text
    SetSearch(String),

    /// Search for the provider's current search text
    SubmitSearch,
}

pub fn effect_for(action: &UiAction) -> Option<Effect> {
    match action {
        UiAction::SelectTab(tab) => Some(Effect::Fetch(*tab)),
        UiAction::Navigate(Route::Character(id)) => Some(Effect::LoadPictures(*id)),
        UiAction::SearchInputChanged(text) => Some(Effect::SetSearch(text.clone())),
        UiAction::SubmitSearch => Some(Effect::SubmitSearch),
        _ => None,
    }
}

/// Perform an effect, returning a follow-up action if the UI must react
pub fn run_effect(effect: Effect, provider: &Provider) -> Option<UiAction> {
    match effect {
        Effect::Fetch(HomeTab::Popular) => provider.get_popular_anime(),
        Effect::Fetch(HomeTab::Airing) => provider.get_airing_anime(),
        Effect::Fetch(HomeTab::Upcoming) => provider.get_upcoming_anime(),
        Effect::LoadPictures(id) => provider.get_anime_pictures(id),
        Effect::SetSearch(text) => provider.set_search(text),
        Effect::SubmitSearch => {
            if let Err(e) = provider.submit_search() {
                let message = match e {
                    AnidexError::InvalidInput(message) => message,
                    other => other.to_string(),
                };
                return Some(UiAction::ShowWarning(message));
            }
        }
    }
    None
}
