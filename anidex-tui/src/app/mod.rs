//! Application module
//!
//! Contains the view-side architecture:
//! - Actions: What can happen
//! - State: What is on screen right now
//! - Reducer: Pure function (UiState, UiAction) -> UiState
//! - Effects: Which provider calls an action triggers
//!
//! Anime data itself lives in the provider's store; the UI state only
//! tracks route, selection and input modes.

pub mod actions;
pub mod effects;
pub mod event;
pub mod reducer;
pub mod state;

use std::collections::VecDeque;

use libanidex::Provider;

use crate::router::Route;

pub use actions::UiAction;
pub use effects::{effect_for, run_effect, Effect};
pub use reducer::{keymap, reduce};
pub use state::{visible_anime, HomeTab, InputMode, UiConfig, UiState};

/// Apply an action and everything it leads to
///
/// Keys are mapped, selection-dependent actions are resolved against the
/// provider's current snapshot, the UI state is reduced and provider calls
/// are fired. Follow-up actions produced by effects (such as the
/// empty-search warning) are applied in the same call.
pub fn update(state: UiState, action: UiAction, provider: &Provider) -> UiState {
    let mut queue = VecDeque::from([action]);
    let mut state = state;

    while let Some(action) = queue.pop_front() {
        let Some(action) = resolve(&state, action, provider) else {
            continue;
        };

        let previous = state.route;
        let effect = effect_for(&action);
        state = reduce(state, action);

        // The store holds one gallery, so arriving on a character page by
        // any path (Back included) has to reload it
        let effect = match (effect, state.route) {
            (None, Route::Character(id)) if state.route != previous => Some(Effect::LoadPictures(id)),
            (effect, _) => effect,
        };

        if let Some(follow_up) = effect.and_then(|effect| run_effect(effect, provider)) {
            queue.push_back(follow_up);
        }
    }

    state
}

/// Turn input-level actions into concrete ones
fn resolve(state: &UiState, action: UiAction, provider: &Provider) -> Option<UiAction> {
    match action {
        UiAction::Key(key) => keymap(state, key).and_then(|action| resolve(state, action, provider)),

        UiAction::SelectNext | UiAction::SelectPrev | UiAction::OpenSelected => {
            let context = provider.context();
            let len = match state.route {
                Route::Character(_) => context.state.pictures.len(),
                // Details page scrolls by line
                Route::Anime(id) => context.state.find_anime(id).map_or(0, crate::ui::detail_line_count),
                _ => visible_anime(state, &context.state).len(),
            };
            let last = len.saturating_sub(1);

            Some(match action {
                UiAction::SelectNext => UiAction::Select((state.selected + 1).min(last)),
                UiAction::SelectPrev => UiAction::Select(state.selected.saturating_sub(1).min(last)),
                _ => {
                    if state.route != Route::Home {
                        return None;
                    }
                    let anime = visible_anime(state, &context.state).get(state.selected.min(last))?;
                    UiAction::Navigate(Route::Anime(anime.mal_id))
                }
            })
        }

        UiAction::SubmitGoto => Some(match Route::parse(&state.goto_input) {
            Ok(route) => UiAction::Navigate(route),
            Err(e) => UiAction::ShowWarning(e.to_string()),
        }),

        other => Some(other),
    }
}
