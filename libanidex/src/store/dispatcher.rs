//! Action dispatchers
//!
//! Every dispatcher follows the same protocol: take a ticket, dispatch
//! `Loading`, await the API, then commit the matching result action if no
//! newer request of the same kind has started in the meantime.
//!
//! Failures are logged and swallowed. The result action is never
//! dispatched, so `loading` stays `true` until some later request succeeds.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::actions::{Action, RequestKind};
use super::handle::Store;
use crate::api::{fetch_records, AnimeApi, Endpoint};
use crate::error::ApiError;

/// What happened to a dispatcher invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result action applied to the store
    Committed,
    /// A newer request of the same kind started first; result dropped
    Superseded,
    /// The request failed; state left as it was
    Failed(ApiError),
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed)
    }
}

/// Runs fetches against an API and feeds the results into a store
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn AnimeApi>,
    store: Store,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn AnimeApi>, store: Store) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn get_popular_anime(&self) -> Outcome {
        self.run(RequestKind::Popular, Endpoint::PopularAnime, Action::GetPopularAnime)
            .await
    }

    pub async fn get_upcoming_anime(&self) -> Outcome {
        self.run(RequestKind::Upcoming, Endpoint::UpcomingAnime, Action::GetUpcomingAnime)
            .await
    }

    pub async fn get_airing_anime(&self) -> Outcome {
        self.run(RequestKind::Airing, Endpoint::AiringAnime, Action::GetAiringAnime)
            .await
    }

    /// Search by free text; a successful result also sets `is_search`
    pub async fn search_anime(&self, query: &str) -> Outcome {
        let endpoint = Endpoint::Search {
            query: query.to_string(),
        };
        self.run(RequestKind::Search, endpoint, Action::Search).await
    }

    /// Load the picture gallery of character `id`
    pub async fn get_anime_pictures(&self, id: u64) -> Outcome {
        self.run(
            RequestKind::Pictures,
            Endpoint::CharacterPictures { id },
            Action::GetPictures,
        )
        .await
    }

    async fn run<T, F>(&self, kind: RequestKind, endpoint: Endpoint, into_action: F) -> Outcome
    where
        T: DeserializeOwned + Send,
        F: FnOnce(Vec<T>) -> Action + Send,
    {
        let ticket = self.store.begin(kind);
        self.store.dispatch(Action::Loading);

        match fetch_records::<T, _>(self.api.as_ref(), &endpoint).await {
            Ok(records) => {
                let count = records.len();
                if self.store.commit(&ticket, into_action(records)) {
                    tracing::info!(%kind, count, seq = ticket.seq, "Fetched");
                    Outcome::Committed
                } else {
                    tracing::debug!(%kind, seq = ticket.seq, "Discarded out-of-order response");
                    Outcome::Superseded
                }
            }
            Err(error) => {
                tracing::error!(%kind, path = %endpoint.path(), %error, "Fetch failed");
                Outcome::Failed(error)
            }
        }
    }
}
