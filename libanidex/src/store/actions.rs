//! Actions for the reducer pattern
//!
//! Actions serialize as `{"type": "GET_POPULAR_ANIME", "payload": [...]}`.
//! Any other `type` deserializes to [`Action::Unknown`], which the reducer
//! treats as a no-op.

use serde::{Deserialize, Serialize};

use crate::types::{Anime, Picture, SearchResult};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// A fetch has started
    Loading,

    /// Search results arrived
    Search(Vec<SearchResult>),

    GetPopularAnime(Vec<Anime>),

    GetUpcomingAnime(Vec<Anime>),

    GetAiringAnime(Vec<Anime>),

    /// A character's picture gallery arrived
    GetPictures(Vec<Picture>),

    /// Unrecognised action kind
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire name of the action kind
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Loading => "LOADING",
            Action::Search(_) => "SEARCH",
            Action::GetPopularAnime(_) => "GET_POPULAR_ANIME",
            Action::GetUpcomingAnime(_) => "GET_UPCOMING_ANIME",
            Action::GetAiringAnime(_) => "GET_AIRING_ANIME",
            Action::GetPictures(_) => "GET_PICTURES",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Which dispatcher a request belongs to
///
/// Requests of the same kind are sequenced against each other; different
/// kinds are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Popular,
    Upcoming,
    Airing,
    Search,
    Pictures,
}

impl RequestKind {
    pub const ALL: [RequestKind; 5] = [
        RequestKind::Popular,
        RequestKind::Upcoming,
        RequestKind::Airing,
        RequestKind::Search,
        RequestKind::Pictures,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            RequestKind::Popular => 0,
            RequestKind::Upcoming => 1,
            RequestKind::Airing => 2,
            RequestKind::Search => 3,
            RequestKind::Pictures => 4,
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequestKind::Popular => "popular",
            RequestKind::Upcoming => "upcoming",
            RequestKind::Airing => "airing",
            RequestKind::Search => "search",
            RequestKind::Pictures => "pictures",
        };
        f.write_str(name)
    }
}
