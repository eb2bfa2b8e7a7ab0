//! HTTP client wrapper
//!
//! [`AnimeApi`] is the seam between the dispatchers and the network: it
//! takes a path plus query relative to the base URL and returns the `data`
//! array of the JSON envelope. [`JikanClient`] is the real implementation,
//! [`mock::MockApi`] a scripted one for tests.
//!
//! # Examples
//!
//! ```no_run
//! use libanidex::api::{AnimeApi, Endpoint, JikanClient, fetch_records};
//! use libanidex::types::Anime;
//!
//! # async fn example() -> Result<(), libanidex::AnidexError> {
//! let client = JikanClient::new(&libanidex::config::ApiConfig::default())?;
//! let top: Vec<Anime> = fetch_records(&client, &Endpoint::PopularAnime).await?;
//! println!("{} popular anime", top.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::ApiError;

pub mod jikan;

// Available outside of tests so integration tests and demos can use it
pub mod mock;

pub use jikan::JikanClient;

/// Read-only access to the anime API
#[async_trait]
pub trait AnimeApi: Send + Sync {
    /// GET `path` (relative to the base URL) and return the envelope's `data`
    ///
    /// # Errors
    ///
    /// Any network, HTTP status, timeout or decode failure.
    async fn fetch_json(&self, path: &str) -> Result<Vec<Value>, ApiError>;
}

/// The five fixed requests the application makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    PopularAnime,
    UpcomingAnime,
    AiringAnime,
    Search { query: String },
    CharacterPictures { id: u64 },
}

impl Endpoint {
    /// Path and query relative to the base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::PopularAnime => "/top/anime?filter=bypopularity".to_string(),
            Endpoint::UpcomingAnime => "/top/anime?filter=upcoming".to_string(),
            Endpoint::AiringAnime => "/top/anime?filter=airing".to_string(),
            Endpoint::Search { query } => {
                let q: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
                format!("/anime?q={}&order_by=popularity&sort=asc&sfw", q)
            }
            Endpoint::CharacterPictures { id } => format!("/characters/{}/pictures", id),
        }
    }
}

/// Fetch an endpoint and decode every element of `data` into `T`
///
/// A single malformed element fails the whole request.
pub async fn fetch_records<T, A>(api: &A, endpoint: &Endpoint) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
    A: AnimeApi + ?Sized,
{
    let values = api.fetch_json(&endpoint.path()).await?;
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Anime;
    use serde_json::json;

    #[test]
    fn test_top_anime_paths() {
        assert_eq!(Endpoint::PopularAnime.path(), "/top/anime?filter=bypopularity");
        assert_eq!(Endpoint::UpcomingAnime.path(), "/top/anime?filter=upcoming");
        assert_eq!(Endpoint::AiringAnime.path(), "/top/anime?filter=airing");
    }

    #[test]
    fn test_search_path() {
        let endpoint = Endpoint::Search {
            query: "naruto".to_string(),
        };
        assert_eq!(
            endpoint.path(),
            "/anime?q=naruto&order_by=popularity&sort=asc&sfw"
        );
    }

    #[test]
    fn test_search_path_encodes_query() {
        let endpoint = Endpoint::Search {
            query: "steins;gate & more".to_string(),
        };
        let path = endpoint.path();
        assert!(path.starts_with("/anime?q=steins%3Bgate+%26+more&"));

        let url = url::Url::parse(&format!("https://api.jikan.moe/v4{}", path)).unwrap();
        let q = url.query_pairs().find(|(k, _)| k == "q").unwrap().1;
        assert_eq!(q, "steins;gate & more");
    }

    #[test]
    fn test_character_pictures_path() {
        assert_eq!(
            Endpoint::CharacterPictures { id: 17 }.path(),
            "/characters/17/pictures"
        );
    }

    #[tokio::test]
    async fn test_fetch_records_decodes_payload() {
        let api = mock::MockApi::new();
        api.respond(
            Endpoint::PopularAnime.path(),
            vec![json!({"mal_id": 16498, "title": "Shingeki no Kyojin"})],
        );

        let anime: Vec<Anime> = fetch_records(&api, &Endpoint::PopularAnime).await.unwrap();
        assert_eq!(anime.len(), 1);
        assert_eq!(anime[0].title, "Shingeki no Kyojin");
    }

    #[tokio::test]
    async fn test_fetch_records_rejects_malformed_element() {
        let api = mock::MockApi::new();
        api.respond(
            Endpoint::AiringAnime.path(),
            vec![json!({"mal_id": 1, "title": "ok"}), json!({"title": "no id"})],
        );

        let result: Result<Vec<Anime>, _> = fetch_records(&api, &Endpoint::AiringAnime).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
