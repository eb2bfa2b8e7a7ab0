//! Integration tests for the action dispatchers
//!
//! Drives every dispatcher against the scripted mock API and checks the
//! loading protocol, the committed payloads and the failure behaviour.

use std::sync::Arc;

use libanidex::api::mock::MockApi;
use libanidex::api::Endpoint;
use libanidex::store::{AppState, Dispatcher, Outcome, Store};
use libanidex::ApiError;
use serde_json::{json, Value};

fn anime_json(id: u64, title: &str) -> Value {
    json!({"mal_id": id, "title": title, "score": 8.5, "type": "TV"})
}

fn setup() -> (MockApi, Store, Dispatcher) {
    let api = MockApi::new();
    let store = Store::new();
    let dispatcher = Dispatcher::new(Arc::new(api.clone()), store.clone());
    (api, store, dispatcher)
}

/// Run a dispatcher while its request is held, checking `loading` before
/// and after the response is released.
async fn assert_loading_protocol<F, Fut>(endpoint: Endpoint, run: F) -> Arc<AppState>
where
    F: FnOnce(Dispatcher) -> Fut,
    Fut: std::future::Future<Output = Outcome> + Send + 'static,
{
    let (api, store, dispatcher) = setup();
    api.respond(endpoint.path(), vec![anime_json(1, "held")]);
    let hold = api.hold(endpoint.path());

    let task = tokio::spawn(run(dispatcher));

    while api.request_count() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(store.state().loading, "loading must be set before the response");

    hold.release();
    assert_eq!(task.await.unwrap(), Outcome::Committed);
    let state = store.state();
    assert!(!state.loading, "loading must be cleared after commit");
    state
}

#[tokio::test]
async fn test_popular_loading_protocol() {
    let state = assert_loading_protocol(Endpoint::PopularAnime, |d| async move {
        d.get_popular_anime().await
    })
    .await;
    assert_eq!(state.popular_anime.len(), 1);
}

#[tokio::test]
async fn test_upcoming_loading_protocol() {
    let state = assert_loading_protocol(Endpoint::UpcomingAnime, |d| async move {
        d.get_upcoming_anime().await
    })
    .await;
    assert_eq!(state.upcoming_anime.len(), 1);
}

#[tokio::test]
async fn test_airing_loading_protocol() {
    let state = assert_loading_protocol(Endpoint::AiringAnime, |d| async move {
        d.get_airing_anime().await
    })
    .await;
    assert_eq!(state.airing_anime.len(), 1);
}

#[tokio::test]
async fn test_search_loading_protocol() {
    let endpoint = Endpoint::Search {
        query: "held".to_string(),
    };
    let state = assert_loading_protocol(endpoint, |d| async move {
        d.search_anime("held").await
    })
    .await;
    assert!(state.is_search);
}

#[tokio::test]
async fn test_pictures_loading_protocol() {
    let (api, store, dispatcher) = setup();
    let path = Endpoint::CharacterPictures { id: 17 }.path();
    api.respond(
        path.clone(),
        vec![json!({"jpg": {"image_url": "https://cdn.myanimelist.net/images/characters/2/284121.jpg"}})],
    );
    let hold = api.hold(path);

    let task = tokio::spawn(async move { dispatcher.get_anime_pictures(17).await });
    while api.request_count() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(store.state().loading);

    hold.release();
    assert!(task.await.unwrap().is_committed());
    let state = store.state();
    assert!(!state.loading);
    assert_eq!(
        state.pictures[0].url(),
        Some("https://cdn.myanimelist.net/images/characters/2/284121.jpg")
    );
}

#[tokio::test]
async fn test_search_naruto() {
    let (api, store, dispatcher) = setup();
    let path = "/anime?q=naruto&order_by=popularity&sort=asc&sfw";
    api.respond(path, vec![anime_json(20, "Naruto"), anime_json(1735, "Naruto: Shippuuden")]);

    let outcome = dispatcher.search_anime("naruto").await;

    assert_eq!(outcome, Outcome::Committed);
    assert_eq!(api.requests(), vec![path]);

    let url = url::Url::parse(&format!("https://api.jikan.moe/v4{}", api.requests()[0])).unwrap();
    let q = url.query_pairs().find(|(k, _)| k == "q").unwrap().1.into_owned();
    assert_eq!(q, "naruto");

    let state = store.state();
    assert!(state.is_search);
    assert_eq!(state.search_results.len(), 2);
    assert_eq!(state.search_results[1].title, "Naruto: Shippuuden");
    // Unknown fields survive into the typed record
    assert_eq!(state.search_results[0].extra["type"], json!("TV"));
}

#[tokio::test]
async fn test_failure_leaves_list_and_loading_stuck() {
    let (api, store, dispatcher) = setup();
    api.respond(Endpoint::AiringAnime.path(), vec![anime_json(1, "First")]);
    assert!(dispatcher.get_airing_anime().await.is_committed());
    let before = store.state();

    api.fail(
        Endpoint::AiringAnime.path(),
        ApiError::Network("connection reset by peer".to_string()),
    );
    let outcome = dispatcher.get_airing_anime().await;

    assert!(matches!(outcome, Outcome::Failed(ApiError::Network(_))));
    let after = store.state();
    assert_eq!(after.airing_anime, before.airing_anime);
    assert!(after.loading, "loading stays set after a failed fetch");
}

#[tokio::test]
async fn test_decode_failure_is_a_fetch_failure() {
    let (api, store, dispatcher) = setup();
    api.respond(Endpoint::PopularAnime.path(), vec![json!({"title": "no id"})]);

    let outcome = dispatcher.get_popular_anime().await;

    assert!(matches!(outcome, Outcome::Failed(ApiError::Decode(_))));
    assert!(store.state().popular_anime.is_empty());
    assert!(store.state().loading);
}

#[tokio::test]
async fn test_later_success_clears_stuck_loading() {
    let (api, store, dispatcher) = setup();
    api.fail(Endpoint::PopularAnime.path(), ApiError::Timeout("10s".to_string()));
    dispatcher.get_popular_anime().await;
    assert!(store.state().loading);

    api.respond(Endpoint::UpcomingAnime.path(), vec![]);
    dispatcher.get_upcoming_anime().await;
    assert!(!store.state().loading);
}

#[tokio::test]
async fn test_stale_search_does_not_overwrite_newer() {
    let (api, store, dispatcher) = setup();
    let slow = Endpoint::Search { query: "one".to_string() }.path();
    let fast = Endpoint::Search { query: "two".to_string() }.path();
    api.respond(slow.clone(), vec![anime_json(1, "One Piece")]);
    api.respond(fast, vec![anime_json(2, "Two Car")]);
    let hold = api.hold(slow);

    let first = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move { dispatcher.search_anime("one").await })
    };
    while api.request_count() == 0 {
        tokio::task::yield_now().await;
    }

    assert_eq!(dispatcher.search_anime("two").await, Outcome::Committed);
    hold.release();
    assert_eq!(first.await.unwrap(), Outcome::Superseded);

    let state = store.state();
    assert_eq!(state.search_results.len(), 1);
    assert_eq!(state.search_results[0].title, "Two Car");
}

#[tokio::test]
async fn test_different_kinds_do_not_supersede_each_other() {
    let (api, store, dispatcher) = setup();
    api.respond(Endpoint::PopularAnime.path(), vec![anime_json(1, "Popular")]);
    api.respond(Endpoint::AiringAnime.path(), vec![anime_json(2, "Airing")]);

    let (popular, airing) =
        tokio::join!(dispatcher.get_popular_anime(), dispatcher.get_airing_anime());

    assert!(popular.is_committed());
    assert!(airing.is_committed());
    let state = store.state();
    assert_eq!(state.popular_anime[0].title, "Popular");
    assert_eq!(state.airing_anime[0].title, "Airing");
}
