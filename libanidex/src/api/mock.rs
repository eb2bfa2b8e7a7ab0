//! Scripted in-process API for testing
//!
//! Responses are keyed by request path. Requests can be failed, delayed or
//! held until released, and every requested path is recorded so tests can
//! assert on exactly which network calls happened.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

use super::AnimeApi;
use crate::error::ApiError;

#[derive(Default)]
struct MockState {
    responses: HashMap<String, Vec<Value>>,
    failures: HashMap<String, ApiError>,
    holds: HashMap<String, Arc<Notify>>,
    requested: Vec<String>,
    delay: Duration,
}

/// Mock API; clones share the same script and call log
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    /// Mock with no scripted responses; unknown paths return an empty `data`
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that delays every response
    pub fn with_delay(delay: Duration) -> Self {
        let api = Self::new();
        api.lock().delay = delay;
        api
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the call log from the others
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Script the `data` payload for a path
    pub fn respond(&self, path: impl Into<String>, data: Vec<Value>) {
        let path = path.into();
        let mut state = self.lock();
        state.failures.remove(&path);
        state.responses.insert(path, data);
    }

    /// Make requests for a path fail
    pub fn fail(&self, path: impl Into<String>, error: ApiError) {
        self.lock().failures.insert(path.into(), error);
    }

    /// Hold requests for a path until [`Hold::release`] is called
    pub fn hold(&self, path: impl Into<String>) -> Hold {
        let notify = Arc::new(Notify::new());
        self.lock().holds.insert(path.into(), Arc::clone(&notify));
        Hold { notify }
    }

    /// Every path requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.lock().requested.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requested.len()
    }
}

/// Gate returned by [`MockApi::hold`]
#[derive(Clone)]
pub struct Hold {
    notify: Arc<Notify>,
}

impl Hold {
    /// Let the held request through (stored if the request has not arrived yet)
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

#[async_trait]
impl AnimeApi for MockApi {
    async fn fetch_json(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        let (hold, delay) = {
            let mut state = self.lock();
            state.requested.push(path.to_string());
            (state.holds.get(path).cloned(), state.delay)
        };

        if let Some(notify) = hold {
            notify.notified().await;
        }
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let state = self.lock();
        if let Some(error) = state.failures.get(path) {
            return Err(error.clone());
        }
        Ok(state.responses.get(path).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_response() {
        let api = MockApi::new();
        api.respond("/top/anime?filter=airing", vec![json!({"mal_id": 1})]);

        let data = api.fetch_json("/top/anime?filter=airing").await.unwrap();
        assert_eq!(data, vec![json!({"mal_id": 1})]);
        assert_eq!(api.requests(), vec!["/top/anime?filter=airing"]);
    }

    #[tokio::test]
    async fn test_unscripted_path_is_empty() {
        let api = MockApi::new();
        assert!(api.fetch_json("/anything").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure() {
        let api = MockApi::new();
        api.fail("/x", ApiError::Network("connection reset".to_string()));
        let err = api.fetch_json("/x").await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_respond_clears_failure() {
        let api = MockApi::new();
        api.fail("/x", ApiError::Timeout("slow".to_string()));
        api.respond("/x", vec![]);
        assert!(api.fetch_json("/x").await.is_ok());
    }

    #[tokio::test]
    async fn test_hold_and_release() {
        let api = MockApi::new();
        let hold = api.hold("/slow");

        let clone = api.clone();
        let task = tokio::spawn(async move { clone.fetch_json("/slow").await });

        while api.request_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(!task.is_finished());

        hold.release();
        assert!(task.await.unwrap().is_ok());
    }
}
