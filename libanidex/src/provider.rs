//! Context provider for the view layer
//!
//! The provider bundles the store, the dispatchers and the search-text field
//! and is handed to views explicitly. Dispatcher methods spawn onto the
//! runtime and return immediately; views observe the results through
//! [`Provider::context`] or [`Provider::subscribe`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libanidex::{Config, Provider};
//!
//! # fn example() -> libanidex::Result<()> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let provider = Provider::from_config(&Config::default(), runtime.handle().clone())?;
//!
//! provider.start(); // loads popular anime once
//! provider.set_search("naruto");
//! provider.submit_search()?;
//!
//! let context = provider.context();
//! println!("loading: {}", context.state.loading);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{AnimeApi, JikanClient};
use crate::config::Config;
use crate::error::{AnidexError, Result};
use crate::store::{AppState, Dispatcher, Outcome, RequestKind, Store};

/// Warning shown when a search is submitted without text
pub const EMPTY_SEARCH_WARNING: &str = "Please enter a search term";

/// What views read: current state plus the search text
#[derive(Debug, Clone, PartialEq)]
pub struct ContextValue {
    pub state: Arc<AppState>,
    pub search: String,
}

/// Explicitly injected state holder for the view tree
pub struct Provider {
    store: Store,
    dispatcher: Dispatcher,
    runtime: Handle,
    search: Mutex<String>,
    inflight: Mutex<HashMap<RequestKind, JoinHandle<Outcome>>>,
    started: AtomicBool,
    memo: Mutex<Option<Arc<ContextValue>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Provider {
    /// Create a provider over `api`, spawning requests onto `runtime`
    pub fn new(api: Arc<dyn AnimeApi>, runtime: Handle) -> Self {
        let store = Store::new();
        let dispatcher = Dispatcher::new(api, store.clone());
        Self {
            store,
            dispatcher,
            runtime,
            search: Mutex::new(String::new()),
            inflight: Mutex::new(HashMap::new()),
            started: AtomicBool::new(false),
            memo: Mutex::new(None),
        }
    }

    /// Create a provider talking to the Jikan API described by `config`
    pub fn from_config(config: &Config, runtime: Handle) -> Result<Self> {
        let client = JikanClient::new(&config.api)?;
        Ok(Self::new(Arc::new(client), runtime))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.store.subscribe()
    }

    /// Current context, rebuilt only if the state or the search text changed
    pub fn context(&self) -> Arc<ContextValue> {
        let state = self.store.state();
        let search = self.search();

        let mut memo = lock(&self.memo);
        if let Some(cached) = memo.as_ref() {
            if Arc::ptr_eq(&cached.state, &state) && cached.search == search {
                return Arc::clone(cached);
            }
        }

        let value = Arc::new(ContextValue { state, search });
        *memo = Some(Arc::clone(&value));
        value
    }

    /// Trigger the initial popular-anime load; later calls do nothing
    pub fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::debug!("Provider started");
        self.get_popular_anime();
    }

    pub fn search(&self) -> String {
        lock(&self.search).clone()
    }

    pub fn set_search(&self, text: impl Into<String>) {
        *lock(&self.search) = text.into();
    }

    /// Search for the current search text
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the text is empty or whitespace. Nothing is
    /// requested and the state is left alone in that case.
    pub fn submit_search(&self) -> Result<()> {
        let query = self.search();
        if query.trim().is_empty() {
            tracing::warn!("Rejected empty search");
            return Err(AnidexError::InvalidInput(EMPTY_SEARCH_WARNING.to_string()));
        }
        self.search_anime(query);
        Ok(())
    }

    pub fn get_popular_anime(&self) {
        let dispatcher = self.dispatcher.clone();
        self.spawn(RequestKind::Popular, async move {
            dispatcher.get_popular_anime().await
        });
    }

    pub fn get_upcoming_anime(&self) {
        let dispatcher = self.dispatcher.clone();
        self.spawn(RequestKind::Upcoming, async move {
            dispatcher.get_upcoming_anime().await
        });
    }

    pub fn get_airing_anime(&self) {
        let dispatcher = self.dispatcher.clone();
        self.spawn(RequestKind::Airing, async move {
            dispatcher.get_airing_anime().await
        });
    }

    pub fn search_anime(&self, query: impl Into<String>) {
        let dispatcher = self.dispatcher.clone();
        let query = query.into();
        self.spawn(RequestKind::Search, async move {
            dispatcher.search_anime(&query).await
        });
    }

    pub fn get_anime_pictures(&self, id: u64) {
        let dispatcher = self.dispatcher.clone();
        self.spawn(RequestKind::Pictures, async move {
            dispatcher.get_anime_pictures(id).await
        });
    }

    /// Spawn a request, cancelling the in-flight one of the same kind
    fn spawn<F>(&self, kind: RequestKind, request: F)
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let handle = self.runtime.spawn(request);
        let previous = lock(&self.inflight).insert(kind, handle);
        if let Some(previous) = previous {
            if !previous.is_finished() {
                tracing::debug!(%kind, "Cancelling stale request");
                previous.abort();
            }
        }
    }

    /// Wait for every request spawned so far
    ///
    /// Cancelled requests are skipped. Returns the outcomes of the rest.
    pub async fn settle(&self) -> Vec<(RequestKind, Outcome)> {
        let handles: Vec<_> = lock(&self.inflight).drain().collect();
        let mut outcomes = Vec::with_capacity(handles.len());
        for (kind, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push((kind, outcome)),
                Err(e) if e.is_cancelled() => {}
                Err(e) => tracing::error!(%kind, error = %e, "Request task panicked"),
            }
        }
        outcomes
    }
}

impl Drop for Provider {
    fn drop(&mut self) {
        for (_, handle) in lock(&self.inflight).drain() {
            handle.abort();
        }
    }
}
