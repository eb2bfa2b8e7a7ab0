//! Store: owner of the current state
//!
//! The state lives in a `tokio::sync::watch` channel, so any number of views
//! can subscribe and always see the latest value. Request tickets sequence
//! responses per [`RequestKind`]: only the newest request of a kind may
//! commit its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use super::actions::{Action, RequestKind};
use super::reducer::reduce;
use super::state::AppState;

/// Sequence stamp for one dispatcher invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: RequestKind,
    pub seq: u64,
}

struct Inner {
    state: watch::Sender<Arc<AppState>>,
    latest: [AtomicU64; 5],
}

/// Cloneable handle to the shared state
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Store with empty initial state
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    pub fn with_state(state: AppState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            inner: Arc::new(Inner {
                state: sender,
                latest: Default::default(),
            }),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.state.borrow())
    }

    /// Receiver that is notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.inner.state.subscribe()
    }

    /// Run an action through the reducer
    ///
    /// Returns `false` when the reducer left the state untouched.
    pub fn dispatch(&self, action: Action) -> bool {
        let kind = action.kind();
        let changed = self.inner.state.send_if_modified(|current| {
            let next = reduce(current, action);
            if Arc::ptr_eq(&next, current) {
                false
            } else {
                *current = next;
                true
            }
        });
        tracing::trace!(action = kind, changed, "dispatch");
        changed
    }

    /// Start a new request of `kind`, superseding any earlier one
    pub fn begin(&self, kind: RequestKind) -> Ticket {
        let seq = self.inner.latest[kind.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { kind, seq }
    }

    /// Is `ticket` still the newest request of its kind?
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.inner.latest[ticket.kind.index()].load(Ordering::SeqCst) == ticket.seq
    }

    /// Dispatch a result action if `ticket` has not been superseded
    ///
    /// The check happens under the state lock, so a stale result can never
    /// land after a newer one of the same kind.
    pub fn commit(&self, ticket: &Ticket, action: Action) -> bool {
        let kind = action.kind();
        let mut committed = false;
        self.inner.state.send_if_modified(|current| {
            if !self.is_current(ticket) {
                return false;
            }
            committed = true;
            let next = reduce(current, action);
            if Arc::ptr_eq(&next, current) {
                false
            } else {
                *current = next;
                true
            }
        });
        tracing::trace!(action = kind, seq = ticket.seq, committed, "commit");
        committed
    }

    /// Wait until the state satisfies `predicate`
    pub async fn wait_until<F>(&self, mut predicate: F) -> Arc<AppState>
    where
        F: FnMut(&AppState) -> bool,
    {
        let mut receiver = self.subscribe();
        // The sender lives as long as `self`, so this cannot observe a close
        let state = match receiver.wait_for(|state| predicate(&**state)).await {
            Ok(state) => Arc::clone(&state),
            Err(_) => self.state(),
        };
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Anime;
    use serde_json::json;

    fn anime(id: u64) -> Anime {
        serde_json::from_value(json!({"mal_id": id, "title": format!("#{}", id)})).unwrap()
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let store = Store::new();
        let before = store.state();

        assert!(store.dispatch(Action::Loading));
        let after = store.state();

        assert!(!before.loading);
        assert!(after.loading);
    }

    #[test]
    fn test_unknown_action_does_not_notify() {
        let store = Store::new();
        let mut receiver = store.subscribe();
        let before = store.state();

        assert!(!store.dispatch(Action::Unknown));
        assert!(!receiver.has_changed().unwrap());
        assert!(Arc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = Store::new();
        let mut receiver = store.subscribe();

        store.dispatch(Action::GetPopularAnime(vec![anime(1)]));

        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().popular_anime.len(), 1);
    }

    #[test]
    fn test_tickets_are_per_kind() {
        let store = Store::new();
        let popular = store.begin(RequestKind::Popular);
        let search = store.begin(RequestKind::Search);

        assert!(store.is_current(&popular));
        assert!(store.is_current(&search));

        let newer = store.begin(RequestKind::Popular);
        assert!(!store.is_current(&popular));
        assert!(store.is_current(&newer));
        assert!(store.is_current(&search));
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let store = Store::new();
        let first = store.begin(RequestKind::Search);
        let second = store.begin(RequestKind::Search);

        assert!(store.commit(&second, Action::Search(vec![anime(2)])));
        assert!(!store.commit(&first, Action::Search(vec![anime(1)])));

        assert_eq!(store.state().search_results, vec![anime(2)]);
    }

    #[tokio::test]
    async fn test_wait_until() {
        let store = Store::new();
        let clone = store.clone();
        tokio::spawn(async move {
            clone.dispatch(Action::Loading);
            clone.dispatch(Action::GetAiringAnime(vec![anime(5)]));
        });

        let state = store.wait_until(|s| !s.airing_anime.is_empty()).await;
        assert_eq!(state.airing_anime[0].mal_id, 5);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_wait_until_returns_current_state_when_already_satisfied() {
        let store = Store::new();
        store.dispatch(Action::GetPictures(Vec::new()));

        let state = store.wait_until(|s| !s.loading).await;
        assert!(Arc::ptr_eq(&state, &store.state()));
    }
}
