//! Anidex - browse anime listings and character galleries from the Jikan API
//!
//! This library holds everything below the view layer: the HTTP client
//! wrapper, typed records, the state store with its pure reducer, the five
//! action dispatchers and the provider that exposes them to views.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use api::{AnimeApi, Endpoint, JikanClient};
pub use config::Config;
pub use error::{AnidexError, ApiError, Result};
pub use provider::{ContextValue, Provider};
pub use store::{reduce, Action, AppState, Dispatcher, Outcome, RequestKind, Store};
pub use types::{Anime, Picture, SearchResult};
