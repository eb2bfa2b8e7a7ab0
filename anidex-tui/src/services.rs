//! Service layer adapter for TUI
//!
//! Bridges the async provider and the synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns a tokio runtime and the `Provider` running on it
//! - Provider calls spawn onto the runtime and return immediately
//! - The render loop reads `provider().context()` every frame, so results
//!   appear as soon as they are committed
//!
//! # Example
//!
//! ```no_run
//! use anidex_tui::services::ServiceHandle;
//!
//! # fn example() -> anidex_tui::error::Result<()> {
//! let services = ServiceHandle::new(&libanidex::Config::default())?;
//! services.provider().start();
//!
//! let context = services.provider().context();
//! println!("loading: {}", context.state.loading);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use libanidex::store::{Outcome, RequestKind};
use libanidex::{AnimeApi, Config, Provider};

use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    // Dropped first so in-flight requests are aborted before the runtime
    // shuts down
    provider: Provider,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a service handle talking to the configured API
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tokio runtime cannot be created
    /// - The HTTP client cannot be built from the `[api]` section
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let provider = Provider::from_config(config, runtime.handle().clone())?;
        Ok(Self { provider, runtime })
    }

    /// Create a service handle over any API implementation
    pub fn with_api(api: Arc<dyn AnimeApi>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let provider = Provider::new(api, runtime.handle().clone());
        Ok(Self { provider, runtime })
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Block until every spawned request has finished
    pub fn settle(&self) -> Vec<(RequestKind, Outcome)> {
        self.runtime.block_on(self.provider.settle())
    }
}
