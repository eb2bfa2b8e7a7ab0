//! anidex-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod error;
pub mod router;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, update, HomeTab, UiAction, UiState};
pub use error::{Result, TuiError};
pub use router::Route;
