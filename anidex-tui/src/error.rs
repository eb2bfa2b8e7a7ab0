//! Error types for anidex-tui
//!
//! Wraps library errors and terminal/IO errors for unified error handling.

use thiserror::Error;

use crate::router::RouteError;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (config, API, input)
    #[error("{0}")]
    Anidex(#[from] libanidex::AnidexError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Bad `--route` argument
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
