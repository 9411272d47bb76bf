//! Unified error handling for the storefront client.
//!
//! Wraps the per-subsystem errors into one `AppError` so callers (the CLI,
//! a future view layer) handle a single type. Each error knows the notice
//! to show the user: backend validation messages verbatim, everything
//! transport-shaped collapsed to the generic "backend unreachable" copy.

use thiserror::Error;

use crate::api::ApiError;
use crate::auth::ValidationError;
use crate::config::ConfigError;

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Form input failed client-side validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Operation requires a logged-in session and none was provided.
    #[error("Not logged in")]
    NoSession,
}

impl AppError {
    /// The notice to surface to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Config(err) => err.to_string(),
            Self::Validation(err) => err.to_string(),
            Self::NoSession => "Login to view and update your cart".to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
