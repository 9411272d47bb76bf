//! QKart backend REST API client.
//!
//! # Architecture
//!
//! - The backend is source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` for the product catalog (configurable TTL)
//! - Authenticated endpoints take an explicit [`SessionContext`] rather
//!   than reading a token from ambient storage
//!
//! # Endpoints
//!
//! - `GET /products` - full product catalog
//! - `GET /products/search?value=<text>` - server-side search (404 = no matches)
//! - `GET /cart` - raw cart for the session user
//! - `POST /cart` - upsert one cart line, returns the full updated raw cart
//! - `POST /auth/register` - create an account
//!
//! # Example
//!
//! ```rust,ignore
//! use qkart_storefront::api::BackendClient;
//!
//! let client = BackendClient::new(&config)?;
//!
//! let catalog = client.fetch_products().await?;
//! let raw_cart = client.fetch_cart(&session).await?;
//! ```
//!
//! [`SessionContext`]: crate::session::SessionContext

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::*;

use thiserror::Error;

/// Generic notice shown when the backend cannot be reached or returns junk.
///
/// Matches the copy the storefront has always shown for transport failures.
pub const BACKEND_UNREACHABLE_NOTICE: &str =
    "Something went wrong. Check that the backend is running, reachable and returns valid JSON.";

/// Errors that can occur when interacting with the QKart backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (no usable response received).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with an explanatory message
    /// (e.g. 400 with `{"message": "Username is already taken"}`).
    #[error("Backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Backend returned a status the contract does not document.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// The message to surface to the user for this error.
    ///
    /// Validation rejections carry the backend's message verbatim; every
    /// transport or contract failure collapses to the generic
    /// "backend unreachable" notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Http(_) | Self::UnexpectedStatus { .. } | Self::Parse(_) => {
                BACKEND_UNREACHABLE_NOTICE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_surfaces_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Username is already taken".to_string(),
        };
        assert_eq!(err.user_message(), "Username is already taken");
    }

    #[test]
    fn test_unexpected_status_maps_to_generic_notice() {
        let err = ApiError::UnexpectedStatus {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(err.user_message(), BACKEND_UNREACHABLE_NOTICE);
    }
}
