//! Search input handling.
//!
//! Server-side search itself is a backend passthrough
//! ([`BackendClient::search_products`]); what lives here is the input-side
//! scheduling: a cancellable debouncer so a burst of keystrokes produces
//! one request, not one per key.
//!
//! [`BackendClient::search_products`]: crate::api::BackendClient::search_products

mod debounce;

pub use debounce::SearchDebouncer;
