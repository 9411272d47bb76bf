//! QKart backend HTTP client implementation.
//!
//! Uses `reqwest` for HTTP and caches the product catalog with `moka`.

use std::sync::Arc;

use moka::future::Cache;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::types::{CartUpsert, Product, RawCartEntry, RegisterRequest};
use crate::api::{ApiError, BackendMessage};
use crate::config::StorefrontConfig;
use crate::session::SessionContext;

const CATALOG_CACHE_KEY: &str = "catalog";

/// Client for the QKart backend REST API.
///
/// Cheaply cloneable; the catalog is cached for the configured TTL so that
/// repeated reconciliations do not hammer `GET /products`.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    /// Base URL without trailing slash, e.g. `http://localhost:8082/api/v1`.
    base: String,
    catalog_cache: Cache<String, Arc<Vec<Product>>>,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let catalog_cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(config.catalog_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base: config.endpoint.as_str().trim_end_matches('/').to_string(),
                catalog_cache,
            }),
        })
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the full product catalog (`GET /products`).
    ///
    /// Responses are cached; use [`Self::invalidate_catalog`] to force a
    /// refetch before the TTL expires.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undocumented status.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Arc<Vec<Product>>, ApiError> {
        if let Some(catalog) = self.inner.catalog_cache.get(CATALOG_CACHE_KEY).await {
            debug!("catalog served from cache");
            return Ok(catalog);
        }

        let url = format!("{}/products", self.inner.base);
        let response = self.inner.client.get(&url).send().await?;
        let catalog: Arc<Vec<Product>> = Arc::new(read_json(response).await?);

        self.inner
            .catalog_cache
            .insert(CATALOG_CACHE_KEY.to_string(), Arc::clone(&catalog))
            .await;

        Ok(catalog)
    }

    /// Drop the cached catalog.
    pub async fn invalidate_catalog(&self) {
        self.inner.catalog_cache.invalidate(CATALOG_CACHE_KEY).await;
    }

    /// Search the catalog server-side (`GET /products/search?value=<text>`).
    ///
    /// A 404 means "no matches" and yields an empty vec, not an error.
    /// Search results are never cached.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undocumented status.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products/search", self.inner.base);
        let response = self
            .inner
            .client
            .get(&url)
            .query(&[("value", query)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        read_json(response).await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the raw cart for the session user (`GET /cart`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message on 400
    /// (auth/validation failure), or a transport error.
    #[instrument(skip(self, session), fields(username = session.username()))]
    pub async fn fetch_cart(&self, session: &SessionContext) -> Result<Vec<RawCartEntry>, ApiError> {
        let url = format!("{}/cart", self.inner.base);
        let response = self
            .inner
            .client
            .get(&url)
            .header(AUTHORIZATION, bearer_value(session)?)
            .send()
            .await?;

        read_json(response).await
    }

    /// Add or update one cart line (`POST /cart`).
    ///
    /// The backend replaces the line's quantity wholesale (zero removes it)
    /// and returns the full updated raw cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message on 400
    /// (e.g. invalid product id), or a transport error.
    #[instrument(skip(self, session), fields(username = session.username()))]
    pub async fn upsert_cart(
        &self,
        session: &SessionContext,
        upsert: &CartUpsert,
    ) -> Result<Vec<RawCartEntry>, ApiError> {
        let url = format!("{}/cart", self.inner.base);
        let response = self
            .inner
            .client
            .post(&url)
            .header(AUTHORIZATION, bearer_value(session)?)
            .json(upsert)
            .send()
            .await?;

        read_json(response).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a new account (`POST /auth/register`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message on 400
    /// (e.g. "Username is already taken"), or a transport error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{}/auth/register", self.inner.base);
        let response = self.inner.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        Err(error_from_response(response).await)
    }
}

/// Build the `Authorization` header value for a session.
fn bearer_value(session: &SessionContext) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&session.bearer_header()).map_err(|_| ApiError::Rejected {
        status: 400,
        message: "session token contains invalid header characters".to_string(),
    })
}

/// Read a JSON body from a response, mapping non-success statuses to errors.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        return Err(error_from_response_parts(status, response.text().await?));
    }

    // Read as text first so parse failures can be diagnosed
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Map an error response to an [`ApiError`].
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return ApiError::Http(e),
    };
    error_from_response_parts(status, body)
}

fn error_from_response_parts(status: StatusCode, body: String) -> ApiError {
    // Only a 400 carries a {"message": "..."} meant for the user; its
    // message is surfaced verbatim. Other statuses (a 500 stack trace, a
    // proxy error page) stay opaque and collapse to the generic notice.
    if status == StatusCode::BAD_REQUEST
        && let Ok(BackendMessage { message, .. }) = serde_json::from_str::<BackendMessage>(&body)
    {
        return ApiError::Rejected {
            status: status.as_u16(),
            message,
        };
    }

    tracing::error!(
        status = %status,
        body = %body.chars().take(500).collect::<String>(),
        "Backend returned non-success status"
    );

    ApiError::UnexpectedStatus {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_response_parts_with_message() {
        let err = error_from_response_parts(
            StatusCode::BAD_REQUEST,
            r#"{"success": false, "message": "Username is already taken"}"#.to_string(),
        );
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Username is already taken");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_server_error_with_message_body_stays_generic() {
        // A 500 body can carry backend internals; it must never be shown
        // verbatim, only the 400 contract messages are.
        let err = error_from_response_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "ECONNREFUSED mongodb://10.0.0.5:27017"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
        assert_eq!(err.user_message(), crate::api::BACKEND_UNREACHABLE_NOTICE);
    }

    #[test]
    fn test_error_from_response_parts_opaque_body() {
        let err =
            error_from_response_parts(StatusCode::INTERNAL_SERVER_ERROR, "<html>".to_string());
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = StorefrontConfig {
            endpoint: url::Url::parse("http://localhost:8082/api/v1/").unwrap(),
            ..StorefrontConfig::default()
        };
        let client = BackendClient::new(&config).unwrap();
        assert_eq!(client.inner.base, "http://localhost:8082/api/v1");
    }
}
