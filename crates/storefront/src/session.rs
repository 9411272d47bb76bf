//! Explicit session context for authenticated backend calls.
//!
//! The original client read its token and username out of ambient browser
//! storage from deep inside the view tree. Here the session is an explicit
//! value: callers construct one (from config, a login response, wherever)
//! and pass it into the cart and auth operations that need it.

use secrecy::{ExposeSecret, SecretString};

/// An authenticated storefront session.
///
/// Implements `Debug` manually so the bearer token is never logged.
#[derive(Clone)]
pub struct SessionContext {
    username: String,
    token: SecretString,
}

impl SessionContext {
    /// Create a session from a username and its bearer token.
    #[must_use]
    pub fn new(username: impl Into<String>, token: SecretString) -> Self {
        Self {
            username: username.into(),
            token,
        }
    }

    /// The username this session belongs to.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The `Authorization` header value for backend requests.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let session = SessionContext::new("crio-user", SecretString::from("tok-123"));
        assert_eq!(session.bearer_header(), "Bearer tok-123");
        assert_eq!(session.username(), "crio-user");
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = SessionContext::new("crio-user", SecretString::from("tok-123"));
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("tok-123"));
        assert!(rendered.contains("REDACTED"));
    }
}
