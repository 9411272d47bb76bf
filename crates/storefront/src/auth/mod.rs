//! Registration flow: client-side validation, then the backend call.

pub mod validation;

pub use validation::{RegistrationForm, ValidationError, validate};

use tracing::instrument;

use crate::api::types::RegisterRequest;
use crate::api::BackendClient;
use crate::error::AppError;

/// Validate a registration form and submit it to the backend.
///
/// The confirm-password field is a client-side check only; the backend
/// receives just the username and password.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the form fails the rule chain (the
/// backend is not contacted), or [`AppError::Api`] if the backend rejects
/// the registration (e.g. "Username is already taken") or is unreachable.
#[instrument(skip(client, form), fields(username = %form.username))]
pub async fn register(client: &BackendClient, form: &RegistrationForm) -> Result<(), AppError> {
    validate(form)?;

    let request = RegisterRequest {
        username: form.username.clone(),
        password: form.password.clone(),
    };
    client.register(&request).await?;

    tracing::info!("registered successfully");
    Ok(())
}
