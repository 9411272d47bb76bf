//! Account registration command.

use tracing::info;

use qkart_storefront::api::BackendClient;
use qkart_storefront::auth::{self, RegistrationForm};
use qkart_storefront::error::AppError;

/// Validate the form locally, then register with the backend.
///
/// # Errors
///
/// Returns a validation error before any network call if the form is bad,
/// or the backend's rejection (e.g. "Username is already taken").
pub async fn register(
    client: &BackendClient,
    username: String,
    password: String,
    confirm_password: String,
) -> Result<(), AppError> {
    let form = RegistrationForm {
        username,
        password,
        confirm_password,
    };

    auth::register(client, &form).await?;
    info!("Registered successfully");
    Ok(())
}
