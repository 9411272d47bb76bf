//! Cart commands: reconciled display plus planned mutations.
//!
//! Mutations follow the library's plan/commit cycle: plan the intent
//! against the current cart, send the upsert if one was planned, then
//! commit the raw cart the backend returns.

use std::sync::Arc;

use tracing::{info, warn};

use qkart_core::ProductId;
use qkart_storefront::api::BackendClient;
use qkart_storefront::cart::{
    ALREADY_IN_CART_NOTICE, CartController, MutationIntent, PlanOutcome,
};
use qkart_storefront::error::AppError;
use qkart_storefront::session::SessionContext;

/// Show the reconciled cart with per-line and total costs.
///
/// # Errors
///
/// Returns an error if the catalog or cart cannot be fetched.
pub async fn show(client: &BackendClient, session: &SessionContext) -> Result<(), AppError> {
    let controller = load_controller(client, session).await?;
    print_cart(&controller);
    Ok(())
}

/// Add one unit of a product, with card-button duplicate semantics.
///
/// # Errors
///
/// Returns an error if a fetch fails or the backend rejects the upsert.
pub async fn add(
    client: &BackendClient,
    session: &SessionContext,
    product_id: ProductId,
) -> Result<(), AppError> {
    apply(client, session, MutationIntent::AddFromCard { product_id }).await
}

/// Set a product's quantity outright (0 removes it).
///
/// # Errors
///
/// Returns an error if a fetch fails or the backend rejects the upsert.
pub async fn set(
    client: &BackendClient,
    session: &SessionContext,
    product_id: ProductId,
    quantity: u32,
) -> Result<(), AppError> {
    apply(
        client,
        session,
        MutationIntent::SetQuantity {
            product_id,
            quantity,
        },
    )
    .await
}

/// Plan an intent, run the resulting upsert, and show the updated cart.
async fn apply(
    client: &BackendClient,
    session: &SessionContext,
    intent: MutationIntent,
) -> Result<(), AppError> {
    let mut controller = load_controller(client, session).await?;

    match controller.plan(intent) {
        PlanOutcome::AlreadyInCart => {
            warn!("{ALREADY_IN_CART_NOTICE}");
        }
        PlanOutcome::Submit(upsert) => {
            let updated = client.upsert_cart(session, &upsert).await?;
            controller.commit(updated);
        }
    }

    print_cart(&controller);
    Ok(())
}

/// Fetch catalog and cart, committing the cart into a fresh controller.
async fn load_controller(
    client: &BackendClient,
    session: &SessionContext,
) -> Result<CartController, AppError> {
    let catalog = client.fetch_products().await?;
    let raw_cart = client.fetch_cart(session).await?;

    let mut controller = CartController::new(Arc::clone(&catalog));
    controller.commit(raw_cart);
    Ok(controller)
}

fn print_cart(controller: &CartController) {
    let items = controller.line_items();
    if items.is_empty() {
        info!("Cart is empty");
        return;
    }

    for item in &items {
        info!(
            id = %item.product.id,
            "{} x{} = {}",
            item.product.name,
            item.quantity,
            item.line_cost,
        );
    }
    info!("Order total: {}", controller.total_cost());
}
