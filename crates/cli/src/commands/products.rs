//! Catalog browsing commands.

use tracing::info;

use qkart_storefront::api::BackendClient;
use qkart_storefront::api::types::Product;
use qkart_storefront::error::AppError;

/// List the full product catalog.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or misbehaves.
pub async fn list(client: &BackendClient) -> Result<(), AppError> {
    let catalog = client.fetch_products().await?;
    info!("{} products in catalog", catalog.len());
    for product in catalog.iter() {
        print_product(product);
    }
    Ok(())
}

/// Search the catalog server-side.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or misbehaves.
pub async fn search(client: &BackendClient, query: &str) -> Result<(), AppError> {
    let matches = client.search_products(query).await?;
    if matches.is_empty() {
        info!("No products found");
        return Ok(());
    }

    info!("{} products match \"{query}\"", matches.len());
    for product in &matches {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    info!(
        id = %product.id,
        category = %product.category,
        rating = %product.rating,
        "{} - {}",
        product.name,
        product.cost,
    );
}
