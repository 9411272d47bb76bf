//! Joining the raw cart against the catalog.

use std::collections::HashMap;

use tracing::warn;

use qkart_core::{Price, ProductId};

use crate::api::types::{Product, RawCartEntry};

/// A view-ready cart row: a raw cart entry resolved against the catalog.
///
/// Derived data only - rebuilt on every reconciliation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// The resolved product.
    pub product: Product,
    /// Units in the cart.
    pub quantity: u32,
    /// `product.cost * quantity`, computed at construction.
    pub line_cost: Price,
}

impl LineItem {
    /// Build a line item, computing its cost from the product's unit cost.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        let line_cost = product.cost.times(quantity);
        Self {
            product,
            quantity,
            line_cost,
        }
    }
}

/// Join raw cart entries against the catalog into renderable line items.
///
/// Output order is the raw cart's order - the backend's insertion order is
/// the display order. Entries whose product id does not resolve in the
/// catalog are dropped from the output rather than failing the whole call;
/// the view layer may compare lengths if it wants to flag the gap.
///
/// Pure and idempotent: costs are recomputed on every call, nothing is
/// cached between calls.
#[must_use]
pub fn reconcile(raw_cart: &[RawCartEntry], catalog: &[Product]) -> Vec<LineItem> {
    // One map build per call keeps lookup O(1) per entry.
    let by_id: HashMap<&ProductId, &Product> =
        catalog.iter().map(|product| (&product.id, product)).collect();

    raw_cart
        .iter()
        .filter_map(|entry| match by_id.get(&entry.product_id) {
            Some(product) => Some(LineItem::new((*product).clone(), entry.quantity)),
            None => {
                warn!(
                    product_id = %entry.product_id,
                    "cart entry references a product missing from the catalog; dropping"
                );
                None
            }
        })
        .collect()
}

/// Whether any raw cart entry refers to the given product.
///
/// Drives UI decisions (the duplicate-add advisory); it never blocks a
/// legitimate quantity update.
#[must_use]
pub fn contains_product(raw_cart: &[RawCartEntry], product_id: &ProductId) -> bool {
    raw_cart.iter().any(|entry| &entry.product_id == product_id)
}
