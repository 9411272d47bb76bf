//! Turning user intents into cart upsert requests.

use qkart_core::ProductId;

use crate::api::types::{CartUpsert, RawCartEntry};
use crate::cart::reconcile::contains_product;

/// Advisory shown when the card button is pressed for a product already in
/// the cart. The cart's own stepper is the sanctioned path for quantity
/// changes.
pub const ALREADY_IN_CART_NOTICE: &str =
    "Item already in cart. Use the cart sidebar to update quantity or remove item.";

/// A user action expressing a desired cart change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    /// Explicit quantity from the cart view's stepper. Zero removes the
    /// line; any other value replaces the quantity wholesale.
    SetQuantity {
        product_id: ProductId,
        quantity: u32,
    },
    /// Implicit "add one" from a product card's Add to Cart button.
    AddFromCard { product_id: ProductId },
}

/// Result of planning a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Send this body to the cart upsert endpoint.
    Submit(CartUpsert),
    /// No request: the product is already in the cart and the intent came
    /// from a card button. Surface [`ALREADY_IN_CART_NOTICE`] instead.
    AlreadyInCart,
}

/// Plan the upsert request for a mutation intent against the current cart.
///
/// Stepper intents always submit exactly the requested quantity, regardless
/// of cart state - that is how increment, decrement, and remove-by-zero are
/// all expressed. Card intents add one unit, unless the product is already
/// present: then nothing is submitted and the caller surfaces the advisory,
/// so a stray card click cannot silently bump a chosen quantity.
#[must_use]
pub fn plan_mutation(current_cart: &[RawCartEntry], intent: MutationIntent) -> PlanOutcome {
    match intent {
        MutationIntent::SetQuantity {
            product_id,
            quantity,
        } => PlanOutcome::Submit(CartUpsert {
            product_id,
            quantity,
        }),
        MutationIntent::AddFromCard { product_id } => {
            if contains_product(current_cart, &product_id) {
                PlanOutcome::AlreadyInCart
            } else {
                PlanOutcome::Submit(CartUpsert {
                    product_id,
                    quantity: 1,
                })
            }
        }
    }
}
