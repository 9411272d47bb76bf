//! End-to-end exercise of the cart core: controller, planner, and
//! reconciliation working against backend-shaped JSON fixtures.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use qkart_core::Price;
use qkart_storefront::api::types::{CartUpsert, Product, RawCartEntry};
use qkart_storefront::cart::{
    CartController, MutationIntent, PlanOutcome, plan_mutation, reconcile,
};

fn catalog() -> Arc<Vec<Product>> {
    let json = r#"[
        {
            "name": "iPhone XR",
            "category": "Phones",
            "cost": 100,
            "rating": 4,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "v4sLtEcMpzabRyfx"
        },
        {
            "name": "Basketball",
            "category": "Sports",
            "cost": 100,
            "rating": 5,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "upLK9JbQ4rMhTwt4"
        },
        {
            "name": "YONEX Smash Badminton Racquet",
            "category": "Sports",
            "cost": 100,
            "rating": 5,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "KCRwjF7lN97HnEaY"
        }
    ]"#;
    Arc::new(serde_json::from_str(json).unwrap())
}

fn backend_cart(json: &str) -> Vec<RawCartEntry> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn add_update_remove_round_trip() {
    let mut controller = CartController::new(catalog());
    let mut rx = controller.subscribe();

    // Card click on an empty cart plans a quantity-1 upsert.
    let outcome = controller.plan(MutationIntent::AddFromCard {
        product_id: "v4sLtEcMpzabRyfx".into(),
    });
    assert_eq!(
        outcome,
        PlanOutcome::Submit(CartUpsert {
            product_id: "v4sLtEcMpzabRyfx".into(),
            quantity: 1,
        })
    );

    // Backend answers with the updated raw cart; commit publishes it.
    controller.commit(backend_cart(r#"[{"productId": "v4sLtEcMpzabRyfx", "qty": 1}]"#));
    let items = rx.borrow_and_update().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.name, "iPhone XR");
    assert_eq!(items[0].line_cost, Price::from_units(100));

    // A second card click on the same product is advisory only.
    assert_eq!(
        controller.plan(MutationIntent::AddFromCard {
            product_id: "v4sLtEcMpzabRyfx".into(),
        }),
        PlanOutcome::AlreadyInCart
    );

    // The stepper is the sanctioned path for quantity changes.
    let outcome = controller.plan(MutationIntent::SetQuantity {
        product_id: "v4sLtEcMpzabRyfx".into(),
        quantity: 3,
    });
    assert_eq!(
        outcome,
        PlanOutcome::Submit(CartUpsert {
            product_id: "v4sLtEcMpzabRyfx".into(),
            quantity: 3,
        })
    );
    controller.commit(backend_cart(
        r#"[{"productId": "v4sLtEcMpzabRyfx", "qty": 3},
            {"productId": "KCRwjF7lN97HnEaY", "qty": 1}]"#,
    ));
    assert_eq!(controller.total_cost(), Price::from_units(400));

    // Remove-by-zero plans an upsert like any other quantity.
    let outcome = controller.plan(MutationIntent::SetQuantity {
        product_id: "KCRwjF7lN97HnEaY".into(),
        quantity: 0,
    });
    assert!(matches!(
        outcome,
        PlanOutcome::Submit(CartUpsert { quantity: 0, .. })
    ));
    controller.commit(backend_cart(r#"[{"productId": "v4sLtEcMpzabRyfx", "qty": 3}]"#));

    let items = rx.borrow_and_update().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 3);
}

#[test]
fn cart_with_stale_product_still_renders_rest() {
    // The backend sent a cart entry for a product that has since left the
    // catalog; the remaining entries still render.
    let raw_cart = backend_cart(
        r#"[{"productId": "gone-from-catalog", "qty": 2},
            {"productId": "upLK9JbQ4rMhTwt4", "qty": 1}]"#,
    );

    let items = reconcile(&raw_cart, &catalog());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product.name, "Basketball");
}

#[test]
fn planner_is_pure_over_cart_snapshot() {
    let raw_cart = backend_cart(r#"[{"productId": "upLK9JbQ4rMhTwt4", "qty": 2}]"#);

    // Planning does not mutate the cart; the same intent plans identically.
    for _ in 0..2 {
        assert_eq!(
            plan_mutation(
                &raw_cart,
                MutationIntent::AddFromCard {
                    product_id: "upLK9JbQ4rMhTwt4".into(),
                },
            ),
            PlanOutcome::AlreadyInCart
        );
    }
    assert_eq!(raw_cart.len(), 1);
}
