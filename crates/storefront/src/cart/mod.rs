//! Cart reconciliation, mutation planning, and cart state ownership.
//!
//! The backend's cart is minimal: ordered `(product id, quantity)` pairs.
//! Everything a view needs beyond that is derived here:
//!
//! - [`reconcile`] joins the raw cart against the catalog into ordered,
//!   costed [`LineItem`]s
//! - [`plan_mutation`] turns a user intent into the upsert body to send,
//!   applying the duplicate-add advisory policy
//! - [`CartController`] owns the authoritative snapshot and publishes
//!   reconciled line items to subscribers

mod controller;
mod plan;
mod reconcile;

pub use controller::CartController;
pub use plan::{ALREADY_IN_CART_NOTICE, MutationIntent, PlanOutcome, plan_mutation};
pub use reconcile::{LineItem, contains_product, reconcile};
