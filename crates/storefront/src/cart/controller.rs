//! Single owner of client-side cart state.
//!
//! The original client scattered cart quantities across view-tree state.
//! Here one controller holds the authoritative raw-cart snapshot plus the
//! catalog, reconciles on every change, and publishes line-item snapshots
//! over a `watch` channel that view layers subscribe to.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use qkart_core::{Price, ProductId};

use crate::api::types::{Product, RawCartEntry};
use crate::cart::plan::{MutationIntent, PlanOutcome, plan_mutation};
use crate::cart::reconcile::{LineItem, contains_product, reconcile};

/// Owns the current catalog and raw cart; derives and publishes line items.
///
/// Mutation flow: `plan` an intent, send the resulting upsert to the
/// backend, then `commit` the raw cart the backend returns. The controller
/// never talks to the network itself.
pub struct CartController {
    catalog: Arc<Vec<Product>>,
    raw_cart: Vec<RawCartEntry>,
    snapshots: watch::Sender<Vec<LineItem>>,
}

impl CartController {
    /// Create a controller with an empty cart over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<Vec<Product>>) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            catalog,
            raw_cart: Vec::new(),
            snapshots,
        }
    }

    /// Replace the catalog (e.g. after a refetch) and re-reconcile.
    pub fn set_catalog(&mut self, catalog: Arc<Vec<Product>>) {
        self.catalog = catalog;
        self.publish();
    }

    /// Commit an authoritative raw cart returned by the backend.
    ///
    /// The backend contract promises product ids are unique per cart; that
    /// is validated here rather than trusted. Later duplicates are dropped
    /// (first occurrence wins) with a warning, then the snapshot is
    /// reconciled and published.
    pub fn commit(&mut self, raw_cart: Vec<RawCartEntry>) {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(raw_cart.len());
        let mut deduped = Vec::with_capacity(raw_cart.len());

        for entry in raw_cart {
            if seen.insert(entry.product_id.clone()) {
                deduped.push(entry);
            } else {
                warn!(
                    product_id = %entry.product_id,
                    "backend sent duplicate cart entry; keeping first occurrence"
                );
            }
        }

        self.raw_cart = deduped;
        self.publish();
    }

    /// Plan a mutation intent against the current snapshot.
    #[must_use]
    pub fn plan(&self, intent: MutationIntent) -> PlanOutcome {
        plan_mutation(&self.raw_cart, intent)
    }

    /// Whether the current cart contains the given product.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        contains_product(&self.raw_cart, product_id)
    }

    /// The current raw cart snapshot.
    #[must_use]
    pub fn raw_cart(&self) -> &[RawCartEntry] {
        &self.raw_cart
    }

    /// The current reconciled line items.
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem> {
        self.snapshots.borrow().clone()
    }

    /// Sum of all line costs in the current snapshot.
    #[must_use]
    pub fn total_cost(&self) -> Price {
        self.snapshots
            .borrow()
            .iter()
            .fold(Price::ZERO, |total, item| {
                Price::new(total.amount() + item.line_cost.amount())
            })
    }

    /// Subscribe to line-item snapshots.
    ///
    /// The receiver sees the snapshot current at subscription time and every
    /// published change after it.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        let items = reconcile(&self.raw_cart, &self.catalog);
        // send_replace delivers even with no receivers subscribed yet.
        self.snapshots.send_replace(items);
    }
}
