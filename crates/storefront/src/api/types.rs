//! Wire types for the QKart backend REST API.
//!
//! Field names follow the backend's JSON exactly (`_id`, `image`,
//! `productId`, `qty`); the Rust side uses conventional names via serde
//! renames.

use serde::{Deserialize, Serialize};

use qkart_core::{Price, ProductId, Rating};

/// A product in the catalog.
///
/// Backend-owned and immutable from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category the product belongs to.
    pub category: String,
    /// Per-unit cost.
    pub cost: Price,
    /// Aggregate rating out of five.
    pub rating: Rating,
    /// Product image URL.
    #[serde(rename = "image")]
    pub image_url: String,
}

/// One entry of the backend's minimal cart representation.
///
/// The raw cart is an ordered sequence of these, unique by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCartEntry {
    /// Product this entry refers to.
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    /// How many units are in the cart. Always positive; the backend drops
    /// entries set to zero.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Body of the cart upsert endpoint (`POST /cart`).
///
/// The quantity is a full replacement, not a delta; zero removes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartUpsert {
    /// Product to add or update.
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    /// Desired quantity after the upsert.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Body of the registration endpoint (`POST /auth/register`).
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Error payload the backend attaches to 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendMessage {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}
