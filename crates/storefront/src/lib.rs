//! QKart Storefront - client library for the QKart REST backend.
//!
//! This crate provides everything a view layer needs to drive the QKart
//! storefront: a typed API client, cart reconciliation, mutation planning,
//! registration input validation, and a debounced search scheduler.
//!
//! # Architecture
//!
//! - The backend is the source of truth - NO local persistence, direct API
//!   calls via `reqwest`
//! - The raw cart and the product catalog are joined client-side into
//!   renderable line items ([`cart::reconcile`])
//! - Cart state lives in a single [`cart::CartController`]; view layers
//!   subscribe to its snapshots rather than holding quantities themselves
//! - Auth state is an explicit [`session::SessionContext`] passed into
//!   calls, never read from ambient storage

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod cart;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
