//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod checkout;

pub use checkout::process_checkout;
