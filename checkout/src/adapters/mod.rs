//! Adapters layer
//!
//! HTTP implementations of the port traits.

pub mod catalog;
pub mod validator;

pub use catalog::HttpProductCatalog;
pub use validator::HttpFieldValidator;
