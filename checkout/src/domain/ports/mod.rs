//! Domain ports (traits)
//!
//! Port traits define the remote collaborators checkout depends on.
//! Adapters provide concrete HTTP implementations of these traits.

pub mod catalog;
pub mod field_validator;

pub use catalog::ProductCatalog;
pub use field_validator::FieldValidator;
