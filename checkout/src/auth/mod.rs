//! Authentication
//!
//! Customer access tokens are HS256 tokens signed by the storefront with the
//! shared `SECRET_KEY`.

pub mod token;

pub use token::{auth_middleware, Customer};
