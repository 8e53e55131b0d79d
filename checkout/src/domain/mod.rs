//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Checkout input and remote snapshot types
//! - `ports`: Trait definitions for the remote collaborators

pub mod entities;
pub mod ports;
