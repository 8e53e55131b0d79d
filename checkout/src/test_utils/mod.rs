//! Test utilities
//!
//! Manual mock implementations of the port traits, fixtures, and helpers for
//! standing up throwaway HTTP servers.
//!
//! The mocks record every call so tests can assert which fields and products
//! were (and were not) checked.

pub mod fixtures;
pub mod mocks;
pub mod server;

pub use fixtures::*;
pub use mocks::*;
pub use server::*;
