//! Field validation service adapter

pub mod client;

pub use client::HttpFieldValidator;
