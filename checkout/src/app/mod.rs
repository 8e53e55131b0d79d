//! Application layer
//!
//! The checkout pipeline: address validation and inventory checks composed
//! into a single accept/reject decision.

pub mod address_validator;
pub mod checkout_service;
pub mod inventory_checker;

pub use address_validator::AddressValidator;
pub use checkout_service::CheckoutService;
pub use inventory_checker::InventoryChecker;
