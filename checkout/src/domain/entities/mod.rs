//! Domain entities
//!
//! Checkout inputs (address, cart) and the transient values read back from
//! the remote collaborators (products, field verdicts).

pub mod address;
pub mod cart;
pub mod product;

pub use address::{Address, AddressField, ValidationVerdict};
pub use cart::{CartItem, ProductId};
pub use product::Product;
