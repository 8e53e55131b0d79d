//! Cart line items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the cart being checked out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(alias = "productId")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartItem {
    #[cfg(test)]
    pub fn new(product_id: i64, quantity: u32) -> Self {
        Self {
            product_id: ProductId(product_id),
            quantity,
        }
    }
}
