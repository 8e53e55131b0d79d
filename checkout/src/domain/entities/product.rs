//! Product snapshot read from the catalog

use serde::{Deserialize, Serialize};

/// Catalog product as seen during a single stock comparison
///
/// Only the fields checkout needs; the catalog may send more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub stock: u32,
}

impl Product {
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }
}
