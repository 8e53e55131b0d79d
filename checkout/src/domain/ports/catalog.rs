//! Product catalog port

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductId};
use crate::error::CatalogError;

/// Read-only access to current product stock
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
